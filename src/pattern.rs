use std::fmt;

use thiserror::Error;

/// Errors produced while turning user input into a runnable pattern, or
/// while running it. Always returned as values so a host can display the
/// message next to the input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The engine rejected the pattern source; message forwarded verbatim.
    #[error("{0}")]
    Compile(String),
    #[error("unknown flag '{0}'")]
    UnknownFlag(char),
    #[error("duplicate flag '{0}'")]
    DuplicateFlag(char),
    /// The engine gave up mid-scan (backtracking limit exceeded).
    #[error("{0}")]
    Scan(String),
}

/// The recognized matching toggles.
///
/// Single-letter spellings follow the tool's input field:
/// - `g` global iteration
/// - `i` case-insensitive
/// - `m` multi-line anchors
/// - `s` dot matches newline
/// - `u` unicode mode
/// - `y` sticky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet {
    pub global: bool,
    pub ignore_case: bool,
    pub multi_line: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
}

impl FlagSet {
    /// Parse a flag string such as `"gi"`.
    ///
    /// Examples:
    /// - `""`    → no flags set
    /// - `"gim"` → global, case-insensitive, multi-line
    /// - `"x"`   → `PatternError::UnknownFlag('x')`
    /// - `"gg"`  → `PatternError::DuplicateFlag('g')`
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut flags = FlagSet::default();
        for ch in text.chars() {
            let slot = match ch {
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multi_line,
                's' => &mut flags.dot_all,
                'u' => &mut flags.unicode,
                'y' => &mut flags.sticky,
                other => return Err(PatternError::UnknownFlag(other)),
            };
            if *slot {
                return Err(PatternError::DuplicateFlag(ch));
            }
            *slot = true;
        }
        Ok(flags)
    }

    // Letters the engine understands inline. `g` and `y` drive the scan
    // loop instead, and the engine is unicode-aware with or without `u`.
    fn engine_letters(&self) -> String {
        let mut letters = String::new();
        if self.ignore_case {
            letters.push('i');
        }
        if self.multi_line {
            letters.push('m');
        }
        if self.dot_all {
            letters.push('s');
        }
        letters
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, letter) in [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ] {
            if set {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// A compiled pattern plus the flags it was compiled with.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: fancy_regex::Regex,
    flags: FlagSet,
}

impl Pattern {
    /// Compile `source` under `flags`. Compilation failures carry the
    /// engine's own message so the host can show it unchanged.
    pub fn compile(source: &str, flags: FlagSet) -> Result<Self, PatternError> {
        let letters = flags.engine_letters();
        let translated = if letters.is_empty() {
            source.to_string()
        } else {
            format!("(?{letters}){source}")
        };
        let regex = fancy_regex::Regex::new(translated.as_str())
            .map_err(|err| PatternError::Compile(err.to_string()))?;
        Ok(Self { regex, flags })
    }

    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    // Next capture set at or after `pos`. Scan-time engine failures become
    // `PatternError::Scan` values.
    pub(crate) fn captures_from<'t>(
        &self,
        input: &'t str,
        pos: usize,
    ) -> Result<Option<fancy_regex::Captures<'t>>, PatternError> {
        self.regex
            .captures_from_pos(input, pos)
            .map_err(|err| PatternError::Scan(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_flag_letter() {
        let flags = FlagSet::parse("gimsuy").unwrap();
        assert!(flags.global);
        assert!(flags.ignore_case);
        assert!(flags.multi_line);
        assert!(flags.dot_all);
        assert!(flags.unicode);
        assert!(flags.sticky);
    }

    #[test]
    fn rejects_unknown_and_duplicate_flags() {
        assert_eq!(FlagSet::parse("x"), Err(PatternError::UnknownFlag('x')));
        assert_eq!(FlagSet::parse("gig"), Err(PatternError::DuplicateFlag('g')));
    }

    #[test]
    fn displays_canonical_order() {
        let flags = FlagSet::parse("yg").unwrap();
        assert_eq!(flags.to_string(), "gy");
    }

    #[test]
    fn unterminated_class_is_a_compile_error() {
        let err = Pattern::compile("[", FlagSet::default()).unwrap_err();
        assert!(matches!(err, PatternError::Compile(_)));
        // message is the engine's, non-empty, displayable
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn compiles_with_inline_letters() {
        let flags = FlagSet::parse("ims").unwrap();
        assert!(Pattern::compile("^a.b$", flags).is_ok());
    }
}
