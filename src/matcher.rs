use serde::Serialize;

use crate::pattern::{FlagSet, Pattern, PatternError};

/// One numbered capture group inside a match.
///
/// A group that did not participate keeps `None` text and the `-1`
/// sentinel offsets instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCapture {
    pub text: Option<String>,
    pub start_offset: i64,
    pub end_offset: i64,
}

impl GroupCapture {
    pub const ABSENT_OFFSET: i64 = -1;

    pub fn absent() -> Self {
        GroupCapture {
            text: None,
            start_offset: Self::ABSENT_OFFSET,
            end_offset: Self::ABSENT_OFFSET,
        }
    }

    pub fn is_present(&self) -> bool {
        self.text.is_some()
    }
}

/// One located occurrence of the pattern. Offsets are byte offsets into
/// the input and always within its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub matched_text: String,
    pub start_offset: usize,
    pub captured_groups: Vec<GroupCapture>,
}

impl MatchRecord {
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.matched_text.len()
    }
}

/// Records ordered by ascending start offset, non-overlapping. Holds at
/// most one record unless the global flag was set.
pub type MatchSet = Vec<MatchRecord>;

/// Run `pattern` against `input` and collect every match the flags allow.
///
/// An empty pattern or empty input is a valid call and yields an empty
/// set. Everything is recomputed per call; no state survives between
/// invocations.
pub fn evaluate(pattern: &str, flags: &FlagSet, input: &str) -> Result<MatchSet, PatternError> {
    if pattern.is_empty() || input.is_empty() {
        return Ok(Vec::new());
    }
    let compiled = Pattern::compile(pattern, *flags)?;
    scan(&compiled, input)
}

// Walk the input collecting matches. Without the global flag only the
// first match is taken. A zero-length match advances the scan position by
// one character so the loop always terminates.
fn scan(pattern: &Pattern, input: &str) -> Result<MatchSet, PatternError> {
    let flags = pattern.flags();
    let mut records = Vec::new();
    let mut pos = 0usize;
    loop {
        let Some(caps) = pattern.captures_from(input, pos)? else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        // Sticky only accepts a match starting exactly at the scan origin.
        if flags.sticky && whole.start() != pos {
            break;
        }
        records.push(record_from(&caps, whole));
        if !flags.global {
            break;
        }
        pos = if whole.end() > whole.start() {
            whole.end()
        } else {
            match input[whole.end()..].chars().next() {
                Some(next) => whole.end() + next.len_utf8(),
                None => break,
            }
        };
    }
    Ok(records)
}

fn record_from(caps: &fancy_regex::Captures<'_>, whole: fancy_regex::Match<'_>) -> MatchRecord {
    let matched_text = whole.as_str().to_string();
    let mut captured_groups = Vec::with_capacity(caps.len().saturating_sub(1));
    for index in 1..caps.len() {
        captured_groups.push(match caps.get(index) {
            Some(group) => locate_group(&matched_text, whole.start(), group.as_str()),
            None => GroupCapture::absent(),
        });
    }
    MatchRecord {
        matched_text,
        start_offset: whole.start(),
        captured_groups,
    }
}

// Group offsets come from the first occurrence of the group's text inside
// the full match. When the text recurs the first occurrence wins; that
// ambiguity is a known approximation and is kept as-is. A capture landing
// entirely outside the match span (lookaround) gets the absent sentinel so
// offsets stay inside the input.
fn locate_group(matched_text: &str, match_start: usize, group_text: &str) -> GroupCapture {
    match matched_text.find(group_text) {
        Some(found) => GroupCapture {
            text: Some(group_text.to_string()),
            start_offset: (match_start + found) as i64,
            end_offset: (match_start + found + group_text.len()) as i64,
        },
        None => GroupCapture {
            text: Some(group_text.to_string()),
            ..GroupCapture::absent()
        },
    }
}
