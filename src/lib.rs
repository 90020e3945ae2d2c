pub mod base64_codec;
pub mod highlight;
pub mod json_format;
pub mod matcher;
pub mod pattern;
pub mod report;
pub mod samples;

pub use highlight::{color_for, render, MarkedText, Segment, DEFAULT_PALETTE};
pub use matcher::{evaluate, GroupCapture, MatchRecord, MatchSet};
pub use pattern::{FlagSet, Pattern, PatternError};

/// Evaluate `pattern` with a flag string such as `"gi"` against `input`.
pub fn find_matches(pattern: &str, flags: &str, input: &str) -> Result<MatchSet, PatternError> {
    let flags = FlagSet::parse(flags)?;
    matcher::evaluate(pattern, &flags, input)
}

/// Evaluate and render highlighted output in one call.
pub fn highlight_matches(pattern: &str, flags: &str, input: &str) -> Result<MarkedText, PatternError> {
    let matches = find_matches(pattern, flags, input)?;
    Ok(highlight::render(input, &matches))
}
