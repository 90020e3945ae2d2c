use serde::Serialize;

use crate::matcher::MatchSet;
use crate::pattern::FlagSet;

/// Downloadable result payload: the pattern, its flag string, the test
/// string, and every match found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub pattern: String,
    pub flags: String,
    pub test_string: String,
    pub matches: MatchSet,
}

impl Report {
    pub fn new(pattern: &str, flags: FlagSet, test_string: &str, matches: MatchSet) -> Self {
        Report {
            pattern: pattern.to_string(),
            flags: flags.to_string(),
            test_string: test_string.to_string(),
            matches,
        }
    }

    /// Pretty-printed JSON, the shape the download button writes.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
