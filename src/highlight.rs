use serde::Serialize;

use crate::matcher::MatchRecord;

/// One run of text in the rendered output. Segment text is already
/// markup-escaped; wrapping happens after escaping, never before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Highlight(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Highlight(text) => text,
        }
    }
}

/// The input decomposed into alternating plain and highlighted runs,
/// covering the whole string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MarkedText {
    pub segments: Vec<Segment>,
}

impl MarkedText {
    /// Concatenation of every segment. Equals the escaped input exactly.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Segments joined into display markup, highlighted runs wrapped in
    /// `<mark>` tags.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => out.push_str(text),
                Segment::Highlight(text) => {
                    out.push_str("<mark>");
                    out.push_str(text);
                    out.push_str("</mark>");
                }
            }
        }
        out
    }
}

/// Escape text for embedding in a markup context. `&` first, then the
/// other four specials.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Decompose `input` into plain and highlighted segments from `matches`.
///
/// Records are re-sorted by start offset before walking; callers may hand
/// over unsorted sets. A record overlapping an already-emitted span, or
/// one whose offsets do not land on valid boundaries of `input`, is
/// skipped rather than corrupting the output.
pub fn render(input: &str, matches: &[MatchRecord]) -> MarkedText {
    if matches.is_empty() {
        return MarkedText {
            segments: vec![Segment::Plain(escape_markup(input))],
        };
    }

    let mut ordered: Vec<&MatchRecord> = matches.iter().collect();
    ordered.sort_by_key(|record| record.start_offset);

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for record in ordered {
        let start = record.start_offset;
        let end = record.end_offset();
        if start < cursor {
            continue;
        }
        let Some(span) = input.get(start..end) else {
            continue;
        };
        if start > cursor {
            let Some(gap) = input.get(cursor..start) else {
                continue;
            };
            segments.push(Segment::Plain(escape_markup(gap)));
        }
        segments.push(Segment::Highlight(escape_markup(span)));
        cursor = end;
    }
    if cursor < input.len() {
        segments.push(Segment::Plain(escape_markup(&input[cursor..])));
    }
    MarkedText { segments }
}

/// Highlight palette used for capture-group badges.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "blue", "green", "yellow", "purple", "pink", "indigo", "red", "orange", "teal", "cyan",
];

/// Color token for a capture group, cycling `palette` by index.
pub fn color_for<'a>(palette: &'a [&'a str], group_index: usize) -> Option<&'a str> {
    if palette.is_empty() {
        None
    } else {
        Some(palette[group_index % palette.len()])
    }
}
