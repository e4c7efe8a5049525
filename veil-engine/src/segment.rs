//! Markdown segmentation.
//!
//! Fenced code blocks are carved out as non-redactable spans so code
//! samples keep their literal content through a redaction pass.

use std::sync::LazyLock;

use regex::Regex;

/// A fenced block runs from a line starting with three backticks through
/// the next line that is exactly three backticks. An opening fence with no
/// closing line is treated as ordinary text.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```.*?$.*?^```$").expect("static fence pattern compiles")
});

/// A contiguous piece of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub redactable: bool,
}

/// Split `text` into segments covering it exactly, in document order.
/// Fenced code blocks come back with `redactable == false`; everything
/// else is fair game for the matcher. Empty input yields no segments.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut pos = 0;

    for m in FENCE_RE.find_iter(text) {
        if m.start() > pos {
            segments.push(Segment {
                text: &text[pos..m.start()],
                redactable: true,
            });
        }
        segments.push(Segment {
            text: m.as_str(),
            redactable: false,
        });
        pos = m.end();
    }

    if pos < text.len() {
        segments.push(Segment {
            text: &text[pos..],
            redactable: true,
        });
    }
    segments
}
