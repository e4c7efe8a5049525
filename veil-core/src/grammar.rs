//! Shared regular expressions: classification codes, redaction tags, and
//! badge line forms. Compiled once, used by the engine, the badge parser,
//! and model validation.

use std::sync::LazyLock;

use regex::Regex;

/// Classification code shape: `(group)(subgroup)` with an optional
/// fine-grain suffix, e.g. `(1)(A)(c)`, `(3)(E)`, `(4)(X)(a)`.
const CODE_FRAGMENT: &str = r"\([1-4]\)\([A-EX]\)(?:\([a-ex]\))?";

/// Anchored classification code validator.
pub static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{CODE_FRAGMENT}$")).expect("static code pattern compiles")
});

/// Redaction tag as embedded in documents:
/// `[REDACTED(#<item_id>|var=<c|aN>): <code>, <desc>]`.
///
/// The `id` and `var` capture groups drive unredaction; the masker only
/// needs the matched span. The description slot accepts any text without a
/// literal `]`.
pub static REDACTED_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\[REDACTED\(#(?P<id>\d+)\|var=(?P<var>c|a\d+)\):\s*{CODE_FRAGMENT},\s*[^\]]+\]"
    ))
    .expect("static tag pattern compiles")
});

/// ARROW badge line: `[REDACTED: (3)(A)(b), api key] => AKIA...`.
///
/// Groups: 1 = code, 2 = description, 3 = surface.
pub static BADGE_ARROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*\[REDACTED:\s*({CODE_FRAGMENT})\s*,\s*([^\]]+?)\]\s*=>\s*(.+?)\s*$"
    ))
    .expect("static badge pattern compiles")
});

/// PIPE badge line: `(3)(A)(b) | api key | AKIA...`.
///
/// Groups: 1 = code, 2 = description, 3 = surface.
pub static BADGE_PIPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*({CODE_FRAGMENT})\s*\|\s*([^|]+?)\s*\|\s*(.+?)\s*$"))
        .expect("static badge pattern compiles")
});
