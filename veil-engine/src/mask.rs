//! Masking of already-emitted tags.
//!
//! Running the matcher over text that still carries tags from an earlier
//! pass would re-match surfaces quoted inside tag descriptions. Masking
//! blanks each tag span first, which makes repeated redaction a no-op on
//! already-tagged content.

use veil_core::grammar::REDACTED_TAG_RE;

/// Overwrite every redaction tag in `text` with NUL filler bytes.
///
/// The filler keeps the byte length of each span unchanged, so offsets
/// computed on the masked copy stay valid on the original text. Registered
/// surfaces never contain NUL, so masked spans cannot produce matches.
pub fn mask_existing_tags(text: &str) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut cursor = 0;

    for m in REDACTED_TAG_RE.find_iter(text) {
        masked.push_str(&text[cursor..m.start()]);
        for _ in 0..m.len() {
            masked.push('\0');
        }
        cursor = m.end();
    }
    masked.push_str(&text[cursor..]);
    masked
}
