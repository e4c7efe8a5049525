//! The forward redaction pass.

use tracing::debug;
use veil_core::{Inventory, VeilResult};

use crate::mask::mask_existing_tags;
use crate::matcher::{Match, SurfaceMatcher};
use crate::resolve::select_leftmost_longest;
use crate::segment::segment;

/// Output of a redaction pass: the rewritten document plus every match the
/// resolver kept. Match offsets are relative to the segment that produced
/// them; the list is a processing record, not an index into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactedText {
    pub text: String,
    pub matches: Vec<Match>,
}

/// Redact `text` against `inventory`.
///
/// Fenced code blocks pass through byte-for-byte. Existing tags are masked
/// before matching, so feeding an already-redacted document through again
/// changes nothing. Within a segment, tags are spliced right to left so a
/// splice never shifts the offsets of matches still waiting their turn.
pub fn redact(text: &str, inventory: &Inventory) -> VeilResult<RedactedText> {
    if inventory.items().is_empty() {
        return Ok(RedactedText {
            text: text.to_string(),
            matches: Vec::new(),
        });
    }
    let matcher = SurfaceMatcher::build(inventory)?;

    let segments = segment(text);
    let mut rebuilt = String::with_capacity(text.len());
    let mut all_matches = Vec::new();

    for seg in &segments {
        if !seg.redactable {
            rebuilt.push_str(seg.text);
            continue;
        }

        let masked = mask_existing_tags(seg.text);
        let selected = select_leftmost_longest(matcher.find_all(&masked));
        if selected.is_empty() {
            rebuilt.push_str(seg.text);
            continue;
        }

        // Offsets from the masked copy are valid on the original chunk
        // because masking preserves byte length.
        let mut chunk = seg.text.to_string();
        for m in selected.iter().rev() {
            chunk.replace_range(m.start..m.end, &render_tag(m));
        }
        rebuilt.push_str(&chunk);
        all_matches.extend(selected);
    }

    debug!(
        segments = segments.len(),
        matches = all_matches.len(),
        "redaction pass complete"
    );
    Ok(RedactedText {
        text: rebuilt,
        matches: all_matches,
    })
}

fn render_tag(m: &Match) -> String {
    format!(
        "[REDACTED(#{}|var={}): {}, {}]",
        m.item_id, m.variant, m.code, m.desc
    )
}
