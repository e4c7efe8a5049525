//! The reverse pass: tags back to surfaces.

use veil_core::grammar::REDACTED_TAG_RE;
use veil_core::Inventory;

/// Replace every well-formed redaction tag with the surface it stands for.
///
/// Lookups degrade gracefully instead of failing:
/// - an unknown item id leaves the tag in place verbatim
/// - an item id too large for `u64` leaves the tag in place verbatim
/// - an alias variant whose alias id is unknown falls back to the
///   canonical surface
///
/// Replacement runs left to right and substitutes surfaces literally, so
/// surfaces containing `$` or other replacement syntax come back intact.
/// Text without tags passes through unchanged.
pub fn unredact(text: &str, inventory: &Inventory) -> String {
    REDACTED_TAG_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let Ok(item_id) = caps["id"].parse::<u64>() else {
                return caps[0].to_string();
            };
            let Some(item) = inventory.find(item_id) else {
                return caps[0].to_string();
            };

            let var = &caps["var"];
            if var == "c" {
                return item.surface.clone();
            }
            var[1..]
                .parse::<u64>()
                .ok()
                .and_then(|alias_id| inventory.get_alias_surface(item_id, alias_id))
                .unwrap_or(&item.surface)
                .to_string()
        })
        .into_owned()
}
