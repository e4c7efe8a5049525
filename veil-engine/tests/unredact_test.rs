use veil_core::Inventory;
use veil_engine::{redact, unredact};

fn email_inventory() -> Inventory {
    let mut inv = Inventory::new();
    let id = inv
        .add_or_merge("(1)(A)(c)", "email address", "kal@knight.club")
        .unwrap()
        .id;
    inv.add_alias(id, "kal@day.club").unwrap();
    inv
}

// ── Round trip ────────────────────────────────────────────────────────────

#[test]
fn redact_then_unredact_restores_original() {
    let inv = email_inventory();
    let original = "Primary kal@knight.club, fallback kal@day.club.\n\n\
                    ```\nkal@knight.club stays put\n```\n";
    let redacted = redact(original, &inv).unwrap();
    assert_ne!(redacted.text, original);
    assert_eq!(unredact(&redacted.text, &inv), original);
}

#[test]
fn alias_variant_restores_alias_surface() {
    let inv = email_inventory();
    let out = unredact("[REDACTED(#1|var=a1): (1)(A)(c), email address]", &inv);
    assert_eq!(out, "kal@day.club");
}

#[test]
fn canonical_variant_restores_canonical_surface() {
    let inv = email_inventory();
    let out = unredact(
        "See [REDACTED(#1|var=c): (1)(A)(c), email address] for details.",
        &inv,
    );
    assert_eq!(out, "See kal@knight.club for details.");
}

// ── Graceful degradation ──────────────────────────────────────────────────

#[test]
fn unknown_item_keeps_tag_verbatim() {
    let inv = email_inventory();
    let tag = "[REDACTED(#999|var=c): (1)(A)(c), email address]";
    assert_eq!(unredact(tag, &inv), tag);
}

#[test]
fn unknown_alias_falls_back_to_canonical() {
    let inv = email_inventory();
    let out = unredact("[REDACTED(#1|var=a7): (1)(A)(c), email address]", &inv);
    assert_eq!(out, "kal@knight.club");
}

#[test]
fn id_overflowing_u64_keeps_tag_verbatim() {
    let inv = email_inventory();
    let tag = "[REDACTED(#99999999999999999999999999|var=c): (1)(A)(c), email address]";
    assert_eq!(unredact(tag, &inv), tag);
}

#[test]
fn alias_id_overflowing_u64_falls_back_to_canonical() {
    let inv = email_inventory();
    let out = unredact(
        "[REDACTED(#1|var=a99999999999999999999999999): (1)(A)(c), email address]",
        &inv,
    );
    assert_eq!(out, "kal@knight.club");
}

// ── Inputs that are not tags ──────────────────────────────────────────────

#[test]
fn text_without_tags_is_unchanged() {
    let inv = email_inventory();
    let text = "plain prose, no tags at all";
    assert_eq!(unredact(text, &inv), text);
}

#[test]
fn tag_with_malformed_code_is_left_alone() {
    let inv = email_inventory();
    let text = "[REDACTED(#1|var=c): nonsense, email address]";
    assert_eq!(unredact(text, &inv), text);
}

#[test]
fn empty_inventory_keeps_every_tag() {
    let inv = Inventory::new();
    let text = "a [REDACTED(#1|var=c): (1)(A)(c), email address] b";
    assert_eq!(unredact(text, &inv), text);
}

// ── Literal replacement ───────────────────────────────────────────────────

#[test]
fn surfaces_with_replacement_syntax_restore_literally() {
    let mut inv = Inventory::new();
    inv.add_or_merge("(3)(A)(b)", "shell secret", "$HOME/$1-key")
        .unwrap();
    let out = unredact("[REDACTED(#1|var=c): (3)(A)(b), shell secret]", &inv);
    assert_eq!(out, "$HOME/$1-key");
}

#[test]
fn multiple_tags_replace_in_one_pass() {
    let inv = email_inventory();
    let text = "[REDACTED(#1|var=c): (1)(A)(c), email address] then \
                [REDACTED(#1|var=a1): (1)(A)(c), email address] then \
                [REDACTED(#404|var=c): (1)(A)(c), email address]";
    assert_eq!(
        unredact(text, &inv),
        "kal@knight.club then kal@day.club then \
         [REDACTED(#404|var=c): (1)(A)(c), email address]"
    );
}
