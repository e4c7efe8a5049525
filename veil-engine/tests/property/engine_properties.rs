use proptest::prelude::*;
use veil_core::Inventory;
use veil_engine::{mask_existing_tags, redact, select_leftmost_longest, unredact, Match, Variant};

fn email_inventory() -> Inventory {
    let mut inv = Inventory::new();
    let id = inv
        .add_or_merge("(1)(A)(c)", "email address", "kal@knight.club")
        .unwrap()
        .id;
    inv.add_alias(id, "kal@day.club").unwrap();
    inv
}

// ── Redaction round-trips ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn redact_unredact_round_trips(
        prefix in "[a-z ]{0,24}",
        suffix in "[a-z ]{0,24}",
        use_alias in any::<bool>()
    ) {
        let surface = if use_alias { "kal@day.club" } else { "kal@knight.club" };
        let original = format!("{prefix}{surface}{suffix}");
        let inv = email_inventory();

        let redacted = redact(&original, &inv).unwrap();
        prop_assert!(!redacted.text.contains(surface));
        prop_assert_eq!(unredact(&redacted.text, &inv), original);
    }

    #[test]
    fn redaction_is_idempotent(
        prefix in "[a-z ]{0,24}",
        suffix in "[a-z ]{0,24}"
    ) {
        let original = format!("{prefix}kal@knight.club{suffix}");
        let inv = email_inventory();

        let first = redact(&original, &inv).unwrap();
        let second = redact(&first.text, &inv).unwrap();
        prop_assert_eq!(&second.text, &first.text);
        prop_assert!(second.matches.is_empty());
    }
}

// ── Masking ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn masking_arbitrary_text_is_idempotent(text in ".{0,200}") {
        let once = mask_existing_tags(&text);
        prop_assert_eq!(mask_existing_tags(&once), once.clone());
        prop_assert_eq!(once.len(), text.len());
    }

    #[test]
    fn masking_generated_tags_is_idempotent(
        prefix in "[a-z \\[\\]]{0,16}",
        id in 0u64..10_000,
        suffix in "[a-z \\[\\]]{0,16}"
    ) {
        let text = format!("{prefix}[REDACTED(#{id}|var=c): (1)(A)(c), email address]{suffix}");
        let once = mask_existing_tags(&text);
        prop_assert!(!once.contains("[REDACTED("));
        prop_assert_eq!(mask_existing_tags(&once), once.clone());
        prop_assert_eq!(once.len(), text.len());
    }
}

// ── Resolver invariants ───────────────────────────────────────────────────

fn raw_match(start: usize, len: usize) -> Match {
    Match {
        start,
        end: start + len,
        item_id: 1,
        code: "(1)(A)(c)".to_string(),
        desc: "test".to_string(),
        surface: "x".repeat(len),
        variant: Variant::Canonical,
    }
}

proptest! {
    #[test]
    fn selected_matches_never_overlap(
        spans in prop::collection::vec((0usize..200, 1usize..24), 0..40)
    ) {
        let raw: Vec<Match> = spans.iter().map(|&(s, l)| raw_match(s, l)).collect();
        let selected = select_leftmost_longest(raw);

        for pair in selected.windows(2) {
            prop_assert!(
                pair[0].end <= pair[1].start,
                "kept matches overlap: {:?}", pair
            );
        }
    }

    #[test]
    fn selection_is_a_fixed_point(
        spans in prop::collection::vec((0usize..200, 1usize..24), 0..40)
    ) {
        let raw: Vec<Match> = spans.iter().map(|&(s, l)| raw_match(s, l)).collect();
        let selected = select_leftmost_longest(raw);
        let again = select_leftmost_longest(selected.clone());
        prop_assert_eq!(again, selected);
    }
}
