use proptest::prelude::*;
use veil_core::Inventory;

// ── Merge is idempotent ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn add_or_merge_twice_yields_one_item(
        code in r"\([1-4]\)\([A-EX]\)(\([a-ex]\))?",
        desc in "[a-z]{1,12}",
        surface in "[A-Za-z0-9@.]{1,16}"
    ) {
        let mut inv = Inventory::new();
        let first = inv.add_or_merge(&code, &desc, &surface).unwrap().id;
        let second = inv.add_or_merge(&code, &desc, &surface).unwrap().id;
        prop_assert_eq!(first, second);
        prop_assert_eq!(inv.items().len(), 1);
    }

    #[test]
    fn merge_keys_on_code_and_surface_not_desc(
        code in r"\([1-4]\)\([A-EX]\)(\([a-ex]\))?",
        surface in "[A-Za-z0-9@.]{1,16}"
    ) {
        let mut inv = Inventory::new();
        let first = inv.add_or_merge(&code, "first description", &surface).unwrap().id;
        let second = inv.add_or_merge(&code, "second description", &surface).unwrap().id;
        prop_assert_eq!(first, second);
        prop_assert_eq!(inv.items().len(), 1);
    }
}

// ── Alias registration never duplicates ───────────────────────────────────

proptest! {
    #[test]
    fn known_surfaces_always_report_no_change(
        surface in "[A-Za-z0-9@.]{1,16}",
        alias in "[A-Za-z0-9@.]{1,16}"
    ) {
        prop_assume!(surface != alias);
        let mut inv = Inventory::new();
        let id = inv.add_or_merge("(1)(A)(c)", "email address", &surface).unwrap().id;

        let alias_id = inv.add_alias(id, &alias).unwrap();
        prop_assert!(alias_id >= 1);

        prop_assert_eq!(inv.add_alias(id, &alias).unwrap(), 0);
        prop_assert_eq!(inv.add_alias(id, &surface).unwrap(), 0);
        prop_assert_eq!(inv.find(id).unwrap().aliases.len(), 1);
    }
}

// ── Every mutation sequence leaves the inventory valid ────────────────────

proptest! {
    #[test]
    fn mutations_preserve_validity(
        surfaces in prop::collection::vec("[A-Za-z0-9@.]{1,10}", 1..6)
    ) {
        let mut inv = Inventory::new();
        for surface in &surfaces {
            inv.add_or_merge("(1)(A)(c)", "email address", surface).unwrap();
        }
        prop_assert!(inv.validate().is_ok());

        let ids: Vec<u64> = inv.items().iter().map(|item| item.id).collect();
        for window in ids.windows(2) {
            prop_assert!(window[0] < window[1], "ids must be strictly increasing");
        }
        prop_assert_eq!(inv.next_id(), ids.last().copied().unwrap_or(0) + 1);
    }
}
