//! 選択台帳の不変条件テスト
//!
//! 任意の操作列に対して台帳の不変条件が保たれることを検証

use artwork_browser_common::{Artwork, ItemId, PageViewController, SelectionLedger};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Select(ItemId),
    Deselect(ItemId),
    Target(usize),
    Fill(Vec<ItemId>),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u64..20).prop_map(Op::Select),
        4 => (0u64..20).prop_map(Op::Deselect),
        2 => (0usize..15).prop_map(Op::Target),
        3 => prop::collection::vec(0u64..20, 0..8).prop_map(Op::Fill),
        1 => Just(Op::Clear),
    ]
}

fn rows(ids: &[ItemId]) -> Vec<Artwork> {
    ids.iter()
        .map(|&id| Artwork { id, ..Default::default() })
        .collect()
}

fn apply(ledger: &mut SelectionLedger, op: &Op) {
    match op {
        Op::Select(id) => ledger.record_explicit_select(*id),
        Op::Deselect(id) => ledger.record_explicit_deselect(*id),
        Op::Target(n) => {
            let _ = ledger.set_target_count(*n);
        }
        Op::Fill(ids) => {
            ledger.fill_target(&rows(ids));
        }
        Op::Clear => ledger.clear_all(),
    }
}

fn assert_invariants(ledger: &SelectionLedger) {
    let selected: HashSet<ItemId> = ledger.selected_ids().collect();
    let deselected: HashSet<ItemId> = ledger.deselected_ids().collect();
    let auto: HashSet<ItemId> = ledger.auto_selected_ids().collect();

    assert!(selected.is_disjoint(&deselected), "selected ∩ deselected ≠ ∅");
    assert!(auto.is_subset(&selected), "auto ⊄ selected");
    assert_eq!(ledger.size(), selected.len());
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = SelectionLedger::new();
        for op in &ops {
            apply(&mut ledger, op);
            assert_invariants(&ledger);
        }
    }

    #[test]
    fn explicit_ops_are_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..30),
        id in 0u64..20,
        select in any::<bool>(),
    ) {
        let mut base = SelectionLedger::new();
        for op in &ops {
            apply(&mut base, op);
        }
        let mut once = base.clone();
        let mut twice = base;
        if select {
            once.record_explicit_select(id);
            twice.record_explicit_select(id);
            twice.record_explicit_select(id);
        } else {
            once.record_explicit_deselect(id);
            twice.record_explicit_deselect(id);
            twice.record_explicit_deselect(id);
        }
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn deselected_never_auto_selected(
        deselected in prop::collection::hash_set(0u64..30, 0..10),
        pages in prop::collection::vec(prop::collection::vec(0u64..30, 0..12), 1..6),
        target in 1usize..40,
    ) {
        let mut ledger = SelectionLedger::new();
        for id in &deselected {
            ledger.record_explicit_deselect(*id);
        }
        ledger.set_target_count(target).unwrap();
        for page in &pages {
            let claimed = ledger.fill_target(&rows(page));
            for id in claimed {
                prop_assert!(!deselected.contains(&id));
            }
        }
        for id in &deselected {
            prop_assert!(!ledger.is_selected(*id));
        }
    }

    #[test]
    fn fill_reaches_min_of_target_and_observed(
        deselected in prop::collection::hash_set(0u64..40, 0..10),
        pages in prop::collection::vec(prop::collection::vec(0u64..40, 0..12), 1..8),
        target in 1usize..50,
    ) {
        let mut view = PageViewController::<Artwork>::new(12);
        for id in &deselected {
            view.on_page_loaded(rows(&[*id]));
            view.on_user_selection_change([*id]);
            view.on_user_selection_change(std::iter::empty());
        }
        view.set_target(target).unwrap();

        let mut observed = HashSet::new();
        for page in &pages {
            observed.extend(page.iter().copied().filter(|id| !deselected.contains(id)));
            view.on_page_loaded(rows(page));
        }
        prop_assert_eq!(view.total_selected(), target.min(observed.len()));
    }

    #[test]
    fn rendered_selection_matches_ledger(
        ops in prop::collection::vec(op_strategy(), 0..30),
        page in prop::collection::vec(0u64..20, 0..12),
        visible in prop::collection::hash_set(0u64..20, 0..12),
    ) {
        let mut view = PageViewController::<Artwork>::new(12);
        for op in &ops {
            match op {
                Op::Target(n) => {
                    let _ = view.set_target(*n);
                }
                Op::Fill(ids) => {
                    view.on_page_loaded(rows(ids));
                }
                Op::Clear => view.clear_all(),
                _ => {}
            }
        }
        view.on_page_loaded(rows(&page));
        view.on_user_selection_change(visible.iter().copied());

        let expected: Vec<ItemId> = page
            .iter()
            .copied()
            .filter(|id| view.ledger().is_selected(*id))
            .collect();
        prop_assert_eq!(view.rendered_selection_ids(), expected);
        assert_invariants(view.ledger());
    }
}
