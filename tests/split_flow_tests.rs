//! End-to-end walks through the wizard reducer, exercising the worked
//! examples the previews must reproduce.

use billsplit_core::core::services::{EqualSplitService, ItemSplitService, ServiceError};
use billsplit_core::domain::{BillItem, SplitKind, SplitResult};
use billsplit_core::wizard::{apply, WizardEvent, WizardState, WizardStep};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn burger_and_soda() -> WizardEvent {
    WizardEvent::BillParsed {
        items: vec![
            BillItem::new("Burger", 10.0, 2),
            BillItem::new("Soda", 2.5, 1),
        ],
        tax: 1.5,
    }
}

fn backend_result(total: f64) -> SplitResult {
    SplitResult {
        subtotal: Some(22.5),
        tax: 1.5,
        tip: 4.32,
        total,
        per_person: Some(total / 2.0),
        tax_per_person: 0.75,
        tip_per_person: 2.16,
        person_subtotals: None,
        person_totals: None,
        people_names: None,
    }
}

#[test]
fn equal_split_flow_reproduces_the_worked_example() {
    let mut state = WizardState::new();
    state = apply(state, burger_and_soda());
    state = apply(state, WizardEvent::ItemsConfirmed);
    state = apply(state, WizardEvent::SplitChosen(SplitKind::Equal));
    assert_eq!(state.step, WizardStep::EqualSplit);

    let ledger = state.ledger.as_ref().unwrap();
    let preview = EqualSplitService::preview(ledger, state.tip_percent, 2).unwrap();
    assert_close(preview.subtotal, 22.5);
    assert_close(preview.tip, 4.32);
    assert_close(preview.total, 28.32);
    assert_close(preview.per_person, 14.16);

    // The backend confirms; the stored result replaces nothing silently.
    state = apply(state, WizardEvent::SplitComputed(backend_result(28.32)));
    assert_eq!(state.step, WizardStep::Results);
    assert_close(state.result.as_ref().unwrap().total, 28.32);
}

#[test]
fn item_split_flow_reproduces_the_worked_example() {
    let mut state = WizardState::new();
    state = apply(state, burger_and_soda());
    state = apply(state, WizardEvent::ItemsConfirmed);
    state = apply(state, WizardEvent::SplitChosen(SplitKind::ByItem));
    assert_eq!(state.step, WizardStep::ItemSplit);

    let sheet = state.assignments.as_mut().unwrap();
    sheet.toggle_person(0, 0);
    sheet.toggle_person(1, 1);

    let ledger = state.ledger.as_ref().unwrap();
    let sheet = state.assignments.as_ref().unwrap();
    assert!(!sheet.has_unassigned_items(ledger.items()));

    let preview = ItemSplitService::preview(ledger, sheet, state.tip_percent).unwrap();
    assert_close(preview.person_subtotals[0], 20.0);
    assert_close(preview.person_subtotals[1], 2.5);

    let request = ItemSplitService::request(ledger, sheet, state.tip_percent).unwrap();
    assert_eq!(request.assignments, vec![vec![2, 0], vec![0, 1]]);
}

#[test]
fn unassigned_items_block_the_request_until_resolved() {
    let mut state = WizardState::new();
    state = apply(state, burger_and_soda());
    state = apply(state, WizardEvent::ItemsConfirmed);
    state = apply(state, WizardEvent::SplitChosen(SplitKind::ByItem));

    let sheet = state.assignments.as_mut().unwrap();
    sheet.toggle_person(0, 0);

    let ledger = state.ledger.as_ref().unwrap();
    let sheet = state.assignments.as_ref().unwrap();
    assert!(matches!(
        ItemSplitService::request(ledger, sheet, state.tip_percent),
        Err(ServiceError::UnassignedItems)
    ));
}

#[test]
fn partially_assigned_expanded_item_passes_the_gate() {
    let mut state = WizardState::new();
    state = apply(
        state,
        WizardEvent::BillParsed {
            items: vec![BillItem::new("Dumplings", 4.0, 3)],
            tax: 0.0,
        },
    );
    state = apply(state, WizardEvent::ItemsConfirmed);
    state = apply(state, WizardEvent::SplitChosen(SplitKind::ByItem));

    let sheet = state.assignments.as_mut().unwrap();
    sheet.toggle_expanded(0);
    sheet.toggle_unit(0, 0, 0);
    sheet.toggle_unit(0, 1, 1);

    let ledger = state.ledger.as_ref().unwrap();
    assert!(!state
        .assignments
        .as_ref()
        .unwrap()
        .has_unassigned_items(ledger.items()));
}

#[test]
fn manual_entry_path_produces_a_single_item_no_tax_ledger() {
    let state = apply(
        WizardState::new(),
        WizardEvent::BillParsed {
            items: vec![BillItem::new("Pad Thai", 13.5, 1)],
            tax: 0.0,
        },
    );
    assert_eq!(state.step, WizardStep::Items);
    let ledger = state.ledger.as_ref().unwrap();
    assert_eq!(ledger.len(), 1);
    assert_close(ledger.tax(), 0.0);
    assert!(ledger.is_ready_for_split());
}

#[test]
fn results_survive_back_and_return() {
    let mut state = WizardState::new();
    state = apply(state, burger_and_soda());
    state = apply(state, WizardEvent::ItemsConfirmed);
    state = apply(state, WizardEvent::SplitChosen(SplitKind::Equal));
    state = apply(state, WizardEvent::SplitComputed(backend_result(28.32)));

    state = apply(state, WizardEvent::Back);
    assert_eq!(state.step, WizardStep::EqualSplit);
    // The stale result is still present but unreachable until recomputed.
    assert!(state.result.is_some());

    state = apply(state, WizardEvent::SplitComputed(backend_result(30.0)));
    assert_eq!(state.step, WizardStep::Results);
    assert_close(state.result.as_ref().unwrap().total, 30.0);
}

#[test]
fn reset_returns_to_a_pristine_wizard() {
    let mut state = WizardState::new();
    state = apply(state, burger_and_soda());
    state = apply(state, WizardEvent::ItemsConfirmed);
    state = apply(state, WizardEvent::SplitChosen(SplitKind::ByItem));
    state.set_people_count(5);
    state = apply(state, WizardEvent::Reset);

    assert_eq!(state, WizardState::new());
}
