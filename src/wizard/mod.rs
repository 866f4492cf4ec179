//! Pure state machine sequencing the bill-splitting flow.
//!
//! Every transition is `apply(state, event) -> state`: screens produce
//! events, nothing else moves the wizard. Events that make no sense on the
//! current step leave the state untouched, so stray completions (say, a
//! split result arriving after the user already left the strategy screen)
//! cannot corrupt the flow.

use tracing::debug;

use crate::domain::{BillItem, People, SplitKind, SplitResult};
use crate::ledger::{AssignmentSheet, ItemLedger};

/// Default number of people offered by both strategy screens.
pub const DEFAULT_PEOPLE: usize = 2;
/// Default tip percentage offered when entering a strategy screen.
pub const DEFAULT_TIP_PERCENT: f64 = 18.0;

/// The screen the wizard is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Input,
    Items,
    SplitSelect,
    EqualSplit,
    ItemSplit,
    Results,
}

/// A user or network-completion event the wizard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// Parsing or manual entry produced the initial bill.
    BillParsed { items: Vec<BillItem>, tax: f64 },
    /// The items screen was confirmed.
    ItemsConfirmed,
    /// A split strategy was chosen.
    SplitChosen(SplitKind),
    /// The backend confirmed a split.
    SplitComputed(SplitResult),
    /// One step back.
    Back,
    /// Full reset to the input screen.
    Reset,
}

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub ledger: Option<ItemLedger>,
    pub assignments: Option<AssignmentSheet>,
    pub people: People,
    pub tip_percent: f64,
    pub split_kind: SplitKind,
    pub result: Option<SplitResult>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Input,
            ledger: None,
            assignments: None,
            people: People::new(DEFAULT_PEOPLE),
            tip_percent: DEFAULT_TIP_PERCENT,
            split_kind: SplitKind::Equal,
            result: None,
        }
    }

    /// Changes the person count, resizing the name list and the assignment
    /// sheet together so the two can never drift apart.
    pub fn set_people_count(&mut self, count: usize) {
        self.people.resize(count);
        if let (Some(sheet), Some(ledger)) = (self.assignments.as_mut(), self.ledger.as_ref()) {
            sheet.rebuild(ledger.items(), count);
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies one event, returning the next state.
pub fn apply(state: WizardState, event: WizardEvent) -> WizardState {
    let mut next = state;
    match (next.step, event) {
        (WizardStep::Input, WizardEvent::BillParsed { items, tax }) => {
            // The reset snapshot is captured here, exactly once.
            next.ledger = Some(ItemLedger::new(items, tax));
            next.step = WizardStep::Items;
        }
        (WizardStep::Items, WizardEvent::ItemsConfirmed) => {
            match &next.ledger {
                Some(ledger) if ledger.is_ready_for_split() => {
                    next.step = WizardStep::SplitSelect;
                }
                _ => debug!("items confirmation ignored, ledger not ready"),
            }
        }
        (WizardStep::SplitSelect, WizardEvent::SplitChosen(kind)) => {
            match next.ledger.as_ref() {
                Some(ledger) => {
                    next.split_kind = kind;
                    next.tip_percent = DEFAULT_TIP_PERCENT;
                    next.step = match kind {
                        SplitKind::Equal => WizardStep::EqualSplit,
                        SplitKind::ByItem => {
                            let people = next.people.count();
                            match next.assignments.as_mut() {
                                Some(sheet) => sheet.rebuild(ledger.items(), people),
                                None => {
                                    next.assignments =
                                        Some(AssignmentSheet::new(ledger.items(), people));
                                }
                            }
                            WizardStep::ItemSplit
                        }
                    };
                }
                None => debug!("split choice ignored without a ledger"),
            }
        }
        (WizardStep::EqualSplit | WizardStep::ItemSplit, WizardEvent::SplitComputed(result)) => {
            next.result = Some(result);
            next.step = WizardStep::Results;
        }
        (step, WizardEvent::Back) => {
            next.step = match step {
                WizardStep::Input => WizardStep::Input,
                WizardStep::Items => WizardStep::Input,
                WizardStep::SplitSelect => WizardStep::Items,
                WizardStep::EqualSplit | WizardStep::ItemSplit => WizardStep::SplitSelect,
                WizardStep::Results => match next.split_kind {
                    SplitKind::Equal => WizardStep::EqualSplit,
                    SplitKind::ByItem => WizardStep::ItemSplit,
                },
            };
        }
        (_, WizardEvent::Reset) => {
            next = WizardState::new();
        }
        (step, event) => {
            debug!(?step, ?event, "event ignored on this step");
        }
    }
    next
}
