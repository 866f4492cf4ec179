//! One module per wizard screen. Each screen runs one round of
//! interaction and reports what the wizard should do next.

pub mod equal;
pub mod input;
pub mod item_assign;
pub mod items;
pub mod results;
pub mod split_select;

use crate::wizard::WizardEvent;

/// What a screen decided after one round of interaction.
pub enum ScreenOutcome {
    /// Feed an event to the wizard.
    Event(WizardEvent),
    /// Stay on the current screen for another round.
    Stay,
    /// Leave the wizard entirely.
    Exit,
}
