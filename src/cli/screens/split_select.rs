//! Strategy selection screen.

use crate::cli::io;
use crate::cli::output;
use crate::cli::CommandError;
use crate::domain::SplitKind;
use crate::wizard::WizardEvent;

use super::ScreenOutcome;

pub fn run() -> Result<ScreenOutcome, CommandError> {
    output::section("How would you like to split the bill?");
    let choice = io::select(
        "Split",
        &[
            "Split equally - divide the total evenly among all people",
            "Split by item - assign specific items to specific people",
            "Back",
        ],
    )?;
    Ok(match choice {
        0 => ScreenOutcome::Event(WizardEvent::SplitChosen(SplitKind::Equal)),
        1 => ScreenOutcome::Event(WizardEvent::SplitChosen(SplitKind::ByItem)),
        _ => ScreenOutcome::Event(WizardEvent::Back),
    })
}
