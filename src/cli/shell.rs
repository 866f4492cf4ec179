//! The wizard loop: render the screen for the current step, feed the
//! resulting event back through the reducer.

use tracing::info;

use crate::backend::BackendClient;
use crate::cli::screens::{self, ScreenOutcome};
use crate::cli::{output, CommandError};
use crate::config::Config;
use crate::wizard::{self, WizardState, WizardStep};

/// Runs the interactive wizard until the user quits.
pub fn run_cli(config: Config) -> Result<(), CommandError> {
    info!(backend = %config.backend_url, "starting the bill-splitting wizard");
    let client = BackendClient::new(config.backend_url);
    let mut state = WizardState::new();
    output::section("Bill Splitter");

    loop {
        let outcome = match state.step {
            WizardStep::Input => screens::input::run(&client)?,
            WizardStep::Items => screens::items::run(&mut state)?,
            WizardStep::SplitSelect => screens::split_select::run()?,
            WizardStep::EqualSplit => screens::equal::run(&mut state, &client)?,
            WizardStep::ItemSplit => screens::item_assign::run(&mut state, &client)?,
            WizardStep::Results => screens::results::run(&state)?,
        };
        match outcome {
            ScreenOutcome::Event(event) => state = wizard::apply(state, event),
            ScreenOutcome::Stay => {}
            ScreenOutcome::Exit => break,
        }
    }
    Ok(())
}
