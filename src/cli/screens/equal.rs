//! Equal split screen: person count, tip, live preview, calculate.

use crate::backend::BackendClient;
use crate::cli::io;
use crate::cli::output;
use crate::cli::CommandError;
use crate::core::services::{EqualSplitPreview, EqualSplitService, MIN_PEOPLE};
use crate::domain::{CountInput, NumberInput};
use crate::wizard::{WizardEvent, WizardState, DEFAULT_PEOPLE};

use super::ScreenOutcome;

pub fn run(state: &mut WizardState, client: &BackendClient) -> Result<ScreenOutcome, CommandError> {
    output::section("Equal split");
    let Some(ledger) = state.ledger.as_ref() else {
        return Ok(ScreenOutcome::Event(WizardEvent::Reset));
    };

    match EqualSplitService::preview(ledger, state.tip_percent, state.people.count()) {
        Ok(preview) => render_preview(&preview, state.tip_percent, state.people.count()),
        Err(err) => io::print_warning(err.to_string()),
    }

    let choice = io::select(
        "Equal split",
        &[
            "Change number of people",
            "Change tip percentage",
            "Calculate split",
            "Back",
        ],
    )?;
    match choice {
        0 => {
            let count = prompt_people_count()?;
            state.set_people_count(count);
        }
        1 => {
            state.tip_percent = NumberInput::parse(&io::prompt_text("Tip percentage")?).or_zero();
        }
        2 => {
            let Some(ledger) = state.ledger.as_ref() else {
                return Ok(ScreenOutcome::Event(WizardEvent::Reset));
            };
            if state.people.count() < MIN_PEOPLE {
                io::print_warning("An equal split needs at least 2 people.");
                return Ok(ScreenOutcome::Stay);
            }
            let request = EqualSplitService::request(ledger, state.tip_percent, state.people.count())?;
            io::print_info("Calculating split...");
            match client.split_equal(&request) {
                Ok(result) => return Ok(ScreenOutcome::Event(WizardEvent::SplitComputed(result))),
                Err(err) => io::print_error(format!(
                    "Error calculating split ({err}). Please try again."
                )),
            }
        }
        _ => return Ok(ScreenOutcome::Event(WizardEvent::Back)),
    }
    Ok(ScreenOutcome::Stay)
}

/// Prompts for a person count; unusable input reverts to the default.
pub(super) fn prompt_people_count() -> Result<usize, CommandError> {
    let raw = io::prompt_text("Number of people")?;
    Ok(match CountInput::parse(&raw) {
        CountInput::Value(count) if count >= 1 => count as usize,
        _ => DEFAULT_PEOPLE,
    })
}

fn render_preview(preview: &EqualSplitPreview, tip_percent: f64, people: usize) {
    println!();
    println!("People: {people}");
    println!("{:<28} {:>10.2}", "Subtotal", preview.subtotal);
    println!("{:<28} {:>10.2}", "Tax", preview.tax);
    println!("{:<28} {:>10.2}", format!("Tip ({tip_percent}%)"), preview.tip);
    println!("{:<28} {:>10.2}", "Total", preview.total);
    println!("{:<28} {:>10.2}", "Per person", preview.per_person);
}
