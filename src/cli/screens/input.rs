//! First screen: get a bill into the ledger, by photo or by hand.

use std::path::PathBuf;

use crate::backend::BackendClient;
use crate::cli::io;
use crate::cli::CommandError;
use crate::domain::{BillItem, CountInput, NumberInput};
use crate::wizard::WizardEvent;

use super::ScreenOutcome;

pub fn run(client: &BackendClient) -> Result<ScreenOutcome, CommandError> {
    let choice = io::select(
        "How would you like to enter the bill?",
        &[
            "Upload a receipt photo",
            "Enter an item manually",
            "Quit",
        ],
    )?;
    match choice {
        0 => upload(client),
        1 => manual(),
        _ => Ok(ScreenOutcome::Exit),
    }
}

fn upload(client: &BackendClient) -> Result<ScreenOutcome, CommandError> {
    let raw = io::prompt_text("Path to the receipt photo")?;
    let photo = PathBuf::from(raw.trim());
    if !photo.is_file() {
        io::print_warning("That file does not exist.");
        return Ok(ScreenOutcome::Stay);
    }

    io::print_info("Reading your receipt...");
    match client.parse_bill(&photo) {
        Ok(parsed) => {
            io::print_success(format!("Found {} item(s) on the receipt.", parsed.items.len()));
            Ok(ScreenOutcome::Event(WizardEvent::BillParsed {
                items: parsed.items,
                tax: parsed.tax.unwrap_or(0.0),
            }))
        }
        Err(err) => {
            io::print_error(format!(
                "Could not parse the receipt ({err}). Please try manual entry."
            ));
            Ok(ScreenOutcome::Stay)
        }
    }
}

fn manual() -> Result<ScreenOutcome, CommandError> {
    let name = io::prompt_text("Item name")?;
    if name.trim().is_empty() {
        io::print_warning("An item needs a name.");
        return Ok(ScreenOutcome::Stay);
    }

    let price = match NumberInput::parse(&io::prompt_text("Price")?) {
        NumberInput::Value(value) if value > 0.0 => value,
        _ => {
            io::print_warning("An item needs a price above zero.");
            return Ok(ScreenOutcome::Stay);
        }
    };

    // An unusable quantity falls back to a single unit.
    let quantity = match CountInput::parse(&io::prompt_text_with_default("Quantity", "1")?) {
        CountInput::Value(value) if value >= 1 => value,
        _ => 1,
    };

    Ok(ScreenOutcome::Event(WizardEvent::BillParsed {
        items: vec![BillItem::new(name.trim(), price, quantity)],
        tax: 0.0,
    }))
}
