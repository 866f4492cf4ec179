//! Items screen: review and edit the parsed bill before splitting.

use crate::cli::io;
use crate::cli::output;
use crate::cli::CommandError;
use crate::domain::{CountInput, NumberInput};
use crate::ledger::ItemLedger;
use crate::wizard::{WizardEvent, WizardState};

use super::ScreenOutcome;

pub fn run(state: &mut WizardState) -> Result<ScreenOutcome, CommandError> {
    output::section("Review & edit items");
    let Some(ledger) = state.ledger.as_mut() else {
        return Ok(ScreenOutcome::Event(WizardEvent::Reset));
    };

    render(ledger);
    if !ledger.is_ready_for_split() {
        io::print_warning("Name every item and give it a price above zero before continuing.");
    }

    let choice = io::select(
        "Items",
        &[
            "Edit an item",
            "Add an item",
            "Remove an item",
            "Edit tax",
            "Reset to original",
            "Continue to split",
            "Back",
        ],
    )?;
    match choice {
        0 => edit_item(ledger)?,
        1 => ledger.add_item(),
        2 => {
            if let Some(index) = prompt_row(ledger, "Item number to remove")? {
                ledger.remove_item(index);
            }
        }
        3 => {
            let tax = NumberInput::parse(&io::prompt_text("Tax amount")?).or_zero();
            ledger.set_tax(tax);
        }
        4 => {
            ledger.reset_to_original();
            io::print_success("Restored the original bill.");
        }
        5 => {
            if ledger.is_ready_for_split() {
                return Ok(ScreenOutcome::Event(WizardEvent::ItemsConfirmed));
            }
            io::print_warning("Name every item and give it a price above zero before continuing.");
        }
        _ => return Ok(ScreenOutcome::Event(WizardEvent::Back)),
    }
    Ok(ScreenOutcome::Stay)
}

fn render(ledger: &ItemLedger) {
    println!();
    println!(
        "{:<4} {:<24} {:>10} {:>5} {:>10}",
        "#", "Item", "Price", "Qty", "Total"
    );
    for (index, item) in ledger.items().iter().enumerate() {
        let name = if item.name.trim().is_empty() {
            "(unnamed)"
        } else {
            item.name.as_str()
        };
        println!(
            "{:<4} {:<24} {:>10.2} {:>5} {:>10.2}",
            index + 1,
            name,
            item.price,
            item.quantity,
            item.line_total()
        );
    }
    println!();
    println!("{:<36} {:>21.2}", "Subtotal", ledger.subtotal());
    println!("{:<36} {:>21.2}", "Tax", ledger.tax());
    println!("{:<36} {:>21.2}", "Total", ledger.subtotal() + ledger.tax());
}

fn edit_item(ledger: &mut ItemLedger) -> Result<(), CommandError> {
    let Some(index) = prompt_row(ledger, "Item number to edit")? else {
        return Ok(());
    };
    let field = io::select("Field", &["Name", "Price", "Quantity"])?;
    match field {
        0 => {
            let name = io::prompt_text("New name")?;
            ledger.update_name(index, name.trim());
        }
        1 => {
            // Unparseable input coerces to zero, flagging the row invalid.
            let price = NumberInput::parse(&io::prompt_text("New price")?).or_zero();
            ledger.update_price(index, price);
        }
        _ => {
            let quantity = CountInput::parse(&io::prompt_text("New quantity")?).or_zero();
            ledger.update_quantity(index, quantity);
        }
    }
    Ok(())
}

/// Prompts for a 1-based row number, returning the 0-based index.
fn prompt_row(ledger: &ItemLedger, prompt: &str) -> Result<Option<usize>, CommandError> {
    let raw = io::prompt_text(prompt)?;
    match CountInput::parse(&raw) {
        CountInput::Value(row) if row >= 1 && (row as usize) <= ledger.len() => {
            Ok(Some(row as usize - 1))
        }
        _ => {
            io::print_warning("No such item.");
            Ok(None)
        }
    }
}
