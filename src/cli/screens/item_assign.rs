//! By-item split screen: the assignment grid and its editing loop.

use crate::backend::BackendClient;
use crate::cli::io;
use crate::cli::output;
use crate::cli::CommandError;
use crate::core::services::{ItemSplitPreview, ItemSplitService};
use crate::domain::{CountInput, NumberInput, People};
use crate::ledger::{AssignmentSheet, ItemLedger};
use crate::wizard::{WizardEvent, WizardState};

use super::equal::prompt_people_count;
use super::ScreenOutcome;

pub fn run(state: &mut WizardState, client: &BackendClient) -> Result<ScreenOutcome, CommandError> {
    output::section("Split by item");
    let (Some(ledger), Some(sheet)) = (state.ledger.as_ref(), state.assignments.as_ref()) else {
        return Ok(ScreenOutcome::Event(WizardEvent::Reset));
    };

    render_grid(ledger, sheet, &state.people);
    match ItemSplitService::preview(ledger, sheet, state.tip_percent) {
        Ok(preview) => render_preview(&preview, &state.people),
        Err(err) => io::print_warning(err.to_string()),
    }

    let choice = io::select(
        "Split by item",
        &[
            "Toggle an assignment",
            "Expand or collapse an item",
            "Change number of people",
            "Change tip percentage",
            "Rename a person",
            "Calculate split",
            "Back",
        ],
    )?;
    match choice {
        0 => toggle_assignment(state)?,
        1 => toggle_expansion(state)?,
        2 => {
            let count = prompt_people_count()?;
            state.set_people_count(count);
        }
        3 => {
            state.tip_percent = NumberInput::parse(&io::prompt_text("Tip percentage")?).or_zero();
        }
        4 => rename_person(state)?,
        5 => return calculate(state, client),
        _ => return Ok(ScreenOutcome::Event(WizardEvent::Back)),
    }
    Ok(ScreenOutcome::Stay)
}

fn toggle_assignment(state: &mut WizardState) -> Result<(), CommandError> {
    let (Some(ledger), Some(sheet)) = (state.ledger.as_ref(), state.assignments.as_mut()) else {
        return Ok(());
    };
    let Some(item) = prompt_row(ledger, "Item number")? else {
        return Ok(());
    };

    let unit = if sheet.is_expanded(item) {
        let quantity = ledger.items()[item].quantity;
        let raw = io::prompt_text(&format!("Unit number (1-{quantity})"))?;
        match CountInput::parse(&raw) {
            CountInput::Value(unit) if unit >= 1 && unit <= quantity => Some(unit as usize - 1),
            _ => {
                io::print_warning("No such unit.");
                return Ok(());
            }
        }
    } else {
        None
    };

    let person = prompt_person(&state.people)?;
    match unit {
        Some(unit) => sheet.toggle_unit(item, unit, person),
        None => sheet.toggle_person(item, person),
    }
    Ok(())
}

fn toggle_expansion(state: &mut WizardState) -> Result<(), CommandError> {
    let (Some(ledger), Some(sheet)) = (state.ledger.as_ref(), state.assignments.as_mut()) else {
        return Ok(());
    };
    let Some(item) = prompt_row(ledger, "Item number")? else {
        return Ok(());
    };
    if !sheet.can_expand(item) {
        io::print_warning("Only items with quantity above one can be expanded.");
        return Ok(());
    }
    sheet.toggle_expanded(item);
    Ok(())
}

fn rename_person(state: &mut WizardState) -> Result<(), CommandError> {
    let person = prompt_person(&state.people)?;
    let name = io::prompt_text("New name (blank restores the default)")?;
    state.people.rename(person, &name);
    Ok(())
}

fn calculate(
    state: &mut WizardState,
    client: &BackendClient,
) -> Result<ScreenOutcome, CommandError> {
    let (Some(ledger), Some(sheet)) = (state.ledger.as_ref(), state.assignments.as_ref()) else {
        return Ok(ScreenOutcome::Event(WizardEvent::Reset));
    };
    match ItemSplitService::request(ledger, sheet, state.tip_percent) {
        Ok(request) => {
            io::print_info("Calculating split...");
            match client.split_by_item(&request) {
                Ok(mut result) => {
                    result.people_names = Some(state.people.names().to_vec());
                    Ok(ScreenOutcome::Event(WizardEvent::SplitComputed(result)))
                }
                Err(err) => {
                    io::print_error(format!(
                        "Error calculating split ({err}). Please try again."
                    ));
                    Ok(ScreenOutcome::Stay)
                }
            }
        }
        Err(err) => {
            io::print_warning(err.to_string());
            Ok(ScreenOutcome::Stay)
        }
    }
}

fn render_grid(ledger: &ItemLedger, sheet: &AssignmentSheet, people: &People) {
    println!();
    print!("{:<4} {:<24} {:>10}", "#", "Item", "Total");
    for name in people.names() {
        print!(" {:>10}", truncate(name, 10));
    }
    println!();

    for (index, item) in ledger.items().iter().enumerate() {
        let label = if item.quantity > 1 {
            format!("{} ({})", item.name, item.quantity)
        } else {
            item.name.clone()
        };
        print!(
            "{:<4} {:<24} {:>10.2}",
            index + 1,
            truncate(&label, 24),
            item.line_total()
        );
        for person in 0..people.count() {
            let mark = if sheet.is_expanded(index) {
                "-"
            } else if sheet.is_assigned(index, person) {
                "x"
            } else {
                "."
            };
            print!(" {mark:>10}");
        }
        println!();

        if sheet.is_expanded(index) {
            for unit in 0..item.quantity as usize {
                let label = format!("  - {} #{}", item.name, unit + 1);
                print!("{:<4} {:<24} {:>10.2}", "", truncate(&label, 24), item.price);
                for person in 0..people.count() {
                    let mark = if sheet.unit_assigned(index, unit, person) {
                        "x"
                    } else {
                        "."
                    };
                    print!(" {mark:>10}");
                }
                println!();
            }
        }
    }
}

fn render_preview(preview: &ItemSplitPreview, people: &People) {
    println!();
    for (index, subtotal) in preview.person_subtotals.iter().enumerate() {
        let fallback = format!("Person {}", index + 1);
        let name = people.name(index).unwrap_or(&fallback);
        println!(
            "{:<20} items {:>8.2}  total {:>8.2}",
            truncate(name, 20),
            subtotal,
            preview.person_totals[index]
        );
    }
    println!("{:<20} {:>23.2}", "Grand total", preview.total);
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

fn prompt_person(people: &People) -> Result<usize, CommandError> {
    let names: Vec<&str> = people.names().iter().map(String::as_str).collect();
    io::select("Person", &names)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}~")
    }
}
