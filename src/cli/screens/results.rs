//! Results screen: render the authoritative backend breakdown.

use crate::cli::io;
use crate::cli::output;
use crate::cli::CommandError;
use crate::domain::{SplitKind, SplitResult};
use crate::wizard::{WizardEvent, WizardState};

use super::ScreenOutcome;

pub fn run(state: &WizardState) -> Result<ScreenOutcome, CommandError> {
    output::section("Bill split results");
    let Some(result) = state.result.as_ref() else {
        return Ok(ScreenOutcome::Event(WizardEvent::Reset));
    };

    match state.split_kind {
        SplitKind::Equal => render_equal(result),
        SplitKind::ByItem => render_by_item(result),
    }

    let choice = io::select(
        "What next?",
        &["Split another bill", "Back", "Quit"],
    )?;
    Ok(match choice {
        0 => ScreenOutcome::Event(WizardEvent::Reset),
        1 => ScreenOutcome::Event(WizardEvent::Back),
        _ => ScreenOutcome::Exit,
    })
}

fn render_equal(result: &SplitResult) {
    println!();
    if let Some(subtotal) = result.subtotal {
        println!("{:<24} {:>10.2}", "Subtotal", subtotal);
    }
    println!("{:<24} {:>10.2}", "Tax", result.tax);
    println!("{:<24} {:>10.2}", "Tip", result.tip);
    println!("{:<24} {:>10.2}", "Total", result.total);

    println!();
    println!("Per person");
    println!("{:<24} {:>10.2}", "  Tax", result.tax_per_person);
    println!("{:<24} {:>10.2}", "  Tip", result.tip_per_person);
    if let Some(per_person) = result.per_person {
        println!("{:<24} {:>10.2}", "  Total", per_person);
    }
}

fn render_by_item(result: &SplitResult) {
    let totals = result.person_totals.as_deref().unwrap_or_default();
    let subtotals = result.person_subtotals.as_deref().unwrap_or_default();

    for (index, total) in totals.iter().enumerate() {
        let fallback = format!("Person {}", index + 1);
        let name = result
            .people_names
            .as_ref()
            .and_then(|names| names.get(index))
            .map(String::as_str)
            .unwrap_or(&fallback);
        println!();
        println!("{name}");
        if let Some(subtotal) = subtotals.get(index) {
            println!("{:<24} {:>10.2}", "  Items", subtotal);
        }
        println!("{:<24} {:>10.2}", "  Tax", result.tax_per_person);
        println!("{:<24} {:>10.2}", "  Tip", result.tip_per_person);
        println!("{:<24} {:>10.2}", "  Total", total);
    }

    println!();
    println!("{:<24} {:>10.2}", "Grand total", result.total);
}
