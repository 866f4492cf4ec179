use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::BillItem;

/// The bill as it stood right after parsing or manual entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct OriginalBill {
    items: Vec<BillItem>,
    tax: f64,
}

/// The editable working set of bill items plus the tax amount.
///
/// A snapshot of the initial contents is captured at construction and backs
/// [`ItemLedger::reset_to_original`]; it is never updated afterward, no
/// matter how the working set is edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLedger {
    items: Vec<BillItem>,
    tax: f64,
    original: OriginalBill,
}

impl ItemLedger {
    /// Builds the ledger from freshly parsed or manually entered items,
    /// capturing the reset snapshot.
    pub fn new(items: Vec<BillItem>, tax: f64) -> Self {
        let original = OriginalBill {
            items: items.clone(),
            tax,
        };
        Self {
            items,
            tax,
            original,
        }
    }

    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tax(&self) -> f64 {
        self.tax
    }

    pub fn set_tax(&mut self, tax: f64) {
        self.tax = tax;
    }

    /// Appends an empty row for the user to fill in.
    pub fn add_item(&mut self) {
        self.items.push(BillItem::blank());
    }

    pub fn update_name(&mut self, index: usize, name: &str) {
        match self.items.get_mut(index) {
            Some(item) => item.name = name.to_string(),
            None => debug!(index, "ignored name edit past the end of the ledger"),
        }
    }

    pub fn update_price(&mut self, index: usize, price: f64) {
        match self.items.get_mut(index) {
            Some(item) => item.price = price,
            None => debug!(index, "ignored price edit past the end of the ledger"),
        }
    }

    pub fn update_quantity(&mut self, index: usize, quantity: u32) {
        match self.items.get_mut(index) {
            Some(item) => item.quantity = quantity,
            None => debug!(index, "ignored quantity edit past the end of the ledger"),
        }
    }

    /// Drops the row at `index`; later rows shift down.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        } else {
            debug!(index, "ignored removal past the end of the ledger");
        }
    }

    /// Restores items and tax to the snapshot captured at construction.
    pub fn reset_to_original(&mut self) {
        self.items = self.original.items.clone();
        self.tax = self.original.tax;
    }

    /// Σ price × quantity over all rows, recomputed on every call.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(BillItem::line_total).sum()
    }

    /// The wizard may advance to split selection once at least one row
    /// exists and every row is named and priced above zero.
    pub fn is_ready_for_split(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(BillItem::is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> ItemLedger {
        ItemLedger::new(
            vec![
                BillItem::new("Burger", 10.0, 2),
                BillItem::new("Soda", 2.5, 1),
            ],
            1.5,
        )
    }

    #[test]
    fn subtotal_sums_line_totals() {
        assert_eq!(sample_ledger().subtotal(), 22.5);
    }

    #[test]
    fn add_item_appends_a_blank_row() {
        let mut ledger = sample_ledger();
        ledger.add_item();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.items()[2], BillItem::blank());
        assert!(!ledger.is_ready_for_split());
    }

    #[test]
    fn remove_item_shifts_later_rows_down() {
        let mut ledger = sample_ledger();
        ledger.remove_item(0);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0].name, "Soda");
        assert_eq!(ledger.items()[0].price, 2.5);
    }

    #[test]
    fn out_of_bounds_edits_are_no_ops() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();
        ledger.update_name(9, "Ghost");
        ledger.update_price(9, 1.0);
        ledger.update_quantity(9, 1);
        ledger.remove_item(9);
        assert_eq!(ledger, before);
    }

    #[test]
    fn reset_restores_the_construction_snapshot() {
        let mut ledger = sample_ledger();
        ledger.update_name(0, "Cheeseburger");
        ledger.update_price(1, 9.99);
        ledger.set_tax(4.0);
        ledger.add_item();
        ledger.remove_item(1);
        ledger.reset_to_original();

        assert_eq!(ledger, sample_ledger());
    }

    #[test]
    fn readiness_requires_names_prices_and_rows() {
        let mut ledger = sample_ledger();
        assert!(ledger.is_ready_for_split());

        ledger.update_price(0, 0.0);
        assert!(!ledger.is_ready_for_split());

        ledger.reset_to_original();
        ledger.update_name(1, "");
        assert!(!ledger.is_ready_for_split());

        assert!(!ItemLedger::new(Vec::new(), 0.0).is_ready_for_split());
    }
}
