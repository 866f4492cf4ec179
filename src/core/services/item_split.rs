use serde::Serialize;

use crate::domain::BillItem;
use crate::ledger::{AssignmentSheet, ItemLedger};

use super::equal_split::tip_amount;
use super::{ServiceError, ServiceResult};

/// Locally computed by-item figures shown before the backend confirms.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSplitPreview {
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
    pub tax_per_person: f64,
    pub tip_per_person: f64,
    pub person_subtotals: Vec<f64>,
    pub person_totals: Vec<f64>,
}

/// JSON body for the backend `/split-by-item` call.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSplitRequest {
    pub items: Vec<BillItem>,
    pub tax: f64,
    pub tip: f64,
    pub assignments: Vec<Vec<u32>>,
}

pub struct ItemSplitService;

impl ItemSplitService {
    /// Computes per-person figures from the effective assignment matrix.
    ///
    /// Each item's line total is divided among its assignees in proportion
    /// to their effective units, so over- and under-assignment normalize
    /// away. Tax and tip are divided evenly per person, matching the
    /// backend's scalar `tax_per_person`/`tip_per_person` contract.
    pub fn preview(
        ledger: &ItemLedger,
        sheet: &AssignmentSheet,
        tip_percent: f64,
    ) -> ServiceResult<ItemSplitPreview> {
        if sheet.has_unassigned_items(ledger.items()) {
            return Err(ServiceError::UnassignedItems);
        }
        let people = sheet.people_count();
        if people == 0 {
            return Err(ServiceError::Invalid(
                "cannot preview a split for zero people".into(),
            ));
        }

        let subtotal = ledger.subtotal();
        let tax = ledger.tax();
        let tip = tip_amount(subtotal, tax, tip_percent);
        let matrix = sheet.effective_units(ledger.items());

        let mut person_subtotals = vec![0.0; people];
        for (item, row) in ledger.items().iter().zip(&matrix) {
            let assigned: u32 = row.iter().sum();
            if assigned == 0 {
                continue;
            }
            let unit_share = item.line_total() / f64::from(assigned);
            for (person, units) in row.iter().enumerate() {
                if *units > 0 {
                    person_subtotals[person] += unit_share * f64::from(*units);
                }
            }
        }

        let tax_per_person = tax / people as f64;
        let tip_per_person = tip / people as f64;
        let person_totals: Vec<f64> = person_subtotals
            .iter()
            .map(|share| share + tax_per_person + tip_per_person)
            .collect();
        let total = person_totals.iter().sum();

        Ok(ItemSplitPreview {
            subtotal,
            tax,
            tip,
            total,
            tax_per_person,
            tip_per_person,
            person_subtotals,
            person_totals,
        })
    }

    /// Builds the authoritative-computation request body after running the
    /// local unassigned-item gate.
    pub fn request(
        ledger: &ItemLedger,
        sheet: &AssignmentSheet,
        tip_percent: f64,
    ) -> ServiceResult<ItemSplitRequest> {
        if sheet.has_unassigned_items(ledger.items()) {
            return Err(ServiceError::UnassignedItems);
        }
        Ok(ItemSplitRequest {
            items: ledger.items().to_vec(),
            tax: ledger.tax(),
            tip: tip_amount(ledger.subtotal(), ledger.tax(), tip_percent),
            assignments: sheet.effective_units(ledger.items()),
        })
    }
}
