use serde::Serialize;

use crate::domain::BillItem;
use crate::ledger::ItemLedger;

use super::{ServiceError, ServiceResult};

/// Fewest people an equal split can be finalized with.
pub const MIN_PEOPLE: usize = 2;

/// Tip owed on top of the taxed subtotal.
///
/// Shared by the live preview and the request body so the two can never
/// disagree; the backend applies the same formula to produce the
/// authoritative result.
pub fn tip_amount(subtotal: f64, tax: f64, tip_percent: f64) -> f64 {
    (subtotal + tax) * (tip_percent / 100.0)
}

/// Locally computed equal-split figures shown before the backend confirms.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualSplitPreview {
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
    pub tax_per_person: f64,
    pub tip_per_person: f64,
}

/// JSON body for the backend `/split-equal` call.
#[derive(Debug, Clone, Serialize)]
pub struct EqualSplitRequest {
    pub items: Vec<BillItem>,
    pub tax: f64,
    pub tip: f64,
    pub people_count: usize,
    pub split_type: &'static str,
}

pub struct EqualSplitService;

impl EqualSplitService {
    /// Computes the non-authoritative preview for the given ledger.
    ///
    /// Previews render for any nonzero person count; only finalizing
    /// enforces [`MIN_PEOPLE`].
    pub fn preview(
        ledger: &ItemLedger,
        tip_percent: f64,
        people: usize,
    ) -> ServiceResult<EqualSplitPreview> {
        if people == 0 {
            return Err(ServiceError::Invalid(
                "cannot preview a split for zero people".into(),
            ));
        }
        let subtotal = ledger.subtotal();
        let tax = ledger.tax();
        let tip = tip_amount(subtotal, tax, tip_percent);
        let total = subtotal + tax + tip;
        let people = people as f64;
        Ok(EqualSplitPreview {
            subtotal,
            tax,
            tip,
            total,
            per_person: total / people,
            tax_per_person: tax / people,
            tip_per_person: tip / people,
        })
    }

    /// Builds the authoritative-computation request body; refuses fewer
    /// than [`MIN_PEOPLE`] people.
    pub fn request(
        ledger: &ItemLedger,
        tip_percent: f64,
        people: usize,
    ) -> ServiceResult<EqualSplitRequest> {
        if people < MIN_PEOPLE {
            return Err(ServiceError::NotEnoughPeople {
                minimum: MIN_PEOPLE,
                given: people,
            });
        }
        let tip = tip_amount(ledger.subtotal(), ledger.tax(), tip_percent);
        Ok(EqualSplitRequest {
            items: ledger.items().to_vec(),
            tax: ledger.tax(),
            tip,
            people_count: people,
            split_type: "equal",
        })
    }
}
