use serde::{Deserialize, Serialize};

/// The strategy used to apportion the bill among people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    Equal,
    ByItem,
}

/// Authoritative split breakdown returned by the backend.
///
/// Equal splits populate `subtotal` and `per_person`; by-item splits
/// populate the per-person vectors. The record is stored wholesale and
/// replaced on recalculation, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub tip: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_person: Option<f64>,
    pub tax_per_person: f64,
    pub tip_per_person: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_subtotals: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_totals: Option<Vec<f64>>,
    /// Attached client-side after computation; the backend never sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_names: Option<Vec<String>>,
}
