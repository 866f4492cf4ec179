use serde::{Deserialize, Serialize};

/// A single line on the bill: a name, a unit price, and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl BillItem {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Empty row appended by the items editor for the user to fill in.
    pub fn blank() -> Self {
        Self::new("", 0.0, 1)
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// A row may proceed to splitting once it is named and priced above zero.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.price > 0.0
    }
}
