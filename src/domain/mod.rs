pub mod input;
pub mod item;
pub mod people;
pub mod split;

pub use input::{CountInput, NumberInput};
pub use item::BillItem;
pub use people::People;
pub use split::{SplitKind, SplitResult};
