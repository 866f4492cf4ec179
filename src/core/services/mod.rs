pub mod equal_split;
pub mod item_split;

pub use equal_split::{EqualSplitPreview, EqualSplitRequest, EqualSplitService, MIN_PEOPLE};
pub use item_split::{ItemSplitPreview, ItemSplitRequest, ItemSplitService};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("a split needs at least {minimum} people, got {given}")]
    NotEnoughPeople { minimum: usize, given: usize },
    #[error("every item needs at least one person assigned")]
    UnassignedItems,
    #[error("{0}")]
    Invalid(String),
}
