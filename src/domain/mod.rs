pub mod attendance;
pub mod customer;
pub mod employee;
pub mod feedback;
pub mod listing;
pub mod menu_item;
pub mod raw_material;
pub mod report;
pub mod supplier;
pub mod transaction;

use thiserror::Error;

/// Raised when a stored or submitted enum value does not match any variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
