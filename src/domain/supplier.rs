use serde::{Deserialize, Serialize};

/// Domain representation of an ingredient supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Human-chosen identifier such as `S001`.
    pub id: String,
    pub name: String,
    /// Postal address of the supplier.
    pub address: String,
}

/// Payload required to insert a new supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub id: String,
    pub name: String,
    pub address: String,
}

impl NewSupplier {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Patch data applied when updating a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSupplier {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl UpdateSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }
}
