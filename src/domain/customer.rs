use serde::{Deserialize, Serialize};

/// Domain representation of a restaurant customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Human-chosen identifier such as `P001`.
    pub id: String,
    /// Display name of the customer.
    pub name: String,
    /// Free-form contact details, usually an email address or phone number.
    pub contact_info: String,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub id: String,
    pub name: String,
    pub contact_info: String,
}

impl NewCustomer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }
}

/// Patch data applied when updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub contact_info: Option<String>,
}

impl UpdateCustomer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn contact_info(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = Some(contact_info.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact_info.is_none()
    }
}
