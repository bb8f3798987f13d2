use serde::{Deserialize, Serialize};

/// Dish or drink offered on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Human-chosen identifier such as `M001`.
    pub id: String,
    pub name: String,
    /// Selling price, never negative.
    pub price: f64,
}

/// Payload required to insert a new menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl NewMenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Patch data applied when updating a menu item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateMenuItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}
