use serde::{Deserialize, Serialize};

/// Units offered by the raw material form.
pub const UNITS: [&str; 5] = ["kg", "liter", "butir", "pack", "pcs"];

/// Domain representation of a raw material kept in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// Human-chosen identifier such as `B001`.
    pub id: String,
    pub name: String,
    /// Quantity on hand, never negative.
    pub stock: i32,
    /// Unit the stock is counted in (`kg`, `liter`, ...).
    pub unit: String,
    /// Purchase price per unit, never negative.
    pub unit_price: f64,
    /// Supplier delivering the material, if known.
    pub supplier_id: Option<String>,
}

/// Payload required to insert a new raw material.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRawMaterial {
    pub id: String,
    pub name: String,
    pub stock: i32,
    pub unit: String,
    pub unit_price: f64,
    pub supplier_id: Option<String>,
}

impl NewRawMaterial {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stock: i32,
        unit: impl Into<String>,
        unit_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stock,
            unit: unit.into(),
            unit_price,
            supplier_id: None,
        }
    }

    pub fn with_supplier_id(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }
}

/// Patch data applied when updating a raw material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRawMaterial {
    pub name: Option<String>,
    pub stock: Option<i32>,
    pub unit: Option<String>,
    pub unit_price: Option<f64>,
    pub supplier_id: Option<String>,
}

impl UpdateRawMaterial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    pub fn supplier_id(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.stock.is_none()
            && self.unit.is_none()
            && self.unit_price.is_none()
            && self.supplier_id.is_none()
    }
}
