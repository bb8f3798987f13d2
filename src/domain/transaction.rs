use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed sale recorded at the cashier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Human-chosen identifier such as `T001`.
    pub id: String,
    /// Day of purchase.
    pub date: NaiveDate,
    /// Customer who paid, when known.
    pub customer_id: Option<String>,
    /// Employee who handled the sale, when known.
    pub employee_id: Option<String>,
    /// Amount paid, never negative.
    pub total: f64,
}

/// Payload required to insert a new transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub id: String,
    pub date: NaiveDate,
    pub customer_id: Option<String>,
    pub employee_id: Option<String>,
    pub total: f64,
}

impl NewTransaction {
    pub fn new(id: impl Into<String>, date: NaiveDate, total: f64) -> Self {
        Self {
            id: id.into(),
            date,
            customer_id: None,
            employee_id: None,
            total,
        }
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }
}

/// Patch data applied when updating a transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTransaction {
    pub date: Option<NaiveDate>,
    pub customer_id: Option<String>,
    pub employee_id: Option<String>,
    pub total: Option<f64>,
}

impl UpdateTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.customer_id.is_none()
            && self.employee_id.is_none()
            && self.total.is_none()
    }
}
