use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest rating a customer can give.
pub const MIN_RATING: i32 = 1;
/// Highest rating a customer can give.
pub const MAX_RATING: i32 = 5;

/// Customer feedback about the service of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Human-chosen identifier such as `F001`.
    pub id: String,
    pub customer_id: Option<String>,
    pub employee_id: Option<String>,
    pub date: NaiveDate,
    /// Score between [`MIN_RATING`] and [`MAX_RATING`].
    pub rating: i32,
    pub comment: Option<String>,
}

/// Payload required to insert new feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub id: String,
    pub customer_id: Option<String>,
    pub employee_id: Option<String>,
    pub date: NaiveDate,
    pub rating: i32,
    pub comment: Option<String>,
}

impl NewFeedback {
    pub fn new(id: impl Into<String>, date: NaiveDate, rating: i32) -> Self {
        Self {
            id: id.into(),
            customer_id: None,
            employee_id: None,
            date,
            rating,
            comment: None,
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

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Patch data applied when updating feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFeedback {
    pub customer_id: Option<String>,
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl UpdateFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none()
            && self.employee_id.is_none()
            && self.date.is_none()
            && self.rating.is_none()
            && self.comment.is_none()
    }
}
