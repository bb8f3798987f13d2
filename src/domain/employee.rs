use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::UnknownVariant;

/// Role an employee fills in the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Waiter,
    Cashier,
    Chef,
    Manager,
    Operational,
}

impl Position {
    /// Every position, in the order offered by the employee form.
    pub const ALL: [Position; 5] = [
        Position::Waiter,
        Position::Cashier,
        Position::Chef,
        Position::Manager,
        Position::Operational,
    ];

    /// Value stored in the `position` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Waiter => "Waiter",
            Position::Cashier => "Cashier",
            Position::Chef => "Chef",
            Position::Manager => "Manager",
            Position::Operational => "Operational",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "position",
                value: value.to_string(),
            })
    }
}

/// Domain representation of a restaurant employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Human-chosen identifier such as `K001`.
    pub id: String,
    /// Full name of the employee.
    pub name: String,
    /// Role held by the employee.
    pub position: Position,
    /// Optional tag linking the employee to the fingerprint reader.
    pub fingerprint_id: Option<String>,
}

/// Payload required to insert a new employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub fingerprint_id: Option<String>,
}

impl NewEmployee {
    /// Build an employee payload without a fingerprint tag.
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            fingerprint_id: None,
        }
    }

    /// Attach a fingerprint tag to the payload.
    pub fn with_fingerprint_id(mut self, fingerprint_id: impl Into<String>) -> Self {
        self.fingerprint_id = Some(fingerprint_id.into());
        self
    }
}

/// Patch data applied when updating an employee. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub position: Option<Position>,
    pub fingerprint_id: Option<String>,
}

impl UpdateEmployee {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn fingerprint_id(mut self, fingerprint_id: impl Into<String>) -> Self {
        self.fingerprint_id = Some(fingerprint_id.into());
        self
    }

    /// `true` when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.fingerprint_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trips_through_column_value() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>(), Ok(position));
        }
    }

    #[test]
    fn unknown_position_is_rejected() {
        let err = "Janitor".parse::<Position>().expect_err("should fail");
        assert_eq!(err.kind, "position");
        assert_eq!(err.value, "Janitor");
    }

    #[test]
    fn update_tracks_emptiness() {
        assert!(UpdateEmployee::new().is_empty());
        assert!(!UpdateEmployee::new().position(Position::Chef).is_empty());
    }
}
