use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::UnknownVariant;

/// Attendance outcome recorded by the fingerprint reader.
///
/// Serialized and stored with the labels used on the shop floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "Hadir")]
    Present,
    #[serde(rename = "Tidak Hadir")]
    Absent,
    #[serde(rename = "Izin")]
    Leave,
    #[serde(rename = "Cuti")]
    Vacation,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Leave,
        AttendanceStatus::Vacation,
    ];

    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Hadir",
            AttendanceStatus::Absent => "Tidak Hadir",
            AttendanceStatus::Leave => "Izin",
            AttendanceStatus::Vacation => "Cuti",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "attendance status",
                value: value.to_string(),
            })
    }
}

/// One attendance entry for an employee on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Human-chosen identifier such as `A001`.
    pub id: String,
    pub employee_id: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Payload required to insert a new attendance entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub id: String,
    pub employee_id: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl NewAttendance {
    pub fn new(id: impl Into<String>, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id: id.into(),
            employee_id: None,
            date,
            status,
        }
    }

    pub fn with_employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }
}

/// Patch data applied when updating an attendance entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAttendance {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

impl UpdateAttendance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none() && self.date.is_none() && self.status.is_none()
    }
}
