use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::UnknownVariant;

/// The fixed set of aggregate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    DailyTransactionTotals,
    MaterialStock,
    EmployeeRatings,
    AttendanceSummary,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::DailyTransactionTotals,
        ReportKind::MaterialStock,
        ReportKind::EmployeeRatings,
        ReportKind::AttendanceSummary,
    ];

    /// URL segment identifying the report.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::DailyTransactionTotals => "total-transaksi-per-hari",
            ReportKind::MaterialStock => "stok-bahan-baku",
            ReportKind::EmployeeRatings => "feedback-per-karyawan",
            ReportKind::AttendanceSummary => "absensi-per-karyawan",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::DailyTransactionTotals => "Total Transaksi per Hari",
            ReportKind::MaterialStock => "Stok Bahan Baku",
            ReportKind::EmployeeRatings => "Feedback per Karyawan",
            ReportKind::AttendanceSummary => "Absensi per Karyawan",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReportKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "report",
                value: value.to_string(),
            })
    }
}

/// Sum of all transactions recorded on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTransactionTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Current stock of one raw material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialStock {
    pub name: String,
    pub stock: i32,
    pub unit: String,
}

/// Average customer rating received by one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRating {
    pub employee_name: String,
    pub average_rating: f64,
}

/// Attendance counts per status for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub employee_name: String,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub leave: i64,
    pub vacation: i64,
}
