use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Text};

use crate::domain::report::{
    AttendanceSummary as DomainAttendanceSummary, DailyTransactionTotal as DomainDailyTotal,
    EmployeeRating as DomainEmployeeRating, MaterialStock as DomainMaterialStock,
};

#[derive(Debug, Clone, Queryable)]
pub struct DailyTransactionTotal {
    pub tanggal_pembelian: NaiveDate,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bahan_baku)]
pub struct MaterialStock {
    pub nama_bahan: String,
    pub stock: i32,
    pub satuan: String,
}

#[derive(Debug, Clone, QueryableByName)]
pub struct EmployeeRating {
    #[diesel(sql_type = Text)]
    pub employee_name: String,
    #[diesel(sql_type = Double)]
    pub rata_rata_rating: f64,
}

#[derive(Debug, Clone, QueryableByName)]
pub struct AttendanceSummary {
    #[diesel(sql_type = Text)]
    pub employee_name: String,
    #[diesel(sql_type = BigInt)]
    pub total_absensi: i64,
    #[diesel(sql_type = BigInt)]
    pub hadir: i64,
    #[diesel(sql_type = BigInt)]
    pub tidak_hadir: i64,
    #[diesel(sql_type = BigInt)]
    pub izin: i64,
    #[diesel(sql_type = BigInt)]
    pub cuti: i64,
}

impl From<DailyTransactionTotal> for DomainDailyTotal {
    fn from(value: DailyTransactionTotal) -> Self {
        Self {
            date: value.tanggal_pembelian,
            total: value.total.unwrap_or_default(),
        }
    }
}

impl From<MaterialStock> for DomainMaterialStock {
    fn from(value: MaterialStock) -> Self {
        Self {
            name: value.nama_bahan,
            stock: value.stock,
            unit: value.satuan,
        }
    }
}

impl From<EmployeeRating> for DomainEmployeeRating {
    fn from(value: EmployeeRating) -> Self {
        Self {
            employee_name: value.employee_name,
            average_rating: value.rata_rata_rating,
        }
    }
}

impl From<AttendanceSummary> for DomainAttendanceSummary {
    fn from(value: AttendanceSummary) -> Self {
        Self {
            employee_name: value.employee_name,
            total: value.total_absensi,
            present: value.hadir,
            absent: value.tidak_hadir,
            leave: value.izin,
            vacation: value.cuti,
        }
    }
}
