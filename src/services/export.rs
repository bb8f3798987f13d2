//! CSV downloads for entity tables and reports.

use crate::domain::attendance::Attendance;
use crate::domain::customer::Customer;
use crate::domain::employee::Employee;
use crate::domain::feedback::Feedback;
use crate::domain::listing::Listing;
use crate::domain::menu_item::MenuItem;
use crate::domain::raw_material::RawMaterial;
use crate::domain::report::{
    AttendanceSummary, DailyTransactionTotal, EmployeeRating, MaterialStock,
};
use crate::domain::supplier::Supplier;
use crate::domain::transaction::Transaction;
use crate::services::{CsvExport, ServiceError, ServiceResult};

/// A row type that knows its CSV column titles and download file name.
pub trait CsvRecord {
    const FILE_NAME: &'static str;

    fn headers() -> &'static [&'static str];
    fn record(&self) -> Vec<String>;
}

/// Serialize a listing to UTF-8 CSV; an empty listing yields [`ServiceError::NoData`].
pub fn to_csv<T: CsvRecord>(listing: &Listing<T>) -> ServiceResult<CsvExport> {
    if listing.is_empty() {
        return Err(ServiceError::NoData);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(T::headers())
        .map_err(|err| ServiceError::Internal(err.to_string()))?;
    for row in listing.rows() {
        writer
            .write_record(row.record())
            .map_err(|err| ServiceError::Internal(err.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    Ok(CsvExport {
        file_name: T::FILE_NAME,
        bytes,
    })
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl CsvRecord for Employee {
    const FILE_NAME: &'static str = "daftar_karyawan.csv";

    fn headers() -> &'static [&'static str] {
        &["ID Karyawan", "Nama", "Posisi", "Fingerprint ID"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.position.to_string(),
            optional(&self.fingerprint_id),
        ]
    }
}

impl CsvRecord for Customer {
    const FILE_NAME: &'static str = "daftar_pelanggan.csv";

    fn headers() -> &'static [&'static str] {
        &["ID Pelanggan", "Nama Pelanggan", "Kontak Informasi"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.contact_info.clone(),
        ]
    }
}

impl CsvRecord for Supplier {
    const FILE_NAME: &'static str = "daftar_supplier.csv";

    fn headers() -> &'static [&'static str] {
        &["ID Supplier", "Nama Supplier", "Alamat"]
    }

    fn record(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.address.clone()]
    }
}

impl CsvRecord for RawMaterial {
    const FILE_NAME: &'static str = "daftar_bahan_baku.csv";

    fn headers() -> &'static [&'static str] {
        &[
            "ID Bahan Baku",
            "Nama Bahan",
            "Stock",
            "Satuan",
            "Harga Bahan",
            "ID Supplier",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.stock.to_string(),
            self.unit.clone(),
            self.unit_price.to_string(),
            optional(&self.supplier_id),
        ]
    }
}

impl CsvRecord for MenuItem {
    const FILE_NAME: &'static str = "daftar_menu.csv";

    fn headers() -> &'static [&'static str] {
        &["ID Menu", "Nama Menu", "Harga"]
    }

    fn record(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.price.to_string()]
    }
}

impl CsvRecord for Transaction {
    const FILE_NAME: &'static str = "daftar_transaksi.csv";

    fn headers() -> &'static [&'static str] {
        &[
            "ID Transaksi",
            "Tanggal Pembelian",
            "ID Pelanggan",
            "ID Karyawan",
            "Total Transaksi",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.to_string(),
            optional(&self.customer_id),
            optional(&self.employee_id),
            self.total.to_string(),
        ]
    }
}

impl CsvRecord for Feedback {
    const FILE_NAME: &'static str = "daftar_feedback.csv";

    fn headers() -> &'static [&'static str] {
        &[
            "ID Feedback",
            "ID Pelanggan",
            "ID Karyawan",
            "Tanggal",
            "Rating",
            "Komentar",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            optional(&self.customer_id),
            optional(&self.employee_id),
            self.date.to_string(),
            self.rating.to_string(),
            optional(&self.comment),
        ]
    }
}

impl CsvRecord for Attendance {
    const FILE_NAME: &'static str = "daftar_absensi.csv";

    fn headers() -> &'static [&'static str] {
        &["ID Absensi", "ID Karyawan", "Tanggal", "Status"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            optional(&self.employee_id),
            self.date.to_string(),
            self.status.to_string(),
        ]
    }
}

impl CsvRecord for DailyTransactionTotal {
    const FILE_NAME: &'static str = "total_transaksi_per_hari.csv";

    fn headers() -> &'static [&'static str] {
        &["Tanggal", "Total Transaksi"]
    }

    fn record(&self) -> Vec<String> {
        vec![self.date.to_string(), self.total.to_string()]
    }
}

impl CsvRecord for MaterialStock {
    const FILE_NAME: &'static str = "stok_bahan_baku.csv";

    fn headers() -> &'static [&'static str] {
        &["Nama Bahan", "Stok", "Satuan"]
    }

    fn record(&self) -> Vec<String> {
        vec![self.name.clone(), self.stock.to_string(), self.unit.clone()]
    }
}

impl CsvRecord for EmployeeRating {
    const FILE_NAME: &'static str = "feedback_per_karyawan.csv";

    fn headers() -> &'static [&'static str] {
        &["Nama Karyawan", "Rata-rata Rating"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.employee_name.clone(),
            format!("{:.2}", self.average_rating),
        ]
    }
}

impl CsvRecord for AttendanceSummary {
    const FILE_NAME: &'static str = "absensi_per_karyawan.csv";

    fn headers() -> &'static [&'static str] {
        &[
            "Nama Karyawan",
            "Total Absensi",
            "Hadir",
            "Tidak Hadir",
            "Izin",
            "Cuti",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.employee_name.clone(),
            self.total.to_string(),
            self.present.to_string(),
            self.absent.to_string(),
            self.leave.to_string(),
            self.vacation.to_string(),
        ]
    }
}
