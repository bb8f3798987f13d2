use serde::Serialize;

use crate::repository::{
    AttendanceReader, CustomerReader, EmployeeReader, FeedbackReader, MenuItemReader,
    RawMaterialReader, SupplierReader, TransactionReader,
};
use crate::services::ServiceResult;

/// Row count of one managed table, linked from the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub rows: usize,
}

/// Data required to render the home page.
#[derive(Debug, Serialize)]
pub struct HomePageData {
    pub sections: Vec<SectionSummary>,
}

/// Counts the records of every managed table for the home page overview.
pub fn load_home_page<R>(repo: &R) -> ServiceResult<HomePageData>
where
    R: EmployeeReader
        + CustomerReader
        + SupplierReader
        + RawMaterialReader
        + MenuItemReader
        + TransactionReader
        + FeedbackReader
        + AttendanceReader
        + ?Sized,
{
    let section = |slug, title, rows| SectionSummary { slug, title, rows };

    let sections = vec![
        section("karyawan", "Karyawan", repo.list_employees()?.len()),
        section("pelanggan", "Pelanggan", repo.list_customers()?.len()),
        section("supplier", "Supplier", repo.list_suppliers()?.len()),
        section("bahan-baku", "Bahan Baku", repo.list_raw_materials()?.len()),
        section("menu", "Menu", repo.list_menu_items()?.len()),
        section("transaksi", "Transaksi", repo.list_transactions()?.len()),
        section("feedback", "Feedback", repo.list_feedback()?.len()),
        section("absensi", "Absensi", repo.list_attendance()?.len()),
    ];

    Ok(HomePageData { sections })
}
