use chrono::NaiveDate;

use restorify::domain::report::ReportKind;
use restorify::repository::{DieselRepository, ReportReader};
use restorify::services::ServiceError;
use restorify::services::reports::{export_report, load_report};

mod common;

#[test]
fn test_employee_ratings_on_sample_data() {
    let test_db = common::TestDb::seeded("test_employee_ratings_on_sample_data.db");
    let repo = DieselRepository::new(test_db.pool());

    let ratings = repo
        .employee_ratings()
        .unwrap()
        .into_iter()
        .map(|row| (row.employee_name, row.average_rating))
        .collect::<Vec<_>>();

    assert_eq!(
        ratings,
        vec![
            ("Ahmad Fauzi".to_string(), 5.0),
            ("Budi Santoso".to_string(), 5.0),
            ("Dewi Lestari".to_string(), 4.0),
            ("Siti Aminah".to_string(), 4.0),
            ("Rina Marlina".to_string(), 3.0),
        ]
    );
}

#[test]
fn test_daily_totals_newest_first() {
    let test_db = common::TestDb::seeded("test_daily_totals_newest_first.db");
    let repo = DieselRepository::new(test_db.pool());

    let totals = repo.daily_transaction_totals().unwrap();

    assert_eq!(totals.len(), 5);
    assert_eq!(totals[0].date, NaiveDate::from_ymd_opt(2024, 4, 5).unwrap());
    assert_eq!(totals[0].total, 45000.0);
    assert_eq!(totals[4].date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
}

#[test]
fn test_material_stock_sorted_by_name() {
    let test_db = common::TestDb::seeded("test_material_stock_sorted_by_name.db");
    let repo = DieselRepository::new(test_db.pool());

    let names = repo
        .material_stock()
        .unwrap()
        .into_iter()
        .map(|row| row.name)
        .collect::<Vec<_>>();

    assert_eq!(
        names,
        vec!["Beras", "Daging Sapi", "Gula", "Minyak Goreng", "Telur"]
    );
}

#[test]
fn test_attendance_summary_counts_statuses() {
    let test_db = common::TestDb::seeded("test_attendance_summary_counts_statuses.db");
    let repo = DieselRepository::new(test_db.pool());

    let summary = repo.attendance_summary().unwrap();

    assert_eq!(summary.len(), 5);
    assert_eq!(summary[0].employee_name, "Ahmad Fauzi");
    assert_eq!(summary[0].total, 1);
    assert_eq!(summary[0].present, 1);
    assert_eq!(summary[0].absent, 0);
}

#[test]
fn test_report_export_on_empty_database() {
    let test_db = common::TestDb::new("test_report_export_on_empty_database.db");
    let repo = DieselRepository::new(test_db.pool());

    let table = load_report(&repo, ReportKind::MaterialStock).unwrap();
    assert!(table.rows.is_empty());

    let err = export_report(&repo, ReportKind::MaterialStock)
        .expect_err("expected empty export to fail");
    assert!(matches!(err, ServiceError::NoData));
}

#[test]
fn test_report_export_writes_csv() {
    let test_db = common::TestDb::seeded("test_report_export_writes_csv.db");
    let repo = DieselRepository::new(test_db.pool());

    let export = export_report(&repo, ReportKind::DailyTransactionTotals).unwrap();
    let text = String::from_utf8(export.bytes).unwrap();

    assert_eq!(export.file_name, "total_transaksi_per_hari.csv");
    assert!(text.starts_with("Tanggal,Total Transaksi\n2024-04-05,"));
}
