use serde::Serialize;

use crate::domain::listing::Listing;
use crate::domain::report::{
    AttendanceSummary, DailyTransactionTotal, EmployeeRating, MaterialStock, ReportKind,
};
use crate::repository::ReportReader;
use crate::services::export::{CsvRecord, to_csv};
use crate::services::{CsvExport, ServiceError, ServiceResult};

/// A report rendered as plain text cells, ready for the generic report template.
#[derive(Debug, Serialize)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub slug: &'static str,
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Listing<Vec<String>>,
}

impl ReportTable {
    fn build<T: CsvRecord>(kind: ReportKind, listing: &Listing<T>) -> Self {
        let rows = listing.rows().iter().map(CsvRecord::record).collect::<Vec<_>>();
        Self {
            kind,
            slug: kind.slug(),
            title: kind.title(),
            headers: T::headers(),
            rows: rows.into(),
        }
    }
}

/// Entry of the reports index.
#[derive(Debug, Serialize)]
pub struct ReportLink {
    pub slug: &'static str,
    pub title: &'static str,
}

pub fn report_links() -> Vec<ReportLink> {
    ReportKind::ALL
        .into_iter()
        .map(|kind| ReportLink {
            slug: kind.slug(),
            title: kind.title(),
        })
        .collect()
}

/// Resolves a report slug from the URL.
pub fn parse_report_kind(slug: &str) -> ServiceResult<ReportKind> {
    slug.parse::<ReportKind>()
        .map_err(|_| ServiceError::NotFound)
}

pub fn daily_transaction_totals<R>(repo: &R) -> ServiceResult<Listing<DailyTransactionTotal>>
where
    R: ReportReader + ?Sized,
{
    Ok(repo.daily_transaction_totals()?.into())
}

pub fn material_stock<R>(repo: &R) -> ServiceResult<Listing<MaterialStock>>
where
    R: ReportReader + ?Sized,
{
    Ok(repo.material_stock()?.into())
}

pub fn employee_ratings<R>(repo: &R) -> ServiceResult<Listing<EmployeeRating>>
where
    R: ReportReader + ?Sized,
{
    Ok(repo.employee_ratings()?.into())
}

pub fn attendance_summary<R>(repo: &R) -> ServiceResult<Listing<AttendanceSummary>>
where
    R: ReportReader + ?Sized,
{
    Ok(repo.attendance_summary()?.into())
}

/// Runs the report and flattens it into displayable cells.
pub fn load_report<R>(repo: &R, kind: ReportKind) -> ServiceResult<ReportTable>
where
    R: ReportReader + ?Sized,
{
    let table = match kind {
        ReportKind::DailyTransactionTotals => {
            ReportTable::build(kind, &daily_transaction_totals(repo)?)
        }
        ReportKind::MaterialStock => ReportTable::build(kind, &material_stock(repo)?),
        ReportKind::EmployeeRatings => ReportTable::build(kind, &employee_ratings(repo)?),
        ReportKind::AttendanceSummary => ReportTable::build(kind, &attendance_summary(repo)?),
    };
    Ok(table)
}

/// Runs the report and returns its typed rows as JSON.
pub fn report_json<R>(repo: &R, kind: ReportKind) -> ServiceResult<serde_json::Value>
where
    R: ReportReader + ?Sized,
{
    let value = match kind {
        ReportKind::DailyTransactionTotals => serde_json::to_value(daily_transaction_totals(repo)?),
        ReportKind::MaterialStock => serde_json::to_value(material_stock(repo)?),
        ReportKind::EmployeeRatings => serde_json::to_value(employee_ratings(repo)?),
        ReportKind::AttendanceSummary => serde_json::to_value(attendance_summary(repo)?),
    };
    value.map_err(|err| ServiceError::Internal(err.to_string()))
}

/// Builds the CSV download of a report.
pub fn export_report<R>(repo: &R, kind: ReportKind) -> ServiceResult<CsvExport>
where
    R: ReportReader + ?Sized,
{
    match kind {
        ReportKind::DailyTransactionTotals => to_csv(&daily_transaction_totals(repo)?),
        ReportKind::MaterialStock => to_csv(&material_stock(repo)?),
        ReportKind::EmployeeRatings => to_csv(&employee_ratings(repo)?),
        ReportKind::AttendanceSummary => to_csv(&attendance_summary(repo)?),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::repository::mock::MockReportReader;

    #[test]
    fn unknown_slug_is_not_found() {
        assert!(matches!(
            parse_report_kind("laba-rugi"),
            Err(ServiceError::NotFound)
        ));
        assert_eq!(
            parse_report_kind("stok-bahan-baku").ok(),
            Some(ReportKind::MaterialStock)
        );
    }

    #[test]
    fn ratings_table_formats_averages() {
        let mut repo = MockReportReader::new();
        repo.expect_employee_ratings().times(1).returning(|| {
            Ok(vec![
                EmployeeRating {
                    employee_name: "Ahmad Fauzi".to_string(),
                    average_rating: 5.0,
                },
                EmployeeRating {
                    employee_name: "Rina Marlina".to_string(),
                    average_rating: 3.0,
                },
            ])
        });

        let table = load_report(&repo, ReportKind::EmployeeRatings).expect("expected success");

        assert_eq!(table.headers, &["Nama Karyawan", "Rata-rata Rating"]);
        assert_eq!(
            table.rows.rows()[0],
            vec!["Ahmad Fauzi".to_string(), "5.00".to_string()]
        );
        assert_eq!(table.title, "Feedback per Karyawan");
    }

    #[test]
    fn empty_report_renders_no_data_and_refuses_export() {
        let mut repo = MockReportReader::new();
        repo.expect_attendance_summary()
            .times(2)
            .returning(|| Ok(Vec::new()));

        let table = load_report(&repo, ReportKind::AttendanceSummary).expect("expected success");
        assert!(table.rows.is_empty());

        assert!(matches!(
            export_report(&repo, ReportKind::AttendanceSummary),
            Err(ServiceError::NoData)
        ));
    }

    #[test]
    fn daily_totals_serialize_as_rows() {
        let mut repo = MockReportReader::new();
        repo.expect_daily_transaction_totals().times(1).returning(|| {
            Ok(vec![DailyTransactionTotal {
                date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap_or_default(),
                total: 45000.0,
            }])
        });

        let value =
            report_json(&repo, ReportKind::DailyTransactionTotals).expect("expected success");

        assert_eq!(
            value,
            json!({"kind": "rows", "rows": [{"date": "2024-04-05", "total": 45000.0}]})
        );
    }
}
