use diesel::dsl::sum;
use diesel::prelude::*;

use crate::domain::report::{
    AttendanceSummary as DomainAttendanceSummary, DailyTransactionTotal as DomainDailyTotal,
    EmployeeRating as DomainEmployeeRating, MaterialStock as DomainMaterialStock,
};
use crate::models::report::{
    AttendanceSummary as DbAttendanceSummary, DailyTransactionTotal as DbDailyTotal,
    EmployeeRating as DbEmployeeRating, MaterialStock as DbMaterialStock,
};
use crate::repository::{DieselRepository, ReportReader, RepositoryResult};

const EMPLOYEE_RATINGS_SQL: &str = "\
    SELECT k.employee_name AS employee_name, \
           CAST(AVG(f.rating) AS REAL) AS rata_rata_rating \
    FROM feedback f \
    JOIN karyawan k ON f.karyawan_id = k.karyawan_id \
    GROUP BY k.employee_name \
    ORDER BY rata_rata_rating DESC, k.employee_name ASC";

const ATTENDANCE_SUMMARY_SQL: &str = "\
    SELECT k.employee_name AS employee_name, \
           COUNT(a.absensi_id) AS total_absensi, \
           COUNT(CASE WHEN a.status = 'Hadir' THEN 1 END) AS hadir, \
           COUNT(CASE WHEN a.status = 'Tidak Hadir' THEN 1 END) AS tidak_hadir, \
           COUNT(CASE WHEN a.status = 'Izin' THEN 1 END) AS izin, \
           COUNT(CASE WHEN a.status = 'Cuti' THEN 1 END) AS cuti \
    FROM absensi a \
    JOIN karyawan k ON a.karyawan_id = k.karyawan_id \
    GROUP BY k.employee_name \
    ORDER BY k.employee_name ASC";

impl ReportReader for DieselRepository {
    fn daily_transaction_totals(&self) -> RepositoryResult<Vec<DomainDailyTotal>> {
        use crate::schema::transaksi;

        let mut conn = self.conn()?;
        let rows = transaksi::table
            .group_by(transaksi::tanggal_pembelian)
            .select((
                transaksi::tanggal_pembelian,
                sum(transaksi::total_transaksi),
            ))
            .order(transaksi::tanggal_pembelian.desc())
            .load::<DbDailyTotal>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn material_stock(&self) -> RepositoryResult<Vec<DomainMaterialStock>> {
        use crate::schema::bahan_baku;

        let mut conn = self.conn()?;
        let rows = bahan_baku::table
            .select(DbMaterialStock::as_select())
            .order(bahan_baku::nama_bahan.asc())
            .load::<DbMaterialStock>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn employee_ratings(&self) -> RepositoryResult<Vec<DomainEmployeeRating>> {
        let mut conn = self.conn()?;
        let rows = diesel::sql_query(EMPLOYEE_RATINGS_SQL).load::<DbEmployeeRating>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn attendance_summary(&self) -> RepositoryResult<Vec<DomainAttendanceSummary>> {
        let mut conn = self.conn()?;
        let rows =
            diesel::sql_query(ATTENDANCE_SUMMARY_SQL).load::<DbAttendanceSummary>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
