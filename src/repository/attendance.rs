use diesel::prelude::*;

use crate::domain::attendance::{
    Attendance as DomainAttendance, NewAttendance as DomainNewAttendance,
    UpdateAttendance as DomainUpdateAttendance,
};
use crate::models::attendance::{
    Attendance as DbAttendance, NewAttendance as DbNewAttendance,
    UpdateAttendance as DbUpdateAttendance,
};
use crate::repository::{
    AttendanceReader, AttendanceWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl AttendanceReader for DieselRepository {
    fn get_attendance_by_id(&self, id: &str) -> RepositoryResult<Option<DomainAttendance>> {
        use crate::schema::absensi;

        let mut conn = self.conn()?;
        let entry = absensi::table
            .find(id)
            .first::<DbAttendance>(&mut conn)
            .optional()?;

        entry
            .map(DomainAttendance::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_attendance(&self) -> RepositoryResult<Vec<DomainAttendance>> {
        use crate::schema::absensi;

        let mut conn = self.conn()?;
        let rows = absensi::table
            .order(absensi::absensi_id.asc())
            .load::<DbAttendance>(&mut conn)?;

        rows.into_iter()
            .map(|row| DomainAttendance::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl AttendanceWriter for DieselRepository {
    fn create_attendance(
        &self,
        new_attendance: &DomainNewAttendance,
    ) -> RepositoryResult<DomainAttendance> {
        use crate::schema::absensi;

        let mut conn = self.conn()?;
        let insertable = DbNewAttendance::from(new_attendance);

        let created = diesel::insert_into(absensi::table)
            .values(&insertable)
            .get_result::<DbAttendance>(&mut conn)?;

        Ok(DomainAttendance::try_from(created)?)
    }

    fn update_attendance(
        &self,
        id: &str,
        updates: &DomainUpdateAttendance,
    ) -> RepositoryResult<DomainAttendance> {
        use crate::schema::absensi;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateAttendance::from(updates);

        let updated = diesel::update(absensi::table.find(id))
            .set(&db_updates)
            .get_result::<DbAttendance>(&mut conn)?;

        Ok(DomainAttendance::try_from(updated)?)
    }

    fn delete_attendance(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::absensi;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(absensi::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
