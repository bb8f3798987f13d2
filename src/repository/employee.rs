use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
    UpdateEmployee as DomainUpdateEmployee,
};
use crate::models::employee::{
    Employee as DbEmployee, NewEmployee as DbNewEmployee, UpdateEmployee as DbUpdateEmployee,
};
use crate::repository::{
    DieselRepository, EmployeeReader, EmployeeWriter, RepositoryError, RepositoryResult,
};

impl EmployeeReader for DieselRepository {
    fn get_employee_by_id(&self, id: &str) -> RepositoryResult<Option<DomainEmployee>> {
        use crate::schema::karyawan;

        let mut conn = self.conn()?;
        let employee = karyawan::table
            .find(id)
            .first::<DbEmployee>(&mut conn)
            .optional()?;

        employee
            .map(DomainEmployee::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_employees(&self) -> RepositoryResult<Vec<DomainEmployee>> {
        use crate::schema::karyawan;

        let mut conn = self.conn()?;
        let rows = karyawan::table
            .order(karyawan::karyawan_id.asc())
            .load::<DbEmployee>(&mut conn)?;

        rows.into_iter()
            .map(|row| DomainEmployee::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employee(&self, new_employee: &DomainNewEmployee) -> RepositoryResult<DomainEmployee> {
        use crate::schema::karyawan;

        let mut conn = self.conn()?;
        let insertable = DbNewEmployee::from(new_employee);

        let created = diesel::insert_into(karyawan::table)
            .values(&insertable)
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(DomainEmployee::try_from(created)?)
    }

    fn update_employee(
        &self,
        id: &str,
        updates: &DomainUpdateEmployee,
    ) -> RepositoryResult<DomainEmployee> {
        use crate::schema::karyawan;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateEmployee::from(updates);

        let updated = diesel::update(karyawan::table.find(id))
            .set(&db_updates)
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(DomainEmployee::try_from(updated)?)
    }

    fn delete_employee(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::karyawan;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(karyawan::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
