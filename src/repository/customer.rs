use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::{
    CustomerReader, CustomerWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::pelanggan;

        let mut conn = self.conn()?;
        let customer = pelanggan::table
            .find(id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(&self) -> RepositoryResult<Vec<DomainCustomer>> {
        use crate::schema::pelanggan;

        let mut conn = self.conn()?;
        let customers = pelanggan::table
            .order(pelanggan::pelanggan_id.asc())
            .load::<DbCustomer>(&mut conn)?;

        Ok(customers.into_iter().map(Into::into).collect())
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &DomainNewCustomer) -> RepositoryResult<DomainCustomer> {
        use crate::schema::pelanggan;

        let mut conn = self.conn()?;
        let db_new = DbNewCustomer::from(new_customer);

        let created = diesel::insert_into(pelanggan::table)
            .values(&db_new)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        id: &str,
        updates: &DomainUpdateCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::pelanggan;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCustomer::from(updates);

        let updated = diesel::update(pelanggan::table.find(id))
            .set(&db_updates)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_customer(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::pelanggan;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(pelanggan::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
