use diesel::prelude::*;

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
    UpdateSupplier as DomainUpdateSupplier,
};
use crate::models::supplier::{
    NewSupplier as DbNewSupplier, Supplier as DbSupplier, UpdateSupplier as DbUpdateSupplier,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, SupplierReader, SupplierWriter,
};

impl SupplierReader for DieselRepository {
    fn get_supplier_by_id(&self, id: &str) -> RepositoryResult<Option<DomainSupplier>> {
        use crate::schema::supplier;

        let mut conn = self.conn()?;
        let found = supplier::table
            .find(id)
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(found.map(Into::into))
    }

    fn list_suppliers(&self) -> RepositoryResult<Vec<DomainSupplier>> {
        use crate::schema::supplier;

        let mut conn = self.conn()?;
        let suppliers = supplier::table
            .order(supplier::supplier_id.asc())
            .load::<DbSupplier>(&mut conn)?;

        Ok(suppliers.into_iter().map(Into::into).collect())
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(&self, new_supplier: &DomainNewSupplier) -> RepositoryResult<DomainSupplier> {
        use crate::schema::supplier;

        let mut conn = self.conn()?;
        let insertable = DbNewSupplier::from(new_supplier);

        let created = diesel::insert_into(supplier::table)
            .values(&insertable)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.into())
    }

    fn update_supplier(
        &self,
        id: &str,
        updates: &DomainUpdateSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::supplier;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateSupplier::from(updates);

        let updated = diesel::update(supplier::table.find(id))
            .set(&db_updates)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_supplier(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::supplier;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(supplier::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
