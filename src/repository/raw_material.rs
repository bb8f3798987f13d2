use diesel::prelude::*;

use crate::domain::raw_material::{
    NewRawMaterial as DomainNewRawMaterial, RawMaterial as DomainRawMaterial,
    UpdateRawMaterial as DomainUpdateRawMaterial,
};
use crate::models::raw_material::{
    NewRawMaterial as DbNewRawMaterial, RawMaterial as DbRawMaterial,
    UpdateRawMaterial as DbUpdateRawMaterial,
};
use crate::repository::{
    DieselRepository, RawMaterialReader, RawMaterialWriter, RepositoryError, RepositoryResult,
};

impl RawMaterialReader for DieselRepository {
    fn get_raw_material_by_id(&self, id: &str) -> RepositoryResult<Option<DomainRawMaterial>> {
        use crate::schema::bahan_baku;

        let mut conn = self.conn()?;
        let material = bahan_baku::table
            .find(id)
            .first::<DbRawMaterial>(&mut conn)
            .optional()?;

        Ok(material.map(Into::into))
    }

    fn list_raw_materials(&self) -> RepositoryResult<Vec<DomainRawMaterial>> {
        use crate::schema::bahan_baku;

        let mut conn = self.conn()?;
        let materials = bahan_baku::table
            .order(bahan_baku::bahan_id.asc())
            .load::<DbRawMaterial>(&mut conn)?;

        Ok(materials.into_iter().map(Into::into).collect())
    }
}

impl RawMaterialWriter for DieselRepository {
    fn create_raw_material(
        &self,
        new_material: &DomainNewRawMaterial,
    ) -> RepositoryResult<DomainRawMaterial> {
        use crate::schema::bahan_baku;

        let mut conn = self.conn()?;
        let insertable = DbNewRawMaterial::from(new_material);

        let created = diesel::insert_into(bahan_baku::table)
            .values(&insertable)
            .get_result::<DbRawMaterial>(&mut conn)?;

        Ok(created.into())
    }

    fn update_raw_material(
        &self,
        id: &str,
        updates: &DomainUpdateRawMaterial,
    ) -> RepositoryResult<DomainRawMaterial> {
        use crate::schema::bahan_baku;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateRawMaterial::from(updates);

        let updated = diesel::update(bahan_baku::table.find(id))
            .set(&db_updates)
            .get_result::<DbRawMaterial>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_raw_material(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::bahan_baku;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(bahan_baku::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
