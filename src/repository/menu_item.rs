use diesel::prelude::*;

use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, NewMenuItem as DomainNewMenuItem,
    UpdateMenuItem as DomainUpdateMenuItem,
};
use crate::models::menu_item::{
    MenuItem as DbMenuItem, NewMenuItem as DbNewMenuItem, UpdateMenuItem as DbUpdateMenuItem,
};
use crate::repository::{
    DieselRepository, MenuItemReader, MenuItemWriter, RepositoryError, RepositoryResult,
};

impl MenuItemReader for DieselRepository {
    fn get_menu_item_by_id(&self, id: &str) -> RepositoryResult<Option<DomainMenuItem>> {
        use crate::schema::menu;

        let mut conn = self.conn()?;
        let item = menu::table
            .find(id)
            .first::<DbMenuItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_menu_items(&self) -> RepositoryResult<Vec<DomainMenuItem>> {
        use crate::schema::menu;

        let mut conn = self.conn()?;
        let items = menu::table
            .order(menu::menu_id.asc())
            .load::<DbMenuItem>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl MenuItemWriter for DieselRepository {
    fn create_menu_item(&self, new_item: &DomainNewMenuItem) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu;

        let mut conn = self.conn()?;
        let insertable = DbNewMenuItem::from(new_item);

        let created = diesel::insert_into(menu::table)
            .values(&insertable)
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(created.into())
    }

    fn update_menu_item(
        &self,
        id: &str,
        updates: &DomainUpdateMenuItem,
    ) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateMenuItem::from(updates);

        let updated = diesel::update(menu::table.find(id))
            .set(&db_updates)
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_menu_item(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::menu;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(menu::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
