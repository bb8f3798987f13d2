use crate::domain::listing::Listing;
use crate::domain::menu_item::MenuItem;
use crate::forms::menu::{AddMenuItemForm, EditMenuItemForm};
use crate::repository::{MenuItemReader, MenuItemWriter};
use crate::services::export::to_csv;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
};

impl Pickable for MenuItem {
    fn picker_option(&self) -> PickerOption {
        PickerOption::new(&self.id, &self.name)
    }
}

pub fn list_menu_items<R>(repo: &R) -> ServiceResult<Listing<MenuItem>>
where
    R: MenuItemReader + ?Sized,
{
    Ok(repo.list_menu_items()?.into())
}

pub fn load_menu_page<R>(repo: &R, query: EntityQuery) -> ServiceResult<EntityPage<MenuItem>>
where
    R: MenuItemReader + ?Sized,
{
    let listing = list_menu_items(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_menu_item_by_id(id)?,
        None => None,
    };

    Ok(EntityPage::new(
        query.action.unwrap_or_default(),
        listing,
        selected,
    ))
}

pub fn create_menu_item<R>(repo: &R, form: AddMenuItemForm) -> ServiceResult<MenuItem>
where
    R: MenuItemWriter + ?Sized,
{
    let new_item = form.into_new_menu_item()?;

    repo.create_menu_item(&new_item)
        .map_err(ServiceError::from)
}

pub fn modify_menu_item<R>(repo: &R, form: EditMenuItemForm) -> ServiceResult<MenuItem>
where
    R: MenuItemWriter + ?Sized,
{
    let (id, update) = form.into_update_menu_item()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_menu_item(&id, &update)
        .map_err(ServiceError::from)
}

pub fn remove_menu_item<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: MenuItemWriter + ?Sized,
{
    repo.delete_menu_item(id).map_err(ServiceError::from)
}

pub fn export_menu<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: MenuItemReader + ?Sized,
{
    to_csv(&list_menu_items(repo)?)
}
