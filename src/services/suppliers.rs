use crate::domain::listing::Listing;
use crate::domain::supplier::Supplier;
use crate::forms::suppliers::{AddSupplierForm, EditSupplierForm};
use crate::repository::{SupplierReader, SupplierWriter};
use crate::services::export::to_csv;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
};

impl Pickable for Supplier {
    fn picker_option(&self) -> PickerOption {
        PickerOption::new(&self.id, &self.name)
    }
}

pub fn list_suppliers<R>(repo: &R) -> ServiceResult<Listing<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    Ok(repo.list_suppliers()?.into())
}

pub fn load_suppliers_page<R>(repo: &R, query: EntityQuery) -> ServiceResult<EntityPage<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    let listing = list_suppliers(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_supplier_by_id(id)?,
        None => None,
    };

    Ok(EntityPage::new(
        query.action.unwrap_or_default(),
        listing,
        selected,
    ))
}

pub fn create_supplier<R>(repo: &R, form: AddSupplierForm) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    let new_supplier = form.into_new_supplier()?;

    repo.create_supplier(&new_supplier)
        .map_err(ServiceError::from)
}

pub fn modify_supplier<R>(repo: &R, form: EditSupplierForm) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    let (id, update) = form.into_update_supplier()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_supplier(&id, &update)
        .map_err(ServiceError::from)
}

pub fn remove_supplier<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: SupplierWriter + ?Sized,
{
    repo.delete_supplier(id).map_err(ServiceError::from)
}

pub fn export_suppliers<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: SupplierReader + ?Sized,
{
    to_csv(&list_suppliers(repo)?)
}
