use crate::domain::listing::Listing;
use crate::domain::raw_material::RawMaterial;
use crate::forms::raw_materials::{AddRawMaterialForm, EditRawMaterialForm};
use crate::repository::{RawMaterialReader, RawMaterialWriter, SupplierReader};
use crate::services::export::to_csv;
use crate::services::suppliers::list_suppliers;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
    picker_options,
};

impl Pickable for RawMaterial {
    fn picker_option(&self) -> PickerOption {
        PickerOption::new(&self.id, &self.name)
    }
}

pub fn list_raw_materials<R>(repo: &R) -> ServiceResult<Listing<RawMaterial>>
where
    R: RawMaterialReader + ?Sized,
{
    Ok(repo.list_raw_materials()?.into())
}

/// Loads the raw materials screen along with the supplier selector.
pub fn load_raw_materials_page<R>(
    repo: &R,
    query: EntityQuery,
) -> ServiceResult<EntityPage<RawMaterial>>
where
    R: RawMaterialReader + SupplierReader + ?Sized,
{
    let listing = list_raw_materials(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_raw_material_by_id(id)?,
        None => None,
    };
    let suppliers = picker_options(&list_suppliers(repo)?);

    Ok(
        EntityPage::new(query.action.unwrap_or_default(), listing, selected)
            .with_reference("suppliers", suppliers),
    )
}

pub fn create_raw_material<R>(repo: &R, form: AddRawMaterialForm) -> ServiceResult<RawMaterial>
where
    R: RawMaterialWriter + ?Sized,
{
    let new_material = form.into_new_raw_material()?;

    repo.create_raw_material(&new_material)
        .map_err(ServiceError::from)
}

pub fn modify_raw_material<R>(repo: &R, form: EditRawMaterialForm) -> ServiceResult<RawMaterial>
where
    R: RawMaterialWriter + ?Sized,
{
    let (id, update) = form.into_update_raw_material()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_raw_material(&id, &update)
        .map_err(ServiceError::from)
}

pub fn remove_raw_material<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: RawMaterialWriter + ?Sized,
{
    repo.delete_raw_material(id).map_err(ServiceError::from)
}

pub fn export_raw_materials<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: RawMaterialReader + ?Sized,
{
    to_csv(&list_raw_materials(repo)?)
}
