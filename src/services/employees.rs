use crate::domain::employee::Employee;
use crate::domain::listing::Listing;
use crate::forms::employees::{AddEmployeeForm, EditEmployeeForm};
use crate::repository::{EmployeeReader, EmployeeWriter};
use crate::services::export::to_csv;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
};

impl Pickable for Employee {
    fn picker_option(&self) -> PickerOption {
        PickerOption::new(&self.id, &self.name)
    }
}

/// Fetches every employee, signalling an empty table explicitly.
pub fn list_employees<R>(repo: &R) -> ServiceResult<Listing<Employee>>
where
    R: EmployeeReader + ?Sized,
{
    Ok(repo.list_employees()?.into())
}

/// Loads the data shown on the employees screen.
pub fn load_employees_page<R>(repo: &R, query: EntityQuery) -> ServiceResult<EntityPage<Employee>>
where
    R: EmployeeReader + ?Sized,
{
    let listing = list_employees(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_employee_by_id(id)?,
        None => None,
    };

    Ok(EntityPage::new(
        query.action.unwrap_or_default(),
        listing,
        selected,
    ))
}

/// Creates a new employee from the submitted form.
pub fn create_employee<R>(repo: &R, form: AddEmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let new_employee = form.into_new_employee()?;

    repo.create_employee(&new_employee)
        .map_err(ServiceError::from)
}

/// Applies the filled-in fields of the edit form to an existing employee.
pub fn modify_employee<R>(repo: &R, form: EditEmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let (id, update) = form.into_update_employee()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_employee(&id, &update)
        .map_err(ServiceError::from)
}

/// Deletes an employee.
pub fn remove_employee<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: EmployeeWriter + ?Sized,
{
    repo.delete_employee(id).map_err(ServiceError::from)
}

/// Builds the `daftar_karyawan.csv` download.
pub fn export_employees<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: EmployeeReader + ?Sized,
{
    to_csv(&list_employees(repo)?)
}
