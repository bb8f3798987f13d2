use crate::domain::attendance::Attendance;
use crate::domain::listing::Listing;
use crate::forms::attendance::{AddAttendanceForm, EditAttendanceForm};
use crate::repository::{AttendanceReader, AttendanceWriter, EmployeeReader};
use crate::services::employees::list_employees;
use crate::services::export::to_csv;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
    picker_options,
};

impl Pickable for Attendance {
    fn picker_option(&self) -> PickerOption {
        let employee = self.employee_id.as_deref().unwrap_or("-");
        PickerOption::new(&self.id, format!("{employee} {}", self.date))
    }
}

pub fn list_attendance<R>(repo: &R) -> ServiceResult<Listing<Attendance>>
where
    R: AttendanceReader + ?Sized,
{
    Ok(repo.list_attendance()?.into())
}

pub fn load_attendance_page<R>(
    repo: &R,
    query: EntityQuery,
) -> ServiceResult<EntityPage<Attendance>>
where
    R: AttendanceReader + EmployeeReader + ?Sized,
{
    let listing = list_attendance(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_attendance_by_id(id)?,
        None => None,
    };
    let employees = picker_options(&list_employees(repo)?);

    Ok(
        EntityPage::new(query.action.unwrap_or_default(), listing, selected)
            .with_reference("employees", employees),
    )
}

pub fn create_attendance<R>(repo: &R, form: AddAttendanceForm) -> ServiceResult<Attendance>
where
    R: AttendanceWriter + ?Sized,
{
    let new_attendance = form.into_new_attendance()?;

    repo.create_attendance(&new_attendance)
        .map_err(ServiceError::from)
}

pub fn modify_attendance<R>(repo: &R, form: EditAttendanceForm) -> ServiceResult<Attendance>
where
    R: AttendanceWriter + ?Sized,
{
    let (id, update) = form.into_update_attendance()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_attendance(&id, &update)
        .map_err(ServiceError::from)
}

pub fn remove_attendance<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: AttendanceWriter + ?Sized,
{
    repo.delete_attendance(id).map_err(ServiceError::from)
}

pub fn export_attendance<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: AttendanceReader + ?Sized,
{
    to_csv(&list_attendance(repo)?)
}
