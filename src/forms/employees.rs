use serde::Deserialize;
use validator::Validate;

use crate::domain::employee::{NewEmployee, Position, UpdateEmployee};
use crate::forms::{
    FormError, FormResult, ID_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, non_empty_text,
    required, sanitize_id,
};

/// Form payload emitted when submitting the "Tambah Karyawan" form.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddEmployeeForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    /// One of the values in [`Position::ALL`].
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub fingerprint_id: Option<String>,
}

impl AddEmployeeForm {
    /// Validates and sanitizes the payload into a domain `NewEmployee`.
    pub fn into_new_employee(self) -> FormResult<NewEmployee> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Karyawan")?);
        let name = non_empty_text(self.name).ok_or(FormError::MissingField("Nama"))?;
        let position = required(self.position, "Posisi")?
            .trim()
            .parse::<Position>()?;

        let mut employee = NewEmployee::new(id, name, position);
        if let Some(fingerprint_id) = non_empty_text(self.fingerprint_id) {
            employee = employee.with_fingerprint_id(fingerprint_id);
        }

        Ok(employee)
    }
}

/// Form payload emitted when editing an employee; blank fields stay unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditEmployeeForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub fingerprint_id: Option<String>,
}

impl EditEmployeeForm {
    /// Returns the target identifier and the fields the user filled in.
    pub fn into_update_employee(self) -> FormResult<(String, UpdateEmployee)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Karyawan")?);
        let mut update = UpdateEmployee::new();

        if let Some(name) = non_empty_text(self.name) {
            update = update.name(name);
        }
        if let Some(position) = self.position {
            update = update.position(position.trim().parse::<Position>()?);
        }
        if let Some(fingerprint_id) = non_empty_text(self.fingerprint_id) {
            update = update.fingerprint_id(fingerprint_id);
        }

        Ok((id, update))
    }
}
