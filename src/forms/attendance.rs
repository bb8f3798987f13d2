use serde::Deserialize;
use validator::Validate;

use crate::domain::attendance::{AttendanceStatus, NewAttendance, UpdateAttendance};
use crate::forms::{
    FormResult, ID_MAX_LEN, empty_string_as_none, parse_date, required, sanitize_id,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddAttendanceForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
    /// Stored label such as `Hadir`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
}

impl AddAttendanceForm {
    pub fn into_new_attendance(self) -> FormResult<NewAttendance> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Absensi")?);
        let date = parse_date(&required(self.date, "Tanggal")?, "Tanggal")?;
        let status = required(self.status, "Status")?
            .trim()
            .parse::<AttendanceStatus>()?;

        let mut entry = NewAttendance::new(id, date, status);
        if let Some(employee_id) = self.employee_id {
            entry = entry.with_employee_id(sanitize_id(&employee_id));
        }

        Ok(entry)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditAttendanceForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
}

impl EditAttendanceForm {
    pub fn into_update_attendance(self) -> FormResult<(String, UpdateAttendance)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Absensi")?);
        let mut update = UpdateAttendance::new();

        if let Some(employee_id) = self.employee_id {
            update = update.employee_id(sanitize_id(&employee_id));
        }
        if let Some(date) = self.date {
            update = update.date(parse_date(&date, "Tanggal")?);
        }
        if let Some(status) = self.status {
            update = update.status(status.trim().parse::<AttendanceStatus>()?);
        }

        Ok((id, update))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormError;

    #[test]
    fn add_form_accepts_stored_label() {
        let form = AddAttendanceForm {
            id: Some("A006".to_string()),
            employee_id: Some("K002".to_string()),
            date: Some("2024-04-02".to_string()),
            status: Some("Tidak Hadir".to_string()),
        };

        let entry = form.into_new_attendance().expect("expected conversion");

        assert_eq!(entry.status, AttendanceStatus::Absent);
    }

    #[test]
    fn add_form_requires_status() {
        let form = AddAttendanceForm {
            id: Some("A006".to_string()),
            date: Some("2024-04-02".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            form.into_new_attendance(),
            Err(FormError::MissingField("Status"))
        ));
    }
}
