use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::UnknownVariant;
use crate::domain::attendance::{
    Attendance as DomainAttendance, NewAttendance as DomainNewAttendance,
    UpdateAttendance as DomainUpdateAttendance,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::absensi,
    primary_key(absensi_id),
    belongs_to(super::employee::Employee, foreign_key = karyawan_id)
)]
pub struct Attendance {
    pub absensi_id: String,
    pub karyawan_id: Option<String>,
    pub tanggal: NaiveDate,
    pub status: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::absensi)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewAttendance<'a> {
    pub absensi_id: &'a str,
    pub karyawan_id: Option<&'a str>,
    pub tanggal: NaiveDate,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::absensi)]
pub struct UpdateAttendance<'a> {
    pub karyawan_id: Option<&'a str>,
    pub tanggal: Option<NaiveDate>,
    pub status: Option<&'a str>,
}

impl TryFrom<Attendance> for DomainAttendance {
    type Error = UnknownVariant;

    fn try_from(value: Attendance) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.absensi_id,
            employee_id: value.karyawan_id,
            date: value.tanggal,
            status: value.status.parse()?,
        })
    }
}

impl<'a> From<&'a DomainNewAttendance> for NewAttendance<'a> {
    fn from(value: &'a DomainNewAttendance) -> Self {
        Self {
            absensi_id: value.id.as_str(),
            karyawan_id: value.employee_id.as_deref(),
            tanggal: value.date,
            status: value.status.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateAttendance> for UpdateAttendance<'a> {
    fn from(value: &'a DomainUpdateAttendance) -> Self {
        Self {
            karyawan_id: value.employee_id.as_deref(),
            tanggal: value.date,
            status: value.status.as_ref().map(|status| status.as_str()),
        }
    }
}
