use diesel::prelude::*;

use crate::domain::UnknownVariant;
use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
    UpdateEmployee as DomainUpdateEmployee,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::karyawan, primary_key(karyawan_id))]
pub struct Employee {
    pub karyawan_id: String,
    pub employee_name: String,
    pub position: String,
    pub fingerprint_id: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::karyawan)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewEmployee<'a> {
    pub karyawan_id: &'a str,
    pub employee_name: &'a str,
    pub position: &'a str,
    pub fingerprint_id: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::karyawan)]
pub struct UpdateEmployee<'a> {
    pub employee_name: Option<&'a str>,
    pub position: Option<&'a str>,
    pub fingerprint_id: Option<&'a str>,
}

impl TryFrom<Employee> for DomainEmployee {
    type Error = UnknownVariant;

    fn try_from(value: Employee) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.karyawan_id,
            name: value.employee_name,
            position: value.position.parse()?,
            fingerprint_id: value.fingerprint_id,
        })
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(value: &'a DomainNewEmployee) -> Self {
        Self {
            karyawan_id: value.id.as_str(),
            employee_name: value.name.as_str(),
            position: value.position.as_str(),
            fingerprint_id: value.fingerprint_id.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateEmployee> for UpdateEmployee<'a> {
    fn from(value: &'a DomainUpdateEmployee) -> Self {
        Self {
            employee_name: value.name.as_deref(),
            position: value.position.as_ref().map(|position| position.as_str()),
            fingerprint_id: value.fingerprint_id.as_deref(),
        }
    }
}
