use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::pelanggan, primary_key(pelanggan_id))]
pub struct Customer {
    pub pelanggan_id: String,
    pub cus_name: String,
    pub contact_info: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pelanggan)]
pub struct NewCustomer<'a> {
    pub pelanggan_id: &'a str,
    pub cus_name: &'a str,
    pub contact_info: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::pelanggan)]
pub struct UpdateCustomer<'a> {
    pub cus_name: Option<&'a str>,
    pub contact_info: Option<&'a str>,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.pelanggan_id,
            name: value.cus_name,
            contact_info: value.contact_info,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            pelanggan_id: value.id.as_str(),
            cus_name: value.name.as_str(),
            contact_info: value.contact_info.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(value: &'a DomainUpdateCustomer) -> Self {
        Self {
            cus_name: value.name.as_deref(),
            contact_info: value.contact_info.as_deref(),
        }
    }
}
