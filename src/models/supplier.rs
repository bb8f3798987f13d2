use diesel::prelude::*;

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
    UpdateSupplier as DomainUpdateSupplier,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::supplier, primary_key(supplier_id))]
pub struct Supplier {
    pub supplier_id: String,
    pub supplier_name: String,
    pub address: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::supplier)]
pub struct NewSupplier<'a> {
    pub supplier_id: &'a str,
    pub supplier_name: &'a str,
    pub address: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::supplier)]
pub struct UpdateSupplier<'a> {
    pub supplier_name: Option<&'a str>,
    pub address: Option<&'a str>,
}

impl From<Supplier> for DomainSupplier {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.supplier_id,
            name: value.supplier_name,
            address: value.address,
        }
    }
}

impl<'a> From<&'a DomainNewSupplier> for NewSupplier<'a> {
    fn from(value: &'a DomainNewSupplier) -> Self {
        Self {
            supplier_id: value.id.as_str(),
            supplier_name: value.name.as_str(),
            address: value.address.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateSupplier> for UpdateSupplier<'a> {
    fn from(value: &'a DomainUpdateSupplier) -> Self {
        Self {
            supplier_name: value.name.as_deref(),
            address: value.address.as_deref(),
        }
    }
}
