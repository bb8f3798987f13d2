use diesel::prelude::*;

use crate::domain::raw_material::{
    NewRawMaterial as DomainNewRawMaterial, RawMaterial as DomainRawMaterial,
    UpdateRawMaterial as DomainUpdateRawMaterial,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::bahan_baku,
    primary_key(bahan_id),
    belongs_to(super::supplier::Supplier, foreign_key = supplier_id)
)]
pub struct RawMaterial {
    pub bahan_id: String,
    pub nama_bahan: String,
    pub stock: i32,
    pub satuan: String,
    pub harga_bahan: f64,
    pub supplier_id: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bahan_baku)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewRawMaterial<'a> {
    pub bahan_id: &'a str,
    pub nama_bahan: &'a str,
    pub stock: i32,
    pub satuan: &'a str,
    pub harga_bahan: f64,
    pub supplier_id: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::bahan_baku)]
pub struct UpdateRawMaterial<'a> {
    pub nama_bahan: Option<&'a str>,
    pub stock: Option<i32>,
    pub satuan: Option<&'a str>,
    pub harga_bahan: Option<f64>,
    pub supplier_id: Option<&'a str>,
}

impl From<RawMaterial> for DomainRawMaterial {
    fn from(value: RawMaterial) -> Self {
        Self {
            id: value.bahan_id,
            name: value.nama_bahan,
            stock: value.stock,
            unit: value.satuan,
            unit_price: value.harga_bahan,
            supplier_id: value.supplier_id,
        }
    }
}

impl<'a> From<&'a DomainNewRawMaterial> for NewRawMaterial<'a> {
    fn from(value: &'a DomainNewRawMaterial) -> Self {
        Self {
            bahan_id: value.id.as_str(),
            nama_bahan: value.name.as_str(),
            stock: value.stock,
            satuan: value.unit.as_str(),
            harga_bahan: value.unit_price,
            supplier_id: value.supplier_id.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateRawMaterial> for UpdateRawMaterial<'a> {
    fn from(value: &'a DomainUpdateRawMaterial) -> Self {
        Self {
            nama_bahan: value.name.as_deref(),
            stock: value.stock,
            satuan: value.unit.as_deref(),
            harga_bahan: value.unit_price,
            supplier_id: value.supplier_id.as_deref(),
        }
    }
}
