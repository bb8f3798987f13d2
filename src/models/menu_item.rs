use diesel::prelude::*;

use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, NewMenuItem as DomainNewMenuItem,
    UpdateMenuItem as DomainUpdateMenuItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu, primary_key(menu_id))]
pub struct MenuItem {
    pub menu_id: String,
    pub nama_menu: String,
    pub harga: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu)]
pub struct NewMenuItem<'a> {
    pub menu_id: &'a str,
    pub nama_menu: &'a str,
    pub harga: f64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menu)]
pub struct UpdateMenuItem<'a> {
    pub nama_menu: Option<&'a str>,
    pub harga: Option<f64>,
}

impl From<MenuItem> for DomainMenuItem {
    fn from(value: MenuItem) -> Self {
        Self {
            id: value.menu_id,
            name: value.nama_menu,
            price: value.harga,
        }
    }
}

impl<'a> From<&'a DomainNewMenuItem> for NewMenuItem<'a> {
    fn from(value: &'a DomainNewMenuItem) -> Self {
        Self {
            menu_id: value.id.as_str(),
            nama_menu: value.name.as_str(),
            harga: value.price,
        }
    }
}

impl<'a> From<&'a DomainUpdateMenuItem> for UpdateMenuItem<'a> {
    fn from(value: &'a DomainUpdateMenuItem) -> Self {
        Self {
            nama_menu: value.name.as_deref(),
            harga: value.price,
        }
    }
}
