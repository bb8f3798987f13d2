use serde::Deserialize;
use validator::Validate;

use crate::domain::menu_item::{NewMenuItem, UpdateMenuItem};
use crate::forms::{
    FormError, FormResult, ID_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, non_empty_text,
    parse_amount, required, sanitize_id,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddMenuItemForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub price: Option<String>,
}

impl AddMenuItemForm {
    pub fn into_new_menu_item(self) -> FormResult<NewMenuItem> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Menu")?);
        let name = non_empty_text(self.name).ok_or(FormError::MissingField("Nama Menu"))?;
        let price = parse_amount(&required(self.price, "Harga")?, "Harga")?;

        Ok(NewMenuItem::new(id, name, price))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditMenuItemForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub price: Option<String>,
}

impl EditMenuItemForm {
    pub fn into_update_menu_item(self) -> FormResult<(String, UpdateMenuItem)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Menu")?);
        let mut update = UpdateMenuItem::new();

        if let Some(name) = non_empty_text(self.name) {
            update = update.name(name);
        }
        if let Some(price) = self.price {
            update = update.price(parse_amount(&price, "Harga")?);
        }

        Ok((id, update))
    }
}
