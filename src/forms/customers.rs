use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::forms::{
    FormError, FormResult, ID_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, non_empty_text,
    required, sanitize_id,
};

/// Form payload emitted when submitting the "Tambah Pelanggan" form.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddCustomerForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub contact_info: Option<String>,
}

impl AddCustomerForm {
    pub fn into_new_customer(self) -> FormResult<NewCustomer> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Pelanggan")?);
        let name = non_empty_text(self.name).ok_or(FormError::MissingField("Nama Pelanggan"))?;
        let contact_info =
            non_empty_text(self.contact_info).ok_or(FormError::MissingField("Kontak"))?;

        Ok(NewCustomer::new(id, name, contact_info))
    }
}

/// Form payload emitted when editing a customer.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditCustomerForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub contact_info: Option<String>,
}

impl EditCustomerForm {
    pub fn into_update_customer(self) -> FormResult<(String, UpdateCustomer)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Pelanggan")?);
        let mut update = UpdateCustomer::new();

        if let Some(name) = non_empty_text(self.name) {
            update = update.name(name);
        }
        if let Some(contact_info) = non_empty_text(self.contact_info) {
            update = update.contact_info(contact_info);
        }

        Ok((id, update))
    }
}
