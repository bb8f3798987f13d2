use serde::Deserialize;
use validator::Validate;

use crate::domain::supplier::{NewSupplier, UpdateSupplier};
use crate::forms::{
    FormError, FormResult, ID_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, non_empty_text,
    required, sanitize_id,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddSupplierForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub address: Option<String>,
}

impl AddSupplierForm {
    pub fn into_new_supplier(self) -> FormResult<NewSupplier> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Supplier")?);
        let name = non_empty_text(self.name).ok_or(FormError::MissingField("Nama Supplier"))?;
        let address = non_empty_text(self.address).ok_or(FormError::MissingField("Alamat"))?;

        Ok(NewSupplier::new(id, name, address))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditSupplierForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub address: Option<String>,
}

impl EditSupplierForm {
    pub fn into_update_supplier(self) -> FormResult<(String, UpdateSupplier)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Supplier")?);
        let mut update = UpdateSupplier::new();

        if let Some(name) = non_empty_text(self.name) {
            update = update.name(name);
        }
        if let Some(address) = non_empty_text(self.address) {
            update = update.address(address);
        }

        Ok((id, update))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_sanitizes_address() {
        let form = AddSupplierForm {
            id: Some("S006".to_string()),
            name: Some("Supplier F".to_string()),
            address: Some("  Jl.  Gatot   Subroto No.6 ".to_string()),
        };

        let supplier = form.into_new_supplier().expect("expected conversion");

        assert_eq!(supplier.address, "Jl. Gatot Subroto No.6");
    }

    #[test]
    fn edit_form_requires_id() {
        let form = EditSupplierForm {
            name: Some("Supplier Z".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            form.into_update_supplier(),
            Err(FormError::MissingField("ID Supplier"))
        ));
    }
}
