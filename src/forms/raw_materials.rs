use serde::Deserialize;
use validator::Validate;

use crate::domain::UnknownVariant;
use crate::domain::raw_material::{NewRawMaterial, UNITS, UpdateRawMaterial};
use crate::forms::{
    FormError, FormResult, ID_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, non_empty_text,
    parse_amount, parse_count, required, sanitize_id,
};

/// Form payload emitted when submitting the "Tambah Bahan Baku" form.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddRawMaterialForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    /// Whole units on hand.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub stock: Option<String>,
    /// One of [`UNITS`].
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit_price: Option<String>,
    /// Optional reference to a supplier.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub supplier_id: Option<String>,
}

impl AddRawMaterialForm {
    /// Validates and sanitizes the payload into a domain `NewRawMaterial`.
    pub fn into_new_raw_material(self) -> FormResult<NewRawMaterial> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Bahan")?);
        let name = non_empty_text(self.name).ok_or(FormError::MissingField("Nama Bahan"))?;
        let stock = parse_count(&required(self.stock, "Stok")?, "Stok")?;
        let unit = parse_unit(&required(self.unit, "Satuan")?)?;
        let unit_price = parse_amount(&required(self.unit_price, "Harga Bahan")?, "Harga Bahan")?;

        let mut material = NewRawMaterial::new(id, name, stock, unit, unit_price);
        if let Some(supplier_id) = self.supplier_id {
            material = material.with_supplier_id(sanitize_id(&supplier_id));
        }

        Ok(material)
    }
}

/// Form payload emitted when editing a raw material.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditRawMaterialForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub stock: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit_price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub supplier_id: Option<String>,
}

impl EditRawMaterialForm {
    pub fn into_update_raw_material(self) -> FormResult<(String, UpdateRawMaterial)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Bahan")?);
        let mut update = UpdateRawMaterial::new();

        if let Some(name) = non_empty_text(self.name) {
            update = update.name(name);
        }
        if let Some(stock) = self.stock {
            update = update.stock(parse_count(&stock, "Stok")?);
        }
        if let Some(unit) = self.unit {
            update = update.unit(parse_unit(&unit)?);
        }
        if let Some(unit_price) = self.unit_price {
            update = update.unit_price(parse_amount(&unit_price, "Harga Bahan")?);
        }
        if let Some(supplier_id) = self.supplier_id {
            update = update.supplier_id(sanitize_id(&supplier_id));
        }

        Ok((id, update))
    }
}

fn parse_unit(value: &str) -> FormResult<String> {
    let unit = value.trim();
    if UNITS.contains(&unit) {
        Ok(unit.to_string())
    } else {
        Err(FormError::UnknownChoice(UnknownVariant {
            kind: "satuan",
            value: unit.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AddRawMaterialForm {
        AddRawMaterialForm {
            id: Some("B006".to_string()),
            name: Some("Bawang Merah".to_string()),
            stock: Some("40".to_string()),
            unit: Some("kg".to_string()),
            unit_price: Some("32000".to_string()),
            supplier_id: Some("S001".to_string()),
        }
    }

    #[test]
    fn add_form_parses_numbers() {
        let material = filled_form()
            .into_new_raw_material()
            .expect("expected conversion");

        assert_eq!(material.stock, 40);
        assert_eq!(material.unit_price, 32000.0);
        assert_eq!(material.supplier_id.as_deref(), Some("S001"));
    }

    #[test]
    fn add_form_rejects_negative_stock() {
        let form = AddRawMaterialForm {
            stock: Some("-5".to_string()),
            ..filled_form()
        };

        assert!(matches!(
            form.into_new_raw_material(),
            Err(FormError::Negative("Stok"))
        ));
    }

    #[test]
    fn add_form_rejects_unknown_unit() {
        let form = AddRawMaterialForm {
            unit: Some("ton".to_string()),
            ..filled_form()
        };

        assert!(matches!(
            form.into_new_raw_material(),
            Err(FormError::UnknownChoice(_))
        ));
    }

    #[test]
    fn edit_form_parses_only_present_numbers() {
        let form = EditRawMaterialForm {
            id: Some("B001".to_string()),
            stock: Some("120".to_string()),
            ..Default::default()
        };

        let (id, update) = form
            .into_update_raw_material()
            .expect("expected conversion");

        assert_eq!(id, "B001");
        assert_eq!(update.stock, Some(120));
        assert!(update.unit_price.is_none());
        assert!(update.unit.is_none());
    }
}
