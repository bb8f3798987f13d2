use serde::Deserialize;
use validator::Validate;

use crate::domain::transaction::{NewTransaction, UpdateTransaction};
use crate::forms::{
    FormResult, ID_MAX_LEN, empty_string_as_none, parse_amount, parse_date, required,
    sanitize_id,
};

/// Form payload emitted when recording a transaction.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddTransactionForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    /// Purchase date as `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total: Option<String>,
}

impl AddTransactionForm {
    pub fn into_new_transaction(self) -> FormResult<NewTransaction> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Transaksi")?);
        let date = parse_date(&required(self.date, "Tanggal")?, "Tanggal")?;
        let total = parse_amount(&required(self.total, "Total")?, "Total")?;

        let mut transaction = NewTransaction::new(id, date, total);
        if let Some(customer_id) = self.customer_id {
            transaction = transaction.with_customer_id(sanitize_id(&customer_id));
        }
        if let Some(employee_id) = self.employee_id {
            transaction = transaction.with_employee_id(sanitize_id(&employee_id));
        }

        Ok(transaction)
    }
}

/// Form payload emitted when correcting a transaction.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditTransactionForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total: Option<String>,
}

impl EditTransactionForm {
    pub fn into_update_transaction(self) -> FormResult<(String, UpdateTransaction)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Transaksi")?);
        let mut update = UpdateTransaction::new();

        if let Some(date) = self.date {
            update = update.date(parse_date(&date, "Tanggal")?);
        }
        if let Some(customer_id) = self.customer_id {
            update = update.customer_id(sanitize_id(&customer_id));
        }
        if let Some(employee_id) = self.employee_id {
            update = update.employee_id(sanitize_id(&employee_id));
        }
        if let Some(total) = self.total {
            update = update.total(parse_amount(&total, "Total")?);
        }

        Ok((id, update))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::forms::FormError;

    #[test]
    fn add_form_parses_date_and_total() {
        let form = AddTransactionForm {
            id: Some("T006".to_string()),
            date: Some("2024-04-06".to_string()),
            customer_id: Some("P001".to_string()),
            employee_id: None,
            total: Some("75000".to_string()),
        };

        let transaction = form.into_new_transaction().expect("expected conversion");

        assert_eq!(
            Some(transaction.date),
            NaiveDate::from_ymd_opt(2024, 4, 6)
        );
        assert_eq!(transaction.total, 75000.0);
        assert_eq!(transaction.customer_id.as_deref(), Some("P001"));
        assert!(transaction.employee_id.is_none());
    }

    #[test]
    fn add_form_rejects_bad_date() {
        let form = AddTransactionForm {
            id: Some("T006".to_string()),
            date: Some("6 April".to_string()),
            total: Some("1000".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            form.into_new_transaction(),
            Err(FormError::InvalidDate { field: "Tanggal", .. })
        ));
    }
}
