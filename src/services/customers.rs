use crate::domain::customer::Customer;
use crate::domain::listing::Listing;
use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::export::to_csv;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
};

impl Pickable for Customer {
    fn picker_option(&self) -> PickerOption {
        PickerOption::new(&self.id, &self.name)
    }
}

pub fn list_customers<R>(repo: &R) -> ServiceResult<Listing<Customer>>
where
    R: CustomerReader + ?Sized,
{
    Ok(repo.list_customers()?.into())
}

pub fn load_customers_page<R>(repo: &R, query: EntityQuery) -> ServiceResult<EntityPage<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let listing = list_customers(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_customer_by_id(id)?,
        None => None,
    };

    Ok(EntityPage::new(
        query.action.unwrap_or_default(),
        listing,
        selected,
    ))
}

pub fn create_customer<R>(repo: &R, form: AddCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let new_customer = form.into_new_customer()?;

    repo.create_customer(&new_customer)
        .map_err(ServiceError::from)
}

pub fn modify_customer<R>(repo: &R, form: EditCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let (id, update) = form.into_update_customer()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_customer(&id, &update)
        .map_err(ServiceError::from)
}

pub fn remove_customer<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete_customer(id).map_err(ServiceError::from)
}

pub fn export_customers<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: CustomerReader + ?Sized,
{
    to_csv(&list_customers(repo)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;
    use crate::repository::mock::{MockCustomerReader, MockCustomerWriter};

    #[test]
    fn export_customers_of_empty_table_reports_no_data() {
        let mut repo = MockCustomerReader::new();
        repo.expect_list_customers()
            .times(1)
            .returning(|| Ok(Vec::new()));

        assert!(matches!(export_customers(&repo), Err(ServiceError::NoData)));
    }

    #[test]
    fn modify_customer_passes_contact_only() {
        let mut repo = MockCustomerWriter::new();
        repo.expect_update_customer()
            .times(1)
            .withf(|id, updates| {
                assert_eq!(id, "P002");
                assert!(updates.name.is_none());
                assert_eq!(updates.contact_info.as_deref(), Some("0812-555"));
                true
            })
            .returning(|_, _| {
                Ok(Customer {
                    id: "P002".to_string(),
                    name: "Sir Joko".to_string(),
                    contact_info: "0812-555".to_string(),
                })
            });

        let form = EditCustomerForm {
            id: Some("P002".to_string()),
            name: None,
            contact_info: Some("0812-555".to_string()),
        };

        let updated = modify_customer(&repo, form).expect("expected success");

        assert_eq!(updated.contact_info, "0812-555");
    }

    #[test]
    fn remove_unknown_customer_is_not_found() {
        let mut repo = MockCustomerWriter::new();
        repo.expect_delete_customer()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            remove_customer(&repo, "P999"),
            Err(ServiceError::NotFound)
        ));
    }
}
