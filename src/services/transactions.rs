use crate::domain::listing::Listing;
use crate::domain::transaction::Transaction;
use crate::forms::transactions::{AddTransactionForm, EditTransactionForm};
use crate::repository::{CustomerReader, EmployeeReader, TransactionReader, TransactionWriter};
use crate::services::customers::list_customers;
use crate::services::employees::list_employees;
use crate::services::export::to_csv;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
    picker_options,
};

impl Pickable for Transaction {
    fn picker_option(&self) -> PickerOption {
        PickerOption::new(&self.id, self.date.to_string())
    }
}

pub fn list_transactions<R>(repo: &R) -> ServiceResult<Listing<Transaction>>
where
    R: TransactionReader + ?Sized,
{
    Ok(repo.list_transactions()?.into())
}

/// Loads the transactions screen with customer and employee selectors.
pub fn load_transactions_page<R>(
    repo: &R,
    query: EntityQuery,
) -> ServiceResult<EntityPage<Transaction>>
where
    R: TransactionReader + CustomerReader + EmployeeReader + ?Sized,
{
    let listing = list_transactions(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_transaction_by_id(id)?,
        None => None,
    };
    let customers = picker_options(&list_customers(repo)?);
    let employees = picker_options(&list_employees(repo)?);

    Ok(
        EntityPage::new(query.action.unwrap_or_default(), listing, selected)
            .with_reference("customers", customers)
            .with_reference("employees", employees),
    )
}

pub fn create_transaction<R>(repo: &R, form: AddTransactionForm) -> ServiceResult<Transaction>
where
    R: TransactionWriter + ?Sized,
{
    let new_transaction = form.into_new_transaction()?;

    repo.create_transaction(&new_transaction)
        .map_err(ServiceError::from)
}

pub fn modify_transaction<R>(repo: &R, form: EditTransactionForm) -> ServiceResult<Transaction>
where
    R: TransactionWriter + ?Sized,
{
    let (id, update) = form.into_update_transaction()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_transaction(&id, &update)
        .map_err(ServiceError::from)
}

pub fn remove_transaction<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: TransactionWriter + ?Sized,
{
    repo.delete_transaction(id).map_err(ServiceError::from)
}

pub fn export_transactions<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: TransactionReader + ?Sized,
{
    to_csv(&list_transactions(repo)?)
}
