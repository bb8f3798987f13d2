use crate::domain::feedback::Feedback;
use crate::domain::listing::Listing;
use crate::forms::feedback::{AddFeedbackForm, EditFeedbackForm};
use crate::repository::{CustomerReader, EmployeeReader, FeedbackReader, FeedbackWriter};
use crate::services::customers::list_customers;
use crate::services::employees::list_employees;
use crate::services::export::to_csv;
use crate::services::{
    CsvExport, EntityPage, EntityQuery, Pickable, PickerOption, ServiceError, ServiceResult,
    picker_options,
};

impl Pickable for Feedback {
    fn picker_option(&self) -> PickerOption {
        PickerOption::new(&self.id, format!("{} ({}/5)", self.date, self.rating))
    }
}

pub fn list_feedback<R>(repo: &R) -> ServiceResult<Listing<Feedback>>
where
    R: FeedbackReader + ?Sized,
{
    Ok(repo.list_feedback()?.into())
}

pub fn load_feedback_page<R>(repo: &R, query: EntityQuery) -> ServiceResult<EntityPage<Feedback>>
where
    R: FeedbackReader + CustomerReader + EmployeeReader + ?Sized,
{
    let listing = list_feedback(repo)?;
    let selected = match query.id.as_deref() {
        Some(id) => repo.get_feedback_by_id(id)?,
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

pub fn create_feedback<R>(repo: &R, form: AddFeedbackForm) -> ServiceResult<Feedback>
where
    R: FeedbackWriter + ?Sized,
{
    let new_feedback = form.into_new_feedback()?;

    repo.create_feedback(&new_feedback)
        .map_err(ServiceError::from)
}

pub fn modify_feedback<R>(repo: &R, form: EditFeedbackForm) -> ServiceResult<Feedback>
where
    R: FeedbackWriter + ?Sized,
{
    let (id, update) = form.into_update_feedback()?;
    if update.is_empty() {
        return Err(ServiceError::NothingToUpdate);
    }

    repo.update_feedback(&id, &update)
        .map_err(ServiceError::from)
}

pub fn remove_feedback<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: FeedbackWriter + ?Sized,
{
    repo.delete_feedback(id).map_err(ServiceError::from)
}

pub fn export_feedback<R>(repo: &R) -> ServiceResult<CsvExport>
where
    R: FeedbackReader + ?Sized,
{
    to_csv(&list_feedback(repo)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockFeedbackWriter;

    #[test]
    fn create_feedback_with_out_of_scale_rating_never_reaches_repository() {
        let mut repo = MockFeedbackWriter::new();
        repo.expect_create_feedback().never();

        let form = AddFeedbackForm {
            id: Some("F006".to_string()),
            date: Some("2024-04-06".to_string()),
            rating: Some("9".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            create_feedback(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn remove_feedback_deletes_record() {
        let mut repo = MockFeedbackWriter::new();
        repo.expect_delete_feedback()
            .times(1)
            .withf(|id| id == "F003")
            .returning(|_| Ok(()));

        assert!(matches!(remove_feedback(&repo, "F003"), Ok(())));
    }
}
