use diesel::prelude::*;

use crate::domain::feedback::{
    Feedback as DomainFeedback, NewFeedback as DomainNewFeedback,
    UpdateFeedback as DomainUpdateFeedback,
};
use crate::models::feedback::{
    Feedback as DbFeedback, NewFeedback as DbNewFeedback, UpdateFeedback as DbUpdateFeedback,
};
use crate::repository::{
    DieselRepository, FeedbackReader, FeedbackWriter, RepositoryError, RepositoryResult,
};

impl FeedbackReader for DieselRepository {
    fn get_feedback_by_id(&self, id: &str) -> RepositoryResult<Option<DomainFeedback>> {
        use crate::schema::feedback;

        let mut conn = self.conn()?;
        let entry = feedback::table
            .find(id)
            .first::<DbFeedback>(&mut conn)
            .optional()?;

        Ok(entry.map(Into::into))
    }

    fn list_feedback(&self) -> RepositoryResult<Vec<DomainFeedback>> {
        use crate::schema::feedback;

        let mut conn = self.conn()?;
        let entries = feedback::table
            .order(feedback::feedback_id.asc())
            .load::<DbFeedback>(&mut conn)?;

        Ok(entries.into_iter().map(Into::into).collect())
    }
}

impl FeedbackWriter for DieselRepository {
    fn create_feedback(&self, new_feedback: &DomainNewFeedback) -> RepositoryResult<DomainFeedback> {
        use crate::schema::feedback;

        let mut conn = self.conn()?;
        let insertable = DbNewFeedback::from(new_feedback);

        let created = diesel::insert_into(feedback::table)
            .values(&insertable)
            .get_result::<DbFeedback>(&mut conn)?;

        Ok(created.into())
    }

    fn update_feedback(
        &self,
        id: &str,
        updates: &DomainUpdateFeedback,
    ) -> RepositoryResult<DomainFeedback> {
        use crate::schema::feedback;

        if updates.is_empty() {
            return Err(RepositoryError::NothingToUpdate);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateFeedback::from(updates);

        let updated = diesel::update(feedback::table.find(id))
            .set(&db_updates)
            .get_result::<DbFeedback>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_feedback(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::feedback;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(feedback::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
