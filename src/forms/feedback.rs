use serde::Deserialize;
use validator::Validate;

use crate::domain::feedback::{MAX_RATING, MIN_RATING, NewFeedback, UpdateFeedback};
use crate::forms::{
    COMMENT_MAX_LEN, FormError, FormResult, ID_MAX_LEN, empty_string_as_none, parse_date,
    required, sanitize_id, sanitize_multiline_text,
};

/// Form payload emitted when recording customer feedback.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddFeedbackForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
    /// Whole number between [`MIN_RATING`] and [`MAX_RATING`].
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = COMMENT_MAX_LEN))]
    pub comment: Option<String>,
}

impl AddFeedbackForm {
    pub fn into_new_feedback(self) -> FormResult<NewFeedback> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Feedback")?);
        let date = parse_date(&required(self.date, "Tanggal")?, "Tanggal")?;
        let rating = parse_rating(&required(self.rating, "Rating")?)?;

        let mut entry = NewFeedback::new(id, date, rating);
        if let Some(customer_id) = self.customer_id {
            entry = entry.with_customer_id(sanitize_id(&customer_id));
        }
        if let Some(employee_id) = self.employee_id {
            entry = entry.with_employee_id(sanitize_id(&employee_id));
        }
        if let Some(comment) = non_empty_comment(self.comment) {
            entry = entry.with_comment(comment);
        }

        Ok(entry)
    }
}

/// Form payload emitted when editing feedback.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditFeedbackForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = ID_MAX_LEN))]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = COMMENT_MAX_LEN))]
    pub comment: Option<String>,
}

impl EditFeedbackForm {
    pub fn into_update_feedback(self) -> FormResult<(String, UpdateFeedback)> {
        self.validate()?;

        let id = sanitize_id(&required(self.id, "ID Feedback")?);
        let mut update = UpdateFeedback::new();

        if let Some(customer_id) = self.customer_id {
            update = update.customer_id(sanitize_id(&customer_id));
        }
        if let Some(employee_id) = self.employee_id {
            update = update.employee_id(sanitize_id(&employee_id));
        }
        if let Some(date) = self.date {
            update = update.date(parse_date(&date, "Tanggal")?);
        }
        if let Some(rating) = self.rating {
            update = update.rating(parse_rating(&rating)?);
        }
        if let Some(comment) = non_empty_comment(self.comment) {
            update = update.comment(comment);
        }

        Ok((id, update))
    }
}

fn parse_rating(value: &str) -> FormResult<i32> {
    let out_of_range = || FormError::OutOfRange {
        field: "Rating",
        min: MIN_RATING.to_string(),
        max: MAX_RATING.to_string(),
    };
    let rating = value.trim().parse::<i32>().map_err(|_| out_of_range())?;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(out_of_range());
    }
    Ok(rating)
}

fn non_empty_comment(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(sanitize_multiline_text)
        .filter(|comment| !comment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AddFeedbackForm {
        AddFeedbackForm {
            id: Some("F006".to_string()),
            customer_id: Some("P002".to_string()),
            employee_id: Some("K003".to_string()),
            date: Some("2024-04-07".to_string()),
            rating: Some("4".to_string()),
            comment: Some("  Porsi pas.  ".to_string()),
        }
    }

    #[test]
    fn add_form_builds_feedback() {
        let entry = filled_form().into_new_feedback().expect("expected conversion");

        assert_eq!(entry.rating, 4);
        assert_eq!(entry.comment.as_deref(), Some("Porsi pas."));
        assert_eq!(entry.employee_id.as_deref(), Some("K003"));
    }

    #[test]
    fn rating_must_stay_within_scale() {
        for rating in ["0", "6", "4.5"] {
            let form = AddFeedbackForm {
                rating: Some(rating.to_string()),
                ..filled_form()
            };

            assert!(
                matches!(
                    form.into_new_feedback(),
                    Err(FormError::OutOfRange { field: "Rating", .. })
                ),
                "rating {rating} should be rejected"
            );
        }
    }

    #[test]
    fn edit_form_with_only_rating() {
        let form = EditFeedbackForm {
            id: Some("F004".to_string()),
            rating: Some("5".to_string()),
            ..Default::default()
        };

        let (id, update) = form.into_update_feedback().expect("expected conversion");

        assert_eq!(id, "F004");
        assert_eq!(update.rating, Some(5));
        assert!(update.comment.is_none());
    }
}
