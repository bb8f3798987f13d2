use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::feedback::{
    Feedback as DomainFeedback, NewFeedback as DomainNewFeedback,
    UpdateFeedback as DomainUpdateFeedback,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::feedback, primary_key(feedback_id))]
pub struct Feedback {
    pub feedback_id: String,
    pub pelanggan_id: Option<String>,
    pub karyawan_id: Option<String>,
    pub tanggal: NaiveDate,
    pub rating: i32,
    pub komentar: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::feedback)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewFeedback<'a> {
    pub feedback_id: &'a str,
    pub pelanggan_id: Option<&'a str>,
    pub karyawan_id: Option<&'a str>,
    pub tanggal: NaiveDate,
    pub rating: i32,
    pub komentar: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::feedback)]
pub struct UpdateFeedback<'a> {
    pub pelanggan_id: Option<&'a str>,
    pub karyawan_id: Option<&'a str>,
    pub tanggal: Option<NaiveDate>,
    pub rating: Option<i32>,
    pub komentar: Option<&'a str>,
}

impl From<Feedback> for DomainFeedback {
    fn from(value: Feedback) -> Self {
        Self {
            id: value.feedback_id,
            customer_id: value.pelanggan_id,
            employee_id: value.karyawan_id,
            date: value.tanggal,
            rating: value.rating,
            comment: value.komentar,
        }
    }
}

impl<'a> From<&'a DomainNewFeedback> for NewFeedback<'a> {
    fn from(value: &'a DomainNewFeedback) -> Self {
        Self {
            feedback_id: value.id.as_str(),
            pelanggan_id: value.customer_id.as_deref(),
            karyawan_id: value.employee_id.as_deref(),
            tanggal: value.date,
            rating: value.rating,
            komentar: value.comment.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateFeedback> for UpdateFeedback<'a> {
    fn from(value: &'a DomainUpdateFeedback) -> Self {
        Self {
            pelanggan_id: value.customer_id.as_deref(),
            karyawan_id: value.employee_id.as_deref(),
            tanggal: value.date,
            rating: value.rating,
            komentar: value.comment.as_deref(),
        }
    }
}
