//! Form payloads posted by the entity screens and their conversion into domain values.
//!
//! Every field arrives as optional text; blank inputs are treated as absent.
//! Add forms require their mandatory fields, edit forms only carry what the
//! user actually filled in.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::UnknownVariant;

pub mod attendance;
pub mod customers;
pub mod employees;
pub mod feedback;
pub mod menu;
pub mod raw_materials;
pub mod suppliers;
pub mod transactions;

/// Maximum allowed length for a record identifier.
pub(crate) const ID_MAX_LEN: u64 = 32;
/// Maximum allowed length for names and other single-line text.
pub(crate) const TEXT_MAX_LEN: u64 = 255;
/// Maximum allowed length for free-form comments.
pub(crate) const COMMENT_MAX_LEN: u64 = 2000;

/// Result type returned by the form helpers.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while processing entity forms.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failures from the `validator` crate.
    #[error("data tidak valid: {0}")]
    Validation(#[from] ValidationErrors),
    /// A mandatory field was left blank.
    #[error("kolom {0} wajib diisi")]
    MissingField(&'static str),
    /// A numeric field could not be parsed.
    #[error("kolom {field} harus berupa angka, bukan `{value}`")]
    InvalidNumber { field: &'static str, value: String },
    /// A date field is not in `YYYY-MM-DD` form.
    #[error("kolom {field} harus berupa tanggal YYYY-MM-DD, bukan `{value}`")]
    InvalidDate { field: &'static str, value: String },
    /// A numeric field is outside its allowed range.
    #[error("kolom {field} harus bernilai antara {min} dan {max}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
    },
    /// A numeric field that must not be negative was negative.
    #[error("kolom {0} tidak boleh negatif")]
    Negative(&'static str),
    /// A choice field carried a value outside the offered options.
    #[error("pilihan tidak dikenal: {0}")]
    UnknownChoice(#[from] UnknownVariant),
}

/// Deserialize a form value, mapping blank input to `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

/// Deserialize a query value through `FromStr`, mapping blank input to `None`.
pub fn parse_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Deserialize a query value through `FromStr`, dropping values that do not parse.
pub fn parse_or_ignore<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse::<T>().ok()))
}

pub(crate) fn required(value: Option<String>, field: &'static str) -> FormResult<String> {
    value.ok_or(FormError::MissingField(field))
}

/// Trim an identifier; identifiers never contain inner whitespace changes.
pub(crate) fn sanitize_id(input: &str) -> String {
    input.trim().to_string()
}

/// Collapse whitespace runs and strip control characters from single-line input.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Like [`sanitize_inline_text`] but keeps line breaks.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    input
        .trim()
        .lines()
        .map(sanitize_inline_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sanitized text that is `None` when nothing meaningful remains.
pub(crate) fn non_empty_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(sanitize_inline_text)
        .filter(|text| !text.is_empty())
}

pub(crate) fn parse_date(value: &str, field: &'static str) -> FormResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: value.trim().to_string(),
    })
}

pub(crate) fn parse_amount(value: &str, field: &'static str) -> FormResult<f64> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })?;
    if parsed < 0.0 {
        return Err(FormError::Negative(field));
    }
    Ok(parsed)
}

pub(crate) fn parse_count(value: &str, field: &'static str) -> FormResult<i32> {
    let parsed = value
        .trim()
        .parse::<i32>()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })?;
    if parsed < 0 {
        return Err(FormError::Negative(field));
    }
    Ok(parsed)
}
