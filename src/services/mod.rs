//! Business operations shared by the HTML routes and the JSON API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::listing::Listing;
use crate::forms::{FormError, parse_or_ignore, parse_or_none};
use crate::repository::RepositoryError;

pub mod attendance;
pub mod customers;
pub mod employees;
pub mod export;
pub mod feedback;
pub mod main;
pub mod menu;
pub mod raw_materials;
pub mod reports;
pub mod suppliers;
pub mod transactions;

/// Result type returned by every service function.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome categories the routes translate into flash messages or status codes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database unavailable: {0}")]
    Connection(String),
    /// The identifier is already taken.
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    /// Submitted data failed validation; the message is shown to the user.
    #[error("{0}")]
    Form(String),
    #[error("nothing to update")]
    NothingToUpdate,
    /// A referenced row is missing, or the row is still referenced elsewhere.
    #[error("reference violation: {0}")]
    Reference(String),
    #[error("data error: {0}")]
    Data(String),
    /// Export requested for an empty table or report.
    #[error("no data available")]
    NoData,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Connection(message) => ServiceError::Connection(message),
            RepositoryError::Conflict => ServiceError::Conflict,
            RepositoryError::ForeignKey(message) => ServiceError::Reference(message),
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::NothingToUpdate => ServiceError::NothingToUpdate,
            RepositoryError::Database(message) => ServiceError::Data(message),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

/// Screen mode picked with the `action` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Tambah,
    #[default]
    Lihat,
    Perbarui,
    Hapus,
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tambah" => Ok(Action::Tambah),
            "lihat" => Ok(Action::Lihat),
            "perbarui" => Ok(Action::Perbarui),
            "hapus" => Ok(Action::Hapus),
            other => Err(format!("unknown action `{other}`")),
        }
    }
}

/// Query parameters accepted by every entity screen.
#[derive(Debug, Default, Deserialize)]
pub struct EntityQuery {
    /// Unknown actions fall back to the listing.
    #[serde(default, deserialize_with = "parse_or_ignore")]
    pub action: Option<Action>,
    /// Row preselected in the update/delete selectors.
    #[serde(default, deserialize_with = "parse_or_none")]
    pub id: Option<String>,
}

/// `value - label` entry of a record selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

impl PickerOption {
    pub fn new(value: impl Into<String>, label: impl AsRef<str>) -> Self {
        let value = value.into();
        let label = format!("{value} - {}", label.as_ref());
        Self { value, label }
    }
}

/// Records that can be offered in a selector.
pub trait Pickable {
    fn picker_option(&self) -> PickerOption;
}

pub(crate) fn picker_options<T: Pickable>(listing: &Listing<T>) -> Vec<PickerOption> {
    listing.rows().iter().map(Pickable::picker_option).collect()
}

/// Everything an entity template needs to render one screen.
#[derive(Debug, Serialize)]
pub struct EntityPage<T> {
    pub action: Action,
    pub listing: Listing<T>,
    /// Selector entries for the update/delete forms.
    pub options: Vec<PickerOption>,
    /// Record the update/delete form is currently pointed at.
    pub selected: Option<T>,
    /// Selector entries for referenced tables, keyed by template name.
    pub references: BTreeMap<&'static str, Vec<PickerOption>>,
}

impl<T: Pickable> EntityPage<T> {
    pub fn new(action: Action, listing: Listing<T>, selected: Option<T>) -> Self {
        let options = picker_options(&listing);
        Self {
            action,
            listing,
            options,
            selected,
            references: BTreeMap::new(),
        }
    }

    pub fn with_reference(mut self, name: &'static str, options: Vec<PickerOption>) -> Self {
        self.references.insert(name, options);
        self
    }
}

/// Bytes of a CSV download together with the file name offered to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}
