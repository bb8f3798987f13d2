use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::UnknownVariant;

const FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";
const UNIQUE_FAILED: &str = "UNIQUE constraint failed";

/// Result type used by every repository method.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the diesel-backed repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database could not be reached or no pooled connection was available.
    #[error("database connection failed: {0}")]
    Connection(String),
    /// An insert collided with an existing primary key.
    #[error("a record with this identifier already exists")]
    Conflict,
    /// A foreign key points to a missing row, or a row is still referenced.
    #[error("referential integrity violated: {0}")]
    ForeignKey(String),
    /// No row matched the given identifier.
    #[error("record not found")]
    NotFound,
    /// A partial update carried no fields.
    #[error("no fields supplied for update")]
    NothingToUpdate,
    /// Any other database failure, message kept verbatim.
    #[error("database error: {0}")]
    Database(String),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepositoryError::Conflict
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                RepositoryError::ForeignKey(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                RepositoryError::Connection(info.message().to_string())
            }
            // SQLite reports a restricted delete with a generic constraint code.
            DieselError::DatabaseError(_, info)
                if info.message().starts_with(FOREIGN_KEY_FAILED) =>
            {
                RepositoryError::ForeignKey(info.message().to_string())
            }
            DieselError::DatabaseError(_, info) if info.message().starts_with(UNIQUE_FAILED) => {
                RepositoryError::Conflict
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<diesel::ConnectionError> for RepositoryError {
    fn from(err: diesel::ConnectionError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<UnknownVariant> for RepositoryError {
    fn from(err: UnknownVariant) -> Self {
        RepositoryError::Database(err.to_string())
    }
}
