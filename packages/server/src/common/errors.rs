use thiserror::Error;

/// Errors surfaced by the persistence layer.
///
/// "Zero rows" is its own variant rather than a backend error code, so
/// callers can treat an absent row as a valid outcome wherever the read is
/// optional (a user with no subscription yet, an already-swept listing).
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DataError {
    /// Collapse sqlx's row-not-found into the `NotFound` variant.
    pub fn from_fetch(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DataError::NotFound,
            other => DataError::Database(other),
        }
    }
}
