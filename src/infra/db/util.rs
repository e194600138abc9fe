use sqlx::error::{DatabaseError, ErrorKind};

use crate::application::repos::RepoError;

/// SQLSTATE `22P02`, raised for malformed literals such as a bad UUID.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// SQLSTATE `57014`, raised when a statement timeout cancels a query.
const QUERY_CANCELED: &str = "57014";

pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::PoolTimedOut => RepoError::Timeout,
        sqlx::Error::Database(db) => map_database_error(db.as_ref()),
        other => RepoError::from_persistence(other),
    }
}

fn map_database_error(db: &dyn DatabaseError) -> RepoError {
    let constraint = || db.constraint().unwrap_or("unknown").to_string();

    match db.kind() {
        ErrorKind::UniqueViolation => RepoError::Duplicate {
            constraint: constraint(),
        },
        ErrorKind::ForeignKeyViolation => RepoError::MissingReference {
            constraint: constraint(),
        },
        ErrorKind::NotNullViolation | ErrorKind::CheckViolation => RepoError::Integrity {
            message: db.message().to_string(),
        },
        _ => match db.code().as_deref() {
            Some(INVALID_TEXT_REPRESENTATION) => RepoError::InvalidInput {
                message: db.message().to_string(),
            },
            Some(QUERY_CANCELED) => RepoError::Timeout,
            _ => RepoError::from_persistence(db.message()),
        },
    }
}
