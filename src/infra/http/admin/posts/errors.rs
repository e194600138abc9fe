use axum::http::StatusCode;

use crate::application::{admin::posts::AdminPostError, error::HttpError};

pub(super) fn admin_post_error(source: &'static str, err: AdminPostError) -> HttpError {
    match err {
        AdminPostError::Invalid(invalid) => HttpError::new(
            source,
            StatusCode::UNPROCESSABLE_ENTITY,
            "Post request could not be processed",
            invalid.errors.to_string(),
        ),
        AdminPostError::Repo(repo) => HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            &repo,
        ),
    }
}
