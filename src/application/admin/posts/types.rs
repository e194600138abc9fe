use thiserror::Error;

use crate::{application::repos::RepoError, domain::posts::InvalidPost};

#[derive(Debug, Error)]
pub enum AdminPostError {
    #[error("post is invalid: {}", .0.errors)]
    Invalid(Box<InvalidPost>),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<InvalidPost> for AdminPostError {
    fn from(invalid: InvalidPost) -> Self {
        Self::Invalid(Box::new(invalid))
    }
}
