use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::application::repos::{
    CategoriesRepo, CategoriesWriteRepo, CreateCategoryParams, RepoError,
};
use crate::domain::entities::CategoryRecord;

#[derive(Debug, Error)]
pub enum AdminCategoryError {
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone)]
pub struct AdminCategoryService {
    reader: Arc<dyn CategoriesRepo>,
    writer: Arc<dyn CategoriesWriteRepo>,
}

impl AdminCategoryService {
    pub fn new(reader: Arc<dyn CategoriesRepo>, writer: Arc<dyn CategoriesWriteRepo>) -> Self {
        Self { reader, writer }
    }

    pub async fn list(&self) -> Result<Vec<CategoryRecord>, AdminCategoryError> {
        self.reader
            .list_categories()
            .await
            .map_err(AdminCategoryError::from)
    }

    /// Categories carry no field rules; blank values are stored as absent.
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CategoryRecord, AdminCategoryError> {
        let params = CreateCategoryParams {
            title: non_blank(command.title),
            url: non_blank(command.url),
        };

        let category = self.writer.create_category(params).await?;
        info!(
            target: "postboard::admin::categories",
            category_id = %category.id,
            "Created category"
        );

        Ok(category)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
