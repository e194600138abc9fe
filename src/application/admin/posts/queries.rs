use uuid::Uuid;

use crate::domain::entities::{CategoryRecord, PostRecord};

use super::service::AdminPostService;
use super::types::AdminPostError;

impl AdminPostService {
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, AdminPostError> {
        self.reader.list_posts().await.map_err(AdminPostError::from)
    }

    pub async fn total_posts(&self) -> Result<u64, AdminPostError> {
        self.reader.count_posts().await.map_err(AdminPostError::from)
    }

    pub async fn load_post(&self, id: Uuid) -> Result<Option<PostRecord>, AdminPostError> {
        self.reader
            .find_by_id(id)
            .await
            .map_err(AdminPostError::from)
    }

    /// Categories offered by the post form.
    pub async fn list_categories(&self) -> Result<Vec<CategoryRecord>, AdminPostError> {
        self.categories
            .list_categories()
            .await
            .map_err(AdminPostError::from)
    }

    pub async fn load_category(&self, id: Uuid) -> Result<Option<CategoryRecord>, AdminPostError> {
        self.categories
            .find_category(id)
            .await
            .map_err(AdminPostError::from)
    }
}
