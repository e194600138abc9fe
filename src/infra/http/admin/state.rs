use std::sync::Arc;

use crate::application::admin::{categories::AdminCategoryService, posts::AdminPostService};
use crate::application::repos::HealthRepo;

#[derive(Clone)]
pub struct AdminState {
    pub posts: Arc<AdminPostService>,
    pub categories: Arc<AdminCategoryService>,
    pub health: Arc<dyn HealthRepo>,
}
