use metrics::counter;
use tracing::{info, warn};

use crate::application::repos::{CreatePostParams, RepoError, UpdatePostParams};
use crate::domain::entities::PostRecord;
use crate::domain::posts::{
    InvalidPost, MUST_EXIST, PostAttributes, PostErrors, PostField, PostParams, ValidPost,
};

use super::service::AdminPostService;
use super::types::AdminPostError;

impl AdminPostService {
    pub async fn create_post(&self, params: PostParams) -> Result<PostRecord, AdminPostError> {
        let mut attributes = PostAttributes::default();
        attributes.assign(params);
        let valid = self.validate(attributes.clone()).await?;

        let post = self
            .writer
            .create_post(CreatePostParams {
                title: valid.title,
                summary: valid.summary,
                body: valid.body,
                active: valid.active,
                category_id: valid.category_id,
            })
            .await
            .map_err(|err| write_error(attributes, err))?;

        counter!("postboard_posts_created_total").increment(1);
        info!(
            target: "postboard::admin::posts",
            post_id = %post.id,
            category_id = %post.category_id,
            "Created post"
        );

        Ok(post)
    }

    /// Applies only the submitted fields on top of the stored post.
    pub async fn update_post(
        &self,
        post: &PostRecord,
        params: PostParams,
    ) -> Result<PostRecord, AdminPostError> {
        let mut attributes = PostAttributes::from(post);
        attributes.assign(params);
        let valid = self.validate(attributes.clone()).await?;

        let updated = self
            .writer
            .update_post(UpdatePostParams {
                id: post.id,
                title: valid.title,
                summary: valid.summary,
                body: valid.body,
                active: valid.active,
                category_id: valid.category_id,
            })
            .await
            .map_err(|err| write_error(attributes, err))?;

        counter!("postboard_posts_updated_total").increment(1);
        info!(
            target: "postboard::admin::posts",
            post_id = %updated.id,
            "Updated post"
        );

        Ok(updated)
    }

    pub async fn delete_post(&self, post: &PostRecord) -> Result<(), AdminPostError> {
        self.writer.delete_post(post.id).await?;

        counter!("postboard_posts_deleted_total").increment(1);
        info!(
            target: "postboard::admin::posts",
            post_id = %post.id,
            "Deleted post"
        );

        Ok(())
    }

    async fn validate(&self, attributes: PostAttributes) -> Result<ValidPost, AdminPostError> {
        let category_exists = match attributes.category_id {
            Some(id) => self.categories.find_category(id).await?.is_some(),
            None => false,
        };

        attributes.into_valid(category_exists).map_err(|invalid| {
            counter!("postboard_post_validation_failures_total").increment(1);
            warn!(
                target: "postboard::admin::posts",
                errors = %invalid.errors,
                "Rejected post attributes"
            );
            AdminPostError::from(invalid)
        })
    }
}

/// A category removed between validation and the write surfaces as the
/// same `must exist` failure the validation would have reported.
fn write_error(attributes: PostAttributes, err: RepoError) -> AdminPostError {
    match err {
        RepoError::MissingReference { constraint } => {
            counter!("postboard_post_validation_failures_total").increment(1);
            warn!(
                target: "postboard::admin::posts",
                constraint = %constraint,
                "Post references a category that no longer exists"
            );
            let mut errors = PostErrors::default();
            errors.add(PostField::Category, MUST_EXIST);
            AdminPostError::from(InvalidPost { attributes, errors })
        }
        other => AdminPostError::Repo(other),
    }
}
