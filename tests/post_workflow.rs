mod support;

use postboard::{
    application::{
        admin::{categories::CreateCategoryCommand, posts::AdminPostError},
        repos::RepoError,
    },
    domain::posts::{BLANK, BODY_TOO_SHORT, MUST_EXIST, PostField, PostParams, SUMMARY_TOO_LONG},
};
use uuid::Uuid;

use support::{InMemoryStore, category_service, post_service, seed_category, valid_params};

#[tokio::test]
async fn create_persists_a_valid_post_with_zero_views() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);

    let post = service
        .create_post(valid_params(category.id))
        .await
        .expect("valid post should be created");

    assert_eq!(post.title, "Hi");
    assert_eq!(post.summary, "Short");
    assert!(post.active);
    assert_eq!(post.views, 0);
    assert_eq!(post.category_id, category.id);
    assert_eq!(store.posts().await, vec![post]);
}

#[tokio::test]
async fn create_reports_every_failing_field() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);

    let params = PostParams {
        title: Some(String::new()),
        body: Some("tiny".to_string()),
        ..valid_params(category.id)
    };

    let Err(AdminPostError::Invalid(invalid)) = service.create_post(params).await else {
        panic!("expected validation failure");
    };

    assert_eq!(invalid.errors.len(), 2);
    assert!(invalid.errors.contains(PostField::Title, BLANK));
    assert!(invalid.errors.contains(PostField::Body, BODY_TOO_SHORT));
    assert_eq!(invalid.attributes.body, "tiny");
    assert!(store.posts().await.is_empty());
}

#[tokio::test]
async fn create_requires_an_existing_category() {
    let store = InMemoryStore::new();
    let service = post_service(&store);

    let Err(AdminPostError::Invalid(invalid)) =
        service.create_post(valid_params(Uuid::new_v4())).await
    else {
        panic!("expected validation failure");
    };

    assert_eq!(invalid.errors.on(PostField::Category), vec![MUST_EXIST]);
    assert!(store.posts().await.is_empty());
}

#[tokio::test]
async fn category_removed_before_the_write_is_a_validation_failure() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);
    store.orphan_writes();

    let Err(AdminPostError::Invalid(invalid)) =
        service.create_post(valid_params(category.id)).await
    else {
        panic!("expected validation failure");
    };

    assert_eq!(invalid.errors.full_messages(), vec!["Category must exist".to_string()]);
    assert_eq!(invalid.attributes.category_id, Some(category.id));
    assert!(store.posts().await.is_empty());
}

#[tokio::test]
async fn update_applies_only_submitted_fields() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);
    let post = service
        .create_post(valid_params(category.id))
        .await
        .expect("create");

    let updated = service
        .update_post(
            &post,
            PostParams {
                title: Some("Renamed".to_string()),
                ..PostParams::default()
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.summary, post.summary);
    assert_eq!(updated.body, post.body);
    assert_eq!(updated.created_at, post.created_at);
    assert_eq!(store.post(post.id).await, Some(updated));
}

#[tokio::test]
async fn failed_update_leaves_the_stored_post_untouched() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);
    let post = service
        .create_post(valid_params(category.id))
        .await
        .expect("create");

    let result = service
        .update_post(
            &post,
            PostParams {
                summary: Some("This is far too long".to_string()),
                ..PostParams::default()
            },
        )
        .await;

    let Err(AdminPostError::Invalid(invalid)) = result else {
        panic!("expected validation failure");
    };
    assert!(invalid.errors.contains(PostField::Summary, SUMMARY_TOO_LONG));
    assert_eq!(store.post(post.id).await, Some(post));
}

#[tokio::test]
async fn deleted_post_can_no_longer_be_loaded() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);
    let post = service
        .create_post(valid_params(category.id))
        .await
        .expect("create");

    service.delete_post(&post).await.expect("delete");

    assert_eq!(service.load_post(post.id).await.expect("load"), None);
    assert_eq!(service.total_posts().await.expect("count"), 0);
}

#[tokio::test]
async fn delete_failures_surface_as_repo_errors() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);
    let post = service
        .create_post(valid_params(category.id))
        .await
        .expect("create");
    store.fail_deletes();

    let result = service.delete_post(&post).await;

    assert!(matches!(
        result,
        Err(AdminPostError::Repo(RepoError::Persistence(_)))
    ));
    assert!(store.post(post.id).await.is_some());
}

#[tokio::test]
async fn posts_are_listed_in_creation_order() {
    let store = InMemoryStore::new();
    let category = seed_category(&store, "News").await;
    let service = post_service(&store);

    let first = service
        .create_post(valid_params(category.id))
        .await
        .expect("first");
    let second = service
        .create_post(PostParams {
            title: Some("Second".to_string()),
            ..valid_params(category.id)
        })
        .await
        .expect("second");

    let ids: Vec<Uuid> = service
        .list_posts()
        .await
        .expect("list")
        .into_iter()
        .map(|post| post.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(service.total_posts().await.expect("count"), 2);
}

#[tokio::test]
async fn blank_category_fields_are_absent_and_others_kept_as_submitted() {
    let store = InMemoryStore::new();
    let service = category_service(&store);

    let category = service
        .create_category(CreateCategoryCommand {
            title: Some("  Travel ".to_string()),
            url: Some("   ".to_string()),
        })
        .await
        .expect("category should be created");

    assert_eq!(category.title.as_deref(), Some("  Travel "));
    assert_eq!(category.url, None);
    assert_eq!(service.list().await.expect("list"), vec![category]);
}
