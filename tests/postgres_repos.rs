//! Exercises the Postgres adapters against a real database.
//!
//! Marked `#[ignore]` so it only runs manually with `DATABASE_URL` pointing at
//! a Postgres server where test databases may be created.

use postboard::application::repos::{
    CategoriesRepo, CategoriesWriteRepo, CreateCategoryParams, CreatePostParams, HealthRepo,
    PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams,
};
use postboard::infra::db::PostgresRepositories;
use sqlx::PgPool;
use uuid::Uuid;

async fn seed(repos: &PostgresRepositories) -> Uuid {
    repos
        .create_category(CreateCategoryParams {
            title: Some("News".to_string()),
            url: None,
        })
        .await
        .expect("category insert")
        .id
}

fn create_params(category_id: Uuid, title: &str) -> CreatePostParams {
    CreatePostParams {
        title: title.to_string(),
        summary: "Short".to_string(),
        body: "Long enough body".to_string(),
        active: true,
        category_id,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn posts_round_trip_through_postgres(pool: PgPool) {
    let repos = PostgresRepositories::new(pool);
    let category_id = seed(&repos).await;

    let first = repos
        .create_post(create_params(category_id, "First"))
        .await
        .expect("insert first");
    let second = repos
        .create_post(create_params(category_id, "Second"))
        .await
        .expect("insert second");
    assert_eq!(first.views, 0);

    let listed: Vec<Uuid> = repos
        .list_posts()
        .await
        .expect("list")
        .into_iter()
        .map(|post| post.id)
        .collect();
    assert_eq!(listed, vec![first.id, second.id]);
    assert_eq!(repos.count_posts().await.expect("count"), 2);

    let updated = repos
        .update_post(UpdatePostParams {
            id: first.id,
            title: "Renamed".to_string(),
            summary: first.summary.clone(),
            body: first.body.clone(),
            active: false,
            category_id,
        })
        .await
        .expect("update");
    assert_eq!(updated.title, "Renamed");
    assert!(!updated.active);
    assert_eq!(updated.created_at, first.created_at);

    repos.delete_post(first.id).await.expect("delete");
    assert_eq!(repos.find_by_id(first.id).await.expect("find"), None);
    assert!(matches!(
        repos.delete_post(first.id).await,
        Err(RepoError::NotFound)
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn categories_and_health_use_the_pool(pool: PgPool) {
    let repos = PostgresRepositories::new(pool);
    let category_id = seed(&repos).await;

    let found = repos
        .find_category(category_id)
        .await
        .expect("find category")
        .expect("category exists");
    assert_eq!(found.title.as_deref(), Some("News"));
    assert_eq!(repos.list_categories().await.expect("list").len(), 1);
    assert_eq!(
        repos.find_category(Uuid::new_v4()).await.expect("lookup"),
        None
    );

    repos.ping().await.expect("database should answer");
}
