//! In-memory repositories and request helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response, header},
};
use postboard::{
    application::{
        admin::{categories::AdminCategoryService, posts::AdminPostService},
        repos::{
            CategoriesRepo, CategoriesWriteRepo, CreateCategoryParams, CreatePostParams,
            HealthRepo, PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams,
        },
    },
    domain::{
        entities::{CategoryRecord, PostRecord},
        posts::PostParams,
    },
    infra::http::{AdminState, build_admin_router},
};
use time::{Duration, OffsetDateTime, macros::datetime};
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

const BASE_TIME: OffsetDateTime = datetime!(2025-07-10 12:00 UTC);

#[derive(Default)]
pub struct InMemoryStore {
    posts: Mutex<Vec<PostRecord>>,
    categories: Mutex<Vec<CategoryRecord>>,
    ticks: AtomicI64,
    fail_deletes: AtomicBool,
    orphan_writes: AtomicBool,
    unreachable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    /// Post writes fail as if their category was removed after validation.
    pub fn orphan_writes(&self) {
        self.orphan_writes.store(true, Ordering::SeqCst);
    }

    fn check_category_reference(&self) -> Result<(), RepoError> {
        if self.orphan_writes.load(Ordering::SeqCst) {
            return Err(RepoError::MissingReference {
                constraint: "posts_category_id_fkey".to_string(),
            });
        }
        Ok(())
    }

    pub fn go_offline(&self) {
        self.unreachable.store(true, Ordering::SeqCst);
    }

    pub async fn posts(&self) -> Vec<PostRecord> {
        self.posts.lock().await.clone()
    }

    pub async fn post(&self, id: Uuid) -> Option<PostRecord> {
        self.posts
            .lock()
            .await
            .iter()
            .find(|post| post.id == id)
            .cloned()
    }

    fn next_timestamp(&self) -> OffsetDateTime {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        BASE_TIME + Duration::seconds(tick)
    }
}

#[async_trait]
impl PostsRepo for InMemoryStore {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        Ok(self.posts.lock().await.clone())
    }

    async fn count_posts(&self) -> Result<u64, RepoError> {
        Ok(self.posts.lock().await.len() as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.post(id).await)
    }
}

#[async_trait]
impl PostsWriteRepo for InMemoryStore {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        self.check_category_reference()?;
        let now = self.next_timestamp();
        let post = PostRecord {
            id: Uuid::new_v4(),
            title: params.title,
            summary: params.summary,
            body: params.body,
            active: params.active,
            views: 0,
            category_id: params.category_id,
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().await.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        self.check_category_reference()?;
        let now = self.next_timestamp();
        let mut posts = self.posts.lock().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == params.id)
            .ok_or(RepoError::NotFound)?;

        post.title = params.title;
        post.summary = params.summary;
        post.body = params.body;
        post.active = params.active;
        post.category_id = params.category_id;
        post.updated_at = now;

        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), RepoError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(RepoError::from_persistence("simulated delete failure"));
        }

        let mut posts = self.posts.lock().await;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoriesRepo for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, RepoError> {
        Ok(self.categories.lock().await.clone())
    }

    async fn find_category(&self, id: Uuid) -> Result<Option<CategoryRecord>, RepoError> {
        Ok(self
            .categories
            .lock()
            .await
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }
}

#[async_trait]
impl CategoriesWriteRepo for InMemoryStore {
    async fn create_category(
        &self,
        params: CreateCategoryParams,
    ) -> Result<CategoryRecord, RepoError> {
        let now = self.next_timestamp();
        let category = CategoryRecord {
            id: Uuid::new_v4(),
            title: params.title,
            url: params.url,
            created_at: now,
            updated_at: now,
        };
        self.categories.lock().await.push(category.clone());
        Ok(category)
    }
}

#[async_trait]
impl HealthRepo for InMemoryStore {
    async fn ping(&self) -> Result<(), RepoError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(RepoError::Timeout);
        }
        Ok(())
    }
}

pub fn post_service(store: &Arc<InMemoryStore>) -> AdminPostService {
    AdminPostService::new(store.clone(), store.clone(), store.clone())
}

pub fn category_service(store: &Arc<InMemoryStore>) -> AdminCategoryService {
    AdminCategoryService::new(store.clone(), store.clone())
}

pub fn app(store: &Arc<InMemoryStore>) -> Router {
    build_admin_router(AdminState {
        posts: Arc::new(post_service(store)),
        categories: Arc::new(category_service(store)),
        health: store.clone(),
    })
}

pub async fn seed_category(store: &Arc<InMemoryStore>, title: &str) -> CategoryRecord {
    store
        .create_category(CreateCategoryParams {
            title: Some(title.to_string()),
            url: None,
        })
        .await
        .expect("seed category")
}

pub async fn seed_post(store: &Arc<InMemoryStore>, category_id: Uuid) -> PostRecord {
    store
        .create_post(CreatePostParams {
            title: "Hi".to_string(),
            summary: "Short".to_string(),
            body: "Long enough body".to_string(),
            active: true,
            category_id,
        })
        .await
        .expect("seed post")
}

pub fn valid_params(category_id: Uuid) -> PostParams {
    PostParams {
        title: Some("Hi".to_string()),
        summary: Some("Short".to_string()),
        body: Some("Long enough body".to_string()),
        active: Some("1".to_string()),
        category_id: Some(category_id.to_string()),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

pub fn form(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_string()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
