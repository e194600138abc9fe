mod categories;
mod health;
mod posts;
mod shared;
mod state;
mod welcome;

pub use state::AdminState;

use axum::{Router, middleware, routing::get};

use super::middleware::{log_responses, method_override, set_request_context};

pub fn build_admin_router(state: AdminState) -> Router {
    let routes = Router::new()
        .route("/", get(welcome::welcome_home))
        .route("/welcome/about", get(welcome::welcome_about))
        .route("/welcome/contact", get(welcome::welcome_contact))
        .route("/welcome/features", get(welcome::welcome_features))
        .route(
            "/posts",
            get(posts::admin_posts).post(posts::admin_post_create),
        )
        .route("/posts/new", get(posts::admin_post_new))
        .route(
            "/posts/{id}",
            get(posts::admin_post_show)
                .patch(posts::admin_post_update)
                .put(posts::admin_post_update)
                .delete(posts::admin_post_delete),
        )
        .route("/posts/{id}/edit", get(posts::admin_post_edit))
        .route(
            "/categories",
            get(categories::admin_categories).post(categories::admin_category_create),
        )
        .route("/categories/new", get(categories::admin_category_new))
        .route("/_health/db", get(health::admin_health))
        .with_state(state);

    // The override runs ahead of routing, so the routes sit behind a fallback.
    Router::new()
        .fallback_service(routes)
        .layer(middleware::from_fn(method_override))
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}
