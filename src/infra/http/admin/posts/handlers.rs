use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::{
    application::{admin::posts::AdminPostError, error::ErrorReport},
    domain::{
        entities::PostRecord,
        posts::{PostAttributes, PostErrors},
    },
    infra::http::admin::{
        AdminState,
        shared::{FlashQuery, found, parse_record_id},
    },
    presentation::{admin::views as admin_views, views::render_template_response},
};

use super::{
    editor::{EditorMode, build_post_editor_view},
    errors::admin_post_error,
    forms::AdminPostForm,
    panel::{
        POSTS_PATH, build_post_detail_view, build_post_list_view, flash_from_status,
        index_categories, post_href,
    },
};

const NOT_FOUND_HREF: &str = "/posts?status=not_found";
const DESTROYED_HREF: &str = "/posts?status=destroyed";

pub(crate) async fn admin_posts(
    State(state): State<AdminState>,
    Query(query): Query<FlashQuery>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_posts";

    let posts = match state.posts.list_posts().await {
        Ok(posts) => posts,
        Err(err) => return admin_post_error(SOURCE, err).into_response(),
    };
    let total = match state.posts.total_posts().await {
        Ok(total) => total,
        Err(err) => return admin_post_error(SOURCE, err).into_response(),
    };
    let categories = match state.posts.list_categories().await {
        Ok(categories) => index_categories(categories),
        Err(err) => return admin_post_error(SOURCE, err).into_response(),
    };

    let content = build_post_list_view(
        &posts,
        total,
        &categories,
        flash_from_status(query.status.as_deref()),
    );
    let chrome = admin_views::AdminChrome::new(POSTS_PATH, "Posts");
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::AdminPostsTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_show(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Query(query): Query<FlashQuery>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_post_show";

    let post = match load_post_or_redirect(&state, &id, SOURCE).await {
        Ok(post) => post,
        Err(response) => return response,
    };
    let category = match state.posts.load_category(post.category_id).await {
        Ok(category) => category,
        Err(err) => return admin_post_error(SOURCE, err).into_response(),
    };

    let content = build_post_detail_view(
        &post,
        category.as_ref(),
        flash_from_status(query.status.as_deref()),
    );
    let chrome = admin_views::AdminChrome::new(POSTS_PATH, post.title.clone());
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::AdminPostShowTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_new(State(state): State<AdminState>) -> Response {
    render_editor(
        &state,
        EditorMode::New,
        &PostAttributes::default(),
        &PostErrors::default(),
        "infra::http::admin_post_new",
    )
    .await
}

pub(crate) async fn admin_post_create(
    State(state): State<AdminState>,
    Form(form): Form<AdminPostForm>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_post_create";

    match state.posts.create_post(form.into()).await {
        Ok(post) => found(&format!("{}?status=created", post_href(post.id))),
        Err(AdminPostError::Invalid(invalid)) => {
            render_editor(
                &state,
                EditorMode::New,
                &invalid.attributes,
                &invalid.errors,
                SOURCE,
            )
            .await
        }
        Err(err) => admin_post_error(SOURCE, err).into_response(),
    }
}

pub(crate) async fn admin_post_edit(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_post_edit";

    let post = match load_post_or_redirect(&state, &id, SOURCE).await {
        Ok(post) => post,
        Err(response) => return response,
    };

    render_editor(
        &state,
        EditorMode::Edit(post.id),
        &PostAttributes::from(&post),
        &PostErrors::default(),
        SOURCE,
    )
    .await
}

pub(crate) async fn admin_post_update(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Form(form): Form<AdminPostForm>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_post_update";

    let post = match load_post_or_redirect(&state, &id, SOURCE).await {
        Ok(post) => post,
        Err(response) => return response,
    };

    match state.posts.update_post(&post, form.into()).await {
        Ok(updated) => found(&format!("{}?status=updated", post_href(updated.id))),
        Err(AdminPostError::Invalid(invalid)) => {
            render_editor(
                &state,
                EditorMode::Edit(post.id),
                &invalid.attributes,
                &invalid.errors,
                SOURCE,
            )
            .await
        }
        Err(err) => admin_post_error(SOURCE, err).into_response(),
    }
}

/// Deletion failures are not recovered into a redirect; they surface as 500.
pub(crate) async fn admin_post_delete(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_post_delete";

    let post = match load_post_or_redirect(&state, &id, SOURCE).await {
        Ok(post) => post,
        Err(response) => return response,
    };

    match state.posts.delete_post(&post).await {
        Ok(()) => Redirect::to(DESTROYED_HREF).into_response(),
        Err(err) => admin_post_error(SOURCE, err).into_response(),
    }
}

async fn load_post_or_redirect(
    state: &AdminState,
    raw_id: &str,
    source: &'static str,
) -> Result<PostRecord, Response> {
    let Some(id) = parse_record_id(raw_id) else {
        return Err(post_not_found(raw_id, source));
    };

    match state.posts.load_post(id).await {
        Ok(Some(post)) => Ok(post),
        Ok(None) => Err(post_not_found(raw_id, source)),
        Err(err) => Err(admin_post_error(source, err).into_response()),
    }
}

fn post_not_found(raw_id: &str, source: &'static str) -> Response {
    info!(
        target: "postboard::admin::posts",
        post_id = raw_id,
        source = source,
        "Post not found, redirecting to the list"
    );
    found(NOT_FOUND_HREF)
}

async fn render_editor(
    state: &AdminState,
    mode: EditorMode,
    attributes: &PostAttributes,
    errors: &PostErrors,
    source: &'static str,
) -> Response {
    let categories = match state.posts.list_categories().await {
        Ok(categories) => index_categories(categories),
        Err(err) => return admin_post_error(source, err).into_response(),
    };

    let content = build_post_editor_view(mode, attributes, errors, &categories);
    let chrome = admin_views::AdminChrome::new(POSTS_PATH, content.heading.clone());
    let view = admin_views::AdminLayout::new(chrome, content);

    let template = admin_views::AdminPostEditorTemplate { view };
    if errors.is_empty() {
        return render_template_response(template, StatusCode::OK);
    }

    let status = StatusCode::UNPROCESSABLE_ENTITY;
    let mut response = render_template_response(template, status);
    ErrorReport::from_message(source, status, errors.to_string()).attach(&mut response);
    response
}
