use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    application::{
        admin::categories::{AdminCategoryError, CreateCategoryCommand},
        error::HttpError,
    },
    domain::entities::CategoryRecord,
    infra::http::repo_error_to_http,
    presentation::{
        admin::views::{self as admin_views, AdminFlashMessage},
        views::render_template_response,
    },
};

use super::{
    AdminState,
    shared::{FlashQuery, flash_message, found},
};

const CATEGORIES_PATH: &str = "/categories";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdminCategoryForm {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
}

pub(super) async fn admin_categories(
    State(state): State<AdminState>,
    Query(query): Query<FlashQuery>,
) -> Response {
    let categories = match state.categories.list().await {
        Ok(categories) => categories,
        Err(err) => {
            return admin_category_error("infra::http::admin_categories", err).into_response();
        }
    };

    let content = admin_views::AdminCategoryListView {
        heading: "Categories".to_string(),
        categories: categories.iter().map(category_row).collect(),
        new_category_href: format!("{CATEGORIES_PATH}/new"),
        flash: flash_from_status(query.status.as_deref()),
    };
    let chrome = admin_views::AdminChrome::new(CATEGORIES_PATH, "Categories");
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::AdminCategoriesTemplate { view }, StatusCode::OK)
}

pub(super) async fn admin_category_new() -> Response {
    let content = admin_views::AdminCategoryEditorView {
        heading: "New category".to_string(),
        form_action: CATEGORIES_PATH.to_string(),
        submit_label: "Create Category".to_string(),
        back_href: CATEGORIES_PATH.to_string(),
    };
    let chrome = admin_views::AdminChrome::new(CATEGORIES_PATH, "New category");
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::AdminCategoryNewTemplate { view }, StatusCode::OK)
}

pub(super) async fn admin_category_create(
    State(state): State<AdminState>,
    Form(form): Form<AdminCategoryForm>,
) -> Response {
    let command = CreateCategoryCommand {
        title: form.title,
        url: form.url,
    };

    match state.categories.create_category(command).await {
        Ok(_) => found(&format!("{CATEGORIES_PATH}?status=created")),
        Err(err) => admin_category_error("infra::http::admin_category_create", err).into_response(),
    }
}

fn category_row(category: &CategoryRecord) -> admin_views::AdminCategoryRowView {
    admin_views::AdminCategoryRowView {
        title: category.display_title().to_string(),
        url: category.url.clone(),
        created_at: admin_views::format_timestamp(category.created_at),
    }
}

fn admin_category_error(source: &'static str, err: AdminCategoryError) -> HttpError {
    match err {
        AdminCategoryError::Repo(repo) => repo_error_to_http(source, repo),
    }
}

fn flash_from_status(status: Option<&str>) -> Option<AdminFlashMessage> {
    status.map(|value| match value {
        "created" => flash_message("notice", "Category was successfully created."),
        _ => flash_message("info", "Operation completed"),
    })
}
