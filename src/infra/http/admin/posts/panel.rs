use std::collections::HashMap;

use uuid::Uuid;

use super::super::shared::flash_message;
use crate::{
    domain::entities::{CategoryRecord, PostRecord},
    presentation::admin::views::{self as admin_views, AdminFlashMessage},
};

pub(super) const POSTS_PATH: &str = "/posts";

pub(super) fn post_href(id: Uuid) -> String {
    format!("{POSTS_PATH}/{id}")
}

pub(super) fn category_title(categories: &HashMap<Uuid, CategoryRecord>, id: Uuid) -> String {
    categories
        .get(&id)
        .map(|category| category.display_title().to_string())
        .unwrap_or_else(|| "Unknown category".to_string())
}

pub(super) fn index_categories(categories: Vec<CategoryRecord>) -> HashMap<Uuid, CategoryRecord> {
    categories
        .into_iter()
        .map(|category| (category.id, category))
        .collect()
}

pub(super) fn build_post_list_view(
    posts: &[PostRecord],
    total: u64,
    categories: &HashMap<Uuid, CategoryRecord>,
    flash: Option<AdminFlashMessage>,
) -> admin_views::AdminPostListView {
    let rows = posts
        .iter()
        .map(|post| {
            let show_href = post_href(post.id);
            admin_views::AdminPostRowView {
                id: post.id.to_string(),
                title: post.title.clone(),
                summary: post.summary.clone(),
                active: post.active,
                category_title: category_title(categories, post.category_id),
                details: post.details(),
                edit_href: format!("{show_href}/edit"),
                delete_action: show_href.clone(),
                show_href,
            }
        })
        .collect();

    admin_views::AdminPostListView {
        heading: "Posts".to_string(),
        posts: rows,
        total,
        new_post_href: format!("{POSTS_PATH}/new"),
        flash,
    }
}

pub(super) fn build_post_detail_view(
    post: &PostRecord,
    category: Option<&CategoryRecord>,
    flash: Option<AdminFlashMessage>,
) -> admin_views::AdminPostDetailView {
    let show_href = post_href(post.id);
    admin_views::AdminPostDetailView {
        id: post.id.to_string(),
        title: post.title.clone(),
        summary: post.summary.clone(),
        body: post.body.clone(),
        active: post.active,
        views: post.views,
        category_title: category
            .map(|category| category.display_title().to_string())
            .unwrap_or_else(|| "Unknown category".to_string()),
        details: post.details(),
        updated_at: admin_views::format_timestamp(post.updated_at),
        edit_href: format!("{show_href}/edit"),
        delete_action: show_href,
        back_href: POSTS_PATH.to_string(),
        flash,
    }
}

pub(super) fn flash_from_status(status: Option<&str>) -> Option<AdminFlashMessage> {
    status.map(|value| match value {
        "created" => flash_message("notice", "Post was successfully created."),
        "updated" => flash_message("notice", "Post was successfully updated."),
        "destroyed" => flash_message("notice", "Post was successfully destroyed."),
        "not_found" => flash_message("alert", "Post not found."),
        _ => flash_message("info", "Operation completed"),
    })
}
