use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    domain::{
        entities::CategoryRecord,
        posts::{PostAttributes, PostErrors, PostField},
    },
    presentation::admin::views as admin_views,
};

use super::panel::{POSTS_PATH, post_href};

pub(super) enum EditorMode {
    New,
    Edit(Uuid),
}

pub(super) fn build_post_editor_view(
    mode: EditorMode,
    attributes: &PostAttributes,
    errors: &PostErrors,
    categories: &HashMap<Uuid, CategoryRecord>,
) -> admin_views::AdminPostEditorView {
    let (heading, form_action, method_override, submit_label, show_href) = match mode {
        EditorMode::New => (
            "New post",
            POSTS_PATH.to_string(),
            None,
            "Create Post",
            None,
        ),
        EditorMode::Edit(id) => (
            "Editing post",
            post_href(id),
            Some("patch"),
            "Update Post",
            Some(post_href(id)),
        ),
    };

    let mut options: Vec<_> = categories.values().collect();
    options.sort_by_key(|category| (category.created_at, category.id));
    let categories = options
        .into_iter()
        .map(|category| admin_views::AdminCategoryOption {
            value: category.id.to_string(),
            label: category.display_title().to_string(),
            selected: attributes.category_id == Some(category.id),
        })
        .collect::<Vec<_>>();
    let no_category_selected = !categories.iter().any(|option| option.selected);

    admin_views::AdminPostEditorView {
        heading: heading.to_string(),
        form_action,
        method_override,
        title: attributes.title.clone(),
        summary: attributes.summary.clone(),
        body: attributes.body.clone(),
        active_yes: attributes.active == Some(true),
        active_no: attributes.active == Some(false),
        categories,
        no_category_selected,
        error_messages: errors.full_messages(),
        field_errors: field_errors(errors),
        submit_label: submit_label.to_string(),
        back_href: POSTS_PATH.to_string(),
        show_href,
    }
}

fn field_errors(errors: &PostErrors) -> admin_views::AdminPostFieldErrors {
    let messages = |field: PostField| {
        errors
            .on(field)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    admin_views::AdminPostFieldErrors {
        title: messages(PostField::Title),
        summary: messages(PostField::Summary),
        body: messages(PostField::Body),
        active: messages(PostField::Active),
        category: messages(PostField::Category),
    }
}
