use askama::Template;

use super::{AdminFlashMessage, AdminLayout};

#[derive(Clone)]
pub struct AdminPostRowView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub active: bool,
    pub category_title: String,
    pub details: String,
    pub show_href: String,
    pub edit_href: String,
    pub delete_action: String,
}

#[derive(Clone)]
pub struct AdminPostListView {
    pub heading: String,
    pub posts: Vec<AdminPostRowView>,
    pub total: u64,
    pub new_post_href: String,
    pub flash: Option<AdminFlashMessage>,
}

#[derive(Template)]
#[template(path = "admin/posts.html")]
pub struct AdminPostsTemplate {
    pub view: AdminLayout<AdminPostListView>,
}

#[derive(Clone)]
pub struct AdminPostDetailView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub active: bool,
    pub views: i32,
    pub category_title: String,
    pub details: String,
    pub updated_at: String,
    pub edit_href: String,
    pub delete_action: String,
    pub back_href: String,
    pub flash: Option<AdminFlashMessage>,
}

#[derive(Template)]
#[template(path = "admin/post_show.html")]
pub struct AdminPostShowTemplate {
    pub view: AdminLayout<AdminPostDetailView>,
}

#[derive(Clone)]
pub struct AdminCategoryOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Default)]
pub struct AdminPostFieldErrors {
    pub title: Vec<String>,
    pub summary: Vec<String>,
    pub body: Vec<String>,
    pub active: Vec<String>,
    pub category: Vec<String>,
}

#[derive(Clone)]
pub struct AdminPostEditorView {
    pub heading: String,
    pub form_action: String,
    /// Value for the hidden `_method` field; `None` submits a plain POST.
    pub method_override: Option<&'static str>,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub active_yes: bool,
    pub active_no: bool,
    pub categories: Vec<AdminCategoryOption>,
    pub no_category_selected: bool,
    pub error_messages: Vec<String>,
    pub field_errors: AdminPostFieldErrors,
    pub submit_label: String,
    pub back_href: String,
    pub show_href: Option<String>,
}

impl AdminPostEditorView {
    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }

    pub fn error_heading(&self) -> String {
        let count = self.error_messages.len();
        let noun = if count == 1 { "error" } else { "errors" };
        format!("{count} {noun} prohibited this post from being saved:")
    }
}

#[derive(Template)]
#[template(path = "admin/post_editor.html")]
pub struct AdminPostEditorTemplate {
    pub view: AdminLayout<AdminPostEditorView>,
}
