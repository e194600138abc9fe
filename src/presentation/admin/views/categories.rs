use askama::Template;

use super::{AdminFlashMessage, AdminLayout};

#[derive(Clone)]
pub struct AdminCategoryRowView {
    pub title: String,
    pub url: Option<String>,
    pub created_at: String,
}

#[derive(Clone)]
pub struct AdminCategoryListView {
    pub heading: String,
    pub categories: Vec<AdminCategoryRowView>,
    pub new_category_href: String,
    pub flash: Option<AdminFlashMessage>,
}

#[derive(Template)]
#[template(path = "admin/categories.html")]
pub struct AdminCategoriesTemplate {
    pub view: AdminLayout<AdminCategoryListView>,
}

#[derive(Clone)]
pub struct AdminCategoryEditorView {
    pub heading: String,
    pub form_action: String,
    pub submit_label: String,
    pub back_href: String,
}

#[derive(Template)]
#[template(path = "admin/category_new.html")]
pub struct AdminCategoryNewTemplate {
    pub view: AdminLayout<AdminCategoryEditorView>,
}
