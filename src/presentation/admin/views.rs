mod categories;
mod posts;
mod welcome;

pub use categories::*;
pub use posts::*;
pub use welcome::*;

use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

#[derive(Clone)]
pub struct AdminBrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct AdminNavigationItemView {
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

#[derive(Clone)]
pub struct AdminNavigationView {
    pub items: Vec<AdminNavigationItemView>,
}

#[derive(Clone)]
pub struct AdminMetaView {
    pub title: String,
}

#[derive(Clone)]
pub struct AdminChrome {
    pub brand: AdminBrandView,
    pub navigation: AdminNavigationView,
    pub meta: AdminMetaView,
}

const NAVIGATION: [(&str, &str); 4] = [
    ("Posts", "/posts"),
    ("Categories", "/categories"),
    ("About", "/welcome/about"),
    ("Contact", "/welcome/contact"),
];

impl AdminChrome {
    /// Chrome for a page whose navigation entry starts with `section`.
    pub fn new(section: &str, title: impl Into<String>) -> Self {
        let items = NAVIGATION
            .iter()
            .map(|(label, href)| AdminNavigationItemView {
                label: (*label).to_string(),
                href: (*href).to_string(),
                is_active: *href == section,
            })
            .collect();

        Self {
            brand: AdminBrandView {
                title: "Postboard".to_string(),
                href: "/".to_string(),
            },
            navigation: AdminNavigationView { items },
            meta: AdminMetaView {
                title: title.into(),
            },
        }
    }
}

#[derive(Clone)]
pub struct AdminLayout<T> {
    pub chrome: AdminChrome,
    pub content: T,
}

impl<T> AdminLayout<T> {
    pub fn new(chrome: AdminChrome, content: T) -> Self {
        Self { chrome, content }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminFlashMessage {
    pub kind: &'static str,
    pub text: String,
}

impl AdminFlashMessage {
    pub fn new(kind: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub fn format_timestamp(value: OffsetDateTime) -> String {
    value
        .to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| value.to_string())
}
