//! Domain entities mirrored from persistent storage.

use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use uuid::Uuid;

const DETAILS_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month] [year repr:last_two]");

#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub active: bool,
    pub views: i32,
    pub category_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl PostRecord {
    /// One-line creation note, e.g. `This post was created on 10 07 25`.
    pub fn details(&self) -> String {
        let created = self
            .created_at
            .format(DETAILS_DATE_FORMAT)
            .unwrap_or_else(|_| self.created_at.date().to_string());
        format!("This post was created on {created}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub title: Option<String>,
    pub url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl CategoryRecord {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled category")
    }
}
