use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::presentation::admin::views as admin_views;

/// Carries the outcome of the previous action across a redirect.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FlashQuery {
    pub(super) status: Option<String>,
}

pub(super) fn flash_message(kind: &'static str, text: &str) -> admin_views::AdminFlashMessage {
    admin_views::AdminFlashMessage::new(kind, text)
}

/// `302 Found`. `Redirect::to` answers 303, which only the delete flow uses.
pub(super) fn found(href: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, href.to_string())]).into_response()
}

pub(super) fn parse_record_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
