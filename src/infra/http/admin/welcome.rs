use axum::{
    extract::Query,
    http::StatusCode,
    response::Response,
};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::presentation::{
    admin::views::{self as admin_views, AdminFlashMessage},
    views::render_template_response,
};

use super::shared::{FlashQuery, flash_message, found};

const GREETING: &str = "Welcome to our application!";
const ABOUT: &str = "This application manages posts grouped into categories. \
    It shows the usual list, show, create, edit and delete pages for each post.";
const CONTACT: &str = "For inquiries, please contact the site maintainers.";

pub(super) async fn welcome_home() -> Response {
    let features = vec![
        "Feature 1".to_string(),
        "Feature 2".to_string(),
        "Feature 3".to_string(),
    ];
    let now = OffsetDateTime::now_utc();

    info!(
        target: "postboard::welcome",
        greeting = GREETING,
        "Rendering home page"
    );
    debug!(target: "postboard::welcome", features = ?features, "Home page features");

    let content = admin_views::WelcomeHomeView {
        greeting: GREETING.to_string(),
        current_time: admin_views::format_timestamp(now),
        features,
        about: ABOUT.to_string(),
        contact: CONTACT.to_string(),
    };
    let chrome = admin_views::AdminChrome::new("/", "Home");
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::WelcomeHomeTemplate { view }, StatusCode::OK)
}

pub(super) async fn welcome_about(Query(query): Query<FlashQuery>) -> Response {
    render_page(
        "/welcome/about",
        "About",
        vec![ABOUT.to_string()],
        flashes_from_status(query.status.as_deref()),
    )
}

pub(super) async fn welcome_contact() -> Response {
    render_page(
        "/welcome/contact",
        "Contact",
        vec![CONTACT.to_string()],
        Vec::new(),
    )
}

pub(super) async fn welcome_features() -> Response {
    found("/welcome/about?status=features")
}

fn render_page(
    section: &str,
    heading: &str,
    paragraphs: Vec<String>,
    flashes: Vec<AdminFlashMessage>,
) -> Response {
    let content = admin_views::WelcomePageView {
        heading: heading.to_string(),
        paragraphs,
        flashes,
    };
    let chrome = admin_views::AdminChrome::new(section, heading);
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::WelcomePageTemplate { view }, StatusCode::OK)
}

fn flashes_from_status(status: Option<&str>) -> Vec<AdminFlashMessage> {
    match status {
        Some("features") => vec![
            flash_message("notice", "You've been redirected from the Features page."),
            flash_message("alert", "Please note this is a temporary redirect!"),
            flash_message("success", "Operation completed successfully."),
            flash_message("info", "Here's some additional information."),
        ],
        _ => Vec::new(),
    }
}
