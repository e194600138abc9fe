use askama::Template;

use super::{AdminFlashMessage, AdminLayout};

#[derive(Clone)]
pub struct WelcomeHomeView {
    pub greeting: String,
    pub current_time: String,
    pub features: Vec<String>,
    pub about: String,
    pub contact: String,
}

#[derive(Template)]
#[template(path = "admin/welcome_home.html")]
pub struct WelcomeHomeTemplate {
    pub view: AdminLayout<WelcomeHomeView>,
}

#[derive(Clone)]
pub struct WelcomePageView {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub flashes: Vec<AdminFlashMessage>,
}

#[derive(Template)]
#[template(path = "admin/welcome_page.html")]
pub struct WelcomePageTemplate {
    pub view: AdminLayout<WelcomePageView>,
}
