mod editor;
mod errors;
mod forms;
mod handlers;
mod panel;

pub(super) use handlers::{
    admin_post_create, admin_post_delete, admin_post_edit, admin_post_new, admin_post_show,
    admin_post_update, admin_posts,
};
