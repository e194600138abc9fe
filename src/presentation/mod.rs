//! Server-rendered views.

pub mod admin;
pub mod views;
