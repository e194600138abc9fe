//! Postboard: posts grouped into categories, served as server-rendered pages.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
