//! HTTP handlers, one module per resource.

pub mod application;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod mentor;
pub mod profile;
pub mod project;
pub mod student;
pub mod user;
