//! Pure domain logic shared by the MentorLink backend crates.
//!
//! No I/O lives here: the error taxonomy, id/timestamp aliases, and the
//! small pure computations (pagination math, aggregate statistics, text
//! helpers, default avatars) used by the db and api crates.

pub mod avatar;
pub mod error;
pub mod pagination;
pub mod stats;
pub mod text;
pub mod types;
