//! Per-session submission routes: upload, listing, and deletion.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
