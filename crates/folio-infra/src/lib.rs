//! Infrastructure layer for Folio.
//!
//! Contains implementations of the store and repository traits defined in
//! `folio-core` (SQLite via sqlx), plus configuration loading and data
//! directory resolution.

pub mod config;
pub mod filesystem;
pub mod sqlite;
