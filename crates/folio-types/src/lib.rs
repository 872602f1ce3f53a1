//! Shared domain types for Folio.
//!
//! This crate contains the domain types used across the Folio service:
//! session history turns, viewable content (posts and videos), online
//! visitors, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod content;
pub mod error;
pub mod health;
pub mod history;
pub mod visitor;
