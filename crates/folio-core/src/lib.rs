//! Business logic and store trait definitions for Folio.
//!
//! This crate defines the "ports" (store and repository traits) that the
//! infrastructure layer implements, plus the in-memory pieces of the service
//! that need no IO. It depends only on `folio-types` -- never on
//! `folio-infra` or any database crate.

pub mod content;
pub mod history;
pub mod net;
pub mod views;
pub mod visitors;
