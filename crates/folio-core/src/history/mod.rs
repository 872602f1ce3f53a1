//! Session history: ordered conversation turns keyed by session id.
//!
//! The store is injected wherever it is needed; nothing here is global.
//! `InMemorySessionHistory` lives in this crate, the SQLite-backed store
//! lives in folio-infra.

pub mod box_store;
pub mod memory;
pub mod service;
pub mod store;

pub use box_store::BoxSessionHistoryStore;
pub use memory::InMemorySessionHistory;
pub use service::HistoryService;
pub use store::SessionHistoryStore;
