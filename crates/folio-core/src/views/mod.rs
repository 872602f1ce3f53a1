//! View counters for posts and videos.
//!
//! Every call to `increment` counts: there is no per-viewer deduplication.

pub mod repository;
pub mod service;

pub use repository::ViewCounterRepository;
pub use service::ViewService;
