//! Online visitor presence tracking.

pub mod tracker;

pub use tracker::{spawn_sweeper, VisitorTracker};
