//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools.

pub mod content;
pub mod health;
pub mod history;
pub mod pool;
pub mod views;

use folio_types::content::ContentKind;

/// Table holding entities of the given kind.
pub(crate) fn table_for(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Post => "posts",
        ContentKind::Video => "videos",
    }
}
