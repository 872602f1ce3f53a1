//! Viewable content entities: blog posts and videos.
//!
//! Both carry a monotonically increasing `view_count` that is only ever
//! incremented by the view-counter path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which kind of entity a view counter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Video,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Post => write!(f, "post"),
            ContentKind::Video => write!(f, "video"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" | "posts" => Ok(ContentKind::Post),
            "video" | "videos" => Ok(ContentKind::Video),
            other => Err(format!("invalid content kind: '{other}'")),
        }
    }
}

/// A published blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    /// URL-safe slug derived from the title.
    pub slug: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An uploaded video.
///
/// Deleted videos are soft-deleted (`is_deleted = true`) and hidden from
/// reads, but their counters are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub view_count: i64,
    pub is_public: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Generate a URL-safe slug from a title.
///
/// ```
/// use folio_types::content::slugify;
///
/// assert_eq!(slugify("Hello, Rust World"), "hello-rust-world");
/// assert_eq!(slugify("--a  b--"), "a-b");
/// ```
pub fn slugify(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_was_hyphen = true;
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            result.push(c);
            prev_was_hyphen = false;
        } else if !prev_was_hyphen {
            result.push('-');
            prev_was_hyphen = true;
        }
    }
    while result.ends_with('-') {
        result.pop();
    }
    result
}
