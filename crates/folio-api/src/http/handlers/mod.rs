//! HTTP request handlers, one module per resource.

pub mod agent;
pub mod health;
pub mod posts;
pub mod videos;
pub mod visitors;

/// Decode a JSON body leniently: empty or malformed bodies yield the default.
pub(crate) fn parse_body<T: serde::de::DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "ignoring malformed request body");
        T::default()
    })
}
