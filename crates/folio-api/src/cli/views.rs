//! `folio views` command: look up a single view counter.

use anyhow::{Result, anyhow};
use console::style;

use folio_core::content::ContentRepository;
use folio_types::content::ContentKind;

use crate::state::AppState;

/// Print the title and current view count of a post or video.
pub async fn show_views(state: &AppState, kind: &str, id: &str, json: bool) -> Result<()> {
    let kind: ContentKind = kind.parse().map_err(|e: String| anyhow!(e))?;

    let view_count = state.view_service.view_count(kind, id).await?;
    let title = match kind {
        ContentKind::Post => state.content_repo.get_post(id).await?.map(|p| p.title),
        ContentKind::Video => state.content_repo.get_video(id).await?.map(|v| v.title),
    }
    .unwrap_or_default();

    if json {
        let result = serde_json::json!({
            "kind": kind.to_string(),
            "id": id,
            "title": title,
            "viewCount": view_count,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!(
            "  {} {} {}",
            style(kind).dim(),
            style(id).cyan(),
            style(&title).bold()
        );
        println!("  Views: {}", style(view_count).bold());
        println!();
    }

    Ok(())
}
