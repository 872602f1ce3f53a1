//! System status dashboard command.

use anyhow::Result;
use console::style;

use folio_core::content::ContentRepository;
use folio_infra::sqlite::health::check_database_health;
use folio_types::content::ContentKind;

use crate::state::AppState;

/// Display system status dashboard.
///
/// Shows database health, content counts, session history backend and
/// configuration.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let health = check_database_health(&state.db_pool).await;
    let posts = state.content_repo.count(ContentKind::Post).await?;
    let videos = state.content_repo.count(ContentKind::Video).await?;
    let sessions = state.history.session_count().await?;
    let config = &state.config;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "database": health,
            "content": {
                "posts": posts,
                "videos": videos,
            },
            "history": {
                "backend": config.history.backend,
                "sessions": sessions,
            },
            "server": {
                "host": config.server.host,
                "port": config.server.port,
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!("  {} Folio v{}", style("*").bold(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("  {}", style("── Database ──").dim());
    if health.is_connected {
        println!(
            "  Status:   {} ({} ms)",
            style("healthy").green(),
            health.response_time_ms
        );
    } else {
        println!("  Status:   {}", style("unhealthy").red());
        if let Some(error) = &health.error {
            println!("  Error:    {}", style(error).red());
        }
    }
    println!("  Mode:     {}", style("SQLite (WAL mode)").dim());
    println!();

    println!("  {}", style("── Content ──").dim());
    println!("  Posts:    {}", style(posts).bold());
    println!("  Videos:   {}", style(videos).bold());
    println!();

    println!("  {}", style("── Session history ──").dim());
    println!("  Backend:  {}", config.history.backend);
    println!("  Sessions: {}", sessions);
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!(
        "  Listen:   {}",
        style(format!("{}:{}", config.server.host, config.server.port)).dim()
    );
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::history::HistoryTurn;

    #[tokio::test]
    async fn status_reads_every_source() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::init_in(dir.path().to_path_buf()).await.unwrap();
        state.history.append("s1", HistoryTurn::user("hi")).await.unwrap();

        status(&state, true).await.unwrap();
        assert_eq!(state.history.session_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn closed_database_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::init_in(dir.path().to_path_buf()).await.unwrap();
        state.db_pool.reader.close().await;

        assert!(status(&state, true).await.is_err());
    }
}
