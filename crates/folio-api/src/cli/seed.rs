//! `folio seed` command: insert demo posts and videos.
//!
//! Re-running is safe: entries whose slug or id already exist are skipped.

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use uuid::Uuid;

use folio_core::content::ContentRepository;
use folio_types::content::{ContentKind, Post, Video, slugify};
use folio_types::error::RepositoryError;

use crate::state::AppState;

const DEMO_POSTS: &[&str] = &[
    "Hello, Folio",
    "Notes on SQLite in WAL mode",
    "Counting page views without losing updates",
];

/// (title, description, initial view count)
const DEMO_VIDEOS: &[(&str, &str, i64)] = &[
    ("Desk setup tour", "A walk around the home office.", 1250),
    ("Async Rust in ten minutes", "Futures, tasks and the tokio runtime.", 890),
    ("Weekend hike timelapse", "Four hours compressed into three minutes.", 2100),
];

/// Outcome of seeding one entity.
struct SeedRow {
    kind: ContentKind,
    id: String,
    title: String,
    view_count: i64,
    created: bool,
}

/// Insert the demo content and print what was created or skipped.
pub async fn seed(state: &AppState, json: bool) -> Result<()> {
    let rows = seed_content(state).await?;

    let created = rows.iter().filter(|r| r.created).count();
    tracing::info!(created, skipped = rows.len() - created, "demo content seeded");

    if json {
        let entries: Vec<_> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "kind": r.kind.to_string(),
                    "id": r.id,
                    "title": r.title,
                    "viewCount": r.view_count,
                    "created": r.created,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Kind").fg(Color::White),
        Cell::new("Id").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Views").fg(Color::White),
        Cell::new("Result").fg(Color::White),
    ]);

    for row in &rows {
        let (result, color) = if row.created {
            ("created", Color::Green)
        } else {
            ("exists", Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(row.kind),
            Cell::new(&row.id).fg(Color::Cyan),
            Cell::new(&row.title),
            Cell::new(row.view_count),
            Cell::new(result).fg(color),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} {} created, {} already present",
        style("ok").green(),
        style(created).bold(),
        rows.len() - created
    );
    println!();

    Ok(())
}

/// Insert every demo entity, reporting the stored id of each.
async fn seed_content(state: &AppState) -> Result<Vec<SeedRow>> {
    let now = Utc::now();
    let mut rows = Vec::new();

    for title in DEMO_POSTS {
        let post = Post {
            id: Uuid::now_v7().to_string(),
            title: (*title).to_string(),
            slug: slugify(title),
            view_count: 0,
            created_at: now,
            updated_at: now,
        };
        let created = insert_or_skip(state.content_repo.create_post(&post).await)?;
        // A fresh id is generated every run; report the one already stored.
        let post = if created {
            post
        } else {
            state
                .content_repo
                .get_post_by_slug(&post.slug)
                .await?
                .with_context(|| format!("post '{}' conflicts but is not stored", post.slug))?
        };
        rows.push(SeedRow {
            kind: ContentKind::Post,
            id: post.id,
            title: post.title,
            view_count: post.view_count,
            created,
        });
    }

    for (title, description, view_count) in DEMO_VIDEOS {
        // Videos have no slug, so the id is derived from the title.
        let video = Video {
            id: format!("demo-{}", slugify(title)),
            title: (*title).to_string(),
            description: (*description).to_string(),
            view_count: *view_count,
            is_public: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        let created = insert_or_skip(state.content_repo.create_video(&video).await)?;
        let video = if created {
            video
        } else {
            state
                .content_repo
                .get_video(&video.id)
                .await?
                .with_context(|| format!("video '{}' conflicts but is not stored", video.id))?
        };
        rows.push(SeedRow {
            kind: ContentKind::Video,
            id: video.id,
            title: video.title,
            view_count: video.view_count,
            created,
        });
    }

    Ok(rows)
}

/// `Conflict` means the entity was seeded before.
fn insert_or_skip<T>(result: Result<T, RepositoryError>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(RepositoryError::Conflict(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
