//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! Services are generic over store/repository traits, but AppState pins them
//! to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use folio_core::history::{BoxSessionHistoryStore, HistoryService, InMemorySessionHistory};
use folio_core::views::ViewService;
use folio_core::visitors::VisitorTracker;
use folio_infra::config::load_global_config;
use folio_infra::filesystem::resolve_data_dir;
use folio_infra::sqlite::content::SqliteContentRepository;
use folio_infra::sqlite::history::SqliteSessionHistory;
use folio_infra::sqlite::pool::DatabasePool;
use folio_infra::sqlite::views::SqliteViewCounterRepository;
use folio_types::config::{GlobalConfig, HistoryBackend};

/// Concrete type alias for the view service pinned to SQLite.
pub type ConcreteViewService = ViewService<SqliteViewCounterRepository>;

/// History service over whichever store the config selects.
pub type ConcreteHistoryService = HistoryService<BoxSessionHistoryStore>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers. Cloning is cheap; all
/// clones share the same stores.
#[derive(Clone)]
pub struct AppState {
    pub view_service: Arc<ConcreteViewService>,
    pub content_repo: Arc<SqliteContentRepository>,
    pub history: Arc<ConcreteHistoryService>,
    pub visitors: VisitorTracker,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize from the resolved data directory (`FOLIO_DATA_DIR` or `~/.folio`).
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_in(resolve_data_dir()).await
    }

    /// Initialize against a specific data directory: load config, open the
    /// database, and wire services.
    pub async fn init_in(data_dir: PathBuf) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let db_pool = DatabasePool::open_in(&data_dir).await?;

        let history = match config.history.backend {
            HistoryBackend::Memory => BoxSessionHistoryStore::new(InMemorySessionHistory::new()),
            HistoryBackend::Sqlite => {
                BoxSessionHistoryStore::new(SqliteSessionHistory::new(db_pool.clone()))
            }
        };
        tracing::debug!(backend = ?config.history.backend, "session history store ready");

        let visitors = VisitorTracker::new(Duration::from_secs(config.visitors.timeout_secs));

        Ok(Self {
            view_service: Arc::new(ViewService::new(SqliteViewCounterRepository::new(
                db_pool.clone(),
            ))),
            content_repo: Arc::new(SqliteContentRepository::new(db_pool.clone())),
            history: Arc::new(HistoryService::new(history)),
            visitors,
            config: Arc::new(config),
            data_dir,
            db_pool,
        })
    }
}
