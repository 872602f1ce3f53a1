//! Global configuration loader for Folio.
//!
//! Reads `config.toml` from the data directory (`~/.folio/` by default) and
//! deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::Path;

use folio_types::config::GlobalConfig;

/// Load `{data_dir}/config.toml`.
///
/// A missing file silently yields the defaults; an unreadable or malformed
/// one yields the defaults with a warning. Startup never fails on config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let path = data_dir.join("config.toml");

    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config unreadable, using defaults");
            return GlobalConfig::default();
        }
    };

    parse_config(&raw).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "config malformed, using defaults");
        GlobalConfig::default()
    })
}

/// Parse config text. The sweep interval must be non-zero; `0` becomes `1`.
fn parse_config(raw: &str) -> Result<GlobalConfig, toml::de::Error> {
    let mut config: GlobalConfig = toml::from_str(raw)?;
    config.visitors.sweep_interval_secs = config.visitors.sweep_interval_secs.max(1);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::config::HistoryBackend;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.history.backend, HistoryBackend::Memory);
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[server]
host = "0.0.0.0"
port = 8080

[history]
backend = "sqlite"

[visitors]
timeout_secs = 60
sweep_interval_secs = 10
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.history.backend, HistoryBackend::Sqlite);
        assert_eq!(config.visitors.timeout_secs, 60);
        assert_eq!(config.visitors.sweep_interval_secs, 10);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.history.backend, HistoryBackend::Memory);
    }

    #[test]
    fn zero_sweep_interval_is_raised() {
        let config = parse_config("[visitors]\nsweep_interval_secs = 0\n").unwrap();
        assert_eq!(config.visitors.sweep_interval_secs, 1);
        assert_eq!(config.visitors.timeout_secs, 300);
    }
}
