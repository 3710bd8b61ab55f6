use std::sync::{Arc, RwLock};

use anyhow::Context;

use crate::config::AppConfig;
use crate::datasets::{self, Dataset};

/// Shared session state. The table snapshot is loaded once at startup and
/// only the listing mutator writes to it afterwards; the lock serializes
/// those writes against report reads. No guard is held across an await.
#[derive(Clone)]
pub struct AppState {
    pub tables: Arc<RwLock<Dataset>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let provider = datasets::provider_from_config(&config)
            .await
            .context("select dataset backend")?;
        let tables = provider.load().await.context("load dataset")?;
        Ok(Self {
            tables: Arc::new(RwLock::new(tables)),
            config,
        })
    }

    /// In-memory state for tests and tooling; no backend involved.
    pub fn from_dataset(tables: Dataset) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
            config: Arc::new(AppConfig {
                backend: crate::config::DataBackend::Files,
                database_url: None,
                data_dir: "./data".into(),
            }),
        }
    }
}
