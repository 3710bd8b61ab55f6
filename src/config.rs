use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataBackend {
    Postgres,
    Files,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub backend: DataBackend,
    pub database_url: Option<String>,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = match std::env::var("DATA_BACKEND")
            .unwrap_or_else(|_| "files".into())
            .to_lowercase()
            .as_str()
        {
            "postgres" => DataBackend::Postgres,
            "files" => DataBackend::Files,
            other => anyhow::bail!("unsupported DATA_BACKEND {other:?} (use postgres or files)"),
        };
        let database_url = std::env::var("DATABASE_URL").ok();
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        Ok(Self {
            backend,
            database_url,
            data_dir,
        })
    }
}
