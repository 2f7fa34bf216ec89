// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    article_files_dir: PathBuf,
    export_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://mokkan.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    5
}

fn default_article_files_dir() -> PathBuf {
    PathBuf::from("uploads/articles")
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through
    /// `lookup`, which keeps tests away from the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_database_url);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => default_max_connections(),
        };

        let article_files_dir = lookup("ARTICLE_FILES_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_article_files_dir);

        let export_path = lookup("EXPORT_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_url,
            database_max_connections,
            article_files_dir,
            export_path,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// Directory uploaded article images are stored in.
    pub fn article_files_dir(&self) -> &PathBuf {
        &self.article_files_dir
    }

    pub fn export_path(&self) -> Option<&PathBuf> {
        self.export_path.as_ref()
    }

    /// Export target named on the command line, falling back to `EXPORT_PATH`.
    pub fn export_path_from_args(
        &self,
        mut args: impl Iterator<Item = String>,
    ) -> Result<Option<PathBuf>, ConfigError> {
        match args.next().as_deref() {
            None => Ok(self.export_path.clone()),
            Some("-") => Ok(None),
            Some("--output") | Some("-o") => args
                .next()
                .map(|path| Some(PathBuf::from(path)))
                .ok_or(ConfigError::Missing("--output <path>")),
            Some(other) => Err(ConfigError::Invalid(format!("unexpected argument {other:?}"))),
        }
    }
}
