//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid database url: {raw}")]
    InvalidDbUrl { raw: String },

    #[error("cannot prepare database file {path}: {source}")]
    DbFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "quiz-progress", about = "Quiz progress tracking service")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "QUIZ_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// `SQLite` database URL or path for progress records.
    #[arg(long = "db", env = "QUIZ_DB_URL", default_value = "sqlite://data/progress.db")]
    pub db_url: String,

    /// JSON file with the sentence dataset.
    #[arg(long, env = "QUIZ_SENTENCES", default_value = "data/sentences.json")]
    pub sentences: PathBuf,

    /// Log output format.
    #[arg(long, env = "QUIZ_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Config {
    /// Database URL with relative paths resolved against `cwd`.
    #[must_use]
    pub fn database_url(&self, cwd: &Path) -> String {
        normalize_sqlite_url(&self.db_url, cwd)
    }
}

/// Turn a bare path or relative `sqlite:` URL into an absolute `sqlite://` URL.
///
/// In-memory URLs pass through unchanged.
#[must_use]
pub fn normalize_sqlite_url(raw: &str, cwd: &Path) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.contains("mode=memory") {
        return trimmed.to_string();
    }

    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Make sure the database file and its parent directory exist.
///
/// # Errors
///
/// Returns `ConfigError::InvalidDbUrl` for URLs without a path and
/// `ConfigError::DbFile` if the directory or file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    if db_url == "sqlite::memory:" || db_url.contains("mode=memory") {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        });
    }

    let path = Path::new(path);
    let io_err = |source| ConfigError::DbFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .map_err(io_err)?;
    }

    Ok(())
}
