//! Diagnostics go to a file: the terminal belongs to the TUI.

use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing::{Subscriber, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file: cli.log_file.clone(),
        }
    }

    /// `RUST_LOG` when set, otherwise the configured level, with HTTP
    /// internals held at `warn`.
    #[must_use]
    pub fn filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let base = rust_log.filter(|value| !value.trim().is_empty());
        base.map_or_else(|| EnvFilter::new(&self.level), EnvFilter::new)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
    }

    pub fn subscriber(&self, file: File) -> impl Subscriber + Send + Sync + use<> {
        let filter = self.filter(std::env::var("RUST_LOG").ok().as_deref());
        tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
    }

    /// Installs the global subscriber. Returns `false` when no log file is
    /// configured and nothing was installed.
    pub fn init(&self) -> Result<bool> {
        let Some(path) = &self.file else {
            return Ok(false);
        };
        let file = open_log_file(path)?;
        self.subscriber(file)
            .try_init()
            .context("failed to install tracing subscriber")?;
        info!(
            version = env!("CARGO_PKG_VERSION"),
            log.file = %path.display(),
            "weather-scene starting"
        );
        Ok(true)
    }
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
