//! Command-line surface and resolved runtime configuration.

use crate::commands::Command;
use anyhow::Context;
use clap::Parser;
use staffdesk_core::{default_log_level, DEFAULT_DB_FILE};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "staffdesk", version)]
#[command(about = "Manage employee records and export them as xlsx, docx or pdf", long_about = None)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "STAFFDESK_DB", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "STAFFDESK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files; logging stays off when unset
    #[arg(long, global = true, env = "STAFFDESK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings the binary runs with after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn resolve(&self) -> anyhow::Result<CliConfig> {
        let log_dir = match &self.log_dir {
            Some(dir) => Some(absolutize(dir)?),
            None => None,
        };

        Ok(CliConfig {
            db_path: self.db.clone(),
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
        })
    }
}

fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}
