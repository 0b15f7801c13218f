//! `staffdesk` command-line front end.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Open the store once, run one command against it, and close it.
//! - Write export buffers to disk.

#![forbid(unsafe_code)]

mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use config::Cli;
use staffdesk_core::{close_db, init_logging, open_db, EmployeeService, SqliteEmployeeRepository};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;

    let outcome = {
        let repo = SqliteEmployeeRepository::try_new(&conn)
            .context("employee store is not usable")?;
        let service = EmployeeService::new(repo);
        commands::run(&service, cli.command, &mut std::io::stdout().lock())
    };

    close_db(conn).context("failed to close employee store")?;
    outcome
}
