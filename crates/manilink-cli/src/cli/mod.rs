//! CLI for manilink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use manilink_core::config;
use manilink_core::Outcome;

use commands::{run_config, run_link, run_open};

/// Exit code when the AppId is rejected.
pub const EXIT_REJECTED: i32 = 2;

/// Top-level CLI for manilink.
#[derive(Debug, Parser)]
#[command(name = "manilink")]
#[command(about = "manilink: build and open manifest download links by App ID", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open the manifest download link for an App ID.
    Open {
        /// Numeric App ID (digits only).
        app_id: String,
        /// Print the link to stdout instead of launching the opener.
        #[arg(long)]
        print: bool,
    },

    /// Print the manifest download link for an App ID.
    Link {
        /// Numeric App ID (digits only).
        app_id: String,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

fn exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Navigated(_) => 0,
        Outcome::Rejected(_) => EXIT_REJECTED,
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!(
            "loaded config: base_url={} locale={:?} navigator={:?}",
            cfg.base_url,
            cfg.locale,
            cfg.navigator
        );

        let code = match cli.command {
            CliCommand::Open { app_id, print } => exit_code(&run_open(&cfg, &app_id, print)?),
            CliCommand::Link { app_id } => exit_code(&run_link(&cfg, &app_id)?),
            CliCommand::Config => {
                run_config(&config::config_path()?, &cfg)?;
                0
            }
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
