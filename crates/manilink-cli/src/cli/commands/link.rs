//! `manilink link <app_id>` – validate and print the link.

use anyhow::Result;
use manilink_core::config::ManilinkConfig;
use manilink_core::generate_manifest_link;
use manilink_core::navigate::{PrintNavigator, WriterStatus};
use manilink_core::Outcome;
use std::io;

pub fn run_link(cfg: &ManilinkConfig, app_id: &str) -> Result<Outcome> {
    generate_manifest_link(
        app_id,
        cfg,
        &cfg.messages(),
        &mut WriterStatus(io::stderr()),
        &mut PrintNavigator(io::stdout()),
    )
}
