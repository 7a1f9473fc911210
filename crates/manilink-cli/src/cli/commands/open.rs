//! `manilink open <app_id>` – validate and hand the link to the configured navigator.

use anyhow::Result;
use manilink_core::config::{ManilinkConfig, NavigatorKind};
use manilink_core::generate_manifest_link;
use manilink_core::navigate::{Navigator, OpenerNavigator, PrintNavigator, WriterStatus};
use manilink_core::Outcome;
use std::io;

pub fn run_open(cfg: &ManilinkConfig, app_id: &str, print: bool) -> Result<Outcome> {
    let mut status = WriterStatus(io::stderr());
    let mut navigator: Box<dyn Navigator> = match (print, cfg.navigator) {
        (true, _) | (false, NavigatorKind::Print) => Box::new(PrintNavigator(io::stdout())),
        (false, NavigatorKind::Open) => Box::new(OpenerNavigator::new(cfg.opener.clone())),
    };
    generate_manifest_link(
        app_id,
        cfg,
        &cfg.messages(),
        &mut status,
        navigator.as_mut(),
    )
}
