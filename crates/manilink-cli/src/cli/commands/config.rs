//! `manilink config` – show where the config lives and what is in effect.

use anyhow::Result;
use manilink_core::config::ManilinkConfig;
use std::path::Path;

pub fn run_config(path: &Path, cfg: &ManilinkConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
