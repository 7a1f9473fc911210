//! CLI parse tests.

use super::commands::run_link;
use super::{exit_code, Cli, CliCommand, EXIT_REJECTED};
use clap::Parser;
use manilink_core::config::ManilinkConfig;
use manilink_core::{InvalidAppId, ManifestEndpoint, Outcome};

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_open() {
    match parse(&["manilink", "open", "440"]) {
        CliCommand::Open { app_id, print } => {
            assert_eq!(app_id, "440");
            assert!(!print);
        }
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_open_print() {
    match parse(&["manilink", "open", "730", "--print"]) {
        CliCommand::Open { app_id, print } => {
            assert_eq!(app_id, "730");
            assert!(print);
        }
        _ => panic!("expected Open with --print"),
    }
}

#[test]
fn cli_parse_open_keeps_raw_input() {
    // Validation belongs to the link builder, so clap must not reject odd input.
    match parse(&["manilink", "open", "12.5"]) {
        CliCommand::Open { app_id, .. } => assert_eq!(app_id, "12.5"),
        _ => panic!("expected Open"),
    }
    match parse(&["manilink", "link", ""]) {
        CliCommand::Link { app_id } => assert_eq!(app_id, ""),
        _ => panic!("expected Link"),
    }
}

#[test]
fn cli_parse_link() {
    match parse(&["manilink", "link", "440"]) {
        CliCommand::Link { app_id } => assert_eq!(app_id, "440"),
        _ => panic!("expected Link"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["manilink", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_open_requires_app_id() {
    assert!(Cli::try_parse_from(["manilink", "open"]).is_err());
}

#[test]
fn exit_codes() {
    let url = ManifestEndpoint::default().link_for(&"1".parse().unwrap());
    assert_eq!(exit_code(&Outcome::Navigated(url)), 0);
    assert_eq!(exit_code(&Outcome::Rejected(InvalidAppId::Empty)), EXIT_REJECTED);
}

#[test]
fn link_with_bad_base_url_still_rejects_bad_app_id() {
    let cfg = ManilinkConfig {
        base_url: "not a url".to_string(),
        ..ManilinkConfig::default()
    };
    let out = run_link(&cfg, "abc").unwrap();
    assert_eq!(exit_code(&out), EXIT_REJECTED);
    assert!(run_link(&cfg, "440").is_err());
}
