//! Configuration resolution tests
//!
//! End-to-end tests for the resolution pipeline: CLI flags, environment
//! snapshot, and YAML file merged by precedence, then validated into a
//! `BoostConfig`. Environment values are injected snapshots; no test mutates
//! the process environment.

use std::io::Write;

use clap::Parser;

use mev_boost::cli::Cli;
use mev_boost::config::{build_config, BoostConfig, EnvSource, FileSettings, Registry, Resolver, Sources};
use mev_boost::error::{BoostError, ConfigViolation, Result};

/// Run the full pipeline with the given command line, environment snapshot,
/// and optional YAML file contents.
fn resolve(argv: &[&str], env: &[(&str, &str)], yaml: Option<&str>) -> Result<BoostConfig> {
    let mut full_argv = vec!["mev-boost"];
    full_argv.extend_from_slice(argv);
    let cli = Cli::parse_from(full_argv);

    let file = match yaml {
        Some(contents) => {
            let mut tmp = tempfile::NamedTempFile::new().unwrap();
            tmp.write_all(contents.as_bytes()).unwrap();
            FileSettings::load(Some(tmp.path()))
        }
        None => FileSettings::empty(),
    };

    let registry = Registry::builtin()?;
    let sources = Sources::new(
        cli.flag_values(),
        EnvSource::from_vars(env.iter().copied()),
        file,
    );
    let resolver = Resolver::new(&registry, &sources);
    build_config(&resolver)
}

fn config_violations(err: BoostError) -> Vec<ConfigViolation> {
    match err {
        BoostError::InvalidConfig(violations) => violations.0,
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn flag_wins_over_env_and_file() {
    let config = resolve(
        &["--gfv-mainnet", "--server-addr", "flag.example.com:1"],
        &[("BOOST_SERVER_ADDR", "env.example.com:2")],
        Some("server:\n  addr: \"file.example.com:3\"\n"),
    )
    .unwrap();

    assert_eq!(config.server_addr, "flag.example.com:1");
}

#[test]
fn env_wins_over_file_when_no_flag() {
    let config = resolve(
        &["--gfv-mainnet"],
        &[("BOOST_SERVER_ADDR", "env.example.com:2")],
        Some("server:\n  addr: \"file.example.com:3\"\n"),
    )
    .unwrap();

    assert_eq!(config.server_addr, "env.example.com:2");
}

#[test]
fn file_wins_over_default_when_no_flag_or_env() {
    let config = resolve(
        &["--gfv-mainnet"],
        &[],
        Some("server:\n  addr: \"0.0.0.0:9000\"\n"),
    )
    .unwrap();

    assert_eq!(config.server_addr, "0.0.0.0:9000");
}

#[test]
fn default_applies_when_no_source_sets_the_key() {
    let config = resolve(&["--gfv-mainnet"], &[], None).unwrap();
    assert_eq!(config.server_addr, "localhost:18550");
    assert_eq!(config.log.level, "info");
    assert!(!config.log.json);
}

#[test]
fn fork_selection_is_order_dependent() {
    let config = resolve(&["--gfv-mainnet", "--gfv-kiln"], &[], None).unwrap();
    assert_eq!(config.genesis_fork_version_hex, "0x00000000");

    let config = resolve(&["--gfv-kiln", "--gfv-sepolia"], &[], None).unwrap();
    assert_eq!(config.genesis_fork_version_hex, "0x70000069");
}

#[test]
fn fork_preset_can_come_from_any_source() {
    let config = resolve(&[], &[("BOOST_GENESIS_FORK_VERSION_SEPOLIA", "true")], None).unwrap();
    assert_eq!(config.genesis_fork_version_hex, "0x90000069");

    let config = resolve(&[], &[], Some("gfv:\n  ropsten: true\n")).unwrap();
    assert_eq!(config.genesis_fork_version_hex, "0x80000069");
}

#[test]
fn custom_fork_version_passes_through_verbatim() {
    let config = resolve(&["--gfv-custom", "0xdeadbeef"], &[], None).unwrap();
    assert_eq!(config.genesis_fork_version_hex, "0xdeadbeef");
}

#[test]
fn explicit_false_flag_overrides_truthy_file_value() {
    // The file turns mainnet on; the user explicitly turns it off again and
    // picks kiln through the environment.
    let config = resolve(
        &["--gfv-mainnet=false"],
        &[("BOOST_GENESIS_FORK_VERSION_KILN", "1")],
        Some("gfv:\n  mainnet: true\n"),
    )
    .unwrap();

    assert_eq!(config.genesis_fork_version_hex, "0x70000069");
}

#[test]
fn no_fork_version_fails_resolution() {
    let err = resolve(&[], &[], None).unwrap_err();
    assert_eq!(
        config_violations(err),
        vec![ConfigViolation::MissingGenesisForkVersion]
    );
}

#[test]
fn empty_custom_does_not_count_as_selection() {
    let err = resolve(&["--gfv-custom", ""], &[], None).unwrap_err();
    assert_eq!(
        config_violations(err),
        vec![ConfigViolation::MissingGenesisForkVersion]
    );
}

#[test]
fn relay_urls_resolve_from_file_sequence() {
    let config = resolve(
        &["--gfv-mainnet"],
        &[],
        Some(concat!(
            "relay:\n",
            "  urls:\n",
            "    - https://relay-a.example.com\n",
            "    - https://relay-b.example.com\n",
            "  check: true\n",
        )),
    )
    .unwrap();

    assert_eq!(config.relay_urls.len(), 2);
    assert!(config.relay_check);
}

#[test]
fn relay_urls_resolve_from_env_list() {
    let config = resolve(
        &["--gfv-mainnet"],
        &[(
            "BOOST_RELAY_URLS",
            "https://relay-a.example.com,https://relay-b.example.com",
        )],
        None,
    )
    .unwrap();

    assert_eq!(config.relay_urls.len(), 2);
    assert_eq!(config.relay_urls[1].host_str(), Some("relay-b.example.com"));
}

#[test]
fn malformed_relay_url_is_named_in_the_error() {
    let err = resolve(
        &["--gfv-mainnet", "--relay-urls", "not a url"],
        &[],
        None,
    )
    .unwrap_err();

    let violations = config_violations(err);
    assert_eq!(violations.len(), 1);
    assert!(
        matches!(&violations[0], ConfigViolation::InvalidRelayUrl { entry, .. } if entry == "not a url")
    );
}

#[test]
fn every_violation_is_reported_in_one_failure() {
    let err = resolve(
        &["--server-addr", "", "--relay-urls", "bogus"],
        &[],
        None,
    )
    .unwrap_err();

    let violations = config_violations(err);
    assert_eq!(violations.len(), 3);
    assert!(violations.contains(&ConfigViolation::MissingGenesisForkVersion));
    assert!(violations.contains(&ConfigViolation::EmptyServerAddr));
}

#[test]
fn unreadable_file_downgrades_to_lower_precedence_sources() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "{ unclosed:").unwrap();

    let cli = Cli::parse_from(["mev-boost", "--gfv-mainnet"]);
    let registry = Registry::builtin().unwrap();
    let file = FileSettings::load(Some(&path));
    assert!(file.warning().is_some());

    let sources = Sources::new(
        cli.flag_values(),
        EnvSource::from_vars([("BOOST_SERVER_ADDR", "env.example.com:2")]),
        file,
    );
    let resolver = Resolver::new(&registry, &sources);
    let config = build_config(&resolver).unwrap();

    assert_eq!(config.server_addr, "env.example.com:2");
}

#[test]
fn resolution_is_idempotent() {
    let argv = &["--gfv-sepolia", "--relay-urls", "https://relay.example.com"];
    let env = &[("BOOST_LOG_LEVEL", "debug")];
    let yaml = Some("server:\n  addr: \"0.0.0.0:9000\"\n");

    let first = resolve(argv, env, yaml).unwrap();
    let second = resolve(argv, env, yaml).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.server_addr, "0.0.0.0:9000");
    assert_eq!(first.log.level, "debug");
    assert_eq!(first.genesis_fork_version_hex, "0x90000069");
}
