//! mev-boost - PoS Ethereum block construction middleware
//!
//! A middleware used by PoS Ethereum consensus clients to outsource block
//! construction. This binary resolves and validates the runtime
//! configuration, then hands it to the service.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mev_boost::cli::Cli;
use mev_boost::config::{build_config, EnvSource, FileSettings, LogSettings, Registry, Resolver, Sources};
use mev_boost::error::{BoostError, Result};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let registry = Registry::builtin()?;
    let file = FileSettings::load(cli.config.as_deref());
    let sources = Sources::new(cli.flag_values(), EnvSource::from_process(), file);
    let resolver = Resolver::new(&registry, &sources);

    let config = build_config(&resolver)?;

    // The subscriber is configured from the resolved log settings, so it can
    // only come up after resolution; file-source warnings are deferred here.
    init_logging(&config.log);

    if let Some(warning) = sources.file_warning() {
        warn!("{}", warning);
    }
    if let Some(path) = sources.file_path() {
        info!("Using config file: {}", path.display());
    }
    info!("configuration: {:?}", config);

    Ok(())
}

fn report_error(error: &BoostError) {
    match error {
        BoostError::InvalidConfig(violations) => {
            eprintln!("Error: invalid configuration:");
            for violation in &violations.0 {
                eprintln!("  - {}", violation);
            }
        }
        other => eprintln!("Error: {}", other),
    }
}

fn init_logging(log: &LogSettings) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry().with(filter);
    if log.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
