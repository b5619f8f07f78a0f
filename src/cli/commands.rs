//! CLI flags and argument parsing
//!
//! This module defines the command-line interface structure using clap.
//! Defaults live in the option registry, not here: every flag is
//! `Option`-typed so the source layer can tell "user passed the flag" apart
//! from "flag at its default". Boolean flags are tri-state: `--gfv-mainnet`,
//! `--gfv-mainnet=true`, and `--gfv-mainnet=false` are all explicit values,
//! while an untouched flag contributes nothing to resolution.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;

use crate::config::registry::{
    OptionValue, GFV_CUSTOM_FLAG, GFV_CUSTOM_KEY, GFV_KILN_FLAG, GFV_KILN_KEY, GFV_MAINNET_FLAG,
    GFV_MAINNET_KEY, GFV_ROPSTEN_FLAG, GFV_ROPSTEN_KEY, GFV_SEPOLIA_FLAG, GFV_SEPOLIA_KEY,
    LOG_JSON_FLAG, LOG_JSON_KEY, LOG_LEVEL_FLAG, LOG_LEVEL_KEY, RELAY_CHECK_FLAG, RELAY_CHECK_KEY,
    RELAY_URLS_FLAG, RELAY_URLS_KEY, SERVER_ADDR_FLAG, SERVER_ADDR_KEY,
};

#[derive(Debug, Parser)]
#[command(name = "mev-boost")]
#[command(about = "A middleware used by PoS Ethereum consensus clients to outsource block construction")]
#[command(version, author)]
pub struct Cli {
    /// Path to the YAML config file (default: ~/.mev-boost.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the mainnet genesis fork version
    #[arg(long = GFV_MAINNET_FLAG, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub gfv_mainnet: Option<bool>,

    /// Use the Kiln testnet genesis fork version
    #[arg(long = GFV_KILN_FLAG, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub gfv_kiln: Option<bool>,

    /// Use the Ropsten testnet genesis fork version
    #[arg(long = GFV_ROPSTEN_FLAG, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub gfv_ropsten: Option<bool>,

    /// Use the Sepolia testnet genesis fork version
    #[arg(long = GFV_SEPOLIA_FLAG, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub gfv_sepolia: Option<bool>,

    /// Custom genesis fork version, passed through verbatim
    #[arg(long = GFV_CUSTOM_FLAG, value_name = "HEX")]
    pub gfv_custom: Option<String>,

    /// Listen address for the mev-boost server (default: localhost:18550)
    #[arg(long = SERVER_ADDR_FLAG, value_name = "HOST:PORT")]
    pub server_addr: Option<String>,

    /// Relay endpoint URL; repeat the flag to register several relays
    #[arg(long = RELAY_URLS_FLAG, value_name = "URL")]
    pub relay_urls: Vec<String>,

    /// Check relay liveness before registering it
    #[arg(long = RELAY_CHECK_FLAG, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub relay_check: Option<bool>,

    /// Emit logs as JSON
    #[arg(long = LOG_JSON_FLAG, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub log_json: Option<bool>,

    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(long = LOG_LEVEL_FLAG, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Export the flags the user explicitly passed, keyed by dotted option
    /// key, for the configuration source layer. Untouched flags are omitted
    /// so lower-precedence sources can supply them.
    pub fn flag_values(&self) -> HashMap<String, OptionValue> {
        let mut values = HashMap::new();

        let bools = [
            (GFV_MAINNET_KEY, self.gfv_mainnet),
            (GFV_KILN_KEY, self.gfv_kiln),
            (GFV_ROPSTEN_KEY, self.gfv_ropsten),
            (GFV_SEPOLIA_KEY, self.gfv_sepolia),
            (RELAY_CHECK_KEY, self.relay_check),
            (LOG_JSON_KEY, self.log_json),
        ];
        for (key, flag) in bools {
            if let Some(value) = flag {
                values.insert(key.to_string(), OptionValue::Bool(value));
            }
        }

        let strings = [
            (GFV_CUSTOM_KEY, self.gfv_custom.as_ref()),
            (SERVER_ADDR_KEY, self.server_addr.as_ref()),
            (LOG_LEVEL_KEY, self.log_level.as_ref()),
        ];
        for (key, flag) in strings {
            if let Some(value) = flag {
                values.insert(key.to_string(), OptionValue::Str(value.clone()));
            }
        }

        if !self.relay_urls.is_empty() {
            values.insert(
                RELAY_URLS_KEY.to_string(),
                OptionValue::List(self.relay_urls.clone()),
            );
        }

        values
    }
}
