//! Option registry
//!
//! Declares every configurable setting exactly once, binding its dotted key
//! to a command-line flag name, an environment variable name, and a typed
//! default. The registry is built in the composition root and passed by
//! reference into the resolver; nothing in this crate holds registration
//! state globally.

use std::collections::HashMap;

use crate::error::{BoostError, Result};

// Genesis fork version option keys and surface names.
pub const GFV_MAINNET_KEY: &str = "gfv.mainnet";
pub const GFV_MAINNET_FLAG: &str = "gfv-mainnet";
pub const GFV_MAINNET_ENV: &str = "BOOST_GENESIS_FORK_VERSION_MAINNET";

pub const GFV_KILN_KEY: &str = "gfv.kiln";
pub const GFV_KILN_FLAG: &str = "gfv-kiln";
pub const GFV_KILN_ENV: &str = "BOOST_GENESIS_FORK_VERSION_KILN";

pub const GFV_ROPSTEN_KEY: &str = "gfv.ropsten";
pub const GFV_ROPSTEN_FLAG: &str = "gfv-ropsten";
pub const GFV_ROPSTEN_ENV: &str = "BOOST_GENESIS_FORK_VERSION_ROPSTEN";

pub const GFV_SEPOLIA_KEY: &str = "gfv.sepolia";
pub const GFV_SEPOLIA_FLAG: &str = "gfv-sepolia";
pub const GFV_SEPOLIA_ENV: &str = "BOOST_GENESIS_FORK_VERSION_SEPOLIA";

pub const GFV_CUSTOM_KEY: &str = "gfv.custom";
pub const GFV_CUSTOM_FLAG: &str = "gfv-custom";
pub const GFV_CUSTOM_ENV: &str = "BOOST_GENESIS_FORK_VERSION_CUSTOM";

// Server option keys and surface names.
pub const SERVER_ADDR_KEY: &str = "server.addr";
pub const SERVER_ADDR_FLAG: &str = "server-addr";
pub const SERVER_ADDR_ENV: &str = "BOOST_SERVER_ADDR";
pub const SERVER_ADDR_DEFAULT: &str = "localhost:18550";

// Relay option keys and surface names.
pub const RELAY_URLS_KEY: &str = "relay.urls";
pub const RELAY_URLS_FLAG: &str = "relay-urls";
pub const RELAY_URLS_ENV: &str = "BOOST_RELAY_URLS";

pub const RELAY_CHECK_KEY: &str = "relay.check";
pub const RELAY_CHECK_FLAG: &str = "relay-check";
pub const RELAY_CHECK_ENV: &str = "BOOST_RELAY_CHECK";

// Log option keys and surface names.
pub const LOG_JSON_KEY: &str = "log.json";
pub const LOG_JSON_FLAG: &str = "log-json";
pub const LOG_JSON_ENV: &str = "BOOST_LOG_JSON";

pub const LOG_LEVEL_KEY: &str = "log.level";
pub const LOG_LEVEL_FLAG: &str = "log-level";
pub const LOG_LEVEL_ENV: &str = "BOOST_LOG_LEVEL";
pub const LOG_LEVEL_DEFAULT: &str = "info";

/// Value type of a configurable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Str,
    StrList,
}

/// A raw configuration value, typed per the descriptor's kind.
///
/// Used both for compiled-in defaults and for values produced by the
/// individual sources and the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::Str(_) => OptionKind::Str,
            OptionValue::List(_) => OptionKind::StrList,
        }
    }
}

/// Static declaration of one configurable setting.
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    /// Stable dotted identifier, e.g. `server.addr`.
    pub key: &'static str,
    /// Long flag name bound to this key, without leading dashes.
    pub flag: &'static str,
    /// Environment variable name bound to this key.
    pub env: &'static str,
    /// Zero-precedence fallback; its variant fixes the option's kind.
    pub default: OptionValue,
}

impl OptionDescriptor {
    pub fn kind(&self) -> OptionKind {
        self.default.kind()
    }
}

/// In-memory registry of option descriptors, populated once at startup and
/// read-only thereafter.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<OptionDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Fails if the key is already registered.
    pub fn register(&mut self, descriptor: OptionDescriptor) -> Result<()> {
        if self.index.contains_key(descriptor.key) {
            return Err(BoostError::duplicate_key(descriptor.key));
        }
        self.index.insert(descriptor.key, self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    pub fn descriptor(&self, key: &str) -> Option<&OptionDescriptor> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the registry with every mev-boost option: the genesis fork
    /// version group, the server listening address, the relay parameters,
    /// and the log parameters.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();

        for (key, flag, env) in [
            (GFV_MAINNET_KEY, GFV_MAINNET_FLAG, GFV_MAINNET_ENV),
            (GFV_KILN_KEY, GFV_KILN_FLAG, GFV_KILN_ENV),
            (GFV_ROPSTEN_KEY, GFV_ROPSTEN_FLAG, GFV_ROPSTEN_ENV),
            (GFV_SEPOLIA_KEY, GFV_SEPOLIA_FLAG, GFV_SEPOLIA_ENV),
        ] {
            registry.register(OptionDescriptor {
                key,
                flag,
                env,
                default: OptionValue::Bool(false),
            })?;
        }

        registry.register(OptionDescriptor {
            key: GFV_CUSTOM_KEY,
            flag: GFV_CUSTOM_FLAG,
            env: GFV_CUSTOM_ENV,
            default: OptionValue::Str(String::new()),
        })?;

        registry.register(OptionDescriptor {
            key: SERVER_ADDR_KEY,
            flag: SERVER_ADDR_FLAG,
            env: SERVER_ADDR_ENV,
            default: OptionValue::Str(SERVER_ADDR_DEFAULT.to_string()),
        })?;

        registry.register(OptionDescriptor {
            key: RELAY_URLS_KEY,
            flag: RELAY_URLS_FLAG,
            env: RELAY_URLS_ENV,
            default: OptionValue::List(Vec::new()),
        })?;

        registry.register(OptionDescriptor {
            key: RELAY_CHECK_KEY,
            flag: RELAY_CHECK_FLAG,
            env: RELAY_CHECK_ENV,
            default: OptionValue::Bool(false),
        })?;

        registry.register(OptionDescriptor {
            key: LOG_JSON_KEY,
            flag: LOG_JSON_FLAG,
            env: LOG_JSON_ENV,
            default: OptionValue::Bool(false),
        })?;

        registry.register(OptionDescriptor {
            key: LOG_LEVEL_KEY,
            flag: LOG_LEVEL_FLAG,
            env: LOG_LEVEL_ENV,
            default: OptionValue::Str(LOG_LEVEL_DEFAULT.to_string()),
        })?;

        Ok(registry)
    }
}
