//! Config validation and assembly
//!
//! Assembles the final immutable `BoostConfig` from resolved values and
//! rejects invalid combinations. Validation collects every violated
//! invariant before failing, so the caller can report all problems at once.

use url::Url;

use crate::config::fork::select_genesis_fork_version;
use crate::config::registry::{
    LOG_JSON_KEY, LOG_LEVEL_KEY, RELAY_CHECK_KEY, RELAY_URLS_KEY, SERVER_ADDR_KEY,
};
use crate::config::resolver::Resolver;
use crate::error::{BoostError, ConfigViolation, ConfigViolations, Result};

/// Resolved log parameters, carried in the configuration even when the
/// downstream service ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub json: bool,
    pub level: String,
}

/// The final configuration handed to the rest of the service.
///
/// Constructed once per process start, after all sources are read, and never
/// mutated afterwards. A future hot-reload must build a new value and swap
/// the reference, not write through this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostConfig {
    pub genesis_fork_version_hex: String,
    pub server_addr: String,
    pub relay_urls: Vec<Url>,
    pub relay_check: bool,
    pub log: LogSettings,
}

/// Build and validate a `BoostConfig` from resolved values.
///
/// Checks: a genesis fork version was selected, the server address is
/// non-empty, and every relay URL entry parses with a scheme and a host.
/// On failure no partial configuration escapes; the error lists every
/// violation found.
pub fn build_config(resolver: &Resolver<'_>) -> Result<BoostConfig> {
    let mut violations = Vec::new();

    let genesis_fork_version_hex = match select_genesis_fork_version(resolver)? {
        Some(hex) => hex,
        None => {
            violations.push(ConfigViolation::MissingGenesisForkVersion);
            String::new()
        }
    };

    let server_addr = resolver.get_string(SERVER_ADDR_KEY)?;
    if server_addr.is_empty() {
        violations.push(ConfigViolation::EmptyServerAddr);
    }

    let raw_relay_urls = resolver.get_string_list(RELAY_URLS_KEY)?;
    let mut relay_urls = Vec::with_capacity(raw_relay_urls.len());
    for entry in &raw_relay_urls {
        match parse_relay_url(entry) {
            Ok(url) => relay_urls.push(url),
            Err(reason) => violations.push(ConfigViolation::InvalidRelayUrl {
                entry: entry.clone(),
                reason,
            }),
        }
    }

    let relay_check = resolver.get_bool(RELAY_CHECK_KEY)?;
    let log = LogSettings {
        json: resolver.get_bool(LOG_JSON_KEY)?,
        level: resolver.get_string(LOG_LEVEL_KEY)?,
    };

    if !violations.is_empty() {
        return Err(BoostError::InvalidConfig(ConfigViolations(violations)));
    }

    Ok(BoostConfig {
        genesis_fork_version_hex,
        server_addr,
        relay_urls,
        relay_check,
        log,
    })
}

/// A relay entry must be a well-formed absolute URL with a host.
/// `Url::parse` alone accepts strings like `localhost:18550`, treating
/// `localhost` as a scheme; such entries carry no host.
fn parse_relay_url(entry: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(entry).map_err(|e| e.to_string())?;
    if !url.has_host() {
        return Err("missing host".to_string());
    }
    Ok(url)
}
