use std::fmt;

use thiserror::Error;

/// Main error type for mev-boost configuration resolution
#[derive(Debug, Error)]
pub enum BoostError {
    #[error("duplicate option key: {key}")]
    DuplicateKey { key: String },

    #[error("unknown option key: {key}")]
    UnknownKey { key: String },

    #[error("option '{key}' is not a {expected}")]
    KindMismatch { key: String, expected: &'static str },

    #[error("config file '{path}' is unreadable: {reason}")]
    ConfigFileUnreadable { path: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(ConfigViolations),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BoostError {
    pub fn duplicate_key<S: Into<String>>(key: S) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    pub fn unknown_key<S: Into<String>>(key: S) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    pub fn config_file_unreadable<S: Into<String>>(path: S, reason: S) -> Self {
        Self::ConfigFileUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A single violated configuration invariant.
///
/// Violations are collected during validation and reported together as one
/// `BoostError::InvalidConfig`; validation does not stop at the first
/// violated invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error(
        "no genesis fork version selected: pass one of --gfv-mainnet, --gfv-kiln, \
         --gfv-ropsten, --gfv-sepolia, or --gfv-custom <hex>"
    )]
    MissingGenesisForkVersion,

    #[error("server address must not be empty (expected host:port, e.g. localhost:18550)")]
    EmptyServerAddr,

    #[error("invalid relay URL '{entry}': {reason}")]
    InvalidRelayUrl { entry: String, reason: String },
}

/// The full set of violations found in one validation pass.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigViolations(pub Vec<ConfigViolation>);

impl fmt::Display for ConfigViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}

/// Result type alias for mev-boost operations
pub type Result<T> = std::result::Result<T, BoostError>;
