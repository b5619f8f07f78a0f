//! Resolver
//!
//! Merges per-key raw values from the three sources into one resolved value
//! using fixed precedence: flag > environment variable > file > default.
//! Resolution is a pure function of the sources and the registry; absence of
//! every source is always satisfied by the descriptor's default and is never
//! an error.

use crate::config::registry::{OptionValue, Registry};
use crate::config::sources::Sources;
use crate::error::{BoostError, Result};

pub struct Resolver<'a> {
    registry: &'a Registry,
    sources: &'a Sources,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, sources: &'a Sources) -> Self {
        Self { registry, sources }
    }

    /// Resolve the value for `key`: the first explicitly-set value in
    /// precedence order, or the descriptor's default.
    pub fn resolve(&self, key: &str) -> Result<OptionValue> {
        let descriptor = self
            .registry
            .descriptor(key)
            .ok_or_else(|| BoostError::unknown_key(key))?;
        let values = self.sources.lookup(descriptor);
        Ok(values
            .flag
            .or(values.env)
            .or(values.file)
            .unwrap_or_else(|| descriptor.default.clone()))
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.resolve(key)? {
            OptionValue::Bool(b) => Ok(b),
            _ => Err(BoostError::KindMismatch {
                key: key.to_string(),
                expected: "boolean",
            }),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<String> {
        match self.resolve(key)? {
            OptionValue::Str(s) => Ok(s),
            _ => Err(BoostError::KindMismatch {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>> {
        match self.resolve(key)? {
            OptionValue::List(list) => Ok(list),
            _ => Err(BoostError::KindMismatch {
                key: key.to_string(),
                expected: "string list",
            }),
        }
    }
}
