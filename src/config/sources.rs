//! Source layer
//!
//! Exposes, for a given option, whether each of the three sources (flags,
//! environment variables, the YAML settings file) holds an explicit value.
//! Sources never apply precedence themselves; that is the resolver's job.
//! A source that cannot produce a value for a key simply reports absence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::registry::{OptionDescriptor, OptionKind, OptionValue};
use crate::error::BoostError;

/// File name searched in the home directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".mev-boost.yaml";

/// Parse a raw text value as a boolean: `1`/`true`/`yes`/`on` are true
/// (case-insensitive, trimmed), any other non-empty text is false.
fn parse_bool_text(raw: &str) -> Option<bool> {
    let trimmed = raw.trim().to_ascii_lowercase();
    if trimmed.is_empty() {
        return None;
    }
    Some(matches!(trimmed.as_str(), "1" | "true" | "yes" | "on"))
}

/// Split a raw text value into list entries on commas, trimming each entry
/// and dropping empty segments.
fn split_list_text(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Snapshot of environment variables, taken once at startup.
///
/// Tests inject their own snapshot instead of mutating the process
/// environment, which would race across threads.
#[derive(Debug, Default, Clone)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of the descriptor's environment variable, parsed per its kind.
    /// Unset or empty variables are absent.
    pub fn get(&self, descriptor: &OptionDescriptor) -> Option<OptionValue> {
        let raw = self.vars.get(descriptor.env)?;
        if raw.trim().is_empty() {
            return None;
        }
        match descriptor.kind() {
            OptionKind::Bool => parse_bool_text(raw).map(OptionValue::Bool),
            OptionKind::Str => Some(OptionValue::Str(raw.trim().to_string())),
            OptionKind::StrList => Some(OptionValue::List(split_list_text(raw))),
        }
    }
}

/// Settings loaded from the YAML config file, flattened to dotted keys.
///
/// Loading never fails: a missing file yields an empty source, and an
/// unreadable or unparsable file yields an empty source plus a warning the
/// caller emits once logging is up.
#[derive(Debug, Default)]
pub struct FileSettings {
    values: HashMap<String, serde_yaml::Value>,
    path: Option<PathBuf>,
    warning: Option<BoostError>,
}

impl FileSettings {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load settings from `explicit` if given, otherwise from
    /// `~/.mev-boost.yaml`. Absence of the file is not an error.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match dirs::home_dir() {
                Some(home) => home.join(DEFAULT_CONFIG_FILE),
                None => return Self::empty(),
            },
        };

        if !path.exists() {
            return Self::empty();
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => return Self::unreadable(path, e.to_string()),
        };

        match Self::parse(&contents) {
            Ok(values) => Self {
                values,
                path: Some(path),
                warning: None,
            },
            Err(reason) => Self::unreadable(path, reason),
        }
    }

    /// Parse YAML settings from a string. Used directly by tests.
    pub fn from_yaml_str(contents: &str) -> Result<Self, String> {
        Ok(Self {
            values: Self::parse(contents)?,
            path: None,
            warning: None,
        })
    }

    fn unreadable(path: PathBuf, reason: String) -> Self {
        let warning = BoostError::config_file_unreadable(path.display().to_string(), reason);
        Self {
            values: HashMap::new(),
            path: None,
            warning: Some(warning),
        }
    }

    fn parse(contents: &str) -> Result<HashMap<String, serde_yaml::Value>, String> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(contents).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        match document {
            serde_yaml::Value::Mapping(mapping) => {
                flatten_mapping("", &mapping, &mut values);
                Ok(values)
            }
            serde_yaml::Value::Null => Ok(values),
            _ => Err("top-level YAML value must be a mapping".to_string()),
        }
    }

    /// Path of the file that was actually read, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Deferred warning from a file that existed but could not be used.
    pub fn warning(&self) -> Option<&BoostError> {
        self.warning.as_ref()
    }

    /// Value for the descriptor's dotted key, coerced to its kind.
    /// Values of the wrong shape are absent rather than fatal.
    pub fn get(&self, descriptor: &OptionDescriptor) -> Option<OptionValue> {
        let value = self.values.get(descriptor.key)?;
        match descriptor.kind() {
            OptionKind::Bool => match value {
                serde_yaml::Value::Bool(b) => Some(OptionValue::Bool(*b)),
                serde_yaml::Value::String(s) => parse_bool_text(s).map(OptionValue::Bool),
                _ => None,
            },
            OptionKind::Str => scalar_to_string(value).map(OptionValue::Str),
            OptionKind::StrList => match value {
                serde_yaml::Value::Sequence(items) => Some(OptionValue::List(
                    items.iter().filter_map(scalar_to_string).collect(),
                )),
                serde_yaml::Value::String(s) => Some(OptionValue::List(split_list_text(s))),
                _ => None,
            },
        }
    }
}

/// Flatten nested mappings into dotted keys, so `gfv: {mainnet: true}` and
/// `gfv.mainnet: true` address the same option.
fn flatten_mapping(
    prefix: &str,
    mapping: &serde_yaml::Mapping,
    out: &mut HashMap<String, serde_yaml::Value>,
) {
    for (key, value) in mapping {
        let name = match key {
            serde_yaml::Value::String(s) => s.clone(),
            _ => continue,
        };
        let full = if prefix.is_empty() {
            name
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            serde_yaml::Value::Mapping(nested) => flatten_mapping(&full, nested, out),
            other => {
                out.insert(full, other.clone());
            }
        }
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Raw per-source values for one option key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceValues {
    pub flag: Option<OptionValue>,
    pub env: Option<OptionValue>,
    pub file: Option<OptionValue>,
}

/// The three independent providers of raw option values.
#[derive(Debug, Default)]
pub struct Sources {
    flags: HashMap<String, OptionValue>,
    env: EnvSource,
    file: FileSettings,
}

impl Sources {
    /// `flags` holds only options the user explicitly passed on the command
    /// line, keyed by dotted option key.
    pub fn new(flags: HashMap<String, OptionValue>, env: EnvSource, file: FileSettings) -> Self {
        Self { flags, env, file }
    }

    pub fn lookup(&self, descriptor: &OptionDescriptor) -> SourceValues {
        SourceValues {
            flag: self.flags.get(descriptor.key).cloned(),
            env: self.env.get(descriptor),
            file: self.file.get(descriptor),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.path()
    }

    pub fn file_warning(&self) -> Option<&BoostError> {
        self.file.warning()
    }
}
