//! Configuration resolution module
//!
//! Resolves the process configuration from command-line flags, environment
//! variables, a YAML settings file, and compiled-in defaults, in that
//! precedence order, then validates the result into one immutable
//! `BoostConfig`. Resolution runs once at startup, before any concurrent
//! subsystem exists, and performs no I/O beyond reading its sources.

pub mod builder;
pub mod fork;
pub mod registry;
pub mod resolver;
pub mod sources;

pub use builder::{build_config, BoostConfig, LogSettings};
pub use fork::{select_genesis_fork_version, ForkPreset};
pub use registry::{OptionDescriptor, OptionKind, OptionValue, Registry};
pub use resolver::Resolver;
pub use sources::{EnvSource, FileSettings, Sources};
