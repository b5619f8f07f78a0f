//! CLI module for mev-boost
//!
//! This module contains all command-line interface related functionality,
//! including flag definitions, argument parsing, and the bridge from parsed
//! flags into the configuration source layer.

pub mod commands;

pub use commands::*;
