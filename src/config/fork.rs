//! Genesis fork version selection
//!
//! The genesis fork version group is a fixed, ordered set of mutually
//! exclusive boolean presets plus one free-form custom override. Selection
//! walks the presets in priority order and takes the first one resolved to
//! true; the custom override only applies when no preset is active.

use crate::config::registry::{
    GFV_CUSTOM_KEY, GFV_KILN_KEY, GFV_MAINNET_KEY, GFV_ROPSTEN_KEY, GFV_SEPOLIA_KEY,
};
use crate::config::resolver::Resolver;
use crate::error::Result;

pub const GENESIS_FORK_VERSION_MAINNET: &str = "0x00000000";
pub const GENESIS_FORK_VERSION_KILN: &str = "0x70000069";
pub const GENESIS_FORK_VERSION_ROPSTEN: &str = "0x80000069";
pub const GENESIS_FORK_VERSION_SEPOLIA: &str = "0x90000069";

/// A named network preset carrying a well-known genesis fork version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkPreset {
    Mainnet,
    Kiln,
    Ropsten,
    Sepolia,
}

impl ForkPreset {
    /// Fixed priority order. When several presets are set at once, the
    /// earliest one in this array wins and the rest are ignored.
    pub const PRIORITY: [ForkPreset; 4] = [
        ForkPreset::Mainnet,
        ForkPreset::Kiln,
        ForkPreset::Ropsten,
        ForkPreset::Sepolia,
    ];

    /// Registry key of the preset's boolean option.
    pub fn key(self) -> &'static str {
        match self {
            ForkPreset::Mainnet => GFV_MAINNET_KEY,
            ForkPreset::Kiln => GFV_KILN_KEY,
            ForkPreset::Ropsten => GFV_ROPSTEN_KEY,
            ForkPreset::Sepolia => GFV_SEPOLIA_KEY,
        }
    }

    /// Genesis fork version hex constant for this preset's network.
    pub fn version_hex(self) -> &'static str {
        match self {
            ForkPreset::Mainnet => GENESIS_FORK_VERSION_MAINNET,
            ForkPreset::Kiln => GENESIS_FORK_VERSION_KILN,
            ForkPreset::Ropsten => GENESIS_FORK_VERSION_ROPSTEN,
            ForkPreset::Sepolia => GENESIS_FORK_VERSION_SEPOLIA,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ForkPreset::Mainnet => "mainnet",
            ForkPreset::Kiln => "kiln",
            ForkPreset::Ropsten => "ropsten",
            ForkPreset::Sepolia => "sepolia",
        }
    }
}

/// Select the effective genesis fork version from the resolved group.
///
/// Returns the hex constant of the first preset resolved to true, else the
/// custom override verbatim when it is non-empty (no format validation
/// beyond non-emptiness), else `None`. The validator turns `None` into a
/// `MissingGenesisForkVersion` violation.
pub fn select_genesis_fork_version(resolver: &Resolver<'_>) -> Result<Option<String>> {
    for preset in ForkPreset::PRIORITY {
        if resolver.get_bool(preset.key())? {
            return Ok(Some(preset.version_hex().to_string()));
        }
    }

    let custom = resolver.get_string(GFV_CUSTOM_KEY)?;
    if !custom.is_empty() {
        return Ok(Some(custom));
    }

    Ok(None)
}
