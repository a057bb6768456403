//! Error types.
//!
//! Descriptor shapes and directions are checked by the compiler. What is left
//! for run time is configuration that arrives as data: masks and wave sizes
//! from a config file or the command line, and raw DPP control words.

use thiserror::Error;

/// Invalid runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A row or bank write mask does not fit in four bits.
    #[error("{field} mask {value:#x} does not fit in 4 bits")]
    MaskOutOfRange {
        /// Which mask (`"row"` or `"bank"`).
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// The wavefront width is neither 32 nor 64 lanes.
    #[error("unsupported wave size {0} (expected 32 or 64)")]
    UnsupportedWaveSize(u32),

    /// An operation's group is wider than the wavefront it runs on.
    #[error("group size {group} exceeds the {lanes}-lane wavefront")]
    GroupExceedsWave {
        /// Group size of the operation.
        group: u32,
        /// Lanes in the wavefront.
        lanes: u32,
    },

    /// A named option (element type, backend, family) is not recognised.
    #[error("unknown {kind} `{name}`")]
    UnknownName {
        /// What was being named.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// The suite configuration file is not valid TOML for [`crate::config::SuiteConfig`].
    #[error("invalid suite configuration: {0}")]
    Parse(String),

    /// The configuration parsed but leaves nothing to run.
    #[error("nothing to run: {0}")]
    Empty(&'static str),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Invalid DPP control word or field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DppCtrlError {
    /// The 9-bit encoding is reserved or wider than 9 bits.
    #[error("reserved dpp_ctrl encoding {0:#05x}")]
    Reserved(u16),

    /// A row shift or rotate amount outside 1..=15.
    #[error("row shift amount {0} outside 1..=15")]
    ShiftOutOfRange(u8),

    /// A lane selector outside its field (quad selectors 0..=3, row lanes 0..=15).
    #[error("lane selector {0} out of range")]
    SelectorOutOfRange(u8),
}
