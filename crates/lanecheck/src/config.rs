//! Suite configuration.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! wave = 64
//! previous = 100
//! element = "u32"
//! families = ["broadcast", "reverse", "rotate", "shift"]
//! exhaustive = false
//!
//! [[controls]]
//! row_mask = 0xF
//! bank_mask = 0xF
//! bound_ctrl = false
//! ```
//!
//! Mask values wider than four bits and wave sizes other than 32 or 64 are
//! rejected while parsing.

use crate::core::element::ElementKind;
use crate::core::lane::WaveSize;
use crate::core::mask::WriteControl;
use crate::driver::DEFAULT_PREVIOUS;
use crate::error::ConfigError;
use crate::op::OpFamily;
use serde::{Deserialize, Serialize};

/// Write controls the suite runs when none are configured.
///
/// Full masks with and without `bound_ctrl`, a single row and bank, two
/// checkerboards, and a disabled row mask.
pub const DEFAULT_CONTROLS: [WriteControl; 6] = [
    WriteControl::new(0xF, 0xF, false),
    WriteControl::new(0xF, 0xF, true),
    WriteControl::new(0x1, 0x1, false),
    WriteControl::new(0x5, 0xA, false),
    WriteControl::new(0xA, 0x5, true),
    WriteControl::new(0x0, 0xF, false),
];

/// Suite configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuiteConfig {
    /// Wavefront width.
    pub wave: WaveSize,
    /// Sentinel for the previous destination value.
    pub previous: u32,
    /// Lane element type.
    pub element: ElementKind,
    /// Write controls each case runs under.
    pub controls: Vec<WriteControl>,
    /// Families to run.
    pub families: Vec<OpFamily>,
    /// Run all 512 write controls instead of `controls`.
    pub exhaustive: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            wave: WaveSize::default(),
            previous: DEFAULT_PREVIOUS,
            element: ElementKind::default(),
            controls: DEFAULT_CONTROLS.to_vec(),
            families: OpFamily::ALL.to_vec(),
            exhaustive: false,
        }
    }
}

impl SuiteConfig {
    /// Parses a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, out of
    /// range masks or wave sizes, and [`ConfigError::Empty`] for a
    /// configuration that leaves nothing to run.
    ///
    /// # Example
    ///
    /// ```
    /// use lanecheck::config::SuiteConfig;
    /// use lanecheck::WaveSize;
    ///
    /// let config = SuiteConfig::from_toml_str("wave = 32\nprevious = 7").unwrap();
    /// assert_eq!(config.wave, WaveSize::Wave32);
    /// assert_eq!(config.previous, 7);
    /// assert!(SuiteConfig::from_toml_str("wave = 48").is_err());
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks constraints that deserialization alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if there is nothing to run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.controls.is_empty() && !self.exhaustive {
            return Err(ConfigError::Empty(
                "`controls` is empty and `exhaustive` is false",
            ));
        }
        if self.families.is_empty() {
            return Err(ConfigError::Empty("`families` is empty"));
        }
        Ok(())
    }

    /// Write controls to run, in order.
    #[must_use]
    pub fn control_matrix(&self) -> Vec<WriteControl> {
        if self.exhaustive {
            WriteControl::exhaustive().collect()
        } else {
            self.controls.clone()
        }
    }
}
