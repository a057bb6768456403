//! Row/bank write-enable masks.
//!
//! Cross-lane hardware gates each destination lane with two 4-bit selectors.
//! Bit `r` of the row mask enables the 16-lane row `r`; bit `b` of the bank
//! mask enables bank `b` (lanes `4b..4b+3`) inside every row. A lane whose
//! row or bank is disabled keeps its previous register value.

use super::lane::LaneId;
use crate::error::ConfigError;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Mask value enabling all four rows or all four banks.
pub const MASK_ALL: u8 = 0xF;

/// Returns true if `lane`'s output slot is writable under the two masks.
///
/// Pure function of the lane index: the operation's group plays no part.
///
/// # Example
///
/// ```
/// use lanecheck::is_active;
///
/// assert!(is_active(0, 0x1, 0x1));
/// assert!(!is_active(4, 0x1, 0x1)); // bank 1
/// assert!(!is_active(16, 0x1, 0xF)); // row 1
/// assert!(!is_active(0, 0x0, 0xF));
/// ```
#[inline]
#[must_use]
pub const fn is_active(lane: u32, row_mask: u32, bank_mask: u32) -> bool {
    (row_mask & (1 << ((lane >> 4) & 0x3))) != 0 && (bank_mask & (1 << ((lane >> 2) & 0x3))) != 0
}

/// Write masks and boundary control for one cross-lane invocation.
///
/// `bound_ctrl` decides what a lane writes when the operation gives it no
/// valid source lane: zero when set, nothing (the previous value survives)
/// when clear. It has no effect on lanes disabled by the masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWriteControl")]
pub struct WriteControl {
    row_mask: u8,
    bank_mask: u8,
    bound_ctrl: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWriteControl {
    row_mask: u32,
    bank_mask: u32,
    #[serde(default)]
    bound_ctrl: bool,
}

impl TryFrom<RawWriteControl> for WriteControl {
    type Error = ConfigError;

    fn try_from(raw: RawWriteControl) -> Result<Self, Self::Error> {
        Self::try_new(raw.row_mask, raw.bank_mask, raw.bound_ctrl)
    }
}

impl WriteControl {
    /// All lanes writable, `bound_ctrl` clear.
    pub const ALL: Self = Self::new(MASK_ALL, MASK_ALL, false);

    /// Creates a write control. Masks are truncated to their 4-bit hardware
    /// fields.
    #[inline]
    #[must_use]
    pub const fn new(row_mask: u8, bank_mask: u8, bound_ctrl: bool) -> Self {
        Self {
            row_mask: row_mask & MASK_ALL,
            bank_mask: bank_mask & MASK_ALL,
            bound_ctrl,
        }
    }

    /// Creates a write control from untrusted values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaskOutOfRange`] if either mask has bits above
    /// bit 3.
    pub fn try_new(row_mask: u32, bank_mask: u32, bound_ctrl: bool) -> Result<Self, ConfigError> {
        let row = narrow_mask("row", row_mask)?;
        let bank = narrow_mask("bank", bank_mask)?;
        Ok(Self::new(row, bank, bound_ctrl))
    }

    /// Every combination of row mask, bank mask and `bound_ctrl` (512 controls).
    pub fn exhaustive() -> impl Iterator<Item = Self> {
        (0..=MASK_ALL).flat_map(|row| {
            (0..=MASK_ALL).flat_map(move |bank| {
                [false, true]
                    .into_iter()
                    .map(move |bound| Self::new(row, bank, bound))
            })
        })
    }

    /// Row write mask.
    #[inline]
    #[must_use]
    pub const fn row_mask(&self) -> u8 {
        self.row_mask
    }

    /// Bank write mask.
    #[inline]
    #[must_use]
    pub const fn bank_mask(&self) -> u8 {
        self.bank_mask
    }

    /// Boundary-control flag.
    #[inline]
    #[must_use]
    pub const fn bound_ctrl(&self) -> bool {
        self.bound_ctrl
    }

    /// Returns true if `lane` may be written under these masks.
    #[inline]
    #[must_use]
    pub const fn is_active(&self, lane: LaneId) -> bool {
        is_active(lane.index(), self.row_mask as u32, self.bank_mask as u32)
    }
}

impl Default for WriteControl {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for WriteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row={:#x} bank={:#x} bound_ctrl={}",
            self.row_mask, self.bank_mask, self.bound_ctrl
        )
    }
}

fn narrow_mask(field: &'static str, value: u32) -> Result<u8, ConfigError> {
    u8::try_from(value)
        .ok()
        .filter(|mask| *mask <= MASK_ALL)
        .ok_or(ConfigError::MaskOutOfRange { field, value })
}
