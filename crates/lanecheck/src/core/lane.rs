//! Lane identity and wavefront width.

use crate::error::ConfigError;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Lanes in a full wave64 wavefront.
pub const WAVE64_LANES: u32 = 64;

/// Lanes in a wave32 wavefront.
pub const WAVE32_LANES: u32 = 32;

/// Widest group any cross-lane operation may span.
pub const MAX_GROUP_SIZE: u32 = WAVE64_LANES;

/// Width of the wavefront executing in lock-step.
///
/// Serializes as its lane count (`32` or `64`).
///
/// # Example
///
/// ```
/// use lanecheck::WaveSize;
///
/// assert_eq!(WaveSize::Wave64.lanes(), 64);
/// assert_eq!(WaveSize::Wave64.full_lane_mask(), 63);
/// assert_eq!(WaveSize::try_from(32), Ok(WaveSize::Wave32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WaveSize {
    /// 32 lanes (two rows of 16).
    Wave32,
    /// 64 lanes (four rows of 16).
    #[default]
    Wave64,
}

impl WaveSize {
    /// Number of lanes.
    #[inline]
    #[must_use]
    pub const fn lanes(self) -> u32 {
        match self {
            Self::Wave32 => WAVE32_LANES,
            Self::Wave64 => WAVE64_LANES,
        }
    }

    /// Mask covering every valid lane index (`lanes - 1`).
    #[inline]
    #[must_use]
    pub const fn full_lane_mask(self) -> u32 {
        self.lanes() - 1
    }

    /// Returns true if a group of `group_size` lanes fits in this wavefront.
    #[inline]
    #[must_use]
    pub const fn fits(self, group_size: u32) -> bool {
        group_size <= self.lanes()
    }

    /// Iterator over every lane of the wavefront in index order.
    pub fn lane_ids(self) -> impl Iterator<Item = LaneId> {
        (0..self.lanes()).map(LaneId::new)
    }
}

impl TryFrom<u32> for WaveSize {
    type Error = ConfigError;

    fn try_from(lanes: u32) -> Result<Self, Self::Error> {
        match lanes {
            WAVE32_LANES => Ok(Self::Wave32),
            WAVE64_LANES => Ok(Self::Wave64),
            other => Err(ConfigError::UnsupportedWaveSize(other)),
        }
    }
}

impl From<WaveSize> for u32 {
    fn from(wave: WaveSize) -> Self {
        wave.lanes()
    }
}

impl fmt::Display for WaveSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wave{}", self.lanes())
    }
}

/// Index of one lane within its wavefront.
///
/// Supplied by the execution runtime and fixed for the duration of an
/// operation. Row and bank are the hardware's write-enable coordinates:
/// a row is 16 lanes, a bank is 4 lanes within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LaneId(u32);

impl LaneId {
    /// Creates a lane id.
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw lane index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Row of 16 lanes this lane belongs to (`(index >> 4) & 3`).
    #[inline]
    #[must_use]
    pub const fn row(self) -> u32 {
        (self.0 >> 4) & 0x3
    }

    /// Bank of 4 lanes within the row (`(index >> 2) & 3`).
    #[inline]
    #[must_use]
    pub const fn bank(self) -> u32 {
        (self.0 >> 2) & 0x3
    }

    /// Group number for a power-of-two `group_size`.
    #[inline]
    #[must_use]
    pub const fn group(self, group_size: u32) -> u32 {
        self.0 / group_size
    }

    /// Position within the group for a power-of-two `group_size`.
    #[inline]
    #[must_use]
    pub const fn position(self, group_size: u32) -> u32 {
        self.0 % group_size
    }
}

impl From<u32> for LaneId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lane {}", self.0)
    }
}
