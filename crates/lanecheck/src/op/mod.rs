//! Operation descriptors and their compile-time classification.
//!
//! A descriptor is a zero-sized type whose parameters are const generics.
//! Implementing [`CrossLaneOp`] classifies it into a family and binds it to
//! that family's expectation function; the binding is resolved during
//! monomorphization, so the per-lane path never branches on the kind of
//! operation.
//!
//! A type that does not implement [`CrossLaneOp`] cannot be passed to the
//! driver. Parameters that make no sense (a group that is not a power of two
//! or wider than 64 lanes, an element index or distance outside the group)
//! are rejected when the descriptor is instantiated:
//!
//! ```compile_fail
//! use lanecheck::op::{CrossLaneOp, Reverse};
//! use lanecheck::WaveSize;
//!
//! // 12 is not a power of two.
//! let _ = <Reverse<12> as CrossLaneOp>::expect(0, WaveSize::Wave64);
//! ```
//!
//! # Adding a family
//!
//! 1. Add a descriptor type in this module (see [`Shift`]).
//! 2. Implement [`CrossLaneOp`] for it with a new [`OpFamily`] variant.
//! 3. Add its expectation function in [`crate::expect`].
//!
//! Existing families are untouched.

mod descriptor;

pub use descriptor::{Broadcast, Reverse, Rotate, Shift};

pub use crate::expect::Direction;

use crate::core::lane::{WaveSize, MAX_GROUP_SIZE};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Operation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpFamily {
    /// Every lane of a group reads one fixed position.
    Broadcast,
    /// Positions mirrored within the group.
    Reverse,
    /// Positions rotated within the group, wrapping.
    Rotate,
    /// Positions shifted within the group, without wrapping.
    Shift,
}

impl OpFamily {
    /// All families in declaration order.
    pub const ALL: [Self; 4] = [Self::Broadcast, Self::Reverse, Self::Rotate, Self::Shift];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Broadcast => "broadcast",
            Self::Reverse => "reverse",
            Self::Rotate => "rotate",
            Self::Shift => "shift",
        }
    }

    /// Returns true if every active lane of this family has a valid source.
    ///
    /// Only shift can leave a lane without one.
    #[inline]
    #[must_use]
    pub const fn is_total(self) -> bool {
        !matches!(self, Self::Shift)
    }
}

impl fmt::Display for OpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for OpFamily {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| crate::error::ConfigError::UnknownName {
                kind: "operation family",
                name: s.to_string(),
            })
    }
}

/// A cross-lane operation descriptor.
///
/// Implementors are zero-sized; everything about the operation is in the
/// type.
pub trait CrossLaneOp: Copy + Default + fmt::Display + Send + Sync + 'static {
    /// Family this descriptor belongs to.
    const FAMILY: OpFamily;

    /// Lanes per group.
    const GROUP_SIZE: u32;

    /// Lane index whose value `input` should observe, or `None` if the
    /// operation gives it no valid source.
    ///
    /// `input` is the lane's own index within a `wave`-wide wavefront. The
    /// caller has already established that the lane is active.
    fn expect(input: u32, wave: WaveSize) -> Option<u32>;

    /// Human-readable label, e.g. `rotate<left, 1, 8>`.
    fn label() -> String {
        Self::default().to_string()
    }
}

/// Returns true if `Op` is a broadcast.
#[inline]
#[must_use]
pub const fn is_broadcast<Op: CrossLaneOp>() -> bool {
    matches!(Op::FAMILY, OpFamily::Broadcast)
}

/// Returns true if `Op` is a reverse.
#[inline]
#[must_use]
pub const fn is_reverse<Op: CrossLaneOp>() -> bool {
    matches!(Op::FAMILY, OpFamily::Reverse)
}

/// Returns true if `Op` is a rotate.
#[inline]
#[must_use]
pub const fn is_rotate<Op: CrossLaneOp>() -> bool {
    matches!(Op::FAMILY, OpFamily::Rotate)
}

/// Returns true if `Op` is a shift.
#[inline]
#[must_use]
pub const fn is_shift<Op: CrossLaneOp>() -> bool {
    matches!(Op::FAMILY, OpFamily::Shift)
}

/// Compile-time direction marker for [`Rotate`] and [`Shift`].
///
/// Sealed: [`Left`] and [`Right`] are the only directions.
pub trait Dir: sealed::Sealed + Copy + Default + Send + Sync + 'static {
    /// Runtime value of this marker.
    const VALUE: Direction;
}

/// Marker for [`Direction::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Left;

/// Marker for [`Direction::Right`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Right;

impl Dir for Left {
    const VALUE: Direction = Direction::Left;
}

impl Dir for Right {
    const VALUE: Direction = Direction::Right;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Left {}
    impl Sealed for super::Right {}
}

/// Shared group-size rule: a power of two no wider than a wave64.
pub(crate) const fn valid_group(group_size: u32) -> bool {
    group_size.is_power_of_two() && group_size <= MAX_GROUP_SIZE
}
