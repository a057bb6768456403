//! The cross-lane primitive under test.
//!
//! On hardware every lane issues the same instruction and the unit moves
//! values between lane registers. Here the primitive is a trait: the driver
//! hands each lane a shared, read-only [`LaneFile`] (every lane's source
//! register at the instant the operation issues) and asks for that lane's
//! output.
//!
//! Implementations:
//!
//! - [`ReferenceUnit`]: software unit covering every family
//! - [`crate::dpp::DppUnit`]: DPP hardware model, for descriptors that lower
//!   to a single control word

mod reference;

pub use reference::ReferenceUnit;

use crate::core::element::LaneElement;
use crate::core::lane::{LaneId, WaveSize};
use crate::core::mask::WriteControl;
use crate::op::CrossLaneOp;

/// Source registers of one wavefront.
///
/// Lane `i` holds the element converted from `i`. Seeding with lane ids lets
/// every expected value be derived from lane indices alone.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneFile<T> {
    wave: WaveSize,
    values: Vec<T>,
}

impl<T: LaneElement> LaneFile<T> {
    /// Seeds every lane with its own index.
    #[must_use]
    pub fn lane_ids(wave: WaveSize) -> Self {
        Self {
            wave,
            values: (0..wave.lanes()).map(T::from_lane).collect(),
        }
    }

    /// Wavefront width.
    #[inline]
    #[must_use]
    pub fn wave(&self) -> WaveSize {
        self.wave
    }

    /// Value held by `lane`, or `None` past the end of the wavefront.
    #[inline]
    #[must_use]
    pub fn get(&self, lane: u32) -> Option<T> {
        self.values.get(lane as usize).copied()
    }

    /// All values in lane order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

/// A primitive that executes descriptor `Op` across a wavefront.
///
/// Implementations are the system under test. The oracle never calls them
/// to compute an expectation.
pub trait CrossLanePrimitive<Op: CrossLaneOp> {
    /// Value `lane` holds after the operation.
    ///
    /// `prev` is the destination register's value before the operation;
    /// a lane that is not written keeps it.
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T;
}

impl<Op: CrossLaneOp, P: CrossLanePrimitive<Op> + ?Sized> CrossLanePrimitive<Op> for &P {
    #[inline]
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T {
        (**self).exec(lane, src, prev, ctrl)
    }
}
