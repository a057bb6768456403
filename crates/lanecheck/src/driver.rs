//! Per-lane test driver.
//!
//! For one lane the driver seeds the input with the lane's own index,
//! decides from the write masks whether the lane is writable, derives the
//! expected value (the descriptor's expectation for an active lane, the
//! sentinel for an inactive one), runs the primitive under test with the same
//! descriptor and parameters, and reports whether the two disagree.
//!
//! [`run_wavefront`] does this for every lane of a wavefront. Lanes share one
//! immutable [`LaneFile`] and produce independent verdicts, so with the
//! `parallel` feature they run on the rayon pool.
//!
//! # Example
//!
//! ```
//! use lanecheck::driver::{run_wavefront, DEFAULT_PREVIOUS};
//! use lanecheck::op::{Left, Rotate};
//! use lanecheck::{ReferenceUnit, WaveSize, WriteControl};
//!
//! let outcome = run_wavefront::<u32, Rotate<Left, 1, 8>, _>(
//!     &ReferenceUnit::new(),
//!     WaveSize::Wave64,
//!     WriteControl::ALL,
//!     DEFAULT_PREVIOUS,
//! )
//! .unwrap();
//! assert!(!outcome.any_failed());
//! assert_eq!(outcome.verdicts()[7].expected, 0);
//! ```

use crate::core::element::LaneElement;
use crate::core::lane::{LaneId, WaveSize};
use crate::core::mask::{is_active, WriteControl};
use crate::error::ConfigError;
use crate::op::CrossLaneOp;
use crate::primitive::{CrossLanePrimitive, LaneFile};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default sentinel for the destination register's previous value.
pub const DEFAULT_PREVIOUS: u32 = 100;

/// Value `lane` should hold after `Op` executes.
///
/// Inactive lanes keep `prev`. Active lanes without a valid source write
/// zero under `bound_ctrl` and keep `prev` otherwise.
#[inline]
#[must_use]
pub fn expected_value<T: LaneElement, Op: CrossLaneOp>(
    lane: LaneId,
    wave: WaveSize,
    prev: T,
    ctrl: WriteControl,
) -> T {
    let index = lane.index();
    let (row, bank) = (ctrl.row_mask(), ctrl.bank_mask());
    if !is_active(index, u32::from(row), u32::from(bank)) {
        return prev;
    }
    match Op::expect(index, wave) {
        Some(source) => T::from_lane(source),
        None if ctrl.bound_ctrl() => T::from_lane(0),
        None => prev,
    }
}

/// Runs one lane. Returns true if the primitive's output differs from the
/// expectation.
#[inline]
pub fn run_test_case<T, Op, P>(
    primitive: &P,
    lane: LaneId,
    src: &LaneFile<T>,
    prev: T,
    ctrl: WriteControl,
) -> bool
where
    T: LaneElement,
    Op: CrossLaneOp,
    P: CrossLanePrimitive<Op> + ?Sized,
{
    judge::<T, Op, P>(primitive, lane, src, prev, ctrl).mismatch
}

/// Outcome of one lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneVerdict<T> {
    /// Lane that ran.
    pub lane: LaneId,
    /// Value the oracle expected.
    pub expected: T,
    /// Value the primitive produced.
    pub observed: T,
    /// True if `expected != observed`.
    pub mismatch: bool,
}

fn judge<T, Op, P>(
    primitive: &P,
    lane: LaneId,
    src: &LaneFile<T>,
    prev: T,
    ctrl: WriteControl,
) -> LaneVerdict<T>
where
    T: LaneElement,
    Op: CrossLaneOp,
    P: CrossLanePrimitive<Op> + ?Sized,
{
    let expected = expected_value::<T, Op>(lane, src.wave(), prev, ctrl);
    let observed = <P as CrossLanePrimitive<Op>>::exec(primitive, lane, src, prev, ctrl);
    LaneVerdict {
        lane,
        expected,
        observed,
        mismatch: expected != observed,
    }
}

/// Verdicts for every lane of one wavefront, in lane order.
#[derive(Debug, Clone, PartialEq)]
pub struct WavefrontOutcome<T> {
    wave: WaveSize,
    verdicts: Vec<LaneVerdict<T>>,
}

impl<T: LaneElement> WavefrontOutcome<T> {
    /// Wavefront width the outcome was produced on.
    #[must_use]
    pub fn wave(&self) -> WaveSize {
        self.wave
    }

    /// Per-lane verdicts, indexed by lane.
    #[must_use]
    pub fn verdicts(&self) -> &[LaneVerdict<T>] {
        &self.verdicts
    }

    /// The per-lane mismatch flags.
    #[must_use]
    pub fn flags(&self) -> Vec<bool> {
        self.verdicts.iter().map(|v| v.mismatch).collect()
    }

    /// Verdicts of the lanes that mismatched.
    pub fn mismatches(&self) -> impl Iterator<Item = &LaneVerdict<T>> {
        self.verdicts.iter().filter(|v| v.mismatch)
    }

    /// Indices of the lanes that mismatched.
    #[must_use]
    pub fn failed_lanes(&self) -> Vec<u32> {
        self.mismatches().map(|v| v.lane.index()).collect()
    }

    /// Logical OR of every lane's mismatch flag.
    #[must_use]
    pub fn any_failed(&self) -> bool {
        self.verdicts.iter().any(|v| v.mismatch)
    }
}

/// Runs descriptor `Op` on every lane of a `wave`-wide wavefront.
///
/// The source file holds each lane's own index; `prev` is the destination
/// sentinel, converted to `T`.
///
/// # Errors
///
/// Returns [`ConfigError::GroupExceedsWave`] if `Op`'s group is wider than
/// the wavefront.
pub fn run_wavefront<T, Op, P>(
    primitive: &P,
    wave: WaveSize,
    ctrl: WriteControl,
    prev: u32,
) -> Result<WavefrontOutcome<T>, ConfigError>
where
    T: LaneElement,
    Op: CrossLaneOp,
    P: CrossLanePrimitive<Op> + Sync + ?Sized,
{
    if !wave.fits(Op::GROUP_SIZE) {
        return Err(ConfigError::GroupExceedsWave {
            group: Op::GROUP_SIZE,
            lanes: wave.lanes(),
        });
    }

    let span = tracing::debug_span!("wavefront", op = %Op::label(), %wave, %ctrl);
    let _guard = span.enter();

    let src = LaneFile::<T>::lane_ids(wave);
    let prev = T::from_lane(prev);

    #[cfg(feature = "parallel")]
    let verdicts: Vec<LaneVerdict<T>> = (0..wave.lanes())
        .into_par_iter()
        .map(|i| judge::<T, Op, P>(primitive, LaneId::new(i), &src, prev, ctrl))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let verdicts: Vec<LaneVerdict<T>> = wave
        .lane_ids()
        .map(|lane| judge::<T, Op, P>(primitive, lane, &src, prev, ctrl))
        .collect();

    let outcome = WavefrontOutcome { wave, verdicts };
    for v in outcome.mismatches() {
        tracing::warn!(
            lane = v.lane.index(),
            expected = ?v.expected,
            observed = ?v.observed,
            "lane mismatch"
        );
    }
    tracing::debug!(failed = outcome.mismatches().count(), "wavefront done");
    Ok(outcome)
}
