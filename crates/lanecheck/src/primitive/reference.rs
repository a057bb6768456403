//! Software cross-lane unit.
//!
//! Gathers each lane's value from the source lane it names. Source positions
//! and write enables are written with division and remainder rather than bit
//! masks, so this unit shares no arithmetic with [`crate::expect`].
//!
//! # Write Semantics
//!
//! | Lane state | Result |
//! |------------|--------|
//! | row or bank disabled | `prev` |
//! | enabled, valid source `s` | `src[s]` |
//! | enabled, no source, `bound_ctrl` | `0` |
//! | enabled, no source, no `bound_ctrl` | `prev` |

use super::{CrossLanePrimitive, LaneFile};
use crate::core::element::LaneElement;
use crate::core::lane::LaneId;
use crate::core::mask::WriteControl;
use crate::expect::Direction;
use crate::op::{Broadcast, Dir, Reverse, Rotate, Shift};

/// Reference cross-lane unit for every family.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceUnit;

impl ReferenceUnit {
    /// Create a new reference unit.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Write enable from the lane's row (16-lane block) and bank (4-lane block).
#[inline(always)]
fn writes(lane: u32, ctrl: WriteControl) -> bool {
    let row = lane / 16 % 4;
    let bank = lane / 4 % 4;
    (ctrl.row_mask() >> row) & 1 == 1 && (ctrl.bank_mask() >> bank) & 1 == 1
}

#[inline(always)]
fn gather<T: LaneElement>(
    lane: u32,
    source: Option<u32>,
    src: &LaneFile<T>,
    prev: T,
    ctrl: WriteControl,
) -> T {
    if !writes(lane, ctrl) {
        return prev;
    }
    match source.and_then(|s| src.get(s)) {
        Some(value) => value,
        None if ctrl.bound_ctrl() => T::from_lane(0),
        None => prev,
    }
}

/// First lane of the group holding `lane`.
#[inline(always)]
const fn group_start(lane: u32, group: u32) -> u32 {
    lane / group * group
}

impl<const ELEM: u32, const GROUP: u32> CrossLanePrimitive<Broadcast<ELEM, GROUP>>
    for ReferenceUnit
{
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T {
        let l = lane.index();
        gather(l, Some(group_start(l, GROUP) + ELEM), src, prev, ctrl)
    }
}

impl<const GROUP: u32> CrossLanePrimitive<Reverse<GROUP>> for ReferenceUnit {
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T {
        let l = lane.index();
        let source = group_start(l, GROUP) + (GROUP - 1 - l % GROUP);
        gather(l, Some(source), src, prev, ctrl)
    }
}

impl<D: Dir, const DIST: u32, const GROUP: u32> CrossLanePrimitive<Rotate<D, DIST, GROUP>>
    for ReferenceUnit
{
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T {
        let l = lane.index();
        let pos = l % GROUP;
        let step = DIST % GROUP;
        let target = match D::VALUE {
            Direction::Left => (pos + step) % GROUP,
            Direction::Right => (pos + GROUP - step) % GROUP,
        };
        gather(l, Some(group_start(l, GROUP) + target), src, prev, ctrl)
    }
}

impl<D: Dir, const DIST: u32, const GROUP: u32> CrossLanePrimitive<Shift<D, DIST, GROUP>>
    for ReferenceUnit
{
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T {
        let l = lane.index();
        let pos = l % GROUP;
        let target = match D::VALUE {
            Direction::Left => Some(pos + DIST).filter(|&p| p < GROUP),
            Direction::Right => pos.checked_sub(DIST),
        };
        let source = target.map(|p| group_start(l, GROUP) + p);
        gather(l, source, src, prev, ctrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lane::WaveSize;
    use crate::op::{Left, Right};

    fn run<Op: crate::op::CrossLaneOp>(ctrl: WriteControl) -> Vec<u32>
    where
        ReferenceUnit: CrossLanePrimitive<Op>,
    {
        let file = LaneFile::<u32>::lane_ids(WaveSize::Wave64);
        let exec = <ReferenceUnit as CrossLanePrimitive<Op>>::exec::<u32>;
        WaveSize::Wave64
            .lane_ids()
            .map(|lane| exec(&ReferenceUnit, lane, &file, 100, ctrl))
            .collect()
    }

    #[test]
    fn test_reverse_quad_groups() {
        let out = run::<Reverse<4>>(WriteControl::ALL);
        assert_eq!(&out[..8], &[3, 2, 1, 0, 7, 6, 5, 4]);
    }

    #[test]
    fn test_masked_lanes_keep_prev() {
        let out = run::<Reverse<4>>(WriteControl::new(0x1, 0x1, false));
        assert_eq!(&out[..4], &[3, 2, 1, 0]);
        assert!(out[4..].iter().all(|&v| v == 100));
    }

    #[test]
    fn test_broadcast_row() {
        let out = run::<Broadcast<15, 16>>(WriteControl::ALL);
        assert!(out[..16].iter().all(|&v| v == 15));
        assert!(out[48..].iter().all(|&v| v == 63));
    }

    #[test]
    fn test_rotate_right() {
        let out = run::<Rotate<Right, 1, 8>>(WriteControl::ALL);
        assert_eq!(&out[..8], &[7, 0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_shift_bound_ctrl_fills_zero() {
        let out = run::<Shift<Left, 2, 4>>(WriteControl::new(0xF, 0xF, true));
        assert_eq!(&out[..4], &[2, 3, 0, 0]);
        let out = run::<Shift<Left, 2, 4>>(WriteControl::new(0xF, 0xF, false));
        assert_eq!(&out[..4], &[2, 3, 100, 100]);
    }
}
