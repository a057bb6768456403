//! Lowering descriptors to a single DPP control.
//!
//! Only shapes the DPP unit can express in one instruction implement
//! [`DppLowering`]; for everything else [`DppUnit`] simply does not
//! implement [`CrossLanePrimitive`], and asking it to run one is a compile
//! error.
//!
//! | Descriptor | Control |
//! |------------|---------|
//! | `Broadcast<e, 2 \| 4>` | `quad_perm` |
//! | `Broadcast<e, 16>` | `row_newbcast:e` |
//! | `Reverse<2 \| 4>` | `quad_perm` |
//! | `Reverse<8>` | `row_half_mirror` |
//! | `Reverse<16>` | `row_mirror` |
//! | `Rotate<_, d, 2 \| 4>` | `quad_perm` |
//! | `Rotate<_, d, 16>` | `row_ror` (identity at d = 0) |
//! | `Rotate<_, 1, 64>` | `wave_rol:1` / `wave_ror:1` |
//! | `Shift<_, d, 16>` | `row_shl:d` / `row_shr:d` |
//! | `Shift<_, 1, 64>` | `wave_shl:1` / `wave_shr:1` |

use super::ctrl::DppCtrl;
use super::unit::DppUnit;
use crate::core::element::LaneElement;
use crate::core::lane::LaneId;
use crate::core::mask::WriteControl;
use crate::expect::Direction;
use crate::op::{Broadcast, CrossLaneOp, Dir, Reverse, Rotate, Shift};
use crate::primitive::{CrossLanePrimitive, LaneFile};

/// A descriptor expressible as one DPP control.
pub trait DppLowering: CrossLaneOp {
    /// The control word implementing this descriptor.
    const CTRL: DppCtrl;
}

/// Quad selectors for a rotate within groups of 2 or 4.
const fn quad_rotate(direction: Direction, distance: u32, group: u32) -> DppCtrl {
    let mask = group - 1;
    let step = match direction {
        Direction::Left => distance & mask,
        Direction::Right => (group - (distance & mask)) & mask,
    };
    let mut sel = [0u8; 4];
    let mut p = 0;
    while p < 4 {
        sel[p as usize] = ((p & !mask) | ((p + step) & mask)) as u8;
        p += 1;
    }
    DppCtrl::QuadPerm(sel)
}

/// Quad selectors broadcasting position `element` of each group of 2 or 4.
const fn quad_broadcast(element: u32, group: u32) -> DppCtrl {
    let mask = group - 1;
    let mut sel = [0u8; 4];
    let mut p = 0;
    while p < 4 {
        sel[p as usize] = ((p & !mask) | element) as u8;
        p += 1;
    }
    DppCtrl::QuadPerm(sel)
}

/// Row rotate for a 16-lane group. `row_ror:n` reads `pos - n`.
const fn row_rotate(direction: Direction, distance: u32) -> DppCtrl {
    let n = match direction {
        Direction::Right => distance & 15,
        Direction::Left => (16 - (distance & 15)) & 15,
    };
    if n == 0 {
        DppCtrl::IDENTITY
    } else {
        DppCtrl::RowRor(n as u8)
    }
}

/// Row shift for a 16-lane group.
const fn row_shift(direction: Direction, distance: u32) -> DppCtrl {
    assert!(
        matches!(distance, 1..=15),
        "row shifts encode distances 1..=15"
    );
    match direction {
        Direction::Left => DppCtrl::RowShl(distance as u8),
        Direction::Right => DppCtrl::RowShr(distance as u8),
    }
}

impl<const ELEM: u32> DppLowering for Broadcast<ELEM, 2> {
    const CTRL: DppCtrl = quad_broadcast(ELEM, 2);
}

impl<const ELEM: u32> DppLowering for Broadcast<ELEM, 4> {
    const CTRL: DppCtrl = quad_broadcast(ELEM, 4);
}

impl<const ELEM: u32> DppLowering for Broadcast<ELEM, 16> {
    const CTRL: DppCtrl = DppCtrl::RowNewBcast(ELEM as u8);
}

impl DppLowering for Reverse<2> {
    const CTRL: DppCtrl = DppCtrl::QuadPerm([1, 0, 3, 2]);
}

impl DppLowering for Reverse<4> {
    const CTRL: DppCtrl = DppCtrl::QuadPerm([3, 2, 1, 0]);
}

impl DppLowering for Reverse<8> {
    const CTRL: DppCtrl = DppCtrl::RowHalfMirror;
}

impl DppLowering for Reverse<16> {
    const CTRL: DppCtrl = DppCtrl::RowMirror;
}

impl<D: Dir, const DIST: u32> DppLowering for Rotate<D, DIST, 2> {
    const CTRL: DppCtrl = quad_rotate(D::VALUE, DIST, 2);
}

impl<D: Dir, const DIST: u32> DppLowering for Rotate<D, DIST, 4> {
    const CTRL: DppCtrl = quad_rotate(D::VALUE, DIST, 4);
}

impl<D: Dir, const DIST: u32> DppLowering for Rotate<D, DIST, 16> {
    const CTRL: DppCtrl = row_rotate(D::VALUE, DIST);
}

impl<D: Dir> DppLowering for Rotate<D, 1, 64> {
    const CTRL: DppCtrl = match D::VALUE {
        Direction::Left => DppCtrl::WaveRol1,
        Direction::Right => DppCtrl::WaveRor1,
    };
}

impl<D: Dir, const DIST: u32> DppLowering for Shift<D, DIST, 16> {
    const CTRL: DppCtrl = row_shift(D::VALUE, DIST);
}

impl<D: Dir> DppLowering for Shift<D, 1, 64> {
    const CTRL: DppCtrl = match D::VALUE {
        Direction::Left => DppCtrl::WaveShl1,
        Direction::Right => DppCtrl::WaveShr1,
    };
}

impl<Op: DppLowering> CrossLanePrimitive<Op> for DppUnit {
    #[inline]
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T {
        self.exec_ctrl(Op::CTRL, lane, src, prev, ctrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Left, Right};

    #[test]
    fn test_quad_lowerings() {
        assert_eq!(<Broadcast<1, 2>>::CTRL, DppCtrl::QuadPerm([1, 1, 3, 3]));
        assert_eq!(<Broadcast<2, 4>>::CTRL, DppCtrl::QuadPerm([2, 2, 2, 2]));
        assert_eq!(<Rotate<Left, 1, 4>>::CTRL, DppCtrl::QuadPerm([1, 2, 3, 0]));
        assert_eq!(<Rotate<Right, 1, 4>>::CTRL, DppCtrl::QuadPerm([3, 0, 1, 2]));
        assert_eq!(<Rotate<Left, 1, 2>>::CTRL, DppCtrl::QuadPerm([1, 0, 3, 2]));
        assert_eq!(<Rotate<Right, 0, 2>>::CTRL, DppCtrl::IDENTITY);
    }

    #[test]
    fn test_row_lowerings() {
        assert_eq!(<Broadcast<7, 16>>::CTRL, DppCtrl::RowNewBcast(7));
        assert_eq!(<Rotate<Right, 3, 16>>::CTRL, DppCtrl::RowRor(3));
        assert_eq!(<Rotate<Left, 3, 16>>::CTRL, DppCtrl::RowRor(13));
        assert_eq!(<Rotate<Left, 0, 16>>::CTRL, DppCtrl::IDENTITY);
        assert_eq!(<Shift<Left, 5, 16>>::CTRL, DppCtrl::RowShl(5));
        assert_eq!(<Shift<Right, 15, 16>>::CTRL, DppCtrl::RowShr(15));
    }

    #[test]
    fn test_wave_lowerings() {
        assert_eq!(<Rotate<Left, 1, 64>>::CTRL, DppCtrl::WaveRol1);
        assert_eq!(<Rotate<Right, 1, 64>>::CTRL, DppCtrl::WaveRor1);
        assert_eq!(<Shift<Left, 1, 64>>::CTRL, DppCtrl::WaveShl1);
        assert_eq!(<Shift<Right, 1, 64>>::CTRL, DppCtrl::WaveShr1);
    }

    #[test]
    fn test_every_lowering_encodes() {
        let ctrls = [
            <Broadcast<0, 2>>::CTRL,
            <Broadcast<3, 4>>::CTRL,
            <Broadcast<15, 16>>::CTRL,
            <Reverse<2>>::CTRL,
            <Reverse<4>>::CTRL,
            <Reverse<8>>::CTRL,
            <Reverse<16>>::CTRL,
            <Rotate<Left, 3, 4>>::CTRL,
            <Rotate<Right, 15, 16>>::CTRL,
            <Shift<Left, 1, 16>>::CTRL,
        ];
        for ctrl in ctrls {
            let raw = ctrl.encode();
            assert!(raw.is_ok(), "{ctrl} failed to encode");
        }
    }
}
