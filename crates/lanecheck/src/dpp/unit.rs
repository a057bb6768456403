//! DPP execution model.
//!
//! Executes one [`DppCtrl`] per lane the way the data-parallel-primitive
//! hardware does: resolve the source lane from the control word, then apply
//! the row/bank write enables and `bound_ctrl`.
//!
//! A source lane is invalid when the control reads past its row (row shifts),
//! past the wavefront (wave shifts), or from a row the broadcast controls do
//! not feed. Invalid sources write zero under `bound_ctrl` and are otherwise
//! dropped, leaving the destination's previous value.

use super::ctrl::DppCtrl;
use crate::core::element::LaneElement;
use crate::core::lane::{LaneId, WaveSize};
use crate::core::mask::WriteControl;
use crate::primitive::LaneFile;

const ROW: u32 = 16;

/// Software model of the DPP unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DppUnit;

impl DppUnit {
    /// Create a new DPP unit.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Source lane for `lane` under `ctrl`, or `None` if the read is invalid.
    #[must_use]
    pub fn source_lane(ctrl: DppCtrl, lane: u32, wave: WaveSize) -> Option<u32> {
        let lanes = wave.lanes();
        let row_base = lane & !(ROW - 1);
        let pos = lane & (ROW - 1);
        let row = lane / ROW;
        match ctrl {
            DppCtrl::QuadPerm(sel) => Some((lane & !3) | u32::from(sel[(lane & 3) as usize] & 3)),
            DppCtrl::RowShl(n) => {
                let n = u32::from(n);
                (pos + n < ROW).then_some(lane + n)
            }
            DppCtrl::RowShr(n) => {
                let n = u32::from(n);
                (pos >= n).then(|| lane - n)
            }
            DppCtrl::RowRor(n) => Some(row_base | ((pos + ROW - u32::from(n) % ROW) % ROW)),
            DppCtrl::WaveShl1 => (lane + 1 < lanes).then_some(lane + 1),
            DppCtrl::WaveRol1 => Some((lane + 1) % lanes),
            DppCtrl::WaveShr1 => lane.checked_sub(1),
            DppCtrl::WaveRor1 => Some((lane + lanes - 1) % lanes),
            DppCtrl::RowMirror => Some(row_base | (ROW - 1 - pos)),
            DppCtrl::RowHalfMirror => Some((lane & !7) | (7 - (lane & 7))),
            DppCtrl::RowBcast15 => (row >= 1).then(|| row * ROW - 1),
            DppCtrl::RowBcast31 => (row >= 2).then_some(31),
            DppCtrl::RowNewBcast(n) => Some(row_base | (u32::from(n) & (ROW - 1))),
            DppCtrl::RowXmask(n) => Some(row_base | (pos ^ (u32::from(n) & (ROW - 1)))),
        }
    }

    /// Value `lane` holds after executing `ctrl`.
    #[must_use]
    pub fn exec_ctrl<T: LaneElement>(
        &self,
        ctrl: DppCtrl,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        write: WriteControl,
    ) -> T {
        if !write.is_active(lane) {
            return prev;
        }
        match Self::source_lane(ctrl, lane.index(), src.wave()).and_then(|s| src.get(s)) {
            Some(value) => value,
            None if write.bound_ctrl() => T::from_lane(0),
            None => prev,
        }
    }

    /// Executes `ctrl` across the whole wavefront.
    #[must_use]
    pub fn exec_wave<T: LaneElement>(
        &self,
        ctrl: DppCtrl,
        src: &LaneFile<T>,
        prev: T,
        write: WriteControl,
    ) -> Vec<T> {
        src.wave()
            .lane_ids()
            .map(|lane| self.exec_ctrl(ctrl, lane, src, prev, write))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREV: u32 = 100;

    fn wave64(ctrl: DppCtrl, write: WriteControl) -> Vec<u32> {
        let file = LaneFile::<u32>::lane_ids(WaveSize::Wave64);
        DppUnit::new().exec_wave(ctrl, &file, PREV, write)
    }

    #[test]
    fn test_identity() {
        let out = wave64(DppCtrl::IDENTITY, WriteControl::ALL);
        assert_eq!(out, (0..64).collect::<Vec<u32>>());
    }

    #[test]
    fn test_quad_perm_reverse() {
        let out = wave64(DppCtrl::QuadPerm([3, 2, 1, 0]), WriteControl::ALL);
        assert_eq!(&out[60..], &[63, 62, 61, 60]);
    }

    #[test]
    fn test_row_shr_invalid_lanes() {
        let out = wave64(DppCtrl::RowShr(1), WriteControl::ALL);
        assert_eq!(out[0], PREV);
        assert_eq!(out[1], 0);
        assert_eq!(out[16], PREV);
        assert_eq!(out[17], 16);

        let out = wave64(DppCtrl::RowShr(1), WriteControl::new(0xF, 0xF, true));
        assert_eq!(out[0], 0);
        assert_eq!(out[16], 0);
    }

    #[test]
    fn test_row_shl() {
        let out = wave64(DppCtrl::RowShl(3), WriteControl::ALL);
        assert_eq!(out[0], 3);
        assert_eq!(out[12], 15);
        assert_eq!(out[13], PREV);
        assert_eq!(out[15], PREV);
    }

    #[test]
    fn test_row_ror() {
        let out = wave64(DppCtrl::RowRor(1), WriteControl::ALL);
        assert_eq!(out[0], 15);
        assert_eq!(out[1], 0);
        assert_eq!(out[16], 31);
    }

    #[test]
    fn test_wave_rotates() {
        let out = wave64(DppCtrl::WaveRol1, WriteControl::ALL);
        assert_eq!(out[0], 1);
        assert_eq!(out[63], 0);
        let out = wave64(DppCtrl::WaveRor1, WriteControl::ALL);
        assert_eq!(out[0], 63);
        assert_eq!(out[63], 62);
    }

    #[test]
    fn test_wave_shifts() {
        let out = wave64(DppCtrl::WaveShl1, WriteControl::new(0xF, 0xF, true));
        assert_eq!(out[62], 63);
        assert_eq!(out[63], 0);
        let out = wave64(DppCtrl::WaveShr1, WriteControl::ALL);
        assert_eq!(out[0], PREV);
        assert_eq!(out[1], 0);
    }

    #[test]
    fn test_mirrors() {
        let out = wave64(DppCtrl::RowMirror, WriteControl::ALL);
        assert_eq!(out[0], 15);
        assert_eq!(out[47], 32);
        let out = wave64(DppCtrl::RowHalfMirror, WriteControl::ALL);
        assert_eq!(out[0], 7);
        assert_eq!(out[8], 15);
    }

    #[test]
    fn test_row_broadcasts() {
        let out = wave64(DppCtrl::RowBcast15, WriteControl::new(0xA, 0xF, false));
        assert_eq!(out[0], PREV);
        assert_eq!(out[16], 15);
        assert_eq!(out[32], PREV);
        assert_eq!(out[63], 47);

        let out = wave64(DppCtrl::RowBcast31, WriteControl::ALL);
        assert_eq!(out[5], PREV);
        assert_eq!(out[31], PREV);
        assert_eq!(out[32], 31);
        assert_eq!(out[63], 31);
    }

    #[test]
    fn test_row_newbcast_and_xmask() {
        let out = wave64(DppCtrl::RowNewBcast(5), WriteControl::ALL);
        assert!(out[16..32].iter().all(|&v| v == 21));
        let out = wave64(DppCtrl::RowXmask(1), WriteControl::ALL);
        assert_eq!(&out[..4], &[1, 0, 3, 2]);
    }

    #[test]
    fn test_wave32_wraps_at_32() {
        let file = LaneFile::<u32>::lane_ids(WaveSize::Wave32);
        let out = DppUnit::new().exec_wave(DppCtrl::WaveRol1, &file, PREV, WriteControl::ALL);
        assert_eq!(out.len(), 32);
        assert_eq!(out[31], 0);
    }
}
