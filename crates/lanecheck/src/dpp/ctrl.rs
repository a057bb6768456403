//! The `dpp_ctrl` field.
//!
//! A 9-bit selector attached to a vector instruction that makes each lane
//! read its operand from another lane.
//!
//! # Encoding
//!
//! | Range | Control |
//! |-------|---------|
//! | `0x000-0x0FF` | `quad_perm:[s0,s1,s2,s3]` (2 bits per selector) |
//! | `0x101-0x10F` | `row_shl:1-15` |
//! | `0x111-0x11F` | `row_shr:1-15` |
//! | `0x121-0x12F` | `row_ror:1-15` |
//! | `0x130` | `wave_shl:1` |
//! | `0x134` | `wave_rol:1` |
//! | `0x138` | `wave_shr:1` |
//! | `0x13C` | `wave_ror:1` |
//! | `0x140` | `row_mirror` |
//! | `0x141` | `row_half_mirror` |
//! | `0x142` | `row_bcast:15` |
//! | `0x143` | `row_bcast:31` |
//! | `0x150-0x15F` | `row_newbcast:0-15` (`row_share` on wave32 parts) |
//! | `0x160-0x16F` | `row_xmask:0-15` |
//!
//! Every other value is reserved.

use crate::error::DppCtrlError;
use core::fmt;

const QUAD_PERM_MAX: u16 = 0x0FF;
const ROW_SHL: u16 = 0x100;
const ROW_SHR: u16 = 0x110;
const ROW_ROR: u16 = 0x120;
const WAVE_SHL1: u16 = 0x130;
const WAVE_ROL1: u16 = 0x134;
const WAVE_SHR1: u16 = 0x138;
const WAVE_ROR1: u16 = 0x13C;
const ROW_MIRROR: u16 = 0x140;
const ROW_HALF_MIRROR: u16 = 0x141;
const ROW_BCAST15: u16 = 0x142;
const ROW_BCAST31: u16 = 0x143;
const ROW_NEWBCAST: u16 = 0x150;
const ROW_XMASK: u16 = 0x160;

/// A decoded DPP control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DppCtrl {
    /// Lane `i` reads lane `(i & !3) | sel[i & 3]`.
    QuadPerm([u8; 4]),
    /// Lane `i` reads lane `i + n` within its row of 16.
    RowShl(u8),
    /// Lane `i` reads lane `i - n` within its row of 16.
    RowShr(u8),
    /// Lane `i` reads lane `i - n` within its row of 16, wrapping.
    RowRor(u8),
    /// Lane `i` reads lane `i + 1` across the wavefront.
    WaveShl1,
    /// Lane `i` reads lane `i + 1` across the wavefront, wrapping.
    WaveRol1,
    /// Lane `i` reads lane `i - 1` across the wavefront.
    WaveShr1,
    /// Lane `i` reads lane `i - 1` across the wavefront, wrapping.
    WaveRor1,
    /// Row of 16 reversed.
    RowMirror,
    /// Each half-row of 8 reversed.
    RowHalfMirror,
    /// Rows 1-3 read the last lane of the previous row.
    RowBcast15,
    /// Rows 2-3 read lane 31.
    RowBcast31,
    /// Every lane of a row reads lane `n` of that row.
    RowNewBcast(u8),
    /// Lane at row position `p` reads row position `p ^ n`.
    RowXmask(u8),
}

impl DppCtrl {
    /// Identity permutation.
    pub const IDENTITY: Self = Self::QuadPerm([0, 1, 2, 3]);

    /// Decodes a 9-bit `dpp_ctrl` value.
    ///
    /// # Errors
    ///
    /// Returns [`DppCtrlError::Reserved`] for reserved encodings and for
    /// values wider than 9 bits.
    ///
    /// # Example
    ///
    /// ```
    /// use lanecheck::dpp::DppCtrl;
    ///
    /// assert_eq!(DppCtrl::decode(0x1B), Ok(DppCtrl::QuadPerm([3, 2, 1, 0])));
    /// assert_eq!(DppCtrl::decode(0x140), Ok(DppCtrl::RowMirror));
    /// assert!(DppCtrl::decode(0x100).is_err());
    /// ```
    pub fn decode(raw: u16) -> Result<Self, DppCtrlError> {
        let low = (raw & 0xF) as u8;
        let ctrl = match raw {
            0..=QUAD_PERM_MAX => Self::QuadPerm([
                (raw & 0x3) as u8,
                ((raw >> 2) & 0x3) as u8,
                ((raw >> 4) & 0x3) as u8,
                ((raw >> 6) & 0x3) as u8,
            ]),
            0x101..=0x10F => Self::RowShl(low),
            0x111..=0x11F => Self::RowShr(low),
            0x121..=0x12F => Self::RowRor(low),
            WAVE_SHL1 => Self::WaveShl1,
            WAVE_ROL1 => Self::WaveRol1,
            WAVE_SHR1 => Self::WaveShr1,
            WAVE_ROR1 => Self::WaveRor1,
            ROW_MIRROR => Self::RowMirror,
            ROW_HALF_MIRROR => Self::RowHalfMirror,
            ROW_BCAST15 => Self::RowBcast15,
            ROW_BCAST31 => Self::RowBcast31,
            0x150..=0x15F => Self::RowNewBcast(low),
            0x160..=0x16F => Self::RowXmask(low),
            _ => return Err(DppCtrlError::Reserved(raw)),
        };
        Ok(ctrl)
    }

    /// Encodes to the 9-bit `dpp_ctrl` value.
    ///
    /// # Errors
    ///
    /// Returns [`DppCtrlError::ShiftOutOfRange`] for a row shift or rotate
    /// outside 1..=15 and [`DppCtrlError::SelectorOutOfRange`] for a quad
    /// selector above 3 or a row lane above 15.
    pub fn encode(self) -> Result<u16, DppCtrlError> {
        let raw = match self {
            Self::QuadPerm(sel) => {
                let mut raw = 0u16;
                for (slot, &s) in sel.iter().enumerate() {
                    if s > 3 {
                        return Err(DppCtrlError::SelectorOutOfRange(s));
                    }
                    raw |= u16::from(s) << (2 * slot);
                }
                raw
            }
            Self::RowShl(n) => ROW_SHL | u16::from(row_shift(n)?),
            Self::RowShr(n) => ROW_SHR | u16::from(row_shift(n)?),
            Self::RowRor(n) => ROW_ROR | u16::from(row_shift(n)?),
            Self::WaveShl1 => WAVE_SHL1,
            Self::WaveRol1 => WAVE_ROL1,
            Self::WaveShr1 => WAVE_SHR1,
            Self::WaveRor1 => WAVE_ROR1,
            Self::RowMirror => ROW_MIRROR,
            Self::RowHalfMirror => ROW_HALF_MIRROR,
            Self::RowBcast15 => ROW_BCAST15,
            Self::RowBcast31 => ROW_BCAST31,
            Self::RowNewBcast(n) => ROW_NEWBCAST | u16::from(row_lane(n)?),
            Self::RowXmask(n) => ROW_XMASK | u16::from(row_lane(n)?),
        };
        Ok(raw)
    }

    /// Returns true if this control reads across row boundaries.
    #[must_use]
    pub const fn crosses_rows(self) -> bool {
        matches!(
            self,
            Self::WaveShl1
                | Self::WaveRol1
                | Self::WaveShr1
                | Self::WaveRor1
                | Self::RowBcast15
                | Self::RowBcast31
        )
    }
}

fn row_shift(n: u8) -> Result<u8, DppCtrlError> {
    if (1..=15).contains(&n) {
        Ok(n)
    } else {
        Err(DppCtrlError::ShiftOutOfRange(n))
    }
}

fn row_lane(n: u8) -> Result<u8, DppCtrlError> {
    if n <= 15 {
        Ok(n)
    } else {
        Err(DppCtrlError::SelectorOutOfRange(n))
    }
}

impl TryFrom<u16> for DppCtrl {
    type Error = DppCtrlError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::decode(raw)
    }
}

impl fmt::Display for DppCtrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuadPerm([a, b, c, d]) => write!(f, "quad_perm:[{a},{b},{c},{d}]"),
            Self::RowShl(n) => write!(f, "row_shl:{n}"),
            Self::RowShr(n) => write!(f, "row_shr:{n}"),
            Self::RowRor(n) => write!(f, "row_ror:{n}"),
            Self::WaveShl1 => f.write_str("wave_shl:1"),
            Self::WaveRol1 => f.write_str("wave_rol:1"),
            Self::WaveShr1 => f.write_str("wave_shr:1"),
            Self::WaveRor1 => f.write_str("wave_ror:1"),
            Self::RowMirror => f.write_str("row_mirror"),
            Self::RowHalfMirror => f.write_str("row_half_mirror"),
            Self::RowBcast15 => f.write_str("row_bcast:15"),
            Self::RowBcast31 => f.write_str("row_bcast:31"),
            Self::RowNewBcast(n) => write!(f, "row_newbcast:{n}"),
            Self::RowXmask(n) => write!(f, "row_xmask:{n}"),
        }
    }
}
