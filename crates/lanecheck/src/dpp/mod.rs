//! AMD data-parallel primitive (DPP) model.
//!
//! DPP is an operand modifier: the instruction reads its source operand from
//! another lane chosen by a 9-bit control word, subject to the row/bank write
//! masks and `bound_ctrl`.
//!
//! - [`DppCtrl`]: typed control word with 9-bit encode/decode
//! - [`DppUnit`]: executes one control word over a wavefront
//! - [`DppLowering`]: descriptors expressible as a single control word
//!
//! # Example
//!
//! ```
//! use lanecheck::dpp::{DppCtrl, DppLowering};
//! use lanecheck::op::Reverse;
//!
//! assert_eq!(<Reverse<16> as DppLowering>::CTRL, DppCtrl::RowMirror);
//! assert_eq!(DppCtrl::RowMirror.encode(), Ok(0x140));
//! ```

mod ctrl;
mod lower;
mod unit;

pub use ctrl::DppCtrl;
pub use lower::DppLowering;
pub use unit::DppUnit;
