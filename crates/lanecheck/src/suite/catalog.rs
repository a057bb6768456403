//! Built-in case lists.
//!
//! [`reference`] covers every family across group sizes 2 to 64, including
//! element indices and distances at both ends of the group. [`dpp`] is the
//! subset that lowers to a single DPP control.

use super::Case;
use crate::dpp::DppUnit;
use crate::op::{Broadcast, Left, Reverse, Right, Rotate, Shift};
use crate::primitive::ReferenceUnit;

macro_rules! cases {
    ($($op:ty),+ $(,)?) => {
        vec![$(Case::new::<$op>()),+]
    };
}

/// Every case the reference unit runs.
#[must_use]
pub fn reference() -> Vec<Case<ReferenceUnit>> {
    cases![
        Broadcast<0, 2>,
        Broadcast<1, 2>,
        Broadcast<0, 4>,
        Broadcast<3, 4>,
        Broadcast<5, 8>,
        Broadcast<0, 16>,
        Broadcast<3, 16>,
        Broadcast<15, 16>,
        Broadcast<17, 32>,
        Broadcast<40, 64>,
        Reverse<2>,
        Reverse<4>,
        Reverse<8>,
        Reverse<16>,
        Reverse<32>,
        Reverse<64>,
        Rotate<Left, 1, 2>,
        Rotate<Right, 1, 2>,
        Rotate<Left, 1, 4>,
        Rotate<Left, 2, 4>,
        Rotate<Left, 3, 4>,
        Rotate<Right, 1, 4>,
        Rotate<Right, 2, 4>,
        Rotate<Right, 3, 4>,
        Rotate<Left, 1, 8>,
        Rotate<Right, 1, 8>,
        Rotate<Left, 3, 8>,
        Rotate<Right, 3, 8>,
        Rotate<Left, 1, 16>,
        Rotate<Right, 1, 16>,
        Rotate<Left, 7, 16>,
        Rotate<Right, 7, 16>,
        Rotate<Left, 15, 16>,
        Rotate<Right, 15, 16>,
        Rotate<Left, 5, 32>,
        Rotate<Right, 5, 32>,
        Rotate<Left, 1, 64>,
        Rotate<Right, 1, 64>,
        Shift<Left, 1, 16>,
        Shift<Right, 1, 16>,
        Shift<Left, 4, 16>,
        Shift<Right, 4, 16>,
        Shift<Left, 15, 16>,
        Shift<Right, 15, 16>,
        Shift<Left, 1, 64>,
        Shift<Right, 1, 64>,
    ]
}

/// Cases the DPP unit can express as one control word.
#[must_use]
pub fn dpp() -> Vec<Case<DppUnit>> {
    cases![
        Broadcast<0, 2>,
        Broadcast<1, 2>,
        Broadcast<0, 4>,
        Broadcast<3, 4>,
        Broadcast<0, 16>,
        Broadcast<3, 16>,
        Broadcast<15, 16>,
        Reverse<2>,
        Reverse<4>,
        Reverse<8>,
        Reverse<16>,
        Rotate<Left, 1, 2>,
        Rotate<Right, 1, 2>,
        Rotate<Left, 1, 4>,
        Rotate<Left, 3, 4>,
        Rotate<Right, 1, 4>,
        Rotate<Right, 2, 4>,
        Rotate<Left, 1, 16>,
        Rotate<Right, 1, 16>,
        Rotate<Left, 7, 16>,
        Rotate<Right, 15, 16>,
        Rotate<Left, 1, 64>,
        Rotate<Right, 1, 64>,
        Shift<Left, 1, 16>,
        Shift<Right, 1, 16>,
        Shift<Left, 4, 16>,
        Shift<Right, 15, 16>,
        Shift<Left, 1, 64>,
        Shift<Right, 1, 64>,
    ]
}
