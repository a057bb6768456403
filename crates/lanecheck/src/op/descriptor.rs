//! Descriptor types for each family.

use super::{valid_group, CrossLaneOp, Dir, OpFamily};
use crate::core::lane::WaveSize;
use crate::expect::{expect_broadcast_in, expect_reverse, expect_rotate, expect_shift};
use core::fmt;
use core::marker::PhantomData;

/// Broadcast position `ELEM` of each group of `GROUP` lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Broadcast<const ELEM: u32, const GROUP: u32>;

impl<const ELEM: u32, const GROUP: u32> Broadcast<ELEM, GROUP> {
    /// Source position within each group.
    pub const ELEMENT_IDX: u32 = ELEM;

    const VALID: () = assert!(
        valid_group(GROUP) && ELEM < GROUP,
        "broadcast needs a power-of-two group <= 64 and ELEM < GROUP"
    );
}

impl<const ELEM: u32, const GROUP: u32> CrossLaneOp for Broadcast<ELEM, GROUP> {
    const FAMILY: OpFamily = OpFamily::Broadcast;
    const GROUP_SIZE: u32 = {
        let () = Self::VALID;
        GROUP
    };

    #[inline(always)]
    fn expect(input: u32, wave: WaveSize) -> Option<u32> {
        let () = Self::VALID;
        Some(expect_broadcast_in(wave, input, ELEM, GROUP))
    }
}

impl<const ELEM: u32, const GROUP: u32> fmt::Display for Broadcast<ELEM, GROUP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "broadcast<{ELEM}, {GROUP}>")
    }
}

/// Reverse each group of `GROUP` lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reverse<const GROUP: u32>;

impl<const GROUP: u32> Reverse<GROUP> {
    const VALID: () = assert!(
        valid_group(GROUP),
        "reverse needs a power-of-two group <= 64"
    );
}

impl<const GROUP: u32> CrossLaneOp for Reverse<GROUP> {
    const FAMILY: OpFamily = OpFamily::Reverse;
    const GROUP_SIZE: u32 = {
        let () = Self::VALID;
        GROUP
    };

    #[inline(always)]
    fn expect(input: u32, _wave: WaveSize) -> Option<u32> {
        let () = Self::VALID;
        Some(expect_reverse(input, GROUP))
    }
}

impl<const GROUP: u32> fmt::Display for Reverse<GROUP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reverse<{GROUP}>")
    }
}

/// Rotate each group of `GROUP` lanes by `DIST` positions in
/// direction `D`, wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotate<D: Dir, const DIST: u32, const GROUP: u32>(PhantomData<D>);

impl<D: Dir, const DIST: u32, const GROUP: u32> Rotate<D, DIST, GROUP> {
    /// Rotation distance.
    pub const DISTANCE: u32 = DIST;

    const VALID: () = assert!(
        valid_group(GROUP) && DIST < GROUP,
        "rotate needs a power-of-two group <= 64 and DIST < GROUP"
    );
}

impl<D: Dir, const DIST: u32, const GROUP: u32> CrossLaneOp for Rotate<D, DIST, GROUP> {
    const FAMILY: OpFamily = OpFamily::Rotate;
    const GROUP_SIZE: u32 = {
        let () = Self::VALID;
        GROUP
    };

    #[inline(always)]
    fn expect(input: u32, _wave: WaveSize) -> Option<u32> {
        let () = Self::VALID;
        Some(expect_rotate(input, D::VALUE, DIST, GROUP))
    }
}

impl<D: Dir, const DIST: u32, const GROUP: u32> fmt::Display for Rotate<D, DIST, GROUP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotate<{}, {DIST}, {GROUP}>", D::VALUE)
    }
}

/// Shift each group of `GROUP` lanes by `DIST` positions in
/// direction `D`. Lanes whose source leaves the group have no source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shift<D: Dir, const DIST: u32, const GROUP: u32>(PhantomData<D>);

impl<D: Dir, const DIST: u32, const GROUP: u32> Shift<D, DIST, GROUP> {
    /// Shift distance.
    pub const DISTANCE: u32 = DIST;

    const VALID: () = assert!(
        valid_group(GROUP) && DIST < GROUP,
        "shift needs a power-of-two group <= 64 and DIST < GROUP"
    );
}

impl<D: Dir, const DIST: u32, const GROUP: u32> CrossLaneOp for Shift<D, DIST, GROUP> {
    const FAMILY: OpFamily = OpFamily::Shift;
    const GROUP_SIZE: u32 = {
        let () = Self::VALID;
        GROUP
    };

    #[inline(always)]
    fn expect(input: u32, _wave: WaveSize) -> Option<u32> {
        let () = Self::VALID;
        expect_shift(input, D::VALUE, DIST, GROUP)
    }
}

impl<D: Dir, const DIST: u32, const GROUP: u32> fmt::Display for Shift<D, DIST, GROUP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shift<{}, {DIST}, {GROUP}>", D::VALUE)
    }
}
