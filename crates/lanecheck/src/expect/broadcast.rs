//! Broadcast: every lane of a group reads one fixed position.

use crate::core::lane::WaveSize;

/// Expected source for a wave64 broadcast of `element_idx` within groups of
/// `group_size`.
///
/// Keeps the group's base offset and replaces the in-group position with
/// `element_idx`.
///
/// # Example
///
/// ```
/// use lanecheck::expect::expect_broadcast;
///
/// assert_eq!(expect_broadcast(9, 3, 16), 3);
/// assert_eq!(expect_broadcast(27, 3, 16), 19);
/// ```
#[inline]
#[must_use]
pub const fn expect_broadcast(input: u32, element_idx: u32, group_size: u32) -> u32 {
    expect_broadcast_in(WaveSize::Wave64, input, element_idx, group_size)
}

/// [`expect_broadcast`] for an explicit wavefront width.
///
/// `group_size` must be a power of two and `element_idx` less than it.
/// Other values do not panic but give meaningless results.
#[inline]
#[must_use]
pub const fn expect_broadcast_in(
    wave: WaveSize,
    input: u32,
    element_idx: u32,
    group_size: u32,
) -> u32 {
    let group_mask = wave.full_lane_mask() & !group_size.wrapping_sub(1);
    (input & group_mask).wrapping_add(element_idx)
}
