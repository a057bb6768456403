//! Shift: read the lane `distance` positions away without wrapping.

use super::Direction;

/// Expected source for a shift within groups of `group_size`, or `None` when
/// the source position falls outside the lane's group.
///
/// `group_size` must be a power of two. Other values do not panic but give
/// meaningless results.
///
/// # Example
///
/// ```
/// use lanecheck::expect::{expect_shift, Direction};
///
/// assert_eq!(expect_shift(2, Direction::Left, 1, 16), Some(3));
/// assert_eq!(expect_shift(15, Direction::Left, 1, 16), None);
/// assert_eq!(expect_shift(16, Direction::Right, 1, 16), None);
/// ```
#[inline]
#[must_use]
pub const fn expect_shift(
    input: u32,
    direction: Direction,
    distance: u32,
    group_size: u32,
) -> Option<u32> {
    let max_in_group = group_size.wrapping_sub(1);
    let pos = input & max_in_group;
    let base = input & !max_in_group;
    match direction {
        Direction::Left if distance <= max_in_group - pos => Some(base | (pos + distance)),
        Direction::Right if distance <= pos => Some(base | (pos - distance)),
        _ => None,
    }
}
