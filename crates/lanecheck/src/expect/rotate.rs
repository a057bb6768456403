//! Rotate: read the lane `distance` positions away, wrapping within the group.

use super::Direction;

/// Expected source for a rotate within groups of `group_size`.
///
/// Adding `group_size` before masking keeps the intermediate non-negative for
/// any `distance < group_size`; the arithmetic wraps, so larger distances
/// reduce modulo the group as well. `group_size` must be a power of two.
/// Other values do not panic but give meaningless results.
///
/// # Example
///
/// ```
/// use lanecheck::expect::{expect_rotate, Direction};
///
/// assert_eq!(expect_rotate(7, Direction::Left, 1, 8), 0);
/// assert_eq!(expect_rotate(8, Direction::Right, 1, 8), 15);
/// ```
#[inline]
#[must_use]
pub const fn expect_rotate(
    input: u32,
    direction: Direction,
    distance: u32,
    group_size: u32,
) -> u32 {
    let max_in_group = group_size.wrapping_sub(1);
    let pos = input & max_in_group;
    let shifted = match direction {
        Direction::Left => pos.wrapping_add(distance),
        Direction::Right => pos.wrapping_sub(distance),
    };
    let wrapped = shifted.wrapping_add(group_size) & max_in_group;
    (input & !max_in_group) | wrapped
}
