//! Property-based tests for the expectation functions.
//!
//! Uses proptest to check the algebraic identities of each family over
//! arbitrary lanes, group sizes, distances and write masks.

use lanecheck::expect::{expect_broadcast, expect_reverse, expect_rotate, expect_shift};
use lanecheck::op::{Broadcast, Left, Reverse, Right, Rotate, Shift};
use lanecheck::{expected_value, is_active, Direction, LaneId, WaveSize, WriteControl};
use proptest::prelude::*;

fn group_size() -> impl Strategy<Value = u32> {
    (0u32..=6).prop_map(|k| 1 << k)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Left), Just(Direction::Right)]
}

// =============================================================================
// Reverse
// =============================================================================

proptest! {
    /// reverse(reverse(x)) = x
    #[test]
    fn prop_reverse_involution(lane in 0u32..64, g in group_size()) {
        prop_assert_eq!(expect_reverse(expect_reverse(lane, g), g), lane);
    }

    /// Reverse stays inside the lane's group.
    #[test]
    fn prop_reverse_within_group(lane in 0u32..64, g in group_size()) {
        prop_assert_eq!(expect_reverse(lane, g) / g, lane / g);
    }
}

// =============================================================================
// Rotate
// =============================================================================

proptest! {
    /// Rotating left then right by the same distance is the identity.
    #[test]
    fn prop_rotate_inverse(lane in 0u32..64, g in group_size(), seed: u32, dir in direction()) {
        let d = seed % g;
        let there = expect_rotate(lane, dir, d, g);
        prop_assert_eq!(expect_rotate(there, dir.reverse(), d, g), lane);
    }

    /// Rotating by 0 or by the group size is the identity.
    #[test]
    fn prop_rotate_full_turn(lane in 0u32..64, g in group_size(), dir in direction()) {
        prop_assert_eq!(expect_rotate(lane, dir, 0, g), lane);
        prop_assert_eq!(expect_rotate(lane, dir, g, g), lane);
    }

    /// Left by d equals right by g - d.
    #[test]
    fn prop_rotate_complement(lane in 0u32..64, g in group_size(), seed: u32) {
        let d = seed % g;
        prop_assert_eq!(
            expect_rotate(lane, Direction::Left, d, g),
            expect_rotate(lane, Direction::Right, g - d, g)
        );
    }
}

// =============================================================================
// Broadcast
// =============================================================================

proptest! {
    /// Broadcast depends only on the lane's group.
    #[test]
    fn prop_broadcast_group_only(a in 0u32..64, b in 0u32..64, g in group_size(), seed: u32) {
        let e = seed % g;
        let same_group = a / g == b / g;
        prop_assert_eq!(expect_broadcast(a, e, g) == expect_broadcast(b, e, g), same_group);
    }

    /// The broadcast source is position `e` of the lane's own group.
    #[test]
    fn prop_broadcast_source(lane in 0u32..64, g in group_size(), seed: u32) {
        let e = seed % g;
        let src = expect_broadcast(lane, e, g);
        prop_assert_eq!(src / g, lane / g);
        prop_assert_eq!(src % g, e);
    }
}

// =============================================================================
// Shift
// =============================================================================

proptest! {
    /// A shift with a valid source agrees with the rotate of the same shape.
    #[test]
    fn prop_shift_is_truncated_rotate(
        lane in 0u32..64,
        g in group_size(),
        seed: u32,
        dir in direction(),
    ) {
        let d = seed % g;
        if let Some(src) = expect_shift(lane, dir, d, g) {
            prop_assert_eq!(src, expect_rotate(lane, dir, d, g));
        }
    }

    /// Exactly `d` positions of each group have no source.
    #[test]
    fn prop_shift_invalid_count(
        g in group_size(),
        seed: u32,
        dir in direction(),
        group in 0u32..64,
    ) {
        let d = seed % g;
        let base = (group % (64 / g)) * g;
        let invalid = (base..base + g)
            .filter(|&l| expect_shift(l, dir, d, g).is_none())
            .count();
        prop_assert_eq!(invalid as u32, d);
    }
}

// =============================================================================
// Masks and sentinel
// =============================================================================

proptest! {
    /// A zero mask disables every lane.
    #[test]
    fn prop_zero_mask_inactive(lane in 0u32..64, mask in 0u32..16) {
        prop_assert!(!is_active(lane, 0, mask));
        prop_assert!(!is_active(lane, mask, 0));
    }

    /// Full masks enable every lane.
    #[test]
    fn prop_full_mask_active(lane in 0u32..64) {
        prop_assert!(is_active(lane, 0xF, 0xF));
    }

    /// Inactive lanes expect the sentinel whatever the family.
    #[test]
    fn prop_inactive_expects_sentinel(
        lane in 0u32..64,
        row in 0u8..16,
        bank in 0u8..16,
        bound: bool,
        prev: u32,
    ) {
        let ctrl = WriteControl::new(row, bank, bound);
        let id = LaneId::new(lane);
        prop_assume!(!ctrl.is_active(id));
        let w = WaveSize::Wave64;
        prop_assert_eq!(expected_value::<u32, Broadcast<5, 16>>(id, w, prev, ctrl), prev);
        prop_assert_eq!(expected_value::<u32, Reverse<8>>(id, w, prev, ctrl), prev);
        prop_assert_eq!(expected_value::<u32, Rotate<Left, 3, 32>>(id, w, prev, ctrl), prev);
        prop_assert_eq!(expected_value::<u32, Shift<Right, 7, 16>>(id, w, prev, ctrl), prev);
    }
}
