//! Reverse: mirror each lane's position around its group's midpoint.

/// Expected source for a reverse within groups of `group_size`.
///
/// `group_size` must be a power of two. Other values do not panic but give
/// meaningless results.
///
/// # Example
///
/// ```
/// use lanecheck::expect::expect_reverse;
///
/// assert_eq!(expect_reverse(0, 4), 3);
/// assert_eq!(expect_reverse(5, 4), 6);
/// ```
#[inline]
#[must_use]
pub const fn expect_reverse(input: u32, group_size: u32) -> u32 {
    let max_in_group = group_size.wrapping_sub(1);
    (input & !max_in_group) | (max_in_group - (input & max_in_group))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_quad() {
        let got: Vec<u32> = (0..8).map(|l| expect_reverse(l, 4)).collect();
        assert_eq!(got, vec![3, 2, 1, 0, 7, 6, 5, 4]);
    }

    #[test]
    fn test_reverse_row() {
        assert_eq!(expect_reverse(16, 16), 31);
        assert_eq!(expect_reverse(31, 16), 16);
        assert_eq!(expect_reverse(40, 16), 39);
    }

    #[test]
    fn test_reverse_whole_wave() {
        for lane in 0..64 {
            assert_eq!(expect_reverse(lane, 64), 63 - lane);
        }
    }

    #[test]
    fn test_reverse_zero_group_does_not_panic() {
        assert_eq!(expect_reverse(5, 0), !5);
    }

    #[test]
    fn test_reverse_group_of_one_is_identity() {
        for lane in 0..64 {
            assert_eq!(expect_reverse(lane, 1), lane);
        }
    }
}
