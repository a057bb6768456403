//! Expectation functions.
//!
//! One pure function per operation family. Each maps a lane's input (its own
//! lane index, by convention) to the lane index whose value the lane should
//! observe after the operation, using only bit arithmetic on the index.
//!
//! All functions assume the lane is active. Masked-off lanes are resolved by
//! the driver before any of these is called.
//!
//! | Family | Result |
//! |--------|--------|
//! | Broadcast | `(input & full & !(g-1)) + element` |
//! | Reverse | `(input & !(g-1)) \| ((g-1) - (input & (g-1)))` |
//! | Rotate | `(input & !(g-1)) \| ((pos ± d + g) & (g-1))` |
//! | Shift | as rotate, `None` when `pos ± d` leaves the group |

mod broadcast;
mod reverse;
mod rotate;
mod shift;

pub use broadcast::{expect_broadcast, expect_broadcast_in};
pub use reverse::expect_reverse;
pub use rotate::expect_rotate;
pub use shift::expect_shift;

use core::fmt;
use serde::{Deserialize, Serialize};

/// Direction of a rotate or shift.
///
/// `Left` means each lane reads from a higher position (`pos + d`), so data
/// moves toward lane 0. `Right` reads from `pos - d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Read from `pos + distance`.
    Left,
    /// Read from `pos - distance`.
    Right,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
