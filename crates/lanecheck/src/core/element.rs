//! Element types a lane register can hold.
//!
//! The oracle works on lane indices. Every test wavefront seeds lane `i` with
//! the element converted from `i`, so an expected source lane maps to an
//! expected element through the same conversion.

use crate::error::ConfigError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A value carried in one lane's register.
///
/// # Example
///
/// ```
/// use lanecheck::LaneElement;
///
/// assert_eq!(<f32 as LaneElement>::from_lane(5), 5.0);
/// assert_eq!(<i64 as LaneElement>::from_lane(63), 63);
/// ```
pub trait LaneElement: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Element kind tag, used for reporting.
    const KIND: ElementKind;

    /// Converts a lane index (or sentinel) into this element type.
    fn from_lane(value: u32) -> Self;
}

macro_rules! impl_lane_element {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl LaneElement for $ty {
                const KIND: ElementKind = ElementKind::$kind;

                #[inline(always)]
                fn from_lane(value: u32) -> Self {
                    value as $ty
                }
            }
        )+
    };
}

impl_lane_element! {
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

/// Runtime name of a [`LaneElement`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// `u32`
    #[default]
    U32,
    /// `i32`
    I32,
    /// `u64`
    U64,
    /// `i64`
    I64,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl ElementKind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 6] = [
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64,
    ];

    /// Rust type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownName {
                kind: "element type",
                name: s.to_string(),
            })
    }
}
