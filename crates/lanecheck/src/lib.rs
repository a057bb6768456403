//! lanecheck - per-lane correctness oracle for cross-lane wavefront primitives
//!
//! A cross-lane primitive moves values between the lanes of a SIMD
//! wavefront: every lane of a group reads one fixed lane (broadcast), the
//! group is mirrored (reverse), or positions slide around the group (rotate)
//! or off its edge (shift). lanecheck computes, from lane indices alone, the
//! value each lane should hold afterwards, runs the primitive under test, and
//! flags every lane where the two disagree.
//!
//! # Execution Model
//!
//! ```text
//! Wavefront = 64 (or 32) lanes, lane i seeded with i
//! Row       = 16 lanes   (lane >> 4) & 3
//! Bank      = 4 lanes    (lane >> 2) & 3, within every row
//! Group     = power-of-two block of lanes the operation permutes within
//! ```
//!
//! A lane is written only if its row bit and bank bit are both set in the
//! [`WriteControl`] masks; otherwise it keeps the destination's previous
//! value, a caller-chosen sentinel. A written lane whose operation gives it
//! no valid source (only shifts) writes zero under `bound_ctrl` and keeps
//! the sentinel otherwise.
//!
//! # Families
//!
//! | Family | Descriptor | Lane `i` at position `p` reads |
//! |--------|------------|--------------------------------|
//! | Broadcast | `Broadcast<E, G>` | group base + `E` |
//! | Reverse | `Reverse<G>` | group base + `G - 1 - p` |
//! | Rotate | `Rotate<D, N, G>` | group base + `(p ± N) mod G` |
//! | Shift | `Shift<D, N, G>` | group base + `p ± N`, if inside the group |
//!
//! Descriptors are zero-sized types; family routing and parameter checks
//! happen at compile time.
//!
//! # Example
//!
//! ```
//! use lanecheck::prelude::*;
//!
//! let outcome = run_wavefront::<u32, Reverse<4>, _>(
//!     &ReferenceUnit::new(),
//!     WaveSize::Wave64,
//!     WriteControl::new(0x1, 0x1, false),
//!     DEFAULT_PREVIOUS,
//! )
//! .unwrap();
//!
//! let values: Vec<u32> = outcome.verdicts().iter().map(|v| v.expected).collect();
//! assert_eq!(&values[..6], &[3, 2, 1, 0, 100, 100]);
//! assert!(!outcome.any_failed());
//! ```
//!
//! # Backends
//!
//! - [`ReferenceUnit`]: software gather, every family and shape
//! - [`dpp::DppUnit`]: AMD DPP model, shapes that lower to one control word

// Lane identity, masks and element types
mod core;

// Per-family expectation functions
pub mod expect;

// Operation descriptors and classification
pub mod op;

// Primitive-under-test trait and the reference unit
pub mod primitive;

// DPP control word, unit and lowering
pub mod dpp;

// Per-lane driver and wavefront runner
pub mod driver;

// Case catalog, suite and report
pub mod suite;

// Suite configuration
pub mod config;

// Error types
pub mod error;

pub use crate::core::element;
pub use crate::core::lane;
pub use crate::core::mask;

// Re-export core types at crate root
pub use crate::core::element::{ElementKind, LaneElement};
pub use crate::core::lane::{LaneId, WaveSize, MAX_GROUP_SIZE, WAVE32_LANES, WAVE64_LANES};
pub use crate::core::mask::{is_active, WriteControl, MASK_ALL};

pub use config::SuiteConfig;
pub use driver::{
    expected_value, run_test_case, run_wavefront, LaneVerdict, WavefrontOutcome, DEFAULT_PREVIOUS,
};
pub use error::{ConfigError, DppCtrlError};
pub use op::{CrossLaneOp, Direction, OpFamily};
pub use primitive::{CrossLanePrimitive, LaneFile, ReferenceUnit};
pub use suite::{Suite, SuiteReport};

/// Common imports.
pub mod prelude {
    pub use crate::driver::{run_wavefront, DEFAULT_PREVIOUS};
    pub use crate::op::{
        Broadcast, CrossLaneOp, Direction, Left, OpFamily, Reverse, Right, Rotate, Shift,
    };
    pub use crate::primitive::{CrossLanePrimitive, ReferenceUnit};
    pub use crate::{LaneElement, WaveSize, WriteControl};
}
