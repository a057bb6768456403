//! Core lane model.
//!
//! - [`lane::LaneId`], [`lane::WaveSize`]: lane identity and wavefront width
//! - [`mask::WriteControl`], [`mask::is_active`]: row/bank write-enable masks
//! - [`element::LaneElement`]: element types a lane register can hold

pub mod element;
pub mod lane;
pub mod mask;
