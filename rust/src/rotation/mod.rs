//! Rotation primitives. The right rotation is the core; signed offsets and the
//! peak-rotation exercise are layered on top of it in their own submodules so
//! each rule stays small and easy to check.

use thiserror::Error;

pub mod cyclic;
pub mod right;
pub mod signed;

pub use cyclic::peak_rotation_shifts;
pub use right::{cut_index, effective_offset, rotate_right, rotate_right_in_place};
pub use signed::{rotate_signed, NegativeOffsetPolicy};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("sequence is empty")]
    EmptySequence,
}
