//! Signed offsets. A non-negative offset is an ordinary right rotation; what a
//! negative one means is decided by the caller through [`NegativeOffsetPolicy`].

use log::debug;
use serde::{Deserialize, Serialize};

use super::right::rotate_right;
use super::RotationError;

/// How a negative offset is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativeOffsetPolicy {
    /// Negative offsets fail with [`RotationError::InvalidArgument`].
    #[default]
    Reject,
    /// `-k` rotates left by `k`, the inverse of a right rotation by `k`.
    RotateLeft,
}

/// Rotates `sequence` by a signed offset under `policy`.
pub fn rotate_signed<T: Clone>(
    sequence: &[T],
    k: i64,
    policy: NegativeOffsetPolicy,
) -> Result<Vec<T>, RotationError> {
    if k >= 0 {
        return Ok(rotate_right(sequence, reduce(k.unsigned_abs(), sequence.len())));
    }

    match policy {
        NegativeOffsetPolicy::Reject => Err(RotationError::InvalidArgument(format!(
            "negative rotation offset {k}"
        ))),
        NegativeOffsetPolicy::RotateLeft => {
            let len = sequence.len();
            let left = reduce(k.unsigned_abs(), len);
            debug!("rotating left by {left} (offset {k}, length {len})");
            Ok(rotate_right(sequence, len - left))
        }
    }
}

// Works in u64 so offsets wider than usize still reduce correctly.
fn reduce(magnitude: u64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (magnitude % len as u64) as usize
}
