//! Peak rotation: repeatedly shift a sequence right by one and count the shifts
//! until its lexicographically largest rotation has been seen `occurrence`
//! times. Shift 0 (the untouched input) counts as a sighting.

use std::cmp::Ordering;

use log::debug;

use super::RotationError;

/// Number of right shifts performed when the maximal rotation appears for the
/// `occurrence`-th time.
///
/// ```
/// use rotations_rs::rotation::peak_rotation_shifts;
///
/// assert_eq!(peak_rotation_shifts(b"1010", 3).unwrap(), 4);
/// ```
pub fn peak_rotation_shifts<T: Ord>(sequence: &[T], occurrence: u64) -> Result<u128, RotationError> {
    if sequence.is_empty() {
        return Err(RotationError::EmptySequence);
    }
    if occurrence == 0 {
        return Err(RotationError::InvalidArgument(
            "occurrence must be at least 1".to_string(),
        ));
    }

    let period = rotation_period(sequence);
    // After `s` right shifts the head is `sequence[(n - s) % n]`; maximal heads
    // repeat every `period`, so the earliest shift is taken modulo it.
    let start = max_rotation_start(sequence);
    let first = (period - start % period) % period;
    debug!(
        "peak rotation first seen after {first} shifts, period {period}, length {}",
        sequence.len()
    );

    Ok(first as u128 + (occurrence as u128 - 1) * period as u128)
}

/// Smallest positive shift that maps the sequence onto itself; the full length
/// when no shorter one exists.
pub fn rotation_period<T: Eq>(sequence: &[T]) -> usize {
    let len = sequence.len();
    if len == 0 {
        return 0;
    }

    // Prefix function: border[i] is the longest proper border of sequence[..=i].
    let mut border = vec![0usize; len];
    for i in 1..len {
        let mut candidate = border[i - 1];
        while candidate > 0 && sequence[i] != sequence[candidate] {
            candidate = border[candidate - 1];
        }
        if sequence[i] == sequence[candidate] {
            candidate += 1;
        }
        border[i] = candidate;
    }

    let smallest = len - border[len - 1];
    if len % smallest == 0 {
        smallest
    } else {
        len
    }
}

/// Start index of a lexicographically largest rotation, in linear time.
///
/// Two candidate starts race through the doubled sequence; whenever they
/// disagree after `matched` equal elements, the smaller one and every start it
/// covered can be discarded.
pub fn max_rotation_start<T: Ord>(sequence: &[T]) -> usize {
    let len = sequence.len();
    let (mut left, mut right, mut matched) = (0, 1, 0);
    while left < len && right < len && matched < len {
        let ordering = sequence[(left + matched) % len].cmp(&sequence[(right + matched) % len]);
        match ordering {
            Ordering::Equal => {
                matched += 1;
                continue;
            }
            Ordering::Less => left += matched + 1,
            Ordering::Greater => right += matched + 1,
        }
        if left == right {
            right += 1;
        }
        matched = 0;
    }
    left.min(right)
}
