//! Right rotation with wraparound.
//! Elements that fall off the end come back in at the front; any offset is
//! first reduced modulo the length so `k = n, 2n, ...` cost nothing.

/// Reduces `k` into `[0, len)`. An empty sequence has no meaningful offset and
/// always yields 0.
pub fn effective_offset(len: usize, k: usize) -> usize {
    if len == 0 {
        return 0;
    }
    k % len
}

/// Index of the element that becomes the new head after rotating right by `k`.
/// Equals `len` when the rotation is the identity.
pub fn cut_index(len: usize, k: usize) -> usize {
    len - effective_offset(len, k)
}

/// Returns a new vector holding `sequence` rotated right by `k` positions.
///
/// ```
/// use rotations_rs::rotation::rotate_right;
///
/// assert_eq!(rotate_right(&[1, 2, 3, 4, 5], 4), vec![2, 3, 4, 5, 1]);
/// assert!(rotate_right::<i64>(&[], 3).is_empty());
/// ```
pub fn rotate_right<T: Clone>(sequence: &[T], k: usize) -> Vec<T> {
    let cut = cut_index(sequence.len(), k);
    let (head, tail) = sequence.split_at(cut);

    let mut rotated = Vec::with_capacity(sequence.len());
    rotated.extend_from_slice(tail);
    rotated.extend_from_slice(head);
    rotated
}

/// Rotates the caller's slice right by `k` positions without allocating.
pub fn rotate_right_in_place<T>(sequence: &mut [T], k: usize) {
    let effective = effective_offset(sequence.len(), k);
    sequence.rotate_right(effective);
}
