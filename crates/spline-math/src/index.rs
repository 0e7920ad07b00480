/// Saturate a signed index into `0..len`.
///
/// Negative indices map to the first element, indices past the end map to
/// the last one. `len` must be non-zero.
#[inline]
pub fn clamp_index(idx: isize, len: usize) -> usize {
    debug_assert!(len > 0, "clamp_index on an empty sequence");
    if idx < 0 {
        0
    } else {
        (idx as usize).min(len - 1)
    }
}
