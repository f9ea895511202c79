//! Slice range resolution for blob containers
//!
//! Pure index math with no I/O: relative indices are resolved against the
//! buffer size with clamping, never with errors. Negative indices count
//! back from the end; out-of-range values of either sign clamp to the
//! buffer bounds.

use core::ops::Range;

/// Resolve optional slice bounds into a clamped half-open range
///
/// Omitted bounds default to the start and end of the buffer. A resolved
/// end before the resolved start yields an empty range at `start`.
pub fn resolve_slice(size: usize, start: Option<i64>, end: Option<i64>) -> Range<usize> {
    let start = resolve_index(size, start.unwrap_or(0));
    let end = match end {
        Some(end) => resolve_index(size, end),
        None => size,
    };
    start..end.max(start)
}

/// Resolve one relative index into `[0, size]`
///
/// Negative indices resolve to `size + index`, clamped to zero; positive
/// indices clamp to `size`. Inputs far outside the addressable range clamp
/// rather than overflow.
pub fn resolve_index(size: usize, index: i64) -> usize {
    if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
        size.saturating_sub(back)
    } else {
        let forward = usize::try_from(index).unwrap_or(usize::MAX);
        forward.min(size)
    }
}
