//! Content-type sanitization for blob containers
//!
//! Blob content types are stored as provided, but only when every byte falls
//! in the printable ASCII range used by MIME tokens. Anything else collapses
//! to the empty string instead of erroring. Case is preserved at storage
//! time; consumers compare case-insensitively.

/// Check whether a content-type string uses only printable ASCII
pub fn is_conforming(value: &str) -> bool {
    value.bytes().all(|b| (0x20..=0x7e).contains(&b))
}

/// Sanitize a content-type string
///
/// Returns the input unchanged when it conforms, otherwise the empty string.
/// This never fails: non-conforming input is silently discarded.
pub fn sanitize(value: &str) -> &str {
    if is_conforming(value) {
        value
    } else {
        ""
    }
}

/// Compare two content-type strings case-insensitively
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
