//! Error types for blob construction

/// Errors that can occur while assembling blob contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobError {
    /// A dynamically tagged part names an element kind outside the taxonomy
    UnsupportedPartKind,
    /// A raw buffer's length is not a multiple of the claimed element width
    MisalignedView,
}

impl core::fmt::Display for BlobError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BlobError::UnsupportedPartKind => "Unsupported blob part kind",
            BlobError::MisalignedView => "Buffer length not a multiple of the element width",
        };
        write!(f, "{msg}")
    }
}

/// Result type for blob operations
pub type Result<T> = core::result::Result<T, BlobError>;
