//! Blob part inputs and their byte encoding
//!
//! A blob is constructed from an ordered sequence of heterogeneous parts.
//! Each part kind maps to exactly one encoder branch, and the normalizer
//! flattens a part sequence into one contiguous buffer with no skipping,
//! reordering, or deduplication.

use bytes::{Bytes, BytesMut};
use webblob_core::{BlobError, ElementKind, F16Array, Result, ViewElement};

use crate::blob::Blob;
use crate::file::File;

/// A read-only view over same-width numeric elements
///
/// The view contributes its raw in-memory byte layout verbatim, with no
/// endianness conversion. Multi-byte elements captured from native slices
/// therefore carry the platform's (little-endian) layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedView {
    kind: ElementKind,
    bytes: Bytes,
}

impl TypedView {
    /// Capture a typed slice's raw bytes
    pub fn from_slice<T: ViewElement>(elems: &[T]) -> Self {
        Self {
            kind: T::kind(),
            bytes: Bytes::copy_from_slice(bytemuck::cast_slice(elems)),
        }
    }

    /// Build a view over raw bytes for a known element kind
    ///
    /// Fails with `MisalignedView` when the buffer length is not a multiple
    /// of the element width.
    pub fn from_raw(kind: ElementKind, bytes: impl Into<Bytes>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() % kind.size_bytes() != 0 {
            return Err(BlobError::MisalignedView);
        }
        Ok(Self { kind, bytes })
    }

    /// Build a view from a dynamically tagged kind byte
    ///
    /// Fails with `UnsupportedPartKind` when the tag names no known element
    /// kind, otherwise validates like [`TypedView::from_raw`].
    pub fn from_tagged(kind: u8, bytes: impl Into<Bytes>) -> Result<Self> {
        let kind = ElementKind::from_u8(kind).ok_or(BlobError::UnsupportedPartKind)?;
        Self::from_raw(kind, bytes)
    }

    /// Get the element kind of this view
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Get the raw bytes of this view
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of elements in the view
    pub fn len(&self) -> usize {
        self.bytes.len() / self.kind.size_bytes()
    }

    /// Check whether the view holds no elements
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One heterogeneous input accepted by a blob constructor
#[derive(Debug, Clone)]
pub enum BlobPart {
    /// UTF-8 text contribution
    Text(String),
    /// Verbatim byte contribution
    Bytes(Bytes),
    /// Raw layout of a typed numeric view
    TypedView(TypedView),
    /// Read-only view of an existing blob's full byte range
    Blob(Blob),
}

impl BlobPart {
    /// Exact byte length this part contributes
    pub fn encoded_len(&self) -> usize {
        match self {
            BlobPart::Text(text) => text.len(),
            BlobPart::Bytes(bytes) => bytes.len(),
            BlobPart::TypedView(view) => view.as_bytes().len(),
            BlobPart::Blob(blob) => blob.size(),
        }
    }

    /// Append this part's exact byte contribution
    pub(crate) fn encode_into(&self, buf: &mut BytesMut) {
        match self {
            BlobPart::Text(text) => buf.extend_from_slice(text.as_bytes()),
            BlobPart::Bytes(bytes) => buf.extend_from_slice(bytes),
            BlobPart::TypedView(view) => buf.extend_from_slice(view.as_bytes()),
            BlobPart::Blob(blob) => buf.extend_from_slice(blob.as_bytes()),
        }
    }

    /// Adopt this part's storage without copying, where immutability allows
    fn into_shared_bytes(self) -> Bytes {
        match self {
            BlobPart::Text(text) => Bytes::from(text.into_bytes()),
            BlobPart::Bytes(bytes) => bytes,
            BlobPart::TypedView(view) => view.bytes,
            BlobPart::Blob(blob) => blob.shared_bytes(),
        }
    }
}

/// Flatten an ordered part sequence into one materialized buffer
///
/// The result's length is the sum of each part's encoded length, in input
/// order. Zero-length parts contribute nothing and never perturb their
/// neighbors. A single-part sequence adopts the part's storage instead of
/// copying; the source buffer is immutable either way.
pub(crate) fn concat_parts<I>(parts: I) -> Bytes
where
    I: IntoIterator<Item = BlobPart>,
{
    let mut parts: Vec<BlobPart> = parts.into_iter().collect();

    match parts.len() {
        0 => Bytes::new(),
        1 => parts.remove(0).into_shared_bytes(),
        _ => {
            let total: usize = parts.iter().map(BlobPart::encoded_len).sum();
            let mut buf = BytesMut::with_capacity(total);
            for part in &parts {
                part.encode_into(&mut buf);
            }
            buf.freeze()
        }
    }
}

impl From<&str> for BlobPart {
    fn from(text: &str) -> Self {
        BlobPart::Text(text.to_owned())
    }
}

impl From<String> for BlobPart {
    fn from(text: String) -> Self {
        BlobPart::Text(text)
    }
}

impl From<Vec<u8>> for BlobPart {
    fn from(bytes: Vec<u8>) -> Self {
        BlobPart::Bytes(Bytes::from(bytes))
    }
}

impl From<&[u8]> for BlobPart {
    fn from(bytes: &[u8]) -> Self {
        BlobPart::Bytes(Bytes::copy_from_slice(bytes))
    }
}

impl From<Bytes> for BlobPart {
    fn from(bytes: Bytes) -> Self {
        BlobPart::Bytes(bytes)
    }
}

impl From<TypedView> for BlobPart {
    fn from(view: TypedView) -> Self {
        BlobPart::TypedView(view)
    }
}

impl From<Blob> for BlobPart {
    fn from(blob: Blob) -> Self {
        BlobPart::Blob(blob)
    }
}

impl From<&Blob> for BlobPart {
    fn from(blob: &Blob) -> Self {
        BlobPart::Blob(blob.clone())
    }
}

impl From<File> for BlobPart {
    fn from(file: File) -> Self {
        BlobPart::Blob(file.into_blob())
    }
}

impl From<&F16Array> for BlobPart {
    fn from(array: &F16Array) -> Self {
        BlobPart::TypedView(TypedView {
            kind: ElementKind::F16,
            bytes: Bytes::from(array.to_le_bytes()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_view_captures_raw_layout() {
        let view = TypedView::from_slice(&[0x4150u16, 0x5353]);
        assert_eq!(view.kind(), ElementKind::U16);
        assert_eq!(view.as_bytes(), b"PASS");
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_from_raw_checks_alignment() {
        assert!(TypedView::from_raw(ElementKind::U16, vec![0x50, 0x41]).is_ok());
        assert_eq!(
            TypedView::from_raw(ElementKind::U16, vec![0x50]),
            Err(BlobError::MisalignedView)
        );
        assert_eq!(
            TypedView::from_raw(ElementKind::F64, vec![0u8; 12]),
            Err(BlobError::MisalignedView)
        );
        // Empty buffers are valid for any kind
        assert!(TypedView::from_raw(ElementKind::U32, Vec::new()).is_ok());
    }

    #[test]
    fn test_from_tagged_rejects_unknown_kinds() {
        assert!(TypedView::from_tagged(0, vec![1, 2, 3]).is_ok());
        assert_eq!(
            TypedView::from_tagged(200, vec![1, 2, 3]),
            Err(BlobError::UnsupportedPartKind)
        );
    }

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(BlobPart::from("héllo").encoded_len(), 6);
        assert_eq!(BlobPart::from(vec![1u8, 2, 3]).encoded_len(), 3);
        assert_eq!(
            BlobPart::TypedView(TypedView::from_slice(&[1u64, 2])).encoded_len(),
            16
        );
    }

    #[test]
    fn test_concat_preserves_order_and_length() {
        let buffer = concat_parts([
            BlobPart::from("Hello"),
            BlobPart::from(vec![0x20u8]),
            BlobPart::from("World"),
        ]);
        assert_eq!(&buffer[..], b"Hello World");
    }

    #[test]
    fn test_concat_zero_length_neutrality() {
        let buffer = concat_parts([
            BlobPart::from(Vec::new()),
            BlobPart::from("Test"),
            BlobPart::from(Bytes::new()),
        ]);
        assert_eq!(&buffer[..], b"Test");

        const NO_PARTS: [BlobPart; 0] = [];
        assert!(concat_parts(NO_PARTS).is_empty());
    }

    #[test]
    fn test_single_part_adopts_storage() {
        let source = Bytes::from_static(b"shared");
        let buffer = concat_parts([BlobPart::from(source.clone())]);
        // Same backing storage, not a copy
        assert_eq!(buffer.as_ptr(), source.as_ptr());
    }
}
