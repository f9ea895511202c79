//! Immutable binary blob container
//!
//! A blob owns a normalized byte buffer fixed at construction time plus a
//! sanitized content type. All materialization is read-only: slicing shares
//! the parent's storage, and the async accessors each observe the same
//! complete, unaltered buffer regardless of relative ordering.

use bytes::Bytes;
use webblob_core::{mime, range};

use crate::part::{concat_parts, BlobPart};
use crate::stream::BlobStream;

/// Construction options for [`Blob`]
#[derive(Debug, Clone, Default)]
pub struct BlobOptions {
    content_type: Option<String>,
}

impl BlobOptions {
    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub(crate) fn sanitized_content_type(&self) -> String {
        self.content_type
            .as_deref()
            .map(mime::sanitize)
            .unwrap_or_default()
            .to_owned()
    }
}

/// Immutable, sized, typed binary container
///
/// The byte buffer never changes after construction, so sub-views produced
/// by [`Blob::slice`] share the parent's storage and no locking is needed
/// anywhere in the model.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob {
    bytes: Bytes,
    content_type: String,
}

impl Blob {
    /// Build a blob from an ordered part sequence with no content type
    pub fn new<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = BlobPart>,
    {
        Self::with_options(parts, BlobOptions::default())
    }

    /// Build a blob from an ordered part sequence
    ///
    /// Parts are encoded and concatenated in input order; a content type
    /// containing bytes outside the printable ASCII token range is
    /// discarded and stored as the empty string. Construction is
    /// infallible and no partial blob is ever observable.
    pub fn with_options<I>(parts: I, options: BlobOptions) -> Self
    where
        I: IntoIterator<Item = BlobPart>,
    {
        let bytes = concat_parts(parts);
        let content_type = options.sanitized_content_type();
        tracing::trace!(size = bytes.len(), %content_type, "blob constructed");
        Self {
            bytes,
            content_type,
        }
    }

    pub(crate) fn from_shared(bytes: Bytes, content_type: String) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    /// Byte length of the buffer
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Sanitized content type, case preserved as provided
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Compare the content type case-insensitively
    pub fn matches_type(&self, content_type: &str) -> bool {
        mime::eq_ignore_case(&self.content_type, content_type)
    }

    /// The full byte buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Clone a handle to the shared storage
    pub(crate) fn shared_bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Take a sub-range as a new blob
    ///
    /// Indices clamp into `[0, size]`; negative indices count back from the
    /// end; a resolved end before the resolved start yields an empty blob.
    /// Omitted bounds default to the buffer's own. The result shares the
    /// parent's immutable storage rather than copying, and its content type
    /// is the sanitized `content_type` or empty when omitted.
    pub fn slice(
        &self,
        start: Option<i64>,
        end: Option<i64>,
        content_type: Option<&str>,
    ) -> Blob {
        let resolved = range::resolve_slice(self.size(), start, end);
        let content_type = content_type.map(mime::sanitize).unwrap_or_default();
        Blob::from_shared(self.bytes.slice(resolved), content_type.to_owned())
    }

    /// Decode the full buffer as UTF-8 text
    ///
    /// Malformed sequences are replaced with U+FFFD rather than erroring.
    /// Suspends the caller for one cooperative yield; the decode itself is
    /// synchronous over memory-resident data.
    pub async fn text(&self) -> String {
        tokio::task::yield_now().await;
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Copy out the raw bytes
    ///
    /// Resolves to a fresh copy of the full buffer after one cooperative
    /// yield.
    pub async fn array_buffer(&self) -> Vec<u8> {
        tokio::task::yield_now().await;
        self.bytes.to_vec()
    }

    /// Open a fresh pull-based stream over the full buffer
    ///
    /// Each call starts from the beginning; a consumed or abandoned stream
    /// is never restarted in place.
    pub fn stream(&self) -> BlobStream {
        BlobStream::new(self.bytes.clone())
    }
}

impl core::fmt::Debug for Blob {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Blob")
            .field("size", &self.size())
            .field("content_type", &self.content_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::TypedView;
    use webblob_core::{F16, F16Array};

    const NO_PARTS: [BlobPart; 0] = [];

    fn text_blob(text: &str) -> Blob {
        Blob::new([BlobPart::from(text)])
    }

    #[test]
    fn test_typed_views_concatenate_in_order() {
        let blob = Blob::new([
            BlobPart::from(TypedView::from_slice(&[0x50u8, 0x41, 0x53, 0x53])),
            BlobPart::from(TypedView::from_slice(&[0x50i8, 0x41, 0x53, 0x53])),
            BlobPart::from(TypedView::from_slice(&[0x4150u16, 0x5353])),
            BlobPart::from(TypedView::from_slice(&[0x4150i16, 0x5353])),
            BlobPart::from(TypedView::from_slice(&[0x53534150u32])),
            BlobPart::from(TypedView::from_slice(&[0x53534150i32])),
            BlobPart::from(TypedView::from_slice(&[0x5353_4150_5353_4150u64])),
            BlobPart::from(TypedView::from_slice(&[0x5353_4150_5353_4150i64])),
            BlobPart::from(TypedView::from_slice(&[
                F16::from_bits(0x4150),
                F16::from_bits(0x5353),
            ])),
            BlobPart::from(TypedView::from_slice(&[f32::from_bits(0x53534150)])),
            BlobPart::from(TypedView::from_slice(&[f64::from_bits(
                0x5353_4150_5353_4150,
            )])),
        ]);
        assert_eq!(blob.size(), 56);
        assert_eq!(blob.as_bytes(), "PASS".repeat(14).as_bytes());
    }

    #[test]
    fn test_empty_parts_are_neutral() {
        let blob = Blob::new([
            BlobPart::from(TypedView::from_slice::<u8>(&[])),
            BlobPart::from(TypedView::from_slice(&[84u8, 101, 115, 116])),
            BlobPart::from(TypedView::from_slice::<u8>(&[])),
        ]);
        assert_eq!(blob.as_bytes(), b"Test");
    }

    #[test]
    fn test_nested_blob_parts() {
        let inner = text_blob("PASS");
        let blob = Blob::new([
            BlobPart::from("["),
            BlobPart::from(&inner),
            BlobPart::from("]"),
        ]);
        assert_eq!(blob.as_bytes(), b"[PASS]");
        // The inner blob is shared read-only, never drained
        assert_eq!(inner.as_bytes(), b"PASS");
    }

    #[test]
    fn test_content_type_sanitization() {
        let blob = Blob::with_options(
            NO_PARTS,
            BlobOptions::default().with_content_type("TEXT/HTML"),
        );
        assert_eq!(blob.content_type(), "TEXT/HTML");
        assert!(blob.matches_type("text/html"));

        let rejected = Blob::with_options(
            NO_PARTS,
            BlobOptions::default().with_content_type("text/\nhtml"),
        );
        assert_eq!(rejected.content_type(), "");

        assert_eq!(Blob::new(NO_PARTS).content_type(), "");
    }

    #[test]
    fn test_slice_clamping() {
        let blob = text_blob("WXYZ");
        let tail = blob.slice(Some(-3), Some(1_000_000), None);
        assert_eq!(tail.as_bytes(), b"XYZ");

        let empty = blob.slice(Some(5), Some(2), None);
        assert_eq!(empty.size(), 0);

        let extreme = blob.slice(Some(i64::MIN), Some(i64::MAX), None);
        assert_eq!(extreme.as_bytes(), b"WXYZ");
    }

    #[test]
    fn test_slice_shares_parent_storage() {
        let blob = text_blob("0123456789");
        let sub = blob.slice(Some(2), Some(6), Some("text/plain"));
        assert_eq!(sub.as_bytes(), b"2345");
        assert_eq!(sub.content_type(), "text/plain");
        // Same backing allocation, offset by the slice start
        assert_eq!(sub.as_bytes().as_ptr(), blob.as_bytes()[2..].as_ptr());
        // Slicing a slice resolves against the sub-view
        assert_eq!(sub.slice(Some(-2), None, None).as_bytes(), b"45");
    }

    #[test]
    fn test_slice_drops_content_type_by_default() {
        let blob = Blob::with_options(
            [BlobPart::from("abc")],
            BlobOptions::default().with_content_type("text/plain"),
        );
        assert_eq!(blob.slice(None, None, None).content_type(), "");
    }

    #[tokio::test]
    async fn test_text_decodes_utf8() {
        assert_eq!(text_blob("PASS").text().await, "PASS");
        // Malformed bytes are replaced, never an error
        let lossy = Blob::new([BlobPart::from(vec![0x50u8, 0xff, 0x53])]);
        assert_eq!(lossy.text().await, "P\u{fffd}S");
    }

    #[tokio::test]
    async fn test_f16_array_part_feeds_a_blob() {
        let half = F16Array::from_f64_slice(&[2.65625, 58.59375]);
        let blob = Blob::new([BlobPart::from(&half)]);
        assert_eq!(blob.size(), 4);
        assert_eq!(blob.text().await, "PASS");
    }

    #[tokio::test]
    async fn test_large_buffer_materializes() {
        let blob = Blob::new([BlobPart::from(vec![65u8; 1000])]);
        assert_eq!(blob.size(), 1000);
        assert_eq!(blob.text().await, "A".repeat(1000));
    }

    #[tokio::test]
    async fn test_array_buffer_returns_a_copy() {
        let blob = text_blob("copy me");
        let buffer = blob.array_buffer().await;
        assert_eq!(buffer, b"copy me");
        assert_ne!(buffer.as_ptr(), blob.as_bytes().as_ptr());
    }

    #[tokio::test]
    async fn test_concurrent_reads_observe_whole_buffer() {
        let blob = text_blob("stable contents");
        let (a, b, c) = tokio::join!(blob.text(), blob.array_buffer(), blob.text());
        assert_eq!(a, "stable contents");
        assert_eq!(b, b"stable contents");
        assert_eq!(c, "stable contents");
    }
}
