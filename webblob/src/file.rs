//! Named, timestamped blob variant
//!
//! A file composes a blob with a name and a last-modified timestamp. It
//! satisfies the full blob capability surface through deref, but the two
//! stay distinct types: a blob is never mistaken for a file, and slicing a
//! file deliberately yields a plain blob with the metadata dropped.

use std::ops::Deref;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::blob::{Blob, BlobOptions};
use crate::part::BlobPart;

/// Construction options for [`File`]
#[derive(Debug, Clone, Default)]
pub struct FileOptions {
    content_type: Option<String>,
    last_modified: Option<i64>,
}

impl FileOptions {
    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the last-modified timestamp in epoch milliseconds
    pub fn with_last_modified(mut self, last_modified: i64) -> Self {
        self.last_modified = Some(last_modified);
        self
    }
}

/// A blob with a name and a last-modified timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    blob: Blob,
    name: String,
    last_modified: i64,
}

impl File {
    /// Build a file from an ordered part sequence
    pub fn new<I>(parts: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = BlobPart>,
    {
        Self::with_options(parts, name, FileOptions::default())
    }

    /// Build a file from an ordered part sequence
    ///
    /// Byte and content-type handling delegate to the blob constructor.
    /// The name is stored verbatim with no path validation; the timestamp
    /// defaults to the construction-time clock when unspecified.
    pub fn with_options<I>(parts: I, name: impl Into<String>, options: FileOptions) -> Self
    where
        I: IntoIterator<Item = BlobPart>,
    {
        let mut blob_options = BlobOptions::default();
        if let Some(content_type) = options.content_type {
            blob_options = blob_options.with_content_type(content_type);
        }
        let name = name.into();
        tracing::trace!(%name, "file constructed");
        Self {
            blob: Blob::with_options(parts, blob_options),
            name,
            last_modified: options.last_modified.unwrap_or_else(now_millis),
        }
    }

    /// File name, stored verbatim
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last-modified timestamp in epoch milliseconds
    pub fn last_modified(&self) -> i64 {
        self.last_modified
    }

    /// Borrow the composed blob
    pub fn as_blob(&self) -> &Blob {
        &self.blob
    }

    /// Drop the file metadata, keeping the blob
    pub fn into_blob(self) -> Blob {
        self.blob
    }
}

impl Deref for File {
    type Target = Blob;

    fn deref(&self) -> &Blob {
        &self.blob
    }
}

impl AsRef<Blob> for File {
    fn as_ref(&self) -> &Blob {
        &self.blob
    }
}

impl From<File> for Blob {
    fn from(file: File) -> Blob {
        file.into_blob()
    }
}

/// Construction-time clock reading in epoch milliseconds
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    const NO_PARTS: [BlobPart; 0] = [];

    #[test]
    fn test_file_carries_blob_surface() {
        let file = File::with_options(
            [BlobPart::from("contents")],
            "notes.txt",
            FileOptions::default().with_content_type("text/plain"),
        );
        assert_eq!(file.name(), "notes.txt");
        assert_eq!(file.size(), 8);
        assert_eq!(file.content_type(), "text/plain");
        assert_eq!(file.as_bytes(), b"contents");
    }

    #[test]
    fn test_explicit_last_modified_is_preserved() {
        let file = File::with_options(
            NO_PARTS,
            "stamped",
            FileOptions::default().with_last_modified(1_234_567_890_123),
        );
        assert_eq!(file.last_modified(), 1_234_567_890_123);
    }

    #[test]
    fn test_default_last_modified_is_construction_time() {
        let before = now_millis();
        let file = File::new(NO_PARTS, "fresh");
        let after = now_millis();
        assert!(file.last_modified() >= before && file.last_modified() <= after);
    }

    #[test]
    fn test_name_is_not_path_validated() {
        let file = File::new(NO_PARTS, "../weird\\name?.bin");
        assert_eq!(file.name(), "../weird\\name?.bin");
    }

    #[test]
    fn test_slicing_a_file_yields_a_plain_blob() {
        let file = File::with_options(
            [BlobPart::from("0123456789")],
            "digits.txt",
            FileOptions::default().with_content_type("text/plain"),
        );
        let sub: Blob = file.slice(Some(2), Some(5), None);
        assert_eq!(sub.as_bytes(), b"234");
        // The slice is a blob, not a file: metadata is gone
        assert_eq!(sub.content_type(), "");
        let boxed: Box<dyn Any> = Box::new(sub);
        assert!(boxed.downcast_ref::<File>().is_none());
        assert!(boxed.downcast_ref::<Blob>().is_some());
    }

    #[test]
    fn test_type_identity_both_directions() {
        let file: Box<dyn Any> = Box::new(File::new(NO_PARTS, "f"));
        let blob: Box<dyn Any> = Box::new(Blob::new(NO_PARTS));

        assert!(file.downcast_ref::<File>().is_some());
        assert!(file.downcast_ref::<Blob>().is_none());
        assert!(blob.downcast_ref::<Blob>().is_some());
        assert!(blob.downcast_ref::<File>().is_none());
        // The blob surface of a file is still reachable by capability
        let file = File::new(NO_PARTS, "f");
        assert!(file.as_blob().is_empty());
    }

    #[tokio::test]
    async fn test_file_materialization_delegates() {
        let file = File::new([BlobPart::from("PASS")], "p.txt");
        assert_eq!(file.text().await, "PASS");
        assert_eq!(file.array_buffer().await, b"PASS");
    }
}
