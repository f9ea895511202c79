//! webblob - Immutable Blob and File containers
//!
//! This library provides an in-memory binary container object model:
//! blobs assembled from heterogeneous parts, a named and timestamped file
//! variant, synchronous slicing, and asynchronous materialization as text,
//! raw bytes, or a chunked stream.
//!
//! ## Architecture
//!
//! The workspace follows a clean definition/implementation separation:
//!
//! - **webblob-core**: Element taxonomy, content-type sanitization, range
//!   clamping, and the half-precision codec (no I/O)
//! - **webblob**: Concrete containers with async materialization and
//!   streaming
//!
//! ## Quick Start
//!
//! ```rust
//! use webblob::{Blob, BlobOptions, BlobPart};
//!
//! let blob = Blob::with_options(
//!     [BlobPart::from("hello "), BlobPart::from("world")],
//!     BlobOptions::default().with_content_type("text/plain"),
//! );
//! assert_eq!(blob.size(), 11);
//! assert!(blob.matches_type("TEXT/PLAIN"));
//!
//! let tail = blob.slice(Some(-5), None, None);
//! assert_eq!(tail.as_bytes(), b"world");
//! ```
//!
//! ## Guarantees
//!
//! - **Immutability**: a blob's buffer is fixed at construction; slices
//!   share the parent's storage without copying or locking
//! - **Order preservation**: parts are encoded and concatenated exactly in
//!   input order, with zero-length parts contributing nothing
//! - **Cooperative scheduling**: materialization suspends once per call
//!   over memory-resident data, never blocking on I/O
//! - **Byte-exact half precision**: the f16 codec rounds to nearest even
//!   and round-trips every finite bit pattern

// Re-export core definitions
pub use webblob_core::{
    // Typed-view taxonomy
    element::{ElementKind, ViewElement},
    // Half-precision codec
    f16::{F16, F16Array},
    // Error handling
    error::{BlobError, Result},
    // Sanitization and clamping utilities
    mime, range,
};

// Implementation modules
pub mod blob;
pub mod file;
pub mod part;
pub mod stream;

// Public exports
pub use blob::{Blob, BlobOptions};
pub use file::{File, FileOptions};
pub use part::{BlobPart, TypedView};
pub use stream::{BlobStream, DEFAULT_CHUNK_SIZE};

/// Hook for embedders that drive an external collection pass
///
/// Blobs own their storage through reference counting and need no help
/// from a collector; this exists so harnesses with a collection phase can
/// call it unconditionally. It performs no action and never fails.
pub fn garbage_collect() {}
