//! Pull-based streaming over a blob's buffer
//!
//! A stream is a finite, single-pass cursor over the immutable buffer.
//! Every pull suspends the consumer for one cooperative yield before
//! handing out the next in-order chunk; the chunks share the blob's
//! storage. A stream is not restartable: replaying the buffer takes a
//! fresh [`crate::Blob::stream`] call.

use core::pin::Pin;
use core::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;

/// Chunk size used by the reference materialization pool
pub const DEFAULT_CHUNK_SIZE: usize = 65536;

/// Finite, single-pass byte-chunk stream over one blob
///
/// Abandoning the stream at any point has no side effects beyond releasing
/// the cursor.
#[derive(Debug)]
pub struct BlobStream {
    bytes: Bytes,
    pos: usize,
    chunk_size: usize,
    yielded: bool,
}

impl BlobStream {
    pub(crate) fn new(bytes: Bytes) -> Self {
        tracing::trace!(size = bytes.len(), "blob stream opened");
        Self {
            bytes,
            pos: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            yielded: false,
        }
    }

    /// Set the maximum chunk size
    ///
    /// Values are clamped to at least one byte so the stream stays finite.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl Stream for BlobStream {
    type Item = Bytes;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Bytes>> {
        let this = self.get_mut();

        if this.pos >= this.bytes.len() {
            return Poll::Ready(None);
        }

        // One cooperative yield per pull: all data is memory-resident, so
        // the suspension is nominal rather than an I/O wait.
        if !this.yielded {
            this.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        this.yielded = false;

        let end = (this.pos + this.chunk_size).min(this.bytes.len());
        let chunk = this.bytes.slice(this.pos..end);
        this.pos = end;
        Poll::Ready(Some(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let chunks = self.remaining().div_ceil(self.chunk_size);
        (chunks, Some(chunks))
    }
}
