//! Consume a blob as a chunked stream

use futures::StreamExt;
use webblob::{Blob, BlobPart};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let blob = Blob::new([BlobPart::from(vec![65u8; 200_000])]);

    let mut stream = blob.stream().with_chunk_size(65536);
    let mut chunks = 0usize;
    let mut total = 0usize;
    while let Some(chunk) = stream.next().await {
        chunks += 1;
        total += chunk.len();
        println!("chunk {chunks}: {} bytes", chunk.len());
    }
    println!("{total} bytes over {chunks} chunks");

    // A fresh stream call replays the immutable buffer from the start
    let replay: usize = blob
        .stream()
        .fold(0, |sum, chunk| async move { sum + chunk.len() })
        .await;
    assert_eq!(replay, blob.size());
}
