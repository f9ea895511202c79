//! Build blobs from mixed parts and slice them

use webblob::{Blob, BlobOptions, BlobPart, F16Array, File, FileOptions, TypedView};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Mixed part kinds concatenate in input order
    let greeting = Blob::with_options(
        [
            BlobPart::from("Hello"),
            BlobPart::from(vec![0x20u8]),
            BlobPart::from(TypedView::from_slice(&[0x6c72_6f57u32])), // "Worl"
            BlobPart::from("d"),
        ],
        BlobOptions::default().with_content_type("text/plain"),
    );
    println!("{} bytes: {:?}", greeting.size(), greeting.text().await);

    // Negative slice indices count back from the end
    let tail = greeting.slice(Some(-5), None, Some("text/plain"));
    println!("tail: {:?}", tail.text().await);

    // Half-precision bit patterns can spell bytes exactly
    let half = F16Array::from_f64_slice(&[2.65625, 58.59375]);
    let pass = Blob::new([BlobPart::from(&half)]);
    println!("f16 fixture decodes to {:?}", pass.text().await);

    // Files carry a name and timestamp on top of the blob surface
    let file = File::with_options(
        [BlobPart::from(greeting)],
        "greeting.txt",
        FileOptions::default().with_content_type("text/plain"),
    );
    println!(
        "{} ({} bytes, modified {})",
        file.name(),
        file.size(),
        file.last_modified()
    );
}
