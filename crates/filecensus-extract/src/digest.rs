//! Streaming content fingerprinting.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use blake3::Hasher;

use filecensus_core::ContentDigest;

/// Hash a file's full byte stream into a 128-bit fingerprint.
///
/// Reads in `chunk_size` pieces through an incremental hasher, so the
/// file is never held in memory whole. The digest is the first 16 bytes
/// of the BLAKE3 extended output; it identifies content, it does not
/// certify it.
pub fn digest_file(path: &Path, chunk_size: usize) -> io::Result<ContentDigest> {
    let mut file = File::open(path)?;
    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; chunk_size];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let mut bytes = [0u8; 16];
    hasher.finalize_xof().fill(&mut bytes);
    Ok(ContentDigest::new(bytes))
}
