use crate::UtilsError;
use sha1::{Digest, Sha1};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

const DEFAULT_BUFFER_SIZE: usize = 8192; // 8KB read chunks

/// Content fingerprint of a file: lowercase hex SHA-1 of its bytes.
///
/// The file is streamed, never loaded whole, and is only ever opened for reading.
pub async fn compute_sha1<P: AsRef<Path>>(path: P) -> Result<String, UtilsError> {
    let (sha1, _) = compute_sha1_with_size(path, DEFAULT_BUFFER_SIZE).await?;
    Ok(sha1)
}

async fn compute_sha1_with_size<P: AsRef<Path>>(
    path: P,
    buffer_size: usize,
) -> Result<(String, u64), UtilsError> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = file.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
        total_bytes += bytes_read as u64;
    }

    let result = hasher.finalize();
    Ok((hex::encode(result), total_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_known_digest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();

        let digest = compute_sha1(file.path()).await.unwrap();
        assert_eq!(digest, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    }

    #[tokio::test]
    async fn test_small_buffer_matches_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[7u8; 10_000]).unwrap();

        let (small, size) = compute_sha1_with_size(file.path(), 3).await.unwrap();
        let default = compute_sha1(file.path()).await.unwrap();

        assert_eq!(small, default);
        assert_eq!(size, 10_000);
        assert_eq!(small.len(), 40);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = compute_sha1(dir.path().join("missing.bin")).await;
        assert!(matches!(result, Err(UtilsError::IoError(_))));
    }
}
