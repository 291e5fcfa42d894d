use crate::StorageError;
use serde::Deserialize;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::Path;

/// Body returned by the object store after a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PutResponse {
    pub key: String,
    #[serde(default)]
    pub hash: String,
}

/// Remote object store the adapter writes to
#[async_trait::async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Upload a local file. With `key == None` the store assigns the key,
    /// which is returned in the response either way.
    async fn put_file(&self, key: Option<&str>, local_path: &Path) -> Result<PutResponse, StorageError>;

    /// Public URL for an object (without uploading)
    fn public_download_url(&self, origin: &str, key: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), encode_key(key))
    }
}

// Escaped inside one path segment; `/` never reaches it since keys are split first.
const KEY_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes an object key for use as a URL path, keeping `/` between segments
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| utf8_percent_encode(segment, KEY_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Decodes `%XX` escapes in a URL path; malformed escapes are kept verbatim
pub fn decode_key(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}
