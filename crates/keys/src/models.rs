use std::path::PathBuf;

/// A file handed over by the host for storage.
///
/// `path` is a temporary local copy, `name` is the name the user uploaded it with.
/// The host creates and removes the temporary file; the store only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub name: String,
}

impl UploadedFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}
