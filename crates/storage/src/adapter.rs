use crate::StorageError;
use kodo_keys::UploadedFile;

/// The storage contract a content host expects from a media backend
#[async_trait::async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Persist an uploaded file and return its public URL
    async fn save(&self, file: &UploadedFile) -> Result<String, StorageError>;

    /// Whether `filename` is already stored under `target_dir`
    async fn exists(&self, filename: &str, target_dir: Option<&str>) -> Result<bool, StorageError>;

    /// Remove a stored file, reporting whether the host may treat it as gone
    async fn delete(&self, filename: &str, target_dir: Option<&str>) -> Result<bool, StorageError>;

    /// Resolve a stored file's URL or path to its public download URL
    async fn read(&self, path: &str) -> Result<String, StorageError>;
}
