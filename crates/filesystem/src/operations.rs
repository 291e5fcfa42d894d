use super::models::FileSystem;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

impl FileSystem {
    /// Creates the scratch directory incoming uploads are spooled into
    pub async fn ensure_upload_dir(upload_dir: &str) -> Result<PathBuf> {
        let abs_path = Self::get_absolute_path(Path::new(upload_dir))?;
        Self::create_directory(&abs_path, "Upload directory").await?;
        Ok(abs_path)
    }

    async fn create_directory(path: &Path, description: &str) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
            tracing::debug!("    Created: {} ({})", path.display(), description);
        } else {
            tracing::debug!("    Exists:  {} ({})", path.display(), description);
        }
        Ok(())
    }

    fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_upload_dir_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("nested/uploads");
        let target_str = target.to_string_lossy().to_string();

        let first = FileSystem::ensure_upload_dir(&target_str).await.unwrap();
        let second = FileSystem::ensure_upload_dir(&target_str).await.unwrap();

        assert_eq!(first, target);
        assert_eq!(first, second);
        assert!(target.is_dir());
    }
}
