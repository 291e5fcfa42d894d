use crate::adapter::StorageAdapter;
use crate::backend::{decode_key, ObjectStoreClient};
use crate::kodo::KodoClient;
use crate::StorageError;
use kodo_config::StorageSettings;
use kodo_keys::{resolve_key, NamingPolicy, UploadedFile};
use std::sync::Arc;

const LOG_PREFIX: &str = "[KodoStore]";

/// Storage adapter backed by a Kodo bucket.
///
/// Files are served straight from `origin`; the adapter never proxies bytes.
pub struct KodoStore {
    client: Arc<dyn ObjectStoreClient>,
    origin: String,
    policy: Option<NamingPolicy>,
}

impl KodoStore {
    pub fn new(client: Arc<dyn ObjectStoreClient>, origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
            policy: None,
        }
    }

    pub fn with_policy(mut self, policy: Option<NamingPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn from_settings(settings: &StorageSettings) -> Result<Self, StorageError> {
        let client = KodoClient::from_settings(settings)?;
        let policy = settings.file_key.as_ref().map(NamingPolicy::from);

        Ok(Self::new(Arc::new(client), settings.origin.clone()).with_policy(policy))
    }
}

#[async_trait::async_trait]
impl StorageAdapter for KodoStore {
    async fn save(&self, file: &UploadedFile) -> Result<String, StorageError> {
        let key = resolve_key(file, self.policy.as_ref()).await.map_err(|e| {
            tracing::error!("{} save: {}", LOG_PREFIX, e);
            StorageError::from(e)
        })?;

        tracing::info!(
            "{} Uploading {} as {}",
            LOG_PREFIX,
            file.name,
            key.as_deref().unwrap_or("<assigned by store>")
        );

        let response = self
            .client
            .put_file(key.as_deref(), &file.path)
            .await
            .map_err(|e| {
                tracing::error!("{} save: {}", LOG_PREFIX, e);
                e
            })?;

        let url = format!("{}/{}", self.origin, response.key);
        tracing::info!("{} Upload complete: {}", LOG_PREFIX, url);

        Ok(url)
    }

    // Always false: existence is never checked remotely, so the host never
    // renames an upload to avoid a clash.
    // TODO: when a naming policy is set, stat the resolved key instead.
    async fn exists(&self, filename: &str, target_dir: Option<&str>) -> Result<bool, StorageError> {
        tracing::debug!(
            "{} exists: {} in {:?} (not checked)",
            LOG_PREFIX,
            filename,
            target_dir
        );
        Ok(false)
    }

    async fn delete(&self, filename: &str, _target_dir: Option<&str>) -> Result<bool, StorageError> {
        tracing::debug!("{} delete: {} (objects are kept)", LOG_PREFIX, filename);
        Ok(true)
    }

    async fn read(&self, path: &str) -> Result<String, StorageError> {
        let key = key_from_path(path);
        if key.is_empty() {
            return Err(StorageError::ReadError(path.to_string()));
        }

        Ok(self.client.public_download_url(&self.origin, &key))
    }
}

/// Object key from a stored file's URL or URL path
fn key_from_path(path: &str) -> String {
    let pathname = match reqwest::Url::parse(path) {
        Ok(url) => url.path().to_string(),
        Err(_) => path.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let key = pathname.strip_prefix('/').unwrap_or(&pathname);
    decode_key(key)
}
