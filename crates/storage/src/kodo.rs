use crate::auth::{Mac, PutPolicy};
use crate::backend::{ObjectStoreClient, PutResponse};
use crate::StorageError;
use kodo_config::StorageSettings;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, StatusCode};
use std::path::Path;
use tokio_util::io::ReaderStream;

/// Qiniu Kodo form-upload client
pub struct KodoClient {
    http: reqwest::Client,
    mac: Mac,
    bucket: String,
    upload_url: String,
    token_ttl_secs: u64,
}

impl KodoClient {
    pub fn new(mac: Mac, bucket: String, upload_url: String, token_ttl_secs: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            mac,
            bucket,
            upload_url,
            token_ttl_secs,
        }
    }

    pub fn from_settings(settings: &StorageSettings) -> Result<Self, StorageError> {
        if settings.bucket.is_empty() {
            return Err(StorageError::ConfigError("bucket is not set".to_string()));
        }

        Ok(Self::new(
            Mac::new(settings.access_key.clone(), settings.secret_key.clone()),
            settings.bucket.clone(),
            settings.upload_endpoint().to_string(),
            settings.token_ttl_secs,
        ))
    }

    /// A fresh token per upload, scoped to the whole bucket
    fn upload_token(&self) -> Result<String, StorageError> {
        PutPolicy::new(self.bucket.clone(), self.token_ttl_secs).upload_token(&self.mac)
    }
}

#[async_trait::async_trait]
impl ObjectStoreClient for KodoClient {
    async fn put_file(&self, key: Option<&str>, local_path: &Path) -> Result<PutResponse, StorageError> {
        let token = self.upload_token()?;

        let file = tokio::fs::File::open(local_path).await?;
        let size = file.metadata().await?.len();
        let file_name = key
            .map(str::to_string)
            .or_else(|| local_path.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "file".to_string());

        let part = Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), size)
            .file_name(file_name);

        let mut form = Form::new().text("token", token);
        if let Some(key) = key {
            form = form.text("key", key.to_string());
        }
        // The file field has to come last
        let form = form.part("file", part);

        tracing::debug!(
            "Uploading {} ({} bytes) to bucket {}",
            local_path.display(),
            size,
            self.bucket
        );

        let response = self.http.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::UploadStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<PutResponse>().await?)
    }
}
