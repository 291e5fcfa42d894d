use kodo_keys::{BasenameMode, PolicyValue};
use kodo_storage::{
    KodoStore, NamingPolicy, ObjectStoreClient, PutResponse, StorageAdapter, StorageError,
    UploadedFile,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Records every upload; assigns `auto/<n>` when no key is given
#[derive(Default)]
struct MockClient {
    uploads: Mutex<Vec<(Option<String>, PathBuf)>>,
    fail_with: Option<u16>,
}

#[async_trait::async_trait]
impl ObjectStoreClient for MockClient {
    async fn put_file(&self, key: Option<&str>, local_path: &Path) -> Result<PutResponse, StorageError> {
        if let Some(status) = self.fail_with {
            return Err(StorageError::UploadStatus {
                status,
                body: "{\"error\":\"bad token\"}".to_string(),
            });
        }

        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((key.map(str::to_string), local_path.to_path_buf()));
        let key = key
            .map(str::to_string)
            .unwrap_or_else(|| format!("auto/{}", uploads.len()));

        Ok(PutResponse {
            key,
            hash: "Fh8xVqod2MQ1mocfI4S4KpRL6D98".to_string(),
        })
    }
}

fn scratch(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[tokio::test]
async fn save_without_policy_lets_store_assign_key() {
    let client = Arc::new(MockClient::default());
    let store = KodoStore::new(client.clone(), "https://cdn.example.com/");
    let tmp = scratch(b"png bytes");

    let url = store
        .save(&UploadedFile::new(tmp.path(), "Photo.PNG"))
        .await
        .unwrap();

    assert_eq!(url, "https://cdn.example.com/auto/1");
    let uploads = client.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, None);
    assert_eq!(uploads[0].1, tmp.path());
}

#[tokio::test]
async fn save_with_policy_uploads_under_resolved_key() {
    let client = Arc::new(MockClient::default());
    let policy = NamingPolicy::new()
        .with_prefix(PolicyValue::literal("/[images]/"))
        .with_suffix(PolicyValue::literal("-v2"))
        .with_mode(BasenameMode::Sanitized);
    let store = KodoStore::new(client.clone(), "https://cdn.example.com").with_policy(Some(policy));
    let tmp = scratch(b"pdf bytes");

    let url = store
        .save(&UploadedFile::new(tmp.path(), "My Report.PDF"))
        .await
        .unwrap();

    assert_eq!(url, "https://cdn.example.com/images/My-Report-v2.pdf");
    let uploads = client.uploads.lock().unwrap();
    assert_eq!(uploads[0].0.as_deref(), Some("images/My-Report-v2.pdf"));
}

#[tokio::test]
async fn save_with_hashed_names_is_content_addressed() {
    let client = Arc::new(MockClient::default());
    let policy = NamingPolicy::new().with_mode(BasenameMode::ContentHashed);
    let store = KodoStore::new(client.clone(), "https://cdn.example.com").with_policy(Some(policy));

    let a = scratch(b"identical");
    let b = scratch(b"identical");
    let first = store.save(&UploadedFile::new(a.path(), "a.JPG")).await.unwrap();
    let second = store.save(&UploadedFile::new(b.path(), "b.jpg")).await.unwrap();

    assert_eq!(first, second);
    assert!(first.ends_with(".jpg"));
}

#[tokio::test]
async fn save_propagates_upload_failure() {
    let client = Arc::new(MockClient {
        fail_with: Some(401),
        ..Default::default()
    });
    let store = KodoStore::new(client, "https://cdn.example.com");
    let tmp = scratch(b"x");

    let err = store
        .save(&UploadedFile::new(tmp.path(), "a.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::UploadStatus { status: 401, .. }));
}

#[tokio::test]
async fn save_propagates_fingerprint_failure() {
    let client = Arc::new(MockClient::default());
    let policy = NamingPolicy::new().with_mode(BasenameMode::ContentHashed);
    let store = KodoStore::new(client.clone(), "https://cdn.example.com").with_policy(Some(policy));

    let err = store
        .save(&UploadedFile::new("/definitely/not/here.png", "here.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::KeyError(_)));
    assert!(client.uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn exists_and_delete_are_fixed_answers() {
    let store = KodoStore::new(Arc::new(MockClient::default()), "https://cdn.example.com");

    assert!(!store.exists("a.png", Some("2024/06")).await.unwrap());
    assert!(!store.exists("a.png", None).await.unwrap());
    assert!(store.delete("a.png", None).await.unwrap());
}

#[tokio::test]
async fn read_maps_url_to_public_download_url() {
    let store = KodoStore::new(Arc::new(MockClient::default()), "https://cdn.example.com");

    let url = store
        .read("https://cdn.example.com/2024/06/a%20b.png")
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.example.com/2024/06/a%20b.png");

    let url = store.read("/images/c.png").await.unwrap();
    assert_eq!(url, "https://cdn.example.com/images/c.png");

    let url = store.read("https://cdn.example.com/a%23b.png").await.unwrap();
    assert_eq!(url, "https://cdn.example.com/a%23b.png");

    let url = store.read("https://cdn.example.com/q%3Fx.png").await.unwrap();
    assert_eq!(url, "https://cdn.example.com/q%3Fx.png");

    let url = store.read("/2024/100%25.png").await.unwrap();
    assert_eq!(url, "https://cdn.example.com/2024/100%25.png");

    assert!(matches!(store.read("/").await, Err(StorageError::ReadError(_))));
}
