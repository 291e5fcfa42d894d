use super::models::AppState;
use kodo_events::EventBus;
use kodo_storage::StorageAdapter;
use std::path::PathBuf;
use std::sync::Arc;

impl AppState {
    pub fn new(store: Arc<dyn StorageAdapter>, upload_dir: PathBuf, events: Arc<EventBus>) -> Self {
        Self {
            store,
            upload_dir: Arc::new(upload_dir),
            events,
        }
    }
}
