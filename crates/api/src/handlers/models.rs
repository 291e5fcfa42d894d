use kodo_events::EventBus;
use kodo_storage::StorageAdapter;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) store: Arc<dyn StorageAdapter>,
    pub(super) upload_dir: Arc<PathBuf>,
    pub(super) events: Arc<EventBus>,
}
