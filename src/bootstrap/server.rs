use kodo_events::{AppEvent, EventBus};
use kodo_config::Config;
use kodo_filesystem::FileSystem;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn initialize_upload_dir(config: &Config, events: &Arc<EventBus>) -> Result<PathBuf> {
    let path = FileSystem::ensure_upload_dir(&config.server.upload_dir).await?;

    events.emit(AppEvent::UploadDirReady {
        path: path.display().to_string(),
    });

    Ok(path)
}
