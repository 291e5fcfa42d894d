use kodo_events::{AppEvent, EventBus};
use kodo_config::Config;
use kodo_filesystem::FileSystem;
use anyhow::Result;
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = FileSystem::get_absolute_path_string(config_path)?;

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path.clone(),
    });

    let config_exists = std::path::Path::new(config_path).exists();
    let config = Config::from_file_with_events(config_path, Some(events)).await?;

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: abs_config_path,
        });
    }

    config.validate()?;

    events.emit(AppEvent::ConfigLoaded {
        bucket: config.storage.bucket.clone(),
        naming: config.storage.file_key.as_ref().map(describe_naming),
    });

    Ok(config)
}

fn describe_naming(settings: &kodo_config::FileKeySettings) -> String {
    let mut parts = Vec::new();
    if !settings.prefix.is_empty() {
        parts.push(format!("prefix '{}'", settings.prefix));
    }
    if !settings.suffix.is_empty() {
        parts.push(format!("suffix '{}'", settings.suffix));
    }
    if settings.hash_as_basename {
        parts.push("content hash".to_string());
    } else if settings.safe_string {
        parts.push("sanitized".to_string());
    }
    if !settings.extname {
        parts.push("no extension".to_string());
    }

    if parts.is_empty() {
        "original names".to_string()
    } else {
        parts.join(", ")
    }
}
