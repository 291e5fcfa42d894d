#[derive(Debug, Clone)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, origin: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { bucket: String, naming: Option<String> },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },

    // Storage
    UploadDirReady { path: String },
    StorageReady { bucket: String, endpoint: String },
    FileSaved { name: String, url: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
