// Re-export all public APIs from the workspace crates

pub use kodo_events::*;
pub use kodo_utils::*;
pub use kodo_filesystem::*;
pub use kodo_config::*;
pub use kodo_keys::*;
pub use kodo_storage::*;
pub use kodo_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Key derivation
    pub use kodo_keys::{resolve_key, BasenameMode, NamingPolicy, PolicyValue, UploadedFile};

    // Storage
    pub use kodo_storage::{KodoClient, KodoStore, ObjectStoreClient, StorageAdapter};

    // Events
    pub use kodo_events::{AppEvent, EventBus};

    // Configuration
    pub use kodo_config::Config;

    // Filesystem
    pub use kodo_filesystem::FileSystem;
}
