//! Storage key derivation.
//!
//! Turns an uploaded file's original name plus a [`NamingPolicy`] into the
//! object key it is stored under: `prefix + basename + suffix + extension`,
//! where the basename may be kept, sanitized or replaced by a content hash.

mod errors;
mod models;
mod policy;
mod resolver;
pub mod template;

pub use errors::KeyError;
pub use models::UploadedFile;
pub use policy::{BasenameMode, NamingPolicy, PolicyValue};
pub use resolver::{resolve_key, resolve_key_at, split_name};
