mod adapter;
mod auth;
mod backend;
mod errors;
mod kodo;
mod store;

pub use adapter::StorageAdapter;
pub use auth::{Mac, PutPolicy};
pub use backend::{decode_key, encode_key, ObjectStoreClient, PutResponse};
pub use errors::*;
pub use kodo::KodoClient;
pub use store::KodoStore;

pub use kodo_keys::{NamingPolicy, UploadedFile};
