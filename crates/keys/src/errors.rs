use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Failed to fingerprint '{path}': {source}")]
    Fingerprint {
        path: PathBuf,
        #[source]
        source: kodo_utils::UtilsError,
    },
}
