pub mod checksum;
pub mod sanitize;
pub mod errors;

pub use checksum::*;
pub use sanitize::*;
pub use errors::*;
