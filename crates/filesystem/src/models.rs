/// Local filesystem helpers for the upload scratch area
pub struct FileSystem;
