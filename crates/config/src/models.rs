use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "super::defaults::upload_dir")]
    pub upload_dir: String,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_body_size")]
    pub max_body_size_mb: usize,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub bucket: String,
    /// Public origin objects are served from, e.g. `https://cdn.example.com`
    #[serde(default)]
    pub origin: String,
    #[serde(default = "super::defaults::zone")]
    pub zone: Zone,
    /// Overrides the zone's upload host when not empty
    #[serde(default)]
    pub upload_url: String,
    #[serde(default = "super::defaults::token_ttl_secs")]
    pub token_ttl_secs: u64,
    /// Absent table = no naming policy, the object store assigns keys
    #[serde(default)]
    pub file_key: Option<FileKeySettings>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileKeySettings {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default = "super::defaults::extname")]
    pub extname: bool,
    #[serde(default)]
    pub hash_as_basename: bool,
    #[serde(default)]
    pub safe_string: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Z0,
    Z1,
    Z2,
    Na0,
    As0,
}

impl Zone {
    pub fn upload_host(&self) -> &'static str {
        match self {
            Zone::Z0 => "https://up.qiniup.com",
            Zone::Z1 => "https://up-z1.qiniup.com",
            Zone::Z2 => "https://up-z2.qiniup.com",
            Zone::Na0 => "https://up-na0.qiniup.com",
            Zone::As0 => "https://up-as0.qiniup.com",
        }
    }
}

impl StorageSettings {
    pub fn upload_endpoint(&self) -> &str {
        if self.upload_url.is_empty() {
            self.zone.upload_host()
        } else {
            &self.upload_url
        }
    }
}
