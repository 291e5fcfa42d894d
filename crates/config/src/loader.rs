use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use super::ConfigError;
use std::path::Path;
use std::sync::Arc;

pub const ENV_ACCESS_KEY: &str = "QINIU_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "QINIU_SECRET_KEY";
pub const ENV_BUCKET: &str = "QINIU_BUCKET";
pub const ENV_ORIGIN: &str = "QINIU_ORIGIN";

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<kodo_events::EventBus>>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        migrate_config_if_needed(path, events).await?;

        let content = tokio::fs::read_to_string(path).await?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();

        Ok(config)
    }

    /// Environment variables win over the file for credentials, bucket and origin
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = &mut self.storage;
        let targets = [
            (ENV_ACCESS_KEY, &mut storage.access_key),
            (ENV_SECRET_KEY, &mut storage.secret_key),
            (ENV_BUCKET, &mut storage.bucket),
            (ENV_ORIGIN, &mut storage.origin),
        ];

        for (name, field) in targets {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                tracing::debug!("Config override from {}", name);
                *field = value;
            }
        }
    }

    /// Checks the settings the store cannot run without
    pub fn validate(&self) -> Result<(), ConfigError> {
        let storage = &self.storage;
        let required = [
            ("storage.access_key", &storage.access_key),
            ("storage.secret_key", &storage.secret_key),
            ("storage.bucket", &storage.bucket),
            ("storage.origin", &storage.origin),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::InvalidConfig(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        if !storage.origin.starts_with("http://") && !storage.origin.starts_with("https://") {
            return Err(ConfigError::InvalidConfig(format!(
                "storage.origin must be an http(s) URL, got '{}'",
                storage.origin
            )));
        }

        Ok(())
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileKeySettings, Zone};

    const FULL: &str = r#"
[server]
host = "127.0.0.1"
port = 9000

[storage]
access_key = "ak"
secret_key = "sk"
bucket = "media"
origin = "https://cdn.example.com"
zone = "na0"

[storage.file_key]
prefix = "YYYY/MM/"
safe_string = true
"#;

    #[tokio::test]
    async fn test_creates_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::from_file(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(config.server.port, 2368);
        assert_eq!(config.storage.zone, Zone::Z2);
        assert!(config.storage.file_key.is_none());
    }

    #[tokio::test]
    async fn test_parses_file_key_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, FULL).await.unwrap();

        let config = Config::from_file(&path).await.unwrap();

        assert_eq!(config.storage.zone, Zone::Na0);
        assert_eq!(config.storage.upload_endpoint(), "https://up-na0.qiniup.com");
        assert_eq!(
            config.storage.file_key,
            Some(FileKeySettings {
                prefix: "YYYY/MM/".to_string(),
                suffix: String::new(),
                extname: true,
                hash_as_basename: false,
                safe_string: true,
            })
        );
    }

    #[tokio::test]
    async fn test_overrides_and_validation() {
        let mut config: Config = toml::from_str(FULL).unwrap();
        config.storage.access_key.clear();
        assert!(config.validate().is_err());

        config.apply_overrides(|name| match name {
            ENV_ACCESS_KEY => Some("from-env".to_string()),
            ENV_BUCKET => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.storage.access_key, "from-env");
        assert_eq!(config.storage.bucket, "media");
        assert!(config.validate().is_ok());

        config.storage.origin = "cdn.example.com".to_string();
        assert!(config.validate().is_err());
    }
}
