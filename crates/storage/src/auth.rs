use crate::StorageError;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hmac::{Hmac, Mac as _};
use serde::Serialize;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Access/secret key pair used to sign upload tokens.
#[derive(Clone)]
pub struct Mac {
    access_key: String,
    secret_key: String,
}

impl Mac {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// `access_key:urlsafe_base64(hmac_sha1(secret_key, data))`
    pub fn sign(&self, data: &[u8]) -> Result<String, StorageError> {
        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| StorageError::ConfigError(format!("Invalid secret key: {}", e)))?;
        mac.update(data);
        let digest = mac.finalize().into_bytes();
        Ok(format!("{}:{}", self.access_key, URL_SAFE.encode(digest)))
    }
}

impl std::fmt::Debug for Mac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mac")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .finish()
    }
}

/// Upload policy: which bucket may be written, and until when.
#[derive(Debug, Clone, Serialize)]
pub struct PutPolicy {
    pub scope: String,
    pub deadline: i64,
}

impl PutPolicy {
    /// Policy for `bucket` valid for `ttl_secs` from now
    pub fn new(bucket: impl Into<String>, ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            scope: bucket.into(),
            deadline: chrono::Utc::now().timestamp().saturating_add(ttl),
        }
    }

    /// `sign:encoded_policy`, where the policy is JSON in URL-safe base64
    pub fn upload_token(&self, mac: &Mac) -> Result<String, StorageError> {
        let json = serde_json::to_string(self)?;
        let encoded = URL_SAFE.encode(json.as_bytes());
        let sign = mac.sign(encoded.as_bytes())?;
        Ok(format!("{}:{}", sign, encoded))
    }
}
