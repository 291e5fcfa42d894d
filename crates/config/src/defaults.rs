/// Default values for configuration fields

pub fn upload_dir() -> String {
    "uploads".to_string()
}

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    60
}

pub fn max_body_size() -> usize {
    50
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn zone() -> super::models::Zone {
    super::models::Zone::Z2
}

pub fn token_ttl_secs() -> u64 {
    3600  // Upload tokens are valid for one hour
}

pub fn extname() -> bool {
    true
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# Kodo Store Configuration
# ===============================================================================

[server]
host = "0.0.0.0"                     # Bind address
port = 2368                          # Port
upload_dir = "uploads"               # Scratch directory for incoming uploads
tcp_nodelay = true                   # Disable Nagle's algorithm
timeout_secs = 60                    # Request timeout in seconds
max_body_size_mb = 50                # Max upload size in MB
allowed_origins = ["*"]              # CORS origins

# ===============================================================================
# QINIU KODO
# ===============================================================================
# Credentials can also come from QINIU_ACCESS_KEY / QINIU_SECRET_KEY,
# the bucket from QINIU_BUCKET and the origin from QINIU_ORIGIN.
[storage]
access_key = ""
secret_key = ""
bucket = ""
origin = ""                          # Public URL prefix, e.g. https://cdn.example.com
zone = "z2"                          # z0 | z1 | z2 | na0 | as0
upload_url = ""                      # Custom upload host (overrides zone)
token_ttl_secs = 3600                # Upload token lifetime

# Key naming. Leave this table out to let Kodo assign keys.
#[storage.file_key]
#prefix = "YYYY/MM/"                 # Date template (YYYY, MM, DD, HH, mm, ss, ...), leading "/" dropped
#suffix = ""                         # Appended before the extension
#extname = true                      # Keep the (lowercased) extension
#hash_as_basename = false            # Use the SHA-1 of the content as the name
#safe_string = true                  # Sanitize the original name (ignored when hashing)
"#;
