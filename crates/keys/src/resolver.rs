use crate::errors::KeyError;
use crate::models::UploadedFile;
use crate::policy::{BasenameMode, NamingPolicy};
use crate::template;
use chrono::{DateTime, Local, TimeZone};
use kodo_utils::{compute_sha1, safe_string};
use std::fmt::Display;

/// Derive the object key for `file` under `policy`, using the current local time
/// for the prefix template.
///
/// Returns `Ok(None)` when no policy is configured; the object store then picks
/// the key itself.
pub async fn resolve_key(
    file: &UploadedFile,
    policy: Option<&NamingPolicy>,
) -> Result<Option<String>, KeyError> {
    resolve_key_at(file, policy, &Local::now()).await
}

/// [`resolve_key`] with an explicit timestamp for the prefix template.
pub async fn resolve_key_at<Tz>(
    file: &UploadedFile,
    policy: Option<&NamingPolicy>,
    now: &DateTime<Tz>,
) -> Result<Option<String>, KeyError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(policy) = policy else {
        return Ok(None);
    };

    let (basename, ext) = split_name(&file.name);

    let prefix = match &policy.prefix {
        Some(value) => {
            let rendered = template::render(&value.evaluate(), now);
            match rendered.strip_prefix('/') {
                Some(stripped) => stripped.to_string(),
                None => rendered,
            }
        }
        None => String::new(),
    };

    let suffix = policy
        .suffix
        .as_ref()
        .map(|value| value.evaluate())
        .unwrap_or_default();

    let extension = if policy.extname {
        ext.to_lowercase()
    } else {
        String::new()
    };

    let compose = |name: &str| format!("{}{}{}{}", prefix, name, suffix, extension);

    let key = match policy.mode {
        BasenameMode::ContentHashed => {
            let hash = compute_sha1(&file.path)
                .await
                .map_err(|source| KeyError::Fingerprint {
                    path: file.path.clone(),
                    source,
                })?;
            compose(&hash)
        }
        BasenameMode::Sanitized => compose(&safe_string(basename)),
        BasenameMode::Verbatim => compose(basename),
    };

    Ok(Some(key))
}

/// Split a file name into `(basename, extension)`.
///
/// Only the last `/`-separated component is considered. The extension keeps its
/// leading dot and is empty when there is no dot, or when the only dot starts
/// the name (`.env`).
pub fn split_name(name: &str) -> (&str, &str) {
    let trimmed = name.trim_end_matches('/');
    let file_name = match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };

    match file_name.rfind('.') {
        Some(idx) if idx > 0 && file_name != ".." => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}
