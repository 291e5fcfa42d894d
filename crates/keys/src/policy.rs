use kodo_config::FileKeySettings;
use std::fmt;
use std::sync::Arc;

/// A policy option that is either fixed or produced on demand.
///
/// `Computed` is called again on every resolution, so a closure returning
/// a date template keeps tracking the current time.
#[derive(Clone)]
pub enum PolicyValue {
    Literal(String),
    Computed(Arc<dyn Fn() -> String + Send + Sync>),
}

impl PolicyValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    pub fn evaluate(&self) -> String {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Computed(f) => f(),
        }
    }
}

impl fmt::Debug for PolicyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// What ends up in the basename slot of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasenameMode {
    /// Original basename, untouched.
    #[default]
    Verbatim,
    /// Original basename passed through `safe_string`.
    Sanitized,
    /// SHA-1 of the file content.
    ContentHashed,
}

impl BasenameMode {
    /// Hashing wins over sanitizing when both are requested.
    pub fn from_flags(hash_as_basename: bool, safe_string: bool) -> Self {
        if hash_as_basename {
            Self::ContentHashed
        } else if safe_string {
            Self::Sanitized
        } else {
            Self::Verbatim
        }
    }
}

#[derive(Debug, Clone)]
pub struct NamingPolicy {
    pub prefix: Option<PolicyValue>,
    pub suffix: Option<PolicyValue>,
    pub extname: bool,
    pub mode: BasenameMode,
}

impl NamingPolicy {
    pub fn new() -> Self {
        Self {
            prefix: None,
            suffix: None,
            extname: true,
            mode: BasenameMode::Verbatim,
        }
    }

    pub fn with_prefix(mut self, prefix: PolicyValue) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn with_suffix(mut self, suffix: PolicyValue) -> Self {
        self.suffix = Some(suffix);
        self
    }

    pub fn with_extname(mut self, extname: bool) -> Self {
        self.extname = extname;
        self
    }

    pub fn with_mode(mut self, mode: BasenameMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&FileKeySettings> for NamingPolicy {
    fn from(settings: &FileKeySettings) -> Self {
        let non_empty = |value: &str| {
            if value.is_empty() {
                None
            } else {
                Some(PolicyValue::literal(value))
            }
        };

        Self {
            prefix: non_empty(&settings.prefix),
            suffix: non_empty(&settings.suffix),
            extname: settings.extname,
            mode: BasenameMode::from_flags(settings.hash_as_basename, settings.safe_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_hash_takes_precedence() {
        assert_eq!(BasenameMode::from_flags(true, true), BasenameMode::ContentHashed);
        assert_eq!(BasenameMode::from_flags(true, false), BasenameMode::ContentHashed);
        assert_eq!(BasenameMode::from_flags(false, true), BasenameMode::Sanitized);
        assert_eq!(BasenameMode::from_flags(false, false), BasenameMode::Verbatim);
    }

    #[test]
    fn test_computed_value_runs_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let value = PolicyValue::computed(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            format!("call-{}", n)
        });

        assert_eq!(value.evaluate(), "call-0");
        assert_eq!(value.evaluate(), "call-1");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_from_settings() {
        let settings = FileKeySettings {
            prefix: "YYYY/".to_string(),
            suffix: String::new(),
            extname: false,
            hash_as_basename: false,
            safe_string: true,
        };

        let policy = NamingPolicy::from(&settings);
        assert_eq!(policy.prefix.as_ref().map(PolicyValue::evaluate), Some("YYYY/".to_string()));
        assert!(policy.suffix.is_none());
        assert!(!policy.extname);
        assert_eq!(policy.mode, BasenameMode::Sanitized);
    }
}
