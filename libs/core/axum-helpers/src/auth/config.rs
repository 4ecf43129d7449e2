//! API key configuration, loaded through `core_config::FromEnv` like every
//! other config struct.

use core_config::{ConfigError, FromEnv, env_or_default};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Key used when `API_KEY` is not set.
pub const DEFAULT_API_KEY: &str = "your-secret-api-key";

/// Path prefix guarded by default.
pub const DEFAULT_PROTECTED_PREFIX: &str = "/api";

/// API key authentication configuration.
///
/// Loaded from environment variables:
/// - `API_KEY` (optional) - expected header value, defaults to [`DEFAULT_API_KEY`]
#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    /// Expected value of the `x-api-key` header
    pub key: String,
    /// Requests whose path equals this prefix or lives below it are checked
    pub protected_prefix: String,
}

impl ApiKeyConfig {
    /// Create a config guarding [`DEFAULT_PROTECTED_PREFIX`].
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` if the key is empty or blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            key,
            protected_prefix: DEFAULT_PROTECTED_PREFIX.to_string(),
        })
    }

    /// Whether `path` falls under the protected prefix.
    ///
    /// `/api` and `/api/products` are protected, `/api-docs` is not.
    pub fn protects(&self, path: &str) -> bool {
        match path.strip_prefix(self.protected_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Whether the presented header value matches the configured key.
    pub fn accepts(&self, presented: Option<&str>) -> bool {
        presented.is_some_and(|value| value == self.key)
    }
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_API_KEY.to_string(),
            protected_prefix: DEFAULT_PROTECTED_PREFIX.to_string(),
        }
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::new(env_or_default("API_KEY", DEFAULT_API_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_config_defaults() {
        temp_env::with_var_unset("API_KEY", || {
            let config = ApiKeyConfig::from_env().unwrap();
            assert_eq!(config.key, DEFAULT_API_KEY);
            assert_eq!(config.protected_prefix, "/api");
        });
    }

    #[test]
    fn test_api_key_config_from_env() {
        temp_env::with_var("API_KEY", Some("rotated-key"), || {
            assert_eq!(ApiKeyConfig::from_env().unwrap().key, "rotated-key");
        });
    }

    #[test]
    fn test_api_key_config_rejects_blank_key() {
        temp_env::with_var("API_KEY", Some("   "), || {
            let err = ApiKeyConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("API_KEY"));
        });
    }

    #[test]
    fn test_api_key_config_new_rejects_empty() {
        for key in ["", "  "] {
            let err = ApiKeyConfig::new(key).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { key: ref name, .. } if name == "API_KEY"));
        }
        assert_eq!(ApiKeyConfig::new("k").unwrap().key, "k");
    }

    #[test]
    fn test_protects_prefix_boundaries() {
        let config = ApiKeyConfig::default();
        assert!(config.protects("/api"));
        assert!(config.protects("/api/"));
        assert!(config.protects("/api/products/stats"));
        assert!(!config.protects("/"));
        assert!(!config.protects("/api-docs/openapi.json"));
        assert!(!config.protects("/health"));
    }

    #[test]
    fn test_accepts_exact_key_only() {
        let config = ApiKeyConfig::new("s3cret").unwrap();
        assert!(config.accepts(Some("s3cret")));
        assert!(!config.accepts(Some("S3CRET")));
        assert!(!config.accepts(Some("")));
        assert!(!config.accepts(None));
    }
}
