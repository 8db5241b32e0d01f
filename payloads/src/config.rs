use secrecy::{ExposeSecret, SecretString};

/// Connection settings for the hosted REST backend.
///
/// Keys are injected here rather than compiled into each call site.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL without trailing slash, e.g. `https://project.example.co`
    pub base_url: String,
    /// Public API key sent as the `apikey` header
    pub api_key: SecretString,
    /// Access token of the signed-in user. The API key is used as the bearer
    /// token when absent.
    pub access_token: Option<SecretString>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key.into()),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Read `BACKEND_URL`, `BACKEND_API_KEY` and the optional
    /// `BACKEND_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env::var;

        let base_url =
            var("BACKEND_URL").map_err(|_| ConfigError::Missing("BACKEND_URL"))?;
        let api_key = var("BACKEND_API_KEY")
            .map_err(|_| ConfigError::Missing("BACKEND_API_KEY"))?;
        let config = Self::new(base_url, api_key);
        Ok(match var("BACKEND_ACCESS_TOKEN") {
            Ok(token) if !token.is_empty() => config.with_access_token(token),
            _ => config,
        })
    }

    pub(crate) fn bearer(&self) -> &str {
        self.access_token
            .as_ref()
            .unwrap_or(&self.api_key)
            .expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_falls_back_to_api_key() {
        let config = BackendConfig::new("http://localhost:8000/", "anon");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.bearer(), "anon");

        let config = config.with_access_token("user-token");
        assert_eq!(config.bearer(), "user-token");
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn from_env_requires_url_and_key() {
        unsafe {
            std::env::remove_var("BACKEND_URL");
            std::env::set_var("BACKEND_API_KEY", "anon");
            std::env::set_var("BACKEND_ACCESS_TOKEN", "");
        }
        assert!(matches!(
            BackendConfig::from_env(),
            Err(ConfigError::Missing("BACKEND_URL"))
        ));

        unsafe { std::env::set_var("BACKEND_URL", "https://project.example.co/") };
        let config = BackendConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://project.example.co");
        assert!(config.access_token.is_none());
        assert_eq!(config.bearer(), "anon");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config =
            BackendConfig::new("http://localhost", "anon").with_access_token("t0k3n");
        let debug = format!("{config:?}");
        assert!(!debug.contains("anon"));
        assert!(!debug.contains("t0k3n"));
    }
}
