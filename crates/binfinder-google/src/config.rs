//! Google API configuration

use std::time::Duration;

use binfinder::DomainError;

pub const MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
pub const GEMINI_API_KEY_ENV: &str = "GOOGLE_API_KEY";

const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Google Maps web services
#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    /// Maps Platform API key
    pub api_key: String,
    /// Service root, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl GoogleMapsConfig {
    /// Create a configuration with just an API key (surrounding whitespace is dropped)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            base_url: DEFAULT_MAPS_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the API key from `GOOGLE_MAPS_API_KEY`
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_key(std::env::var(MAPS_API_KEY_ENV).ok(), MAPS_API_KEY_ENV)
    }

    fn from_key(key: Option<String>, source: &str) -> Result<Self, DomainError> {
        let key = require_key(key, source)?;
        Ok(Self::new(key))
    }

    /// Point the client at a different host (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        require_key(Some(self.api_key.clone()), "Google Maps API key").map(|_| ())
    }
}

/// Configuration for the Gemini generative model API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the API key from `GOOGLE_API_KEY`
    pub fn from_env() -> Result<Self, DomainError> {
        let key = require_key(std::env::var(GEMINI_API_KEY_ENV).ok(), GEMINI_API_KEY_ENV)?;
        Ok(Self::new(key))
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        require_key(Some(self.api_key.clone()), "Gemini API key")?;
        if self.model.trim().is_empty() {
            return Err(DomainError::configuration("Gemini model name is empty"));
        }
        Ok(())
    }
}

fn require_key(key: Option<String>, source: &str) -> Result<String, DomainError> {
    match key {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(DomainError::Configuration(format!("{} not set", source))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_key_is_configuration_error() {
        assert!(GoogleMapsConfig::from_key(None, MAPS_API_KEY_ENV)
            .unwrap_err()
            .is_configuration());
        assert!(GoogleMapsConfig::from_key(Some("  ".to_string()), MAPS_API_KEY_ENV)
            .unwrap_err()
            .is_configuration());
    }

    #[test]
    fn test_key_is_trimmed() {
        let config = GoogleMapsConfig::from_key(Some(" abc123\n".to_string()), "test").unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, "https://maps.googleapis.com");

        assert_eq!(GoogleMapsConfig::new("abc123 \n").api_key, "abc123");
        assert_eq!(GeminiConfig::new("\tgem-key ").api_key, "gem-key");
    }

    #[test]
    fn test_base_url_drops_trailing_slash() {
        let config = GoogleMapsConfig::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_gemini_validation() {
        assert!(GeminiConfig::new("key").validate().is_ok());
        assert!(GeminiConfig::new("").validate().unwrap_err().is_configuration());
        assert!(GeminiConfig::new("key")
            .with_model(" ")
            .validate()
            .unwrap_err()
            .is_configuration());
        assert_eq!(GeminiConfig::new("key").model, "gemini-2.0-flash");
    }
}
