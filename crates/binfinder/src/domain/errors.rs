//! Domain Errors
//!
//! Error types for domain operations.
//!
//! `DomainError` is what the use cases return. `ProviderError` is what a
//! provider port returns; it is cheap to clone so a per-category failure can be
//! kept on the result set while the search moves on.

use std::time::Duration;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Missing or invalid credential or setting. Raised before any network call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Geocoding produced no candidates for the address.
    #[error("Could not find coordinates for address: {address}")]
    NotFound { address: String },

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(address: T) -> Self {
        Self::NotFound {
            address: address.as_ref().to_string(),
        }
    }

    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// True for errors that can only be fixed by changing configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, DomainError::Configuration(_))
    }
}

/// Failure of a single call to an external provider
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited{}", retry_suffix(.retry_after))]
    RateLimited { retry_after: Option<Duration> },

    /// The provider answered but refused the request (bad key, quota, bad input).
    #[error("Request rejected ({status}){}", message_suffix(.message))]
    Rejected {
        status: String,
        message: Option<String>,
    },

    /// The model answered, but not in the DECISION / REASON format.
    /// `raw` keeps the full answer so callers can still show it.
    #[error("Unrecognized model answer: {reason}")]
    Unparsed { reason: String, raw: String },
}

fn retry_suffix(retry_after: &Option<Duration>) -> String {
    retry_after
        .map(|d| format!(", retry after {d:?}"))
        .unwrap_or_default()
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_converts_into_domain_error() {
        let err: DomainError = ProviderError::RequestFailed("timeout".to_string()).into();
        assert!(matches!(err, DomainError::Provider(_)));
        assert_eq!(err.to_string(), "Provider error: Request failed: timeout");
    }

    #[test]
    fn test_not_found_message_names_address() {
        let err = DomainError::not_found("Nowhere, XX");
        assert_eq!(
            err.to_string(),
            "Could not find coordinates for address: Nowhere, XX"
        );
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_rate_limited_display() {
        let plain = ProviderError::RateLimited { retry_after: None };
        assert_eq!(plain.to_string(), "Rate limited");

        let timed = ProviderError::RateLimited {
            retry_after: Some(Duration::from_secs(2)),
        };
        assert_eq!(timed.to_string(), "Rate limited, retry after 2s");
    }

    #[test]
    fn test_rejected_display() {
        let err = ProviderError::Rejected {
            status: "REQUEST_DENIED".to_string(),
            message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request rejected (REQUEST_DENIED): The provided API key is invalid."
        );

        let bare = ProviderError::Rejected {
            status: "UNKNOWN_ERROR".to_string(),
            message: None,
        };
        assert_eq!(bare.to_string(), "Request rejected (UNKNOWN_ERROR)");
    }

    #[test]
    fn test_unparsed_display_omits_raw_answer() {
        let err = ProviderError::Unparsed {
            reason: "no DECISION line".to_string(),
            raw: "It is compost.".to_string(),
        };
        assert_eq!(err.to_string(), "Unrecognized model answer: no DECISION line");
    }
}
