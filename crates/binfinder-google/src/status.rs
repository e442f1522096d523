//! Mapping of Google API failures onto `ProviderError`

use reqwest::StatusCode;

use binfinder::ProviderError;

/// Maps Platform reports most failures in a `status` field of a 200 response.
pub(crate) fn check_api_status(
    status: &str,
    error_message: Option<String>,
) -> Result<(), ProviderError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => {
            Err(ProviderError::RateLimited { retry_after: None })
        }
        other => Err(ProviderError::Rejected {
            status: other.to_string(),
            message: error_message,
        }),
    }
}

pub(crate) fn map_http_error(status: StatusCode, body: String) -> ProviderError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return ProviderError::RateLimited { retry_after: None };
    }

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    ProviderError::ApiError {
        status: status.as_u16(),
        message,
    }
}

pub(crate) fn request_failed(err: reqwest::Error) -> ProviderError {
    // Maps keys travel in the query string; keep them out of error text
    ProviderError::RequestFailed(err.without_url().to_string())
}
