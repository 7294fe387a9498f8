//! Internal error helpers for mapping gateway failures to [`ApiError`].

use wayfarer_types::ApiError;

/// Map a non-success gateway status to an [`ApiError`].
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ApiError {
    match status.as_u16() {
        429 => ApiError::RateLimit,
        402 => ApiError::PaymentRequired,
        code => ApiError::Status {
            status: code,
            body: body.to_string(),
        },
    }
}

/// Map a [`reqwest::Error`] to an [`ApiError`].
///
/// Body decode failures are the gateway's fault, not the network's.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::InvalidResponse(err.to_string())
    } else {
        ApiError::Network(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_statuses() {
        assert!(matches!(
            map_http_status(reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            ApiError::RateLimit
        ));
        assert!(matches!(
            map_http_status(reqwest::StatusCode::PAYMENT_REQUIRED, ""),
            ApiError::PaymentRequired
        ));
        assert!(matches!(
            map_http_status(reqwest::StatusCode::BAD_GATEWAY, "upstream"),
            ApiError::Status { status: 502, .. }
        ));
    }
}
