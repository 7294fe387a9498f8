//! Internal error helpers for mapping HTTP/reqwest errors to [`ApiError`].

use wayfarer_types::ApiError;

/// Map a non-success status from the proxy to an [`ApiError`].
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
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_429_to_rate_limit() {
        let err = map_http_status(reqwest::StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, ApiError::RateLimit));
        assert!(err.is_retryable());
    }

    #[test]
    fn map_402_to_payment_required() {
        let err = map_http_status(reqwest::StatusCode::PAYMENT_REQUIRED, "no credits");
        assert!(matches!(err, ApiError::PaymentRequired));
        assert!(!err.is_retryable());
    }

    #[test]
    fn map_500_to_status() {
        let err = map_http_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "AI error");
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "AI error");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn map_401_to_status() {
        let err = map_http_status(reqwest::StatusCode::UNAUTHORIZED, "{\"error\":\"Unauthorized\"}");
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
    }
}
