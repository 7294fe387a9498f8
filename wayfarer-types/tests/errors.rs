use wayfarer_types::*;

#[test]
fn api_error_display() {
    let err = ApiError::Status {
        status: 500,
        body: "boom".into(),
    };
    assert_eq!(err.to_string(), "HTTP 500: boom");
    assert!(ApiError::RateLimit.to_string().contains("rate limit"));
}

#[test]
fn api_error_is_retryable() {
    assert!(ApiError::RateLimit.is_retryable());
    assert!(
        ApiError::Network(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset"
        )))
        .is_retryable()
    );
    assert!(!ApiError::PaymentRequired.is_retryable());
    assert!(!ApiError::InvalidResponse("bad".into()).is_retryable());
    assert!(!ApiError::Config("missing".into()).is_retryable());
}

#[test]
fn api_error_user_messages_are_categorized() {
    assert_eq!(
        ApiError::RateLimit.user_message(),
        "Rate limit exceeded. Please try again later."
    );
    assert_eq!(
        ApiError::PaymentRequired.user_message(),
        "AI credits exhausted. Please add funds to continue."
    );
    let generic = ApiError::Status {
        status: 503,
        body: String::new(),
    };
    assert_eq!(generic.user_message(), "Failed to get response from AI.");
}

#[test]
fn session_error_from_api() {
    let se: SessionError = ApiError::PaymentRequired.into();
    assert!(se.to_string().contains("api error"));
}

#[test]
fn session_error_from_store() {
    let backend = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "row level security");
    let se: SessionError = StoreError::Backend(Box::new(backend)).into();
    assert!(se.to_string().contains("store error"));
    assert!(se.to_string().contains("row level security"));
}

#[test]
fn planner_error_from_api() {
    let pe: PlannerError = ApiError::RateLimit.into();
    assert!(matches!(pe, PlannerError::Api(ApiError::RateLimit)));
}

#[test]
fn planner_error_from_store() {
    let backend = std::io::Error::other("insert rejected");
    let pe: PlannerError = StoreError::Backend(Box::new(backend)).into();
    assert!(matches!(pe, PlannerError::Store(_)));
    assert_eq!(pe.to_string(), "store error: insert rejected");
}
