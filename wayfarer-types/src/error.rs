//! Error types for all wayfarer crates.

/// Errors from calls to the assistant proxy or the completions gateway.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Retryable errors
    /// Rate limited by the proxy (HTTP 429).
    #[error("rate limit exceeded")]
    RateLimit,
    /// Network-level error (connection reset, DNS failure, broken body, etc.).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    // Terminal errors
    /// AI credits are exhausted (HTTP 402).
    #[error("payment required: AI credits exhausted")]
    PaymentRequired,
    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, as text.
        body: String,
    },
    /// The service answered with something we could not interpret.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error is likely transient and the request can be retried.
    ///
    /// Nothing in wayfarer retries automatically; this is a hint for callers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimit | Self::Network(_))
    }

    /// Short, user-facing description of the failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RateLimit => "Rate limit exceeded. Please try again later.",
            Self::PaymentRequired => "AI credits exhausted. Please add funds to continue.",
            _ => "Failed to get response from AI.",
        }
    }
}

/// Errors from chat and trip storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from a chat session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The proxy call or the reply stream failed.
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    /// Persisting or loading messages failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from itinerary generation.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The completions call failed.
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    /// The trip request is not usable.
    #[error("invalid trip request: {0}")]
    InvalidRequest(String),
    /// Saving the generated trip failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
