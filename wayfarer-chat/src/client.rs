//! Assistant proxy client struct and builder.

use wayfarer_types::{ApiError, ChatRequest, FragmentStream};

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::stream_reply;

/// Default name of the chat edge function.
const DEFAULT_FUNCTION: &str = "ai-chat";

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the publishable (anon) key.
pub const PUBLISHABLE_KEY_ENV: &str = "SUPABASE_PUBLISHABLE_KEY";
/// Environment variable overriding the edge function name.
pub const FUNCTION_ENV: &str = "WAYFARER_CHAT_FUNCTION";

/// Client for the assistant proxy endpoint.
///
/// # Example
///
/// ```no_run
/// use wayfarer_chat::ChatClient;
///
/// let client = ChatClient::new("https://project.supabase.co", "anon-key")
///     .function("ai-chat");
/// ```
#[derive(Clone)]
pub struct ChatClient {
    /// Backend base URL, without the `/functions/v1` suffix.
    pub(crate) base_url: String,
    /// Publishable key, sent as a bearer token.
    pub(crate) publishable_key: String,
    /// Edge function name.
    pub(crate) function: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl ChatClient {
    /// Create a client for the given backend.
    ///
    /// Default function: `ai-chat`.
    pub fn new(base_url: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            publishable_key: publishable_key.into(),
            function: DEFAULT_FUNCTION.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from `SUPABASE_URL` and `SUPABASE_PUBLISHABLE_KEY`.
    ///
    /// `WAYFARER_CHAT_FUNCTION` overrides the function name when set.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = require_env(BASE_URL_ENV)?;
        let key = require_env(PUBLISHABLE_KEY_ENV)?;
        let mut client = Self::new(base_url, key);
        if let Ok(function) = std::env::var(FUNCTION_ENV) {
            client = client.function(function);
        }
        Ok(client)
    }

    /// Override the edge function name.
    #[must_use]
    pub fn function(mut self, name: impl Into<String>) -> Self {
        self.function = name.into();
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, ...).
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Build the chat endpoint URL.
    pub(crate) fn endpoint_url(&self) -> String {
        format!(
            "{}/functions/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.function
        )
    }

    /// Send the transcript and stream back the assistant's reply.
    ///
    /// `429` maps to [`ApiError::RateLimit`], `402` to
    /// [`ApiError::PaymentRequired`], any other failure status to
    /// [`ApiError::Status`]. Nothing is retried.
    pub async fn stream_chat(&self, request: &ChatRequest) -> Result<FragmentStream, ApiError> {
        let url = self.endpoint_url();

        tracing::debug!(
            url = %url,
            messages = request.messages.len(),
            trip_id = ?request.trip_id,
            "sending chat request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.publishable_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(map_reqwest_error)?;
            tracing::debug!(status = status.as_u16(), "chat request rejected");
            return Err(map_http_status(status, &body));
        }

        Ok(stream_reply(response))
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .field("function", &self.function)
            .finish_non_exhaustive()
    }
}

fn require_env(name: &str) -> Result<String, ApiError> {
    std::env::var(name).map_err(|_| ApiError::Config(format!("{name} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_function_is_set() {
        let client = ChatClient::new("http://localhost", "key");
        assert_eq!(client.function, DEFAULT_FUNCTION);
    }

    #[test]
    fn builder_overrides_function() {
        let client = ChatClient::new("http://localhost", "key").function("travel-chat");
        assert_eq!(client.function, "travel-chat");
    }

    #[test]
    fn endpoint_url_includes_path() {
        let client = ChatClient::new("http://localhost:9999", "key");
        assert_eq!(
            client.endpoint_url(),
            "http://localhost:9999/functions/v1/ai-chat"
        );
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let client = ChatClient::new("http://localhost:9999/", "key");
        assert_eq!(
            client.endpoint_url(),
            "http://localhost:9999/functions/v1/ai-chat"
        );
    }

    #[test]
    fn publishable_key_is_stored_but_not_debug_printed() {
        let client = ChatClient::new("http://localhost", "anon-secret");
        assert_eq!(client.publishable_key, "anon-secret");
        assert!(!format!("{client:?}").contains("anon-secret"));
    }
}
