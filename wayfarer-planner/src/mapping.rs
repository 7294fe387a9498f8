//! Request/response mapping for the OpenAI-compatible completions gateway.

use wayfarer_types::{ApiError, ChatMessage};

use crate::prompt::{SYSTEM_PROMPT, build_prompt};
use crate::request::TripRequest;

/// Build the non-streaming completions body for an itinerary request.
#[must_use]
pub(crate) fn to_api_request(request: &TripRequest, model: &str) -> serde_json::Value {
    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_prompt(request)),
    ];
    serde_json::json!({
        "model": model,
        "messages": messages,
    })
}

/// Pull the assistant text out of a completions response.
///
/// A missing or null `content` yields an empty string so the caller can fall
/// back to a default plan.
pub(crate) fn from_api_response(body: &serde_json::Value) -> Result<String, ApiError> {
    let choice = body["choices"]
        .as_array()
        .and_then(|arr| arr.first())
        .ok_or_else(|| ApiError::InvalidResponse("missing 'choices' array in response".into()))?;

    Ok(choice["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string())
}
