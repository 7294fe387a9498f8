//! Itinerary planner client and builder.

use wayfarer_types::{ApiError, NewTrip, PlannerError, TripId, TripStatus, TripStore, UserId};

use crate::error::{map_http_status, map_reqwest_error};
use crate::mapping::{from_api_response, to_api_request};
use crate::plan::{TripPlan, extract_plan};
use crate::request::TripRequest;

/// Default gateway base URL.
const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";
/// Default model.
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Environment variable holding the gateway API key.
pub const API_KEY_ENV: &str = "LOVABLE_API_KEY";

/// A generated plan and the trip row it was saved as.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTrip {
    /// Id of the new trip.
    pub trip_id: TripId,
    /// The itinerary.
    pub plan: TripPlan,
}

/// Generates itineraries through an OpenAI-compatible completions gateway.
///
/// # Example
///
/// ```no_run
/// use wayfarer_planner::Planner;
///
/// let planner = Planner::new("gateway-key")
///     .model("google/gemini-2.5-pro")
///     .base_url("https://gateway.example.com");
/// ```
#[derive(Clone)]
pub struct Planner {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) client: reqwest::Client,
}

impl Planner {
    /// Create a planner with the default gateway and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a planner from `LOVABLE_API_KEY`.
    pub fn from_env() -> Result<Self, ApiError> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| ApiError::Config(format!("{API_KEY_ENV} is not set")))?;
        Ok(Self::new(key))
    }

    /// Override the gateway base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a preconfigured HTTP client.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub(crate) fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Generate an itinerary.
    ///
    /// The request is validated before anything is sent. Gateway failures map
    /// the same way as the chat client; an answer that is not a usable plan
    /// yields [`TripPlan::fallback`].
    pub async fn generate(&self, request: &TripRequest) -> Result<TripPlan, PlannerError> {
        request.validate()?;

        let url = self.completions_url();
        let body = to_api_request(request, &self.model);

        tracing::debug!(
            url = %url,
            model = %self.model,
            destination = %request.destination,
            days = request.duration_days,
            "generating itinerary"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(map_reqwest_error)?;
            tracing::debug!(status = status.as_u16(), "itinerary request rejected");
            return Err(map_http_status(status, &text).into());
        }

        let json: serde_json::Value = response.json().await.map_err(map_reqwest_error)?;
        let content = from_api_response(&json)?;
        let plan = extract_plan(&content, request);

        tracing::debug!(name = %plan.name, days = plan.days.len(), "itinerary generated");
        Ok(plan)
    }

    /// Generate an itinerary and record it as a new trip owned by `user`.
    ///
    /// The trip is stored as AI-generated with status
    /// [`TripStatus::Planning`]. A store failure is returned as
    /// [`PlannerError::Store`]; the generated plan is not kept in that case.
    pub async fn generate_and_save<T: TripStore + ?Sized>(
        &self,
        user: &UserId,
        request: &TripRequest,
        store: &T,
    ) -> Result<GeneratedTrip, PlannerError> {
        let plan = self.generate(request).await?;
        let description = Some(plan.description.clone()).filter(|d| !d.is_empty());
        let trip = store
            .insert_trip(NewTrip {
                user_id: user.clone(),
                name: plan.name.clone(),
                description,
                is_ai_generated: true,
                status: TripStatus::Planning,
            })
            .await?;

        tracing::debug!(trip_id = %trip.id, user_id = %user, "generated trip saved");
        Ok(GeneratedTrip {
            trip_id: trip.id,
            plan,
        })
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let planner = Planner::new("key");
        assert_eq!(planner.base_url, DEFAULT_BASE_URL);
        assert_eq!(planner.model, DEFAULT_MODEL);
        assert_eq!(
            planner.completions_url(),
            "https://ai.gateway.lovable.dev/v1/chat/completions"
        );
    }

    #[test]
    fn builder_overrides() {
        let planner = Planner::new("key")
            .base_url("http://localhost:8080/")
            .model("openai/gpt-5-mini");
        assert_eq!(planner.model, "openai/gpt-5-mini");
        assert_eq!(
            planner.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn api_key_is_not_debug_printed() {
        let planner = Planner::new("gateway-secret");
        assert!(!format!("{planner:?}").contains("gateway-secret"));
    }
}
