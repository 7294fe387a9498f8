//! Generated itineraries and extraction from model output.

use serde::{Deserialize, Serialize};

use crate::request::TripRequest;

/// A generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Catchy trip name.
    pub name: String,
    /// Two or three sentence summary.
    #[serde(default)]
    pub description: String,
    /// Day-by-day breakdown.
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

/// One day of a [`TripPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    /// Where the traveler spends the day.
    #[serde(default)]
    pub city: String,
    /// Activities, in order.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name.
    pub name: String,
    /// Duration in hours.
    #[serde(default)]
    pub duration: f64,
    /// Cost in US dollars.
    #[serde(default)]
    pub cost: f64,
    /// Short description.
    #[serde(default)]
    pub description: String,
}

impl TripPlan {
    /// Plan used when the model's answer cannot be parsed.
    #[must_use]
    pub fn fallback(request: &TripRequest) -> Self {
        let destination = request.destination.trim();
        Self {
            name: format!("{destination} Adventure"),
            description: format!("A {}-day trip to {destination}", request.duration_days),
            days: Vec::new(),
        }
    }

    /// Sum of all activity costs.
    #[must_use]
    pub fn estimated_cost(&self) -> f64 {
        self.days
            .iter()
            .flat_map(|day| &day.activities)
            .map(|activity| activity.cost)
            .sum()
    }
}

/// Extract a [`TripPlan`] from the model's answer.
///
/// Takes everything from the first `{` to the last `}`, which strips
/// markdown fences and chatter around the object. Falls back to
/// [`TripPlan::fallback`] when no object parses.
#[must_use]
pub fn extract_plan(content: &str, request: &TripRequest) -> TripPlan {
    let object = match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => {
            tracing::warn!(len = content.len(), "no JSON object in itinerary response");
            return TripPlan::fallback(request);
        }
    };

    match serde_json::from_str::<TripPlan>(object) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable itinerary, using fallback plan");
            TripPlan::fallback(request)
        }
    }
}
