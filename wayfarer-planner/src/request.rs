//! What the traveler asks the planner for.

use serde::{Deserialize, Serialize};
use wayfarer_types::PlannerError;

/// Longest itinerary the planner will request.
pub const MAX_DURATION_DAYS: u32 = 30;

/// How the traveler likes to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    /// Hostels and overland routes.
    Backpacker,
    /// Cost first.
    Budget,
    /// Mid-range comfort.
    Comfort,
    /// Top-end everything.
    Luxury,
    /// Travelling with children.
    Family,
    /// Travelling alone.
    Solo,
    /// Travelling as a couple.
    Couple,
}

impl TravelStyle {
    /// Identifier used in prompts and on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backpacker => "backpacker",
            Self::Budget => "budget",
            Self::Comfort => "comfort",
            Self::Luxury => "luxury",
            Self::Family => "family",
            Self::Solo => "solo",
            Self::Couple => "couple",
        }
    }
}

/// Things the traveler wants the itinerary to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    /// Culture and history.
    Culture,
    /// Food and cuisine.
    Food,
    /// Adventure activities.
    Adventure,
    /// Beach and relaxation.
    Beach,
    /// Nature and wildlife.
    Nature,
    /// Nightlife.
    Nightlife,
    /// Shopping.
    Shopping,
    /// Art and museums.
    Art,
}

impl Interest {
    /// Identifier used in prompts and on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Culture => "culture",
            Self::Food => "food",
            Self::Adventure => "adventure",
            Self::Beach => "beach",
            Self::Nature => "nature",
            Self::Nightlife => "nightlife",
            Self::Shopping => "shopping",
            Self::Art => "art",
        }
    }
}

/// Spending bracket for the whole trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    /// Roughly $500 to $1,500.
    Budget,
    /// Roughly $1,500 to $3,500.
    Moderate,
    /// Roughly $3,500 to $7,000.
    Premium,
    /// $7,000 and up.
    Luxury,
}

impl BudgetLevel {
    /// Identifier used in prompts and on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }
}

/// A request for an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// City, country or region.
    pub destination: String,
    /// Trip length in days.
    #[serde(rename = "duration")]
    pub duration_days: u32,
    /// Travel style.
    pub travel_style: TravelStyle,
    /// Interests, in the order the traveler picked them.
    pub interests: Vec<Interest>,
    /// Budget bracket.
    pub budget: BudgetLevel,
    /// Free-form special requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl TripRequest {
    /// Create a request with no interests and no notes.
    pub fn new(
        destination: impl Into<String>,
        duration_days: u32,
        travel_style: TravelStyle,
        budget: BudgetLevel,
    ) -> Self {
        Self {
            destination: destination.into(),
            duration_days,
            travel_style,
            interests: Vec::new(),
            budget,
            additional_notes: None,
        }
    }

    /// Add an interest. Duplicates are ignored.
    #[must_use]
    pub fn interest(mut self, interest: Interest) -> Self {
        if !self.interests.contains(&interest) {
            self.interests.push(interest);
        }
        self
    }

    /// Set special requests.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.additional_notes = Some(notes.into());
        self
    }

    /// Check the request is complete enough to plan.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.destination.trim().is_empty() {
            return Err(PlannerError::InvalidRequest("destination is empty".into()));
        }
        if !(1..=MAX_DURATION_DAYS).contains(&self.duration_days) {
            return Err(PlannerError::InvalidRequest(format!(
                "duration must be between 1 and {MAX_DURATION_DAYS} days, got {}",
                self.duration_days
            )));
        }
        if self.interests.is_empty() {
            return Err(PlannerError::InvalidRequest(
                "at least one interest is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest::new("Portugal", 7, TravelStyle::Comfort, BudgetLevel::Moderate)
            .interest(Interest::Food)
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn blank_destination_is_rejected() {
        let mut req = request();
        req.destination = "   ".into();
        assert!(matches!(req.validate(), Err(PlannerError::InvalidRequest(_))));
    }

    #[test]
    fn duration_bounds() {
        let mut req = request();
        req.duration_days = 0;
        assert!(req.validate().is_err());
        req.duration_days = MAX_DURATION_DAYS + 1;
        assert!(req.validate().is_err());
        req.duration_days = MAX_DURATION_DAYS;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn interests_are_required_and_deduplicated() {
        let req = TripRequest::new("Peru", 10, TravelStyle::Backpacker, BudgetLevel::Budget);
        assert!(req.validate().is_err());
        let req = req.interest(Interest::Nature).interest(Interest::Nature);
        assert_eq!(req.interests, vec![Interest::Nature]);
    }

    #[test]
    fn serializes_like_the_generator_endpoint_body() {
        let json = serde_json::to_value(request().notes("vegetarian")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "destination": "Portugal",
                "duration": 7,
                "travelStyle": "comfort",
                "interests": ["food"],
                "budget": "moderate",
                "additionalNotes": "vegetarian"
            })
        );
    }
}
