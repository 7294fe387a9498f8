//! Prompt construction.

use crate::request::TripRequest;

/// System instruction sent with every itinerary request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert travel planner. Respond only with valid JSON.";

const RESPONSE_SHAPE: &str = r#"{
  "name": "Trip Name",
  "description": "Brief description",
  "days": [
    {
      "day": 1,
      "city": "City Name",
      "activities": [
        { "name": "Activity", "duration": 2, "cost": 25, "description": "Brief desc" }
      ]
    }
  ]
}"#;

/// Build the user prompt for an itinerary request.
#[must_use]
pub fn build_prompt(request: &TripRequest) -> String {
    let interests: Vec<&str> = request.interests.iter().map(|i| i.as_str()).collect();
    let notes = match request.additional_notes.as_deref().map(str::trim) {
        Some(notes) if !notes.is_empty() => format!("Special Requests: {notes}"),
        _ => String::new(),
    };

    format!(
        "Create a detailed {days}-day travel itinerary for {destination}.\n\
         \n\
         Travel Style: {style}\n\
         Interests: {interests}\n\
         Budget Level: {budget}\n\
         {notes}\n\
         \n\
         Please provide:\n\
         1. A catchy trip name\n\
         2. A brief description (2-3 sentences)\n\
         3. Day-by-day breakdown with activities\n\
         \n\
         Format your response as JSON:\n\
         {RESPONSE_SHAPE}",
        days = request.duration_days,
        destination = request.destination.trim(),
        style = request.travel_style.as_str(),
        interests = interests.join(", "),
        budget = request.budget.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{BudgetLevel, Interest, TravelStyle};

    fn request() -> TripRequest {
        TripRequest::new(" Japan ", 7, TravelStyle::Couple, BudgetLevel::Premium)
            .interest(Interest::Food)
            .interest(Interest::Art)
    }

    #[test]
    fn prompt_includes_preferences() {
        let prompt = build_prompt(&request());
        assert!(prompt.starts_with("Create a detailed 7-day travel itinerary for Japan.\n\n"));
        assert!(prompt.contains("Travel Style: couple\n"));
        assert!(prompt.contains("Interests: food, art\n"));
        assert!(prompt.contains("Budget Level: premium\n"));
        assert!(prompt.contains("3. Day-by-day breakdown with activities"));
        assert!(prompt.ends_with("]\n}"));
    }

    #[test]
    fn notes_are_included_when_present() {
        let prompt = build_prompt(&request().notes("no early flights"));
        assert!(prompt.contains("Special Requests: no early flights\n"));
    }

    #[test]
    fn blank_notes_are_omitted() {
        let prompt = build_prompt(&request().notes("  "));
        assert!(!prompt.contains("Special Requests"));
    }

    #[test]
    fn response_shape_is_valid_json() {
        let shape: serde_json::Value = serde_json::from_str(RESPONSE_SHAPE).unwrap();
        assert!(shape["days"][0]["activities"].is_array());
    }
}
