//! AI itinerary generation.
//!
//! A [`TripRequest`] captures what the traveler asked for. [`Planner`]
//! turns it into a prompt, sends it to an OpenAI-compatible completions
//! gateway and extracts a [`TripPlan`] from the model's answer. Model output
//! that is not valid JSON degrades to a minimal plan instead of failing.
//! [`Planner::generate_and_save`] also records the result through a
//! [`TripStore`].
//!
//! ```no_run
//! use wayfarer_planner::{BudgetLevel, Interest, Planner, TravelStyle, TripRequest};
//!
//! # async fn run() -> Result<(), wayfarer_planner::PlannerError> {
//! let planner = Planner::new("gateway-key");
//! let request = TripRequest::new("Japan", 7, TravelStyle::Couple, BudgetLevel::Moderate)
//!     .interest(Interest::Food)
//!     .interest(Interest::Culture);
//! let plan = planner.generate(&request).await?;
//! println!("{}: {} days", plan.name, plan.days.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub(crate) mod error;
pub(crate) mod mapping;
pub mod plan;
pub mod prompt;
pub mod request;

pub use client::{API_KEY_ENV, GeneratedTrip, Planner};
pub use plan::{Activity, DayPlan, TripPlan, extract_plan};
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use request::{BudgetLevel, Interest, MAX_DURATION_DAYS, TravelStyle, TripRequest};

// Re-export wayfarer-types for convenience
pub use wayfarer_types::{ApiError, PlannerError, TripStore};
