pub mod cities;
pub mod error;
pub mod estimator;
pub mod form;
pub mod itinerary;
pub mod models;
pub mod planner;

pub use cities::{city_profile, cost_index_of, image_profile_of, normalize_city_key};
pub use error::{PlannerError, VALIDATION_NOTICE};
pub use estimator::estimate_costs;
pub use form::{title_case_city, TripForm, MAX_TRIP_DAYS};
pub use itinerary::{generate_itinerary, maps_link};
pub use models::*;
pub use planner::build_trip_plan;
