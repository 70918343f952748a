use thiserror::Error;

use crate::form::MAX_TRIP_DAYS;

pub const VALIDATION_NOTICE: &str = "Please provide at least a city and a valid number of days.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("city is required")]
    MissingCity,
    #[error("days must be a whole number from 1 to {max}, got {0:?}", max = MAX_TRIP_DAYS)]
    InvalidDays(String),
    #[error("unknown trip template: {0}")]
    UnknownTemplate(String),
}

impl PlannerError {
    /// Message shown to the person filling in the form.
    pub fn notice(&self) -> String {
        match self {
            Self::MissingCity | Self::InvalidDays(_) => VALIDATION_NOTICE.to_string(),
            Self::UnknownTemplate(id) => format!("No trip template named \"{}\".", id),
        }
    }
}
