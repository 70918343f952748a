use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    Budget,
    #[default]
    Balanced,
    Premium,
}

impl TravelStyle {
    /// Unrecognised values fall back to `Balanced`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "budget" => Self::Budget,
            "premium" => Self::Premium,
            _ => Self::Balanced,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Balanced => "balanced",
            Self::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Balanced => "Balanced",
            Self::Premium => "Premium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Light,
    Easy,
    Full,
}

impl Pace {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity < 0.9 {
            Self::Light
        } else if intensity > 1.05 {
            Self::Full
        } else {
            Self::Easy
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Easy => "easy",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub city: String,
    pub days: u32,
    /// Zero means no budget was given.
    pub budget: f64,
    pub style: TravelStyle,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub stay_per_night: i64,
    pub food_per_day: i64,
    pub activities_per_day: i64,
    pub per_day: i64,
    pub core_total: i64,
    pub flights: i64,
    pub buffer: i64,
    pub total: i64,
    /// `None` when no budget was supplied.
    pub gap: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "tier", content = "amount")]
pub enum BudgetTier {
    Upgrade(f64),
    Aligned,
    OverBudget(f64),
    Unspecified,
}

impl CostBreakdown {
    pub fn budget_tier(&self) -> BudgetTier {
        match self.gap {
            Some(gap) if gap >= 200.0 => BudgetTier::Upgrade(gap),
            Some(gap) if gap >= 0.0 => BudgetTier::Aligned,
            Some(gap) => BudgetTier::OverBudget(gap.abs()),
            None => BudgetTier::Unspecified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time_of_day: TimeOfDay,
    pub title: String,
    pub map_url: String,
    pub intensity: f64,
}

impl TimeSlot {
    pub fn pace(&self) -> Pace {
        Pace::from_intensity(self.intensity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub label: String,
    pub calendar_date: Option<NaiveDate>,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityProfile {
    pub cost_index: f64,
    pub image_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProfile {
    pub query: String,
    pub url: String,
    pub label: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub request: TripRequest,
    pub cost: CostBreakdown,
    pub itinerary: Vec<DayPlan>,
}
