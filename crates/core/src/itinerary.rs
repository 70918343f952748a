use chrono::{Days, NaiveDate};

use crate::cities::escape_query;
use crate::models::{DayPlan, TimeOfDay, TimeSlot, TravelStyle};

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";
const FALLBACK_ACTIVITY: &str = "Explore at your own pace";

pub const ARRIVAL_LABEL: &str = "Arrival & first impressions";
pub const FAREWELL_LABEL: &str = "Farewell day";
pub const MIDDLE_LABEL: &str = "Explore deeper";

const MORNING_POOL: &[&str] = &[
    "Neighbourhood walking tour",
    "Local café breakfast & people-watching",
    "Iconic viewpoint or city panorama",
    "Old town photo walk",
];

const AFTERNOON_POOL: &[&str] = &[
    "Key museum or gallery",
    "Food market & street snacks",
    "Boat or river cruise (if available)",
    "Hidden-gem neighbourhood exploration",
];

const EVENING_POOL: &[&str] = &[
    "Sunset spot or rooftop view",
    "Dinner at a recommended local spot",
    "Night market or riverside walk",
    "Historic quarter by night",
];

impl TimeOfDay {
    fn pool(self) -> &'static [&'static str] {
        match self {
            Self::Morning => MORNING_POOL,
            Self::Afternoon => AFTERNOON_POOL,
            Self::Evening => EVENING_POOL,
        }
    }

    fn seed_offset(self) -> u64 {
        match self {
            Self::Morning => 1,
            Self::Afternoon => 3,
            Self::Evening => 5,
        }
    }
}

fn intensity_for(style: TravelStyle, time_of_day: TimeOfDay) -> f64 {
    match (style, time_of_day) {
        (TravelStyle::Budget, TimeOfDay::Morning) => 0.85,
        (TravelStyle::Budget, _) => 0.9,
        (TravelStyle::Premium, TimeOfDay::Afternoon) => 1.15,
        (TravelStyle::Premium, _) => 1.1,
        (TravelStyle::Balanced, _) => 1.0,
    }
}

/// Deterministic pick: `seed` modulo the pool length.
pub fn pick_activity(pool: &[&'static str], seed: u64) -> &'static str {
    if pool.is_empty() {
        return FALLBACK_ACTIVITY;
    }
    pool[(seed % pool.len() as u64) as usize]
}

pub fn maps_link(city: &str, activity: &str) -> String {
    format!(
        "{}{}",
        MAPS_SEARCH_BASE,
        escape_query(&format!("{} {}", city, activity))
    )
}

pub fn day_label(day: u32, days: u32) -> &'static str {
    if day == 1 {
        ARRIVAL_LABEL
    } else if day == days {
        FAREWELL_LABEL
    } else {
        MIDDLE_LABEL
    }
}

pub fn generate_itinerary(
    city: &str,
    days: u32,
    style: TravelStyle,
    start_date: Option<NaiveDate>,
) -> Vec<DayPlan> {
    (1..=days)
        .map(|day| {
            let slots = TimeOfDay::ALL
                .iter()
                .map(|&time_of_day| {
                    let title =
                        pick_activity(time_of_day.pool(), u64::from(day) + time_of_day.seed_offset());
                    TimeSlot {
                        time_of_day,
                        title: title.to_string(),
                        map_url: maps_link(city, title),
                        intensity: intensity_for(style, time_of_day),
                    }
                })
                .collect();

            DayPlan {
                day,
                label: day_label(day, days).to_string(),
                calendar_date: start_date
                    .and_then(|start| start.checked_add_days(Days::new(u64::from(day - 1)))),
                slots,
            }
        })
        .collect()
}
