use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{CityProfile, ImageProfile};

pub const DEFAULT_COST_INDEX: f64 = 1.0;

const IMAGE_SEARCH_BASE: &str = "https://source.unsplash.com/featured/?";

// Everything but the URI component unreserved marks.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// (key, cost index, image query)
const CITY_TABLE: &[(&str, f64, &str)] = &[
    ("paris", 1.35, "paris skyline sunset"),
    ("london", 1.4, "london city skyline dusk"),
    ("new york", 1.5, "new york city skyline night"),
    ("tokyo", 1.45, "tokyo city skyline night"),
    ("dubai", 1.3, "dubai marina skyline night"),
    ("singapore", 1.35, "singapore marina bay skyline night"),
    ("bali", 0.8, "bali rice terraces sunset"),
    ("bangkok", 0.8, "bangkok skyline temple sunset"),
    ("istanbul", 0.85, "istanbul skyline bosphorus sunset"),
    ("lisbon", 0.95, "lisbon city sunset viewpoint"),
    ("barcelona", 1.1, "barcelona skyline sagrada familia sunset"),
    ("rome", 1.15, "rome skyline colosseum sunset"),
];

/// Lookup key for the city table: trimmed and lowercased.
pub fn normalize_city_key(city: &str) -> String {
    city.trim().to_lowercase()
}

pub fn city_profile(city: &str) -> CityProfile {
    let key = normalize_city_key(city);
    match CITY_TABLE.iter().find(|(name, _, _)| *name == key) {
        Some((_, cost_index, query)) => CityProfile {
            cost_index: *cost_index,
            image_query: (*query).to_string(),
        },
        None => CityProfile {
            cost_index: DEFAULT_COST_INDEX,
            image_query: format!("{} city skyline", city.trim()),
        },
    }
}

pub fn cost_index_of(city: &str) -> f64 {
    city_profile(city).cost_index
}

pub fn image_profile_of(city: &str) -> ImageProfile {
    let city = city.trim();
    let query = city_profile(city).image_query;
    ImageProfile {
        url: format!("{}{}", IMAGE_SEARCH_BASE, escape_query(&query)),
        label: format!("{} · Inspiration photo", city),
        alt: format!("Inspiration photo of {}", city),
        query,
    }
}

pub(crate) fn escape_query(text: &str) -> String {
    utf8_percent_encode(text, QUERY_COMPONENT).to_string()
}
