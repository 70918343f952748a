use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::PlannerError;
use crate::models::{TravelStyle, TripRequest};

/// Longest trip the planner lays out day by day.
pub const MAX_TRIP_DAYS: u32 = 365;

/// Raw field values as the planner form submits them. JSON clients may send
/// `days` and `budget` as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripForm {
    pub city: String,
    #[serde(deserialize_with = "string_or_number")]
    pub days: String,
    #[serde(deserialize_with = "string_or_number")]
    pub budget: String,
    pub style: String,
    #[serde(alias = "start-date")]
    pub start_date: String,
}

impl TripForm {
    pub fn to_request(&self) -> Result<TripRequest, PlannerError> {
        let city = self.city.trim();
        if city.is_empty() {
            return Err(PlannerError::MissingCity);
        }

        let days =
            parse_days(&self.days).ok_or_else(|| PlannerError::InvalidDays(self.days.clone()))?;

        Ok(TripRequest {
            city: title_case_city(city),
            days,
            budget: parse_budget(&self.budget),
            style: TravelStyle::parse_or_default(&self.style),
            start_date: parse_start_date(&self.start_date),
        })
    }
}

fn parse_number(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

fn parse_days(value: &str) -> Option<u32> {
    let days = parse_number(value);
    if days < 1.0 || days.fract() != 0.0 || days > f64::from(MAX_TRIP_DAYS) {
        return None;
    }
    Some(days as u32)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldVisitor;

    impl<'de> Visitor<'de> for FieldVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(FieldVisitor)
}

/// Anything unusable counts as "no budget".
pub fn parse_budget(value: &str) -> f64 {
    parse_number(value).max(0.0)
}

pub fn parse_start_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `"  new  YORK "` becomes `"New York"`.
pub fn title_case_city(city: &str) -> String {
    city.split_whitespace()
        .map(|word| {
            let mut graphemes = word.graphemes(true);
            match graphemes.next() {
                Some(first) => {
                    let rest: String = graphemes.collect();
                    format!("{}{}", first.to_uppercase(), rest.to_lowercase())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(city: &str, days: &str) -> TripForm {
        TripForm {
            city: city.to_string(),
            days: days.to_string(),
            ..TripForm::default()
        }
    }

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case_city("  new york  "), "New York");
        assert_eq!(title_case_city("rIO de   JANEIRO"), "Rio De Janeiro");
        assert_eq!(title_case_city("évora"), "Évora");
    }

    #[test]
    fn rejects_blank_city() {
        assert_eq!(form("   ", "3").to_request(), Err(PlannerError::MissingCity));
    }

    #[test]
    fn rejects_unusable_days() {
        for days in ["", "0", "-2", "abc", "2.5", "NaN", "366", "4294967295", "1e12"] {
            let result = form("Paris", days).to_request();
            assert!(
                matches!(result, Err(PlannerError::InvalidDays(_))),
                "days={days:?}"
            );
        }
    }

    #[test]
    fn accepts_longest_trip() {
        let request = form("Paris", "365").to_request().unwrap();
        assert_eq!(request.days, MAX_TRIP_DAYS);
    }

    #[test]
    fn lenient_fields_degrade_to_defaults() {
        let request = TripForm {
            city: "lisbon".to_string(),
            days: " 4 ".to_string(),
            budget: "lots".to_string(),
            style: "luxury".to_string(),
            start_date: "2026-02-30".to_string(),
        }
        .to_request()
        .unwrap();

        assert_eq!(request.city, "Lisbon");
        assert_eq!(request.days, 4);
        assert_eq!(request.budget, 0.0);
        assert_eq!(request.style, TravelStyle::Balanced);
        assert_eq!(request.start_date, None);
    }

    #[test]
    fn parses_full_submission() {
        let request = TripForm {
            city: "tokyo".to_string(),
            days: "7".to_string(),
            budget: "4200.50".to_string(),
            style: "premium".to_string(),
            start_date: "2026-11-03".to_string(),
        }
        .to_request()
        .unwrap();

        assert_eq!(request.budget, 4200.5);
        assert_eq!(request.style, TravelStyle::Premium);
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2026, 11, 3));
    }

    #[test]
    fn negative_budget_is_unspecified() {
        assert_eq!(parse_budget("-50"), 0.0);
    }

    #[test]
    fn accepts_hyphenated_date_field() {
        let parsed: TripForm =
            serde_json::from_str(r#"{"city":"Rome","days":"2","start-date":"2026-05-01"}"#)
                .unwrap();
        assert_eq!(parsed.start_date, "2026-05-01");
        assert_eq!(parsed.budget, "");
    }

    #[test]
    fn json_numbers_are_read_as_field_text() {
        let parsed: TripForm =
            serde_json::from_str(r#"{"city":"Rome","days":3,"budget":1250.5}"#).unwrap();
        assert_eq!(parsed.days, "3");
        assert_eq!(parsed.budget, "1250.5");
        assert_eq!(parsed.to_request().unwrap().days, 3);

        let parsed: TripForm =
            serde_json::from_str(r#"{"city":"Rome","days":null,"budget":-20}"#).unwrap();
        assert_eq!(parsed.days, "");
        assert_eq!(parsed.budget, "-20");
    }
}
