use crate::estimator::estimate_costs;
use crate::itinerary::generate_itinerary;
use crate::models::{TripPlan, TripRequest};

pub fn build_trip_plan(request: TripRequest) -> TripPlan {
    let cost = estimate_costs(&request.city, request.days, request.budget, request.style);
    let itinerary = generate_itinerary(
        &request.city,
        request.days,
        request.style,
        request.start_date,
    );

    TripPlan {
        request,
        cost,
        itinerary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::TripForm;

    #[test]
    fn plan_combines_estimate_and_itinerary() {
        let request = TripForm {
            city: "barcelona".to_string(),
            days: "3".to_string(),
            budget: "1500".to_string(),
            style: "balanced".to_string(),
            start_date: String::new(),
        }
        .to_request()
        .unwrap();

        let plan = build_trip_plan(request);
        assert_eq!(plan.request.city, "Barcelona");
        assert_eq!(plan.itinerary.len(), 3);
        assert_eq!(plan.cost.stay_per_night, 88);
        assert!(plan.itinerary[0].slots[0]
            .map_url
            .contains("query=Barcelona%20Iconic%20viewpoint"));

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["request"]["style"], "balanced");
        assert!(json["request"]["start_date"].is_null());
    }
}
