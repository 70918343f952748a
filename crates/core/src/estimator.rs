use crate::cities::cost_index_of;
use crate::models::{CostBreakdown, TravelStyle};

const BASE_STAY: f64 = 80.0;
const BASE_FOOD: f64 = 45.0;
const BASE_ACTIVITIES: f64 = 35.0;
const BASE_FLIGHTS: f64 = 180.0;
const BUFFER_RATE: f64 = 0.08;

struct StyleScale {
    stay: f64,
    food: f64,
    activities: f64,
    flights_adjustment: f64,
}

fn style_scale(style: TravelStyle) -> StyleScale {
    match style {
        TravelStyle::Budget => StyleScale {
            stay: 0.7,
            food: 0.8,
            activities: 0.75,
            flights_adjustment: -40.0,
        },
        TravelStyle::Premium => StyleScale {
            stay: 1.55,
            food: 1.35,
            activities: 1.5,
            flights_adjustment: 120.0,
        },
        TravelStyle::Balanced => StyleScale {
            stay: 1.0,
            food: 1.0,
            activities: 1.0,
            flights_adjustment: 0.0,
        },
    }
}

/// Each displayed amount is rounded on its own; `total` is rounded once from the
/// unrounded parts, so the displayed lines need not add up to it.
pub fn estimate_costs(city: &str, days: u32, budget: f64, style: TravelStyle) -> CostBreakdown {
    let idx = cost_index_of(city);
    let scale = style_scale(style);

    let stay = BASE_STAY * idx * scale.stay;
    let food = BASE_FOOD * idx * scale.food;
    let activities = BASE_ACTIVITIES * idx * scale.activities;

    let per_day = stay + food + activities;
    let core_total = per_day * f64::from(days);
    let flights = BASE_FLIGHTS * idx + scale.flights_adjustment;
    let buffer = core_total * BUFFER_RATE;

    let total = round_money(core_total + flights + buffer);
    let gap = (budget > 0.0).then(|| budget - total as f64);

    CostBreakdown {
        stay_per_night: round_money(stay),
        food_per_day: round_money(food),
        activities_per_day: round_money(activities),
        per_day: round_money(per_day),
        core_total: round_money(core_total),
        flights: round_money(flights),
        buffer: round_money(buffer),
        total,
        gap,
    }
}

fn round_money(amount: f64) -> i64 {
    amount.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetTier;

    #[test]
    fn single_balanced_day_in_unknown_city() {
        let cost = estimate_costs("Nowhere", 1, 0.0, TravelStyle::Balanced);
        assert_eq!(cost.per_day, 160);
        assert_eq!(cost.core_total, 160);
        assert_eq!(cost.flights, 180);
        assert_eq!(cost.buffer, 13);
        assert_eq!(cost.total, 353);
        assert_eq!(cost.gap, None);
        assert_eq!(cost.budget_tier(), BudgetTier::Unspecified);
    }

    #[test]
    fn budget_gap_tiers() {
        let upgrade = estimate_costs("Nowhere", 1, 600.0, TravelStyle::Balanced);
        assert_eq!(upgrade.gap, Some(247.0));
        assert_eq!(upgrade.budget_tier(), BudgetTier::Upgrade(247.0));

        let aligned = estimate_costs("Nowhere", 1, 360.0, TravelStyle::Balanced);
        assert_eq!(aligned.gap, Some(7.0));
        assert_eq!(aligned.budget_tier(), BudgetTier::Aligned);

        let over = estimate_costs("Nowhere", 1, 300.0, TravelStyle::Balanced);
        assert_eq!(over.gap, Some(-53.0));
        assert_eq!(over.budget_tier(), BudgetTier::OverBudget(53.0));
    }

    #[test]
    fn style_scales_categories_and_flights() {
        let budget = estimate_costs("Nowhere", 1, 0.0, TravelStyle::Budget);
        assert_eq!(budget.stay_per_night, 56);
        assert_eq!(budget.food_per_day, 36);
        assert_eq!(budget.activities_per_day, 26);
        assert_eq!(budget.flights, 140);

        let premium = estimate_costs("Nowhere", 1, 0.0, TravelStyle::Premium);
        assert_eq!(premium.stay_per_night, 124);
        assert_eq!(premium.food_per_day, 61);
        assert_eq!(premium.activities_per_day, 53);
        assert_eq!(premium.flights, 300);
    }

    #[test]
    fn city_index_scales_everything() {
        let cost = estimate_costs("new york", 2, 0.0, TravelStyle::Balanced);
        assert_eq!(cost.stay_per_night, 120);
        assert_eq!(cost.per_day, 240);
        assert_eq!(cost.core_total, 480);
        assert_eq!(cost.flights, 270);
        // 480 + 270 + 38.4
        assert_eq!(cost.total, 788);
    }

    #[test]
    fn total_grows_with_days() {
        for style in [TravelStyle::Budget, TravelStyle::Balanced, TravelStyle::Premium] {
            let mut previous = estimate_costs("Bali", 1, 0.0, style).total;
            for days in 2..=21 {
                let current = estimate_costs("Bali", days, 0.0, style).total;
                assert!(current > previous, "{style:?} day {days}");
                previous = current;
            }
        }
    }
}
