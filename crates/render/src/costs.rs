use atlas_core::{BudgetTier, CostBreakdown};

use crate::dom::Element;
use crate::format::{format_currency, format_money};
use crate::regions::CostTargets;

pub fn cost_rows(days: u32, cost: &CostBreakdown) -> Vec<(String, String)> {
    vec![
        ("Stay (per night)".to_string(), format_money(cost.stay_per_night)),
        ("Food (per day)".to_string(), format_money(cost.food_per_day)),
        (
            "Activities (per day)".to_string(),
            format_money(cost.activities_per_day),
        ),
        (format!("Core trip (x{})", days), format_money(cost.core_total)),
        ("Flights (est.)".to_string(), format_money(cost.flights)),
        ("Buffer & extras".to_string(), format_money(cost.buffer)),
        ("Total estimate".to_string(), format_money(cost.total)),
    ]
}

pub fn highlight_text(tier: BudgetTier) -> String {
    match tier {
        BudgetTier::Upgrade(gap) => format!(
            "Your budget is about {} above this estimate – you could upgrade a hotel night or add a special experience.",
            format_currency(gap)
        ),
        BudgetTier::Aligned => {
            "Your budget is roughly aligned with this plan. Always keep a small buffer for surprises."
                .to_string()
        }
        BudgetTier::OverBudget(overage) => format!(
            "This plan is about {} above your budget. Consider removing a paid activity or shortening the trip by a day.",
            format_currency(overage)
        ),
        BudgetTier::Unspecified => {
            "Adjust the sliders and budget to see how the estimate moves.".to_string()
        }
    }
}

pub fn render_costs(targets: CostTargets<'_>, days: u32, cost: &CostBreakdown) {
    targets.breakdown.clear();
    for (label, value) in cost_rows(days, cost) {
        targets.breakdown.append(Element::new("dt").with_text(label));
        targets.breakdown.append(Element::new("dd").with_text(value));
    }

    targets.highlight.set_text(highlight_text(cost.budget_tier()));
}
