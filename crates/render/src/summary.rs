use atlas_core::TripPlan;
use chrono::Days;

use crate::dom::Element;
use crate::format::{format_currency, format_display_date, format_money};
use crate::regions::SummaryTargets;

pub fn render_summary(targets: SummaryTargets<'_>, plan: &TripPlan) {
    let request = &plan.request;
    targets.title.set_text(format!("Trip to {}", request.city));

    let mut parts = vec![format!("{} day itinerary", request.days)];
    let range = request.start_date.and_then(|start| {
        start
            .checked_add_days(Days::new(u64::from(request.days.saturating_sub(1))))
            .map(|end| (start, end))
    });
    if let Some((start, end)) = range {
        parts.push(format!(
            "{} – {}",
            format_display_date(start),
            format_display_date(end)
        ));
    }
    parts.push(format!("{} travel style", request.style.label()));
    targets.subtitle.set_text(parts.join(" · "));

    let budget_chip = if request.budget > 0.0 {
        (format!("Budget: {}", format_currency(request.budget)), true)
    } else {
        ("Budget not specified".to_string(), false)
    };

    let chips = [
        (format!("{} days", request.days), false),
        budget_chip,
        (format!("Est. total: {}", format_money(plan.cost.total)), true),
    ];

    targets.chips.clear();
    for (label, accent) in chips {
        let mut chip = Element::new("span").with_class("chip").with_text(label);
        if accent {
            chip.add_class("accent");
        }
        targets.chips.append(chip);
    }
}
