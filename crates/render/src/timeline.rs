use atlas_core::{DayPlan, TimeSlot};

use crate::dom::Element;
use crate::format::format_display_date;

pub fn render_itinerary(timeline: &mut Element, plan: &[DayPlan]) {
    timeline.clear();
    for day in plan {
        timeline.append(day_block(day));
    }
}

fn day_block(day: &DayPlan) -> Element {
    let subtitle = match day.calendar_date {
        Some(date) => format!("{} · {}", format_display_date(date), day.label),
        None => day.label.clone(),
    };

    let header = Element::new("div")
        .with_class("day-header")
        .with_child(
            Element::new("div")
                .with_class("day-title")
                .with_child(Element::new("span").with_text(format!("Day {}", day.day)))
                .with_child(Element::new("span").with_text(subtitle)),
        )
        .with_child(
            Element::new("span")
                .with_class("day-budget")
                .with_text("Flexible day"),
        );

    let slots = day
        .slots
        .iter()
        .fold(Element::new("div").with_class("slot-list"), |list, slot| {
            list.with_child(slot_row(slot))
        });

    Element::new("article")
        .with_class("day-block")
        .with_child(header)
        .with_child(slots)
}

fn slot_row(slot: &TimeSlot) -> Element {
    let meta = Element::new("div")
        .with_class("slot-meta")
        .with_child(
            Element::new("span")
                .with_class("slot-tag")
                .with_text(format!("Pace: {}", slot.pace().as_str())),
        )
        .with_child(
            Element::new("a")
                .with_class("slot-link")
                .with_attr("href", slot.map_url.as_str())
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer")
                .with_text("View on Maps"),
        );

    Element::new("div")
        .with_class("slot")
        .with_child(
            Element::new("div")
                .with_class("slot-time")
                .with_text(slot.time_of_day.label()),
        )
        .with_child(
            Element::new("div")
                .with_class("slot-title")
                .with_text(slot.title.as_str()),
        )
        .with_child(meta)
}
