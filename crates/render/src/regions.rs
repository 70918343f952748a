use serde::Serialize;

use crate::dom::Element;

/// Every region the results area is made of. Render functions never reach for
/// these directly; callers lend them out through the `*Targets` borrows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPage {
    pub results_card: Element,
    pub results_empty: Element,
    pub results: Element,
    pub summary_title: Element,
    pub summary_subtitle: Element,
    pub summary_chips: Element,
    pub cost_breakdown: Element,
    pub cost_highlight: Element,
    pub itinerary_timeline: Element,
    pub city_hero: Element,
    pub city_image: Element,
    pub city_image_label: Element,
}

pub struct SummaryTargets<'a> {
    pub title: &'a mut Element,
    pub subtitle: &'a mut Element,
    pub chips: &'a mut Element,
}

pub struct CostTargets<'a> {
    pub breakdown: &'a mut Element,
    pub highlight: &'a mut Element,
}

pub struct HeroTargets<'a> {
    pub hero: &'a mut Element,
    pub image: &'a mut Element,
    pub label: &'a mut Element,
}

pub struct RevealTargets<'a> {
    pub card: &'a mut Element,
    pub empty: &'a mut Element,
    pub results: &'a mut Element,
}

impl Default for ResultsPage {
    fn default() -> Self {
        Self {
            results_card: Element::region("section", "results-card").with_class("card"),
            results_empty: Element::region("p", "results-empty")
                .with_class("results-empty")
                .with_text("Fill in the form to see your estimate and day-by-day plan."),
            results: Element::region("div", "results").hidden(),
            summary_title: Element::region("h2", "summary-title"),
            summary_subtitle: Element::region("p", "summary-subtitle"),
            summary_chips: Element::region("div", "summary-chips").with_class("chips"),
            cost_breakdown: Element::region("dl", "cost-breakdown"),
            cost_highlight: Element::region("p", "cost-highlight").with_class("cost-highlight"),
            itinerary_timeline: Element::region("div", "itinerary-timeline"),
            city_hero: Element::region("figure", "city-hero").with_class("city-hero").hidden(),
            city_image: Element::region("img", "city-image"),
            city_image_label: Element::region("figcaption", "city-image-label"),
        }
    }
}

impl ResultsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary_targets(&mut self) -> SummaryTargets<'_> {
        SummaryTargets {
            title: &mut self.summary_title,
            subtitle: &mut self.summary_subtitle,
            chips: &mut self.summary_chips,
        }
    }

    pub fn cost_targets(&mut self) -> CostTargets<'_> {
        CostTargets {
            breakdown: &mut self.cost_breakdown,
            highlight: &mut self.cost_highlight,
        }
    }

    pub fn hero_targets(&mut self) -> HeroTargets<'_> {
        HeroTargets {
            hero: &mut self.city_hero,
            image: &mut self.city_image,
            label: &mut self.city_image_label,
        }
    }

    pub fn reveal_targets(&mut self) -> RevealTargets<'_> {
        RevealTargets {
            card: &mut self.results_card,
            empty: &mut self.results_empty,
            results: &mut self.results,
        }
    }

    /// Assembles the regions into the results card subtree.
    pub fn assemble(&self) -> Element {
        let hero = self
            .city_hero
            .clone()
            .with_child(self.city_image.clone())
            .with_child(self.city_image_label.clone());

        let header = Element::new("header")
            .with_class("summary")
            .with_child(self.summary_title.clone())
            .with_child(self.summary_subtitle.clone())
            .with_child(self.summary_chips.clone());

        let costs = Element::new("section")
            .with_class("costs")
            .with_child(Element::new("h3").with_text("Cost breakdown"))
            .with_child(self.cost_breakdown.clone())
            .with_child(self.cost_highlight.clone());

        let itinerary = Element::new("section")
            .with_class("itinerary")
            .with_child(Element::new("h3").with_text("Day-by-day plan"))
            .with_child(self.itinerary_timeline.clone());

        let results = self
            .results
            .clone()
            .with_child(hero)
            .with_child(header)
            .with_child(costs)
            .with_child(itinerary);

        self.results_card
            .clone()
            .with_child(self.results_empty.clone())
            .with_child(results)
    }

    pub fn to_html(&self) -> String {
        self.assemble().to_html()
    }
}
