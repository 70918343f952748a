use atlas_core::image_profile_of;

use crate::regions::{HeroTargets, RevealTargets};

pub const HERO_VISIBLE_CLASS: &str = "city-hero--visible";
pub const RESULTS_VISIBLE_CLASS: &str = "results-visible";

/// Points the hero at the city's inspiration image and replays its fade-in.
/// The image load itself is left to whatever displays the markup.
pub fn render_city_hero(targets: HeroTargets<'_>, city: &str) {
    let image = image_profile_of(city);
    targets.image.set_attr("src", image.url);
    targets.image.set_attr("alt", image.alt);
    targets.label.set_text(image.label);

    targets.hero.set_hidden(false);
    targets.hero.restart_class(HERO_VISIBLE_CLASS);
}

pub fn show_results(targets: RevealTargets<'_>) {
    targets.empty.set_hidden(true);
    targets.results.set_hidden(false);
    targets.results.restart_class(RESULTS_VISIBLE_CLASS);
    targets.card.request_scroll_into_view();
}
