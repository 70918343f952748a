//! Projects trip plans onto the results page regions.

pub mod costs;
pub mod dom;
pub mod format;
pub mod hero;
pub mod regions;
pub mod summary;
pub mod timeline;

pub use costs::{cost_rows, highlight_text, render_costs};
pub use dom::{escape_html, Element};
pub use format::{format_currency, format_display_date, format_money};
pub use hero::{render_city_hero, show_results};
pub use regions::{CostTargets, HeroTargets, ResultsPage, RevealTargets, SummaryTargets};
pub use summary::render_summary;
pub use timeline::render_itinerary;
