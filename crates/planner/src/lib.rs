pub mod templates;

use std::sync::Arc;
use std::time::Instant;

use atlas_core::{build_trip_plan, PlannerError, TripForm, TripPlan};
use atlas_observability::AppMetrics;
use atlas_render::{
    render_city_hero, render_costs, render_itinerary, render_summary, show_results, ResultsPage,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument, warn};

pub use templates::{find_template, TemplatePreset, DEFAULT_TEMPLATES};

/// Everything the planner page shows: the form as currently filled in, the
/// validation notice and the result regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlannerPage {
    pub form: TripForm,
    /// Earliest selectable start date.
    pub start_date_min: Option<NaiveDate>,
    pub notice: Option<String>,
    pub results: ResultsPage,
}

impl PlannerPage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone)]
pub struct TripPlanner {
    metrics: Arc<AppMetrics>,
    templates: Vec<TemplatePreset>,
}

impl TripPlanner {
    pub fn new(metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            templates: DEFAULT_TEMPLATES.to_vec(),
        }
    }

    pub fn templates(&self) -> &[TemplatePreset] {
        &self.templates
    }

    pub fn initialize(&self, page: &mut PlannerPage, today: NaiveDate) {
        page.start_date_min = Some(today);
    }

    /// Intake, estimate and itinerary without touching any page.
    pub fn plan(&self, form: &TripForm) -> Result<TripPlan, PlannerError> {
        let started = Instant::now();

        let request = form.to_request().map_err(|err| {
            self.metrics.inc_rejected();
            warn!(error = %err, "trip form rejected");
            err
        })?;

        let plan = build_trip_plan(request);
        self.metrics.inc_plan(plan.request.days);
        self.metrics.observe_latency(started.elapsed());
        Ok(plan)
    }

    /// Runs the whole pipeline for the page's current form values. A rejected
    /// form only sets the notice; the result regions keep what they showed.
    #[instrument(skip(self, page))]
    pub fn submit(&self, page: &mut PlannerPage) -> Result<TripPlan, PlannerError> {
        let plan = match self.plan(&page.form) {
            Ok(plan) => plan,
            Err(err) => {
                page.notice = Some(err.notice());
                return Err(err);
            }
        };

        page.notice = None;
        render_plan(&mut page.results, &plan);

        info!(
            city = %plan.request.city,
            days = plan.request.days,
            style = plan.request.style.as_str(),
            total = plan.cost.total,
            "plan rendered"
        );

        Ok(plan)
    }

    /// Copies a preset into the form and submits it. The start date field is
    /// left as the user set it.
    pub fn apply_template(
        &self,
        page: &mut PlannerPage,
        id: &str,
    ) -> Result<TripPlan, PlannerError> {
        let Some(preset) = find_template(&self.templates, id) else {
            let err = PlannerError::UnknownTemplate(id.to_string());
            page.notice = Some(err.notice());
            return Err(err);
        };

        page.form.city = preset.city.to_string();
        page.form.days = preset.days.to_string();
        page.form.budget = preset.budget.to_string();
        page.form.style = if preset.style.is_empty() {
            "balanced".to_string()
        } else {
            preset.style.to_string()
        };

        self.metrics.inc_template();
        self.submit(page)
    }
}

pub fn render_plan(results: &mut ResultsPage, plan: &TripPlan) {
    render_summary(results.summary_targets(), plan);
    render_costs(results.cost_targets(), plan.request.days, &plan.cost);
    render_itinerary(&mut results.itinerary_timeline, &plan.itinerary);
    render_city_hero(results.hero_targets(), &plan.request.city);
    show_results(results.reveal_targets());
}
