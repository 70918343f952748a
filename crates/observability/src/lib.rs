use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    plans_total: AtomicU64,
    rejected_total: AtomicU64,
    templates_applied_total: AtomicU64,
    days_planned_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub plans_total: u64,
    pub rejected_total: u64,
    pub templates_applied_total: u64,
    pub days_planned_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_plan(&self, days: u32) {
        self.plans_total.fetch_add(1, Ordering::Relaxed);
        self.days_planned_total
            .fetch_add(u64::from(days), Ordering::Relaxed);
        counter!("atlas_plans_total").increment(1);
        counter!("atlas_days_planned_total").increment(u64::from(days));
    }

    pub fn inc_rejected(&self) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
        counter!("atlas_rejected_total").increment(1);
    }

    pub fn inc_template(&self) {
        self.templates_applied_total.fetch_add(1, Ordering::Relaxed);
        counter!("atlas_templates_applied_total").increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let plans = self.plans_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            plans_total: plans,
            rejected_total: self.rejected_total.load(Ordering::Relaxed),
            templates_applied_total: self.templates_applied_total.load(Ordering::Relaxed),
            days_planned_total: self.days_planned_total.load(Ordering::Relaxed),
            avg_latency_micros: if plans == 0 {
                0.0
            } else {
                latency as f64 / plans as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,atlas_api=info,atlas_planner=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
