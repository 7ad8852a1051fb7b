use crate::config::DashboardConfig;
use chrono::Utc;
use dashmap::DashMap;
use metrics_exporter_prometheus::PrometheusHandle;
use rand::Rng;
use sreeraksha_core::clock::{Clock, SystemClock};
use sreeraksha_core::dashboard::Dashboard;
use sreeraksha_core::health::{OverallHealth, TimerHealth};
use sreeraksha_core::map::{GridLayout, MarkerLayout};
use sreeraksha_core::registry::Registry;
use sreeraksha_core::simulate::TimerKind;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub registry: Arc<Registry>,
    pub timers: Arc<DashMap<TimerKind, TimerHealth>>, // Liveness per interval timer
    pub clock: Arc<dyn Clock>,
    pub layout: Arc<dyn MarkerLayout>,
    pub prometheus: Option<PrometheusHandle>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock))
    }

    pub fn with_clock(registry: Registry, clock: Arc<dyn Clock>) -> Self {
        let registry = Arc::new(registry);
        let dashboard = Dashboard::new(registry.clone(), clock.as_ref());
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            registry,
            timers: Arc::new(DashMap::new()),
            clock,
            layout: Arc::new(GridLayout::default()),
            prometheus: None,
            start_time: Instant::now(),
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Registers every timer for health tracking before the tasks start.
    pub fn register_timers(&self, config: &DashboardConfig) {
        let now = Utc::now();
        for kind in TimerKind::ALL {
            self.timers
                .insert(kind, TimerHealth::new(kind, config.period(kind), now));
        }
    }

    /// Applies one timer fire. The write lock is held only for the mutation.
    pub async fn apply_timer<R: Rng + ?Sized>(&self, kind: TimerKind, rng: &mut R) {
        {
            let mut dashboard = self.dashboard.write().await;
            dashboard.on_timer(kind, rng, self.clock.as_ref());
            match kind {
                TimerKind::ClockTick => {}
                TimerKind::AlertMetrics => {
                    let m = dashboard.alert_metrics;
                    crate::metrics::update_alert_metrics(&m);
                    debug!(
                        "Alert walk: total={} resolved={} avg_response={:.2}m",
                        m.total_alerts, m.resolved_alerts, m.avg_response_time
                    );
                }
                TimerKind::DistressMetrics => {
                    let m = dashboard.distress_metrics;
                    crate::metrics::update_distress_metrics(&m);
                    debug!(
                        "Distress walk: isolated={} accuracy={}%",
                        m.isolated_individuals, m.detection_accuracy
                    );
                }
            }
        }

        if let Some(mut health) = self.timers.get_mut(&kind) {
            health.record_tick(Utc::now());
        }
        crate::metrics::record_timer_tick(kind);
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn overall_health(&self) -> OverallHealth {
        let mut timers: Vec<TimerHealth> = self.timers.iter().map(|e| e.value().clone()).collect();
        timers.sort_by_key(|t| TimerKind::ALL.iter().position(|k| *k == t.timer));
        OverallHealth::from_timers(timers, Utc::now(), self.uptime_seconds())
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Registry::seed().expect("seed data is valid"))
    }
}
