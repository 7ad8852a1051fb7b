use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sreeraksha_core::analytics::AlertMetrics;
use sreeraksha_core::distress::DistressMetrics;
use sreeraksha_core::simulate::TimerKind;
use std::sync::OnceLock;

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the global recorder once and hands back the render handle.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    if let Some(handle) = PROMETHEUS.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(PROMETHEUS.get_or_init(|| handle).clone())
}

pub fn record_timer_tick(kind: TimerKind) {
    counter!("timer_ticks_total", "timer" => kind.name()).increment(1);
}

pub fn update_alert_metrics(m: &AlertMetrics) {
    gauge!("alerts_total").set(m.total_alerts as f64);
    gauge!("alerts_resolved").set(m.resolved_alerts as f64);
    gauge!("avg_response_minutes").set(m.avg_response_time);
}

pub fn update_distress_metrics(m: &DistressMetrics) {
    gauge!("detection_accuracy_pct").set(m.detection_accuracy as f64);
    gauge!("isolated_individuals").set(m.isolated_individuals as f64);
}

/// Counts expanded-feed opens in the terminal UI. The HTML page keeps its
/// modal in the browser and never reports opens.
pub fn record_modal_open(feed_id: &str) {
    counter!("feed_modal_opens_total", "feed" => feed_id.to_string()).increment(1);
}
