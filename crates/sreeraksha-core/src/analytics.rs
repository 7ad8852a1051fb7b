use crate::types::AlertFrequencyBucket;
use rand::Rng;
use serde::Serialize;

pub const RESPONSE_MIN_MINUTES: f64 = 2.0;
pub const RESPONSE_MAX_MINUTES: f64 = 8.0;
/// Shown verbatim in the status row; nothing measures it.
pub const SYSTEM_UPTIME_PCT: f64 = 98.2;

pub fn max_alerts(buckets: &[AlertFrequencyBucket]) -> u32 {
    buckets.iter().map(|b| b.alerts).max().unwrap_or(0)
}

fn scaled(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64 * 100.0).min(100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSegment {
    pub height_pct: f64,
    pub bottom_pct: f64,
}

/// One column of the 24h chart. Red total and green resolved both grow from
/// the floor; the amber pending segment sits on top of resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    pub hour: String,
    pub alerts: u32,
    pub resolved: u32,
    pub pending: u32,
    pub total_pct: f64,
    pub resolved_pct: f64,
    pub pending_segment: Option<PendingSegment>,
}

pub fn bar_geometry(buckets: &[AlertFrequencyBucket]) -> Vec<BarGeometry> {
    let max = max_alerts(buckets);
    buckets
        .iter()
        .map(|b| BarGeometry {
            hour: b.hour.clone(),
            alerts: b.alerts,
            resolved: b.resolved,
            pending: b.pending,
            total_pct: scaled(b.alerts, max),
            resolved_pct: scaled(b.resolved, max),
            pending_segment: (b.pending > 0).then(|| PendingSegment {
                height_pct: scaled(b.pending, max),
                bottom_pct: scaled(b.resolved, max),
            }),
        })
        .collect()
}

/// Headline counters above the chart. They drift on their own timer and are
/// never reconciled with the bucket series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMetrics {
    pub total_alerts: u32,
    pub resolved_alerts: u32,
    pub avg_response_time: f64, // minutes
}

impl Default for AlertMetrics {
    fn default() -> Self {
        Self {
            total_alerts: 43,
            resolved_alerts: 31,
            avg_response_time: 4.2,
        }
    }
}

impl AlertMetrics {
    /// `round(resolved / total * 100)`; 0 when there are no alerts.
    pub fn resolution_rate(&self) -> u32 {
        if self.total_alerts == 0 {
            return 0;
        }
        (self.resolved_alerts as f64 / self.total_alerts as f64 * 100.0).round() as u32
    }

    /// Signed: the two counters drift independently and resolved can overtake
    /// total.
    pub fn pending_alerts(&self) -> i64 {
        self.total_alerts as i64 - self.resolved_alerts as i64
    }

    pub fn avg_response_seconds(&self) -> u32 {
        (self.avg_response_time * 60.0).round() as u32
    }

    /// One 15-second tick: each counter gains 0 or 1, response time moves by
    /// up to a quarter minute either way.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let total_inc = rng.gen_range(0..=1);
        let resolved_inc = rng.gen_range(0..=1);
        let response_delta = (rng.gen::<f64>() - 0.5) * 0.5;
        self.apply_walk(total_inc, resolved_inc, response_delta);
    }

    pub fn apply_walk(&mut self, total_inc: u32, resolved_inc: u32, response_delta: f64) {
        self.total_alerts = self.total_alerts.saturating_add(total_inc);
        self.resolved_alerts = self.resolved_alerts.saturating_add(resolved_inc);
        self.avg_response_time = (self.avg_response_time + response_delta)
            .clamp(RESPONSE_MIN_MINUTES, RESPONSE_MAX_MINUTES);
    }
}

/// Static KPI card captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kpi {
    TotalAlerts,
    Resolved,
    ResolutionRate,
    AvgResponse,
}

impl Kpi {
    pub const ALL: [Kpi; 4] = [Kpi::TotalAlerts, Kpi::Resolved, Kpi::ResolutionRate, Kpi::AvgResponse];

    pub fn title(&self) -> &'static str {
        match self {
            Kpi::TotalAlerts => "Total Alerts",
            Kpi::Resolved => "Resolved",
            Kpi::ResolutionRate => "Resolution Rate",
            Kpi::AvgResponse => "Avg Response",
        }
    }

    pub fn trend(&self) -> &'static str {
        match self {
            Kpi::TotalAlerts => "+3 from yesterday",
            Kpi::Resolved => "+5 from yesterday",
            Kpi::ResolutionRate => "+2% improvement",
            Kpi::AvgResponse => "-0.3m improvement",
        }
    }

    pub fn value(&self, metrics: &AlertMetrics) -> String {
        match self {
            Kpi::TotalAlerts => metrics.total_alerts.to_string(),
            Kpi::Resolved => metrics.resolved_alerts.to_string(),
            Kpi::ResolutionRate => format!("{}%", metrics.resolution_rate()),
            Kpi::AvgResponse => format!("{:.1}m", metrics.avg_response_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_resolution_rate() {
        let m = AlertMetrics::default();
        assert_eq!(m.resolution_rate(), 72);
        assert_eq!(m.pending_alerts(), 12);
        assert_eq!(m.avg_response_seconds(), 252);
    }

    #[test]
    fn test_resolution_rate_with_no_alerts() {
        let m = AlertMetrics {
            total_alerts: 0,
            resolved_alerts: 0,
            avg_response_time: 4.0,
        };
        assert_eq!(m.resolution_rate(), 0);
    }

    #[test]
    fn test_pending_can_go_negative_when_resolved_overtakes() {
        let m = AlertMetrics {
            total_alerts: 10,
            resolved_alerts: 11,
            avg_response_time: 4.0,
        };
        assert_eq!(m.pending_alerts(), -1);
    }

    #[test]
    fn test_response_time_clamps() {
        let mut m = AlertMetrics {
            avg_response_time: 2.1,
            ..AlertMetrics::default()
        };
        m.apply_walk(0, 0, -0.25);
        assert_eq!(m.avg_response_time, RESPONSE_MIN_MINUTES);
        m.avg_response_time = 7.9;
        m.apply_walk(1, 1, 0.25);
        assert_eq!(m.avg_response_time, RESPONSE_MAX_MINUTES);
        assert_eq!(m.total_alerts, 44);
        assert_eq!(m.resolved_alerts, 32);
    }

    #[test]
    fn test_many_ticks_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut m = AlertMetrics::default();
        for _ in 0..10_000 {
            let before = m;
            m.step(&mut rng);
            assert!((RESPONSE_MIN_MINUTES..=RESPONSE_MAX_MINUTES).contains(&m.avg_response_time));
            assert!(m.total_alerts - before.total_alerts <= 1);
            assert!(m.resolved_alerts - before.resolved_alerts <= 1);
        }
    }

    #[test]
    fn test_bar_heights_scale_against_max() {
        let bars = bar_geometry(Registry::seed().unwrap().frequency());
        assert_eq!(bars.len(), 6);

        let last = &bars[5];
        assert_eq!(last.total_pct, 100.0);
        assert!((last.resolved_pct - 11.0 / 15.0 * 100.0).abs() < 1e-9);

        let first = &bars[0];
        let seg = first.pending_segment.unwrap();
        assert!((first.total_pct - 2.0 / 15.0 * 100.0).abs() < 1e-9);
        assert!((seg.bottom_pct - first.resolved_pct).abs() < 1e-9);
        assert!((seg.height_pct - 1.0 / 15.0 * 100.0).abs() < 1e-9);

        assert!(bars[1].pending_segment.is_none());
    }

    #[test]
    fn test_bar_heights_are_capped() {
        // resolved above the max alerts value would overflow the column
        let buckets = vec![
            AlertFrequencyBucket::new("00:00", 4, 6, 0),
            AlertFrequencyBucket::new("04:00", 2, 1, 1),
        ];
        let bars = bar_geometry(&buckets);
        assert_eq!(bars[0].resolved_pct, 100.0);
        assert_eq!(bars[0].total_pct, 100.0);
    }

    #[test]
    fn test_empty_series_has_no_bars() {
        assert!(bar_geometry(&[]).is_empty());
        let zero = bar_geometry(&[AlertFrequencyBucket::new("00:00", 0, 0, 0)]);
        assert_eq!(zero[0].total_pct, 0.0);
    }

    #[test]
    fn test_kpi_values() {
        let m = AlertMetrics::default();
        assert_eq!(Kpi::ResolutionRate.value(&m), "72%");
        assert_eq!(Kpi::AvgResponse.value(&m), "4.2m");
        assert_eq!(Kpi::TotalAlerts.trend(), "+3 from yesterday");
    }
}
