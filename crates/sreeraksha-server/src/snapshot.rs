use crate::state::AppState;
use chrono::{DateTime, Local};
use serde::Serialize;
use sreeraksha_core::analytics::{bar_geometry, AlertMetrics, BarGeometry, Kpi, SYSTEM_UPTIME_PCT};
use sreeraksha_core::dashboard::Dashboard;
use sreeraksha_core::distress::{active_alert_count, severity_tone, DistressMetrics};
use sreeraksha_core::feeds::{
    alert_headline, alert_tone, card_status_badge, detection_overlay, modal_status_badge,
    quality_tone, status_tone,
};
use sreeraksha_core::map::{marker_style, tooltip_lines, MarkerLayout, MarkerPosition, MarkerStyle, StatusCounts};
use sreeraksha_core::registry::{NETWORK_ONLINE_CAMERAS, NETWORK_TOTAL_CAMERAS};
use sreeraksha_core::types::{CameraFeed, Tone};

/// Everything a renderer needs for one frame, derived fresh from the
/// registries and the live counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub current_time: DateTime<Local>,
    pub network: NetworkSummary,
    pub feeds: Vec<FeedCard>,
    pub distress: DistressPanel,
    pub map: MapPanel,
    pub chart: ChartPanel,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSummary {
    pub total_cameras: u32,
    pub online_cameras: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCard {
    pub feed: CameraFeed,
    pub status_badge: &'static str,
    pub modal_status_badge: &'static str,
    pub status_tone: Tone,
    pub quality_tone: Tone,
    pub alert_tone: Tone,
    pub alert_headline: Option<String>,
    pub detection_overlay: Option<String>,
}

impl FeedCard {
    pub fn from_feed(feed: &CameraFeed) -> Self {
        Self {
            feed: feed.clone(),
            status_badge: card_status_badge(feed.status),
            modal_status_badge: modal_status_badge(feed.status),
            status_tone: status_tone(feed.status),
            quality_tone: quality_tone(feed.quality),
            alert_tone: alert_tone(feed.alert_type),
            alert_headline: alert_headline(feed),
            detection_overlay: detection_overlay(feed),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCard {
    pub id: String,
    pub icon: &'static str,
    pub label: &'static str,
    pub camera_name: String,
    pub location: String,
    pub timestamp: String,
    pub severity: &'static str,
    pub tone: Tone,
    pub confidence: u8,
    pub status: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistressPanel {
    pub active_alerts: usize,
    pub metrics: DistressMetrics,
    pub alerts: Vec<AlertCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    pub id: String,
    pub name: String,
    pub position: MarkerPosition,
    pub style: MarkerStyle,
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPanel {
    pub camera_count: usize,
    pub counts: StatusCounts,
    pub markers: Vec<MarkerView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPanel {
    pub metrics: AlertMetrics,
    pub kpis: Vec<KpiCard>,
    pub bars: Vec<BarGeometry>,
    pub resolution_rate: u32,
    pub pending_alerts: i64,
    pub avg_response_seconds: u32,
    pub system_uptime_pct: f64,
}

impl DashboardSnapshot {
    pub async fn from_state(state: &AppState) -> Self {
        let dashboard = state.dashboard.read().await;
        Self::build(&dashboard, state.layout.as_ref())
    }

    pub fn build(dashboard: &Dashboard, layout: &dyn MarkerLayout) -> Self {
        let registry = dashboard.registry();

        let feeds = registry.feeds().iter().map(FeedCard::from_feed).collect();

        let alerts = registry
            .alerts()
            .iter()
            .map(|a| AlertCard {
                id: a.id.clone(),
                icon: a.gesture_type.icon(),
                label: a.gesture_type.label(),
                camera_name: a.camera_name.clone(),
                location: a.location.clone(),
                timestamp: a.timestamp.clone(),
                severity: a.severity.upper(),
                tone: severity_tone(a.severity),
                confidence: a.confidence,
                status: a.status.upper(),
                active: a.status == sreeraksha_core::types::AlertStatus::Active,
            })
            .collect();

        let markers = registry
            .locations()
            .iter()
            .enumerate()
            .map(|(i, c)| MarkerView {
                id: c.id.clone(),
                name: c.name.clone(),
                position: layout.place(i, c),
                style: marker_style(c.status, c.alert_level),
                tooltip: tooltip_lines(c),
            })
            .collect();

        let metrics = dashboard.alert_metrics;
        let kpis = Kpi::ALL
            .iter()
            .map(|k| KpiCard {
                title: k.title(),
                value: k.value(&metrics),
                trend: k.trend(),
            })
            .collect();

        Self {
            current_time: dashboard.current_time,
            network: NetworkSummary {
                total_cameras: NETWORK_TOTAL_CAMERAS,
                online_cameras: NETWORK_ONLINE_CAMERAS,
            },
            feeds,
            distress: DistressPanel {
                active_alerts: active_alert_count(registry.alerts()),
                metrics: dashboard.distress_metrics,
                alerts,
            },
            map: MapPanel {
                camera_count: registry.locations().len(),
                counts: StatusCounts::from_locations(registry.locations()),
                markers,
            },
            chart: ChartPanel {
                metrics,
                kpis,
                bars: bar_geometry(registry.frequency()),
                resolution_rate: metrics.resolution_rate(),
                pending_alerts: metrics.pending_alerts(),
                avg_response_seconds: metrics.avg_response_seconds(),
                system_uptime_pct: SYSTEM_UPTIME_PCT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sreeraksha_core::clock::SystemClock;
    use sreeraksha_core::map::GridLayout;
    use sreeraksha_core::registry::Registry;
    use std::sync::Arc;

    fn seed_snapshot() -> DashboardSnapshot {
        let dashboard = Dashboard::new(Arc::new(Registry::seed().unwrap()), &SystemClock);
        DashboardSnapshot::build(&dashboard, &GridLayout::default())
    }

    #[test]
    fn test_seed_aggregates() {
        let snap = seed_snapshot();
        assert_eq!(snap.feeds.len(), 6);
        assert_eq!(snap.distress.active_alerts, 2);
        assert_eq!(snap.map.camera_count, 8);
        assert_eq!(snap.map.counts.alerts, 3);
        assert_eq!(snap.chart.resolution_rate, 72);
        assert_eq!(snap.chart.pending_alerts, 12);
        assert_eq!(snap.chart.avg_response_seconds, 252);
        assert_eq!(snap.chart.bars.len(), 6);
        assert_eq!(snap.network.total_cameras, 24);
    }

    #[test]
    fn test_feed_cards_carry_presentation() {
        let snap = seed_snapshot();
        let offline = &snap.feeds[2];
        assert_eq!(offline.status_badge, "⚫ OFFLINE");
        assert_eq!(offline.alert_tone, Tone::Slate);
        assert!(offline.alert_headline.is_none());

        let distress = &snap.feeds[0];
        assert_eq!(distress.modal_status_badge, "🔴 LIVE STREAM");
        assert_eq!(distress.alert_tone, Tone::Orange);
        assert_eq!(distress.quality_tone, Tone::Emerald);
        assert_eq!(distress.alert_headline.as_deref(), Some("DISTRESS ALERT"));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(seed_snapshot()).unwrap();
        assert_eq!(json["distress"]["activeAlerts"], 2);
        assert_eq!(json["map"]["markers"][5]["position"]["leftPct"], 35.0);
        assert_eq!(json["map"]["markers"][5]["position"]["topPct"], 40.0);
        assert_eq!(json["map"]["markers"][0]["style"]["tone"], "red");
        assert_eq!(json["chart"]["kpis"][2]["value"], "72%");
        assert_eq!(json["feeds"][0]["feed"]["alertType"], "distress");
        assert_eq!(json["distress"]["alerts"][1]["label"], "Isolated Individual");
    }
}
