use crate::types::{AlertLevel, CameraLocation, CameraStatus, Severity, Tone};
use serde::Serialize;

/// Marker anchor as a percentage of the map panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPosition {
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Places markers on the map panel. Swap the implementation to move from
/// index placement to a real lat/lng projection.
pub trait MarkerLayout: Send + Sync {
    fn place(&self, index: usize, location: &CameraLocation) -> MarkerPosition;
}

/// Fixed grid: `left = 15 + (i mod 4) * 20`, `top = 15 + (i div 4) * 25`.
/// Coordinates on the record are ignored.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub columns: usize,
    pub origin_pct: f64,
    pub column_step_pct: f64,
    pub row_step_pct: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 4,
            origin_pct: 15.0,
            column_step_pct: 20.0,
            row_step_pct: 25.0,
        }
    }
}

impl MarkerLayout for GridLayout {
    fn place(&self, index: usize, _location: &CameraLocation) -> MarkerPosition {
        let columns = self.columns.max(1);
        let column = index % columns;
        let row = index / columns;
        MarkerPosition {
            left_pct: self.origin_pct + column as f64 * self.column_step_pct,
            top_pct: self.origin_pct + row as f64 * self.row_step_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Clock,
    Triangle,
    Check,
}

impl MarkerIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MarkerIcon::Clock => "◷",
            MarkerIcon::Triangle => "▲",
            MarkerIcon::Check => "✔",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub tone: Tone,
    pub icon: MarkerIcon,
    pub pulsing: bool,
}

pub fn marker_style(status: CameraStatus, alert_level: AlertLevel) -> MarkerStyle {
    match status {
        CameraStatus::Offline => MarkerStyle {
            tone: Tone::Slate,
            icon: MarkerIcon::Clock,
            pulsing: false,
        },
        CameraStatus::Alert => MarkerStyle {
            tone: match alert_level {
                Severity::High => Tone::Red,
                Severity::Medium => Tone::Amber,
                _ => Tone::Orange,
            },
            icon: MarkerIcon::Triangle,
            pulsing: true,
        },
        _ => MarkerStyle {
            tone: Tone::Emerald,
            icon: MarkerIcon::Check,
            pulsing: false,
        },
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub online: usize,
    pub alerts: usize,
    pub offline: usize,
}

impl StatusCounts {
    pub fn from_locations(locations: &[CameraLocation]) -> Self {
        let count = |status| locations.iter().filter(|c| c.status == status).count();
        Self {
            online: count(CameraStatus::Online),
            alerts: count(CameraStatus::Alert),
            offline: count(CameraStatus::Offline),
        }
    }
}

/// Tooltip body for a marker.
pub fn tooltip_lines(location: &CameraLocation) -> Vec<String> {
    let mut lines = vec![
        location.name.clone(),
        format!("Status: {}", location.status.as_str()),
        format!("Last seen: {}", location.last_seen),
    ];
    if location.status == CameraStatus::Alert {
        lines.push(format!("Alert Level: {}", location.alert_level.as_str()));
    }
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEmphasis {
    Selected,
    Hovered,
    Normal,
}

/// Click selection and pointer hover over the map markers. The two are
/// independent and may point at the same marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSelection {
    selected: Option<String>,
    hovered: Option<String>,
}

impl MapSelection {
    /// Clicking the selected marker clears it; any other marker replaces it.
    pub fn click(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    pub fn hover_enter(&mut self, id: &str) {
        self.hovered = Some(id.to_string());
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn tooltip_visible(&self, id: &str) -> bool {
        self.selected() == Some(id) || self.hovered() == Some(id)
    }

    pub fn emphasis(&self, id: &str) -> MarkerEmphasis {
        if self.selected() == Some(id) {
            MarkerEmphasis::Selected
        } else if self.hovered() == Some(id) {
            MarkerEmphasis::Hovered
        } else {
            MarkerEmphasis::Normal
        }
    }
}
