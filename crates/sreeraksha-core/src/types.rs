use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Live,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Distress,
    Suspicious,
    Emergency,
}

impl AlertType {
    pub fn upper(&self) -> &'static str {
        match self {
            AlertType::Distress => "DISTRESS",
            AlertType::Suspicious => "SUSPICIOUS",
            AlertType::Emergency => "EMERGENCY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "SD")]
    Sd,
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "4K")]
    FourK,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Sd => "SD",
            Quality::Hd => "HD",
            Quality::FourK => "4K",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraFeed {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: FeedStatus,
    pub has_alert: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<AlertType>,
    pub stream_url: String,
    pub quality: Quality,
    pub last_update: String,
}

impl CameraFeed {
    pub fn new(
        id: &str,
        name: &str,
        location: &str,
        status: FeedStatus,
        quality: Quality,
        stream_url: &str,
        last_update: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            status,
            has_alert: false,
            alert_type: None,
            stream_url: stream_url.to_string(),
            quality,
            last_update: last_update.to_string(),
        }
    }

    /// Flags the feed as alerting. Sets both halves of the alert pair so they
    /// cannot disagree.
    pub fn with_alert(mut self, alert_type: AlertType) -> Self {
        self.has_alert = true;
        self.alert_type = Some(alert_type);
        self
    }

    /// `has_alert` holds exactly when an alert type is present.
    pub fn alert_is_consistent(&self) -> bool {
        self.has_alert == self.alert_type.is_some()
    }

    pub fn is_live(&self) -> bool {
        self.status == FeedStatus::Live
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
    Alert,
}

impl CameraStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraStatus::Online => "online",
            CameraStatus::Offline => "offline",
            CameraStatus::Alert => "alert",
        }
    }
}

/// Ordinal urgency shared by distress severities and map alert levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn upper(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

pub type AlertLevel = Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraLocation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub status: CameraStatus,
    pub alert_level: AlertLevel,
    pub last_seen: String,
}

impl CameraLocation {
    pub fn new(
        id: &str,
        name: &str,
        (lat, lng): (f64, f64),
        status: CameraStatus,
        alert_level: AlertLevel,
        last_seen: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lng,
            status,
            alert_level,
            last_seen: last_seen.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureType {
    HelpSignal,
    DistressCall,
    PanicGesture,
    IsolationDetected,
    /// Anything the detector reports that this build has no mapping for.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn upper(&self) -> &'static str {
        match self {
            AlertStatus::Active => "ACTIVE",
            AlertStatus::Acknowledged => "ACKNOWLEDGED",
            AlertStatus::Resolved => "RESOLVED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistressAlert {
    pub id: String,
    pub camera_id: String,
    pub camera_name: String,
    pub location: String,
    pub gesture_type: GestureType,
    pub timestamp: String,
    pub severity: Severity,
    pub status: AlertStatus,
    pub confidence: u8, // 0-100
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFrequencyBucket {
    pub hour: String,
    pub alerts: u32,
    pub resolved: u32,
    pub pending: u32,
}

impl AlertFrequencyBucket {
    pub fn new(hour: &str, alerts: u32, resolved: u32, pending: u32) -> Self {
        Self {
            hour: hour.to_string(),
            alerts,
            resolved,
            pending,
        }
    }

    /// `pending == alerts - resolved`. Nothing enforces this; the seed data
    /// happens to satisfy it.
    pub fn is_consistent(&self) -> bool {
        self.alerts.checked_sub(self.resolved) == Some(self.pending)
    }
}

/// Presentation tone shared by every badge, marker and bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Red,
    Orange,
    Amber,
    Blue,
    Emerald,
    Slate,
}
