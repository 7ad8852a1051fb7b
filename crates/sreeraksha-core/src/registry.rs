use crate::error::DashboardError;
use crate::types::{
    AlertFrequencyBucket, AlertStatus, AlertType, CameraFeed, CameraLocation, CameraStatus,
    DistressAlert, FeedStatus, GestureType, Quality, Severity,
};
use std::collections::HashSet;

/// Header totals for the whole surveillance network. Static, and not derived
/// from the map registry.
pub const NETWORK_TOTAL_CAMERAS: u32 = 24;
pub const NETWORK_ONLINE_CAMERAS: u32 = 21;

/// Immutable record lists the dashboard renders from.
#[derive(Debug, Clone)]
pub struct Registry {
    feeds: Vec<CameraFeed>,
    locations: Vec<CameraLocation>,
    alerts: Vec<DistressAlert>,
    frequency: Vec<AlertFrequencyBucket>,
}

impl Registry {
    pub fn new(
        feeds: Vec<CameraFeed>,
        locations: Vec<CameraLocation>,
        alerts: Vec<DistressAlert>,
        frequency: Vec<AlertFrequencyBucket>,
    ) -> Result<Self, DashboardError> {
        for feed in &feeds {
            if !feed.alert_is_consistent() {
                return Err(DashboardError::InconsistentFeedAlert {
                    id: feed.id.clone(),
                    has_alert: feed.has_alert,
                    has_type: feed.alert_type.is_some(),
                });
            }
        }
        ensure_unique("feed", feeds.iter().map(|f| f.id.as_str()))?;
        ensure_unique("camera", locations.iter().map(|c| c.id.as_str()))?;
        ensure_unique("alert", alerts.iter().map(|a| a.id.as_str()))?;

        // Flagged, never corrected: the chart draws whatever it is given.
        for bucket in frequency.iter().filter(|b| !b.is_consistent()) {
            tracing::warn!(
                "Frequency bucket {} has pending={} but alerts-resolved={}",
                bucket.hour,
                bucket.pending,
                bucket.alerts as i64 - bucket.resolved as i64
            );
        }

        Ok(Self {
            feeds,
            locations,
            alerts,
            frequency,
        })
    }

    /// The built-in mock network, checked like any other record set.
    pub fn seed() -> Result<Self, DashboardError> {
        Self::new(seed_feeds(), seed_locations(), seed_alerts(), seed_frequency())
    }

    pub fn feeds(&self) -> &[CameraFeed] {
        &self.feeds
    }

    pub fn locations(&self) -> &[CameraLocation] {
        &self.locations
    }

    pub fn alerts(&self) -> &[DistressAlert] {
        &self.alerts
    }

    pub fn frequency(&self) -> &[AlertFrequencyBucket] {
        &self.frequency
    }

    pub fn feed(&self, id: &str) -> Result<&CameraFeed, DashboardError> {
        self.feeds
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| DashboardError::UnknownFeed(id.to_string()))
    }

    /// A map camera together with its index in marker order.
    pub fn location(&self, id: &str) -> Result<(usize, &CameraLocation), DashboardError> {
        self.locations
            .iter()
            .enumerate()
            .find(|(_, c)| c.id == id)
            .ok_or_else(|| DashboardError::UnknownCamera(id.to_string()))
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DashboardError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DashboardError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn placeholder(text: &str) -> String {
    format!("/placeholder.svg?height=240&width=320&text={}", text)
}

fn seed_feeds() -> Vec<CameraFeed> {
    use FeedStatus::{Live, Offline};
    use Quality::{FourK, Hd};

    vec![
        CameraFeed::new("1", "Main Junction Cam-01", "Sector 15, Noida", Live, FourK, &placeholder("LIVE+FEED+01"), "2 min ago")
            .with_alert(AlertType::Distress),
        CameraFeed::new("2", "Metro Station Cam-02", "Connaught Place", Live, Hd, &placeholder("LIVE+FEED+02"), "1 min ago"),
        CameraFeed::new("3", "University Gate Cam-03", "DU North Campus", Offline, Hd, &placeholder("OFFLINE"), "15 min ago"),
        CameraFeed::new("4", "Shopping Complex Cam-04", "Saket District", Live, FourK, &placeholder("LIVE+FEED+04"), "30 sec ago")
            .with_alert(AlertType::Suspicious),
        CameraFeed::new("5", "Bus Terminal Cam-05", "ISBT Kashmere Gate", Live, Hd, &placeholder("LIVE+FEED+05"), "3 min ago"),
        CameraFeed::new("6", "Central Park Cam-06", "Lodhi Gardens", Live, FourK, &placeholder("LIVE+FEED+06"), "1 min ago")
            .with_alert(AlertType::Emergency),
    ]
}

fn seed_locations() -> Vec<CameraLocation> {
    use CameraStatus::{Alert, Offline, Online};
    use Severity::{High, Low, Medium};

    vec![
        CameraLocation::new("1", "Main Street Junction", (28.6139, 77.209), Alert, High, "2 min ago"),
        CameraLocation::new("2", "Metro Station Exit", (28.6129, 77.2295), Online, Low, "1 min ago"),
        CameraLocation::new("3", "University Campus Gate", (28.6869, 77.209), Offline, Low, "15 min ago"),
        CameraLocation::new("4", "Shopping Complex Entrance", (28.5355, 77.391), Alert, Medium, "30 sec ago"),
        CameraLocation::new("5", "Bus Terminal Platform", (28.6692, 77.2265), Online, Low, "3 min ago"),
        CameraLocation::new("6", "Central Park Area", (28.5921, 77.2507), Alert, High, "1 min ago"),
        CameraLocation::new("7", "Hospital Main Gate", (28.6304, 77.2177), Online, Low, "2 min ago"),
        CameraLocation::new("8", "Railway Station", (28.6414, 77.2214), Online, Low, "4 min ago"),
    ]
}

fn seed_alerts() -> Vec<DistressAlert> {
    let alert = |id: &str,
                 camera_id: &str,
                 camera_name: &str,
                 location: &str,
                 gesture_type: GestureType,
                 timestamp: &str,
                 severity: Severity,
                 status: AlertStatus,
                 confidence: u8| DistressAlert {
        id: id.to_string(),
        camera_id: camera_id.to_string(),
        camera_name: camera_name.to_string(),
        location: location.to_string(),
        gesture_type,
        timestamp: timestamp.to_string(),
        severity,
        status,
        confidence,
    };

    vec![
        alert("1", "CAM001", "Main Street Junction", "Sector 15, Noida", GestureType::HelpSignal, "2 min ago", Severity::High, AlertStatus::Active, 94),
        alert("2", "CAM004", "Shopping Complex", "Saket, Delhi", GestureType::IsolationDetected, "5 min ago", Severity::Medium, AlertStatus::Acknowledged, 87),
        alert("3", "CAM006", "Park Area", "Lodhi Gardens", GestureType::PanicGesture, "8 min ago", Severity::High, AlertStatus::Active, 91),
    ]
}

fn seed_frequency() -> Vec<AlertFrequencyBucket> {
    vec![
        AlertFrequencyBucket::new("00:00", 2, 1, 1),
        AlertFrequencyBucket::new("04:00", 1, 1, 0),
        AlertFrequencyBucket::new("08:00", 5, 3, 2),
        AlertFrequencyBucket::new("12:00", 8, 6, 2),
        AlertFrequencyBucket::new("16:00", 12, 9, 3),
        AlertFrequencyBucket::new("20:00", 15, 11, 4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_passes_validation() -> anyhow::Result<()> {
        let validated = Registry::seed()?;
        assert_eq!(validated.feeds().len(), 6);
        assert_eq!(validated.locations().len(), 8);
        assert_eq!(validated.alerts().len(), 3);
        assert_eq!(validated.frequency().len(), 6);
        Ok(())
    }

    #[test]
    fn test_alert_flag_matches_alert_type_for_every_feed() {
        for feed in Registry::seed().unwrap().feeds() {
            if feed.has_alert {
                assert!(matches!(
                    feed.alert_type,
                    Some(AlertType::Distress | AlertType::Suspicious | AlertType::Emergency)
                ));
            } else {
                assert!(feed.alert_type.is_none(), "feed {} has a stray alert type", feed.id);
            }
        }
    }

    #[test]
    fn test_seed_buckets_are_consistent() {
        assert!(Registry::seed().unwrap().frequency().iter().all(|b| b.is_consistent()));
    }

    #[test]
    fn test_rejects_inconsistent_feed() {
        let mut feed = seed_feeds().remove(1);
        feed.alert_type = Some(AlertType::Distress);
        let err = Registry::new(vec![feed], vec![], vec![], vec![]).unwrap_err();
        assert_eq!(
            err,
            DashboardError::InconsistentFeedAlert {
                id: "2".to_string(),
                has_alert: false,
                has_type: true,
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_camera_ids() {
        let mut locations = seed_locations();
        locations[1].id = "1".to_string();
        let err = Registry::new(vec![], locations, vec![], vec![]).unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateId { kind: "camera", .. }));
    }

    #[test]
    fn test_keeps_inconsistent_buckets() -> anyhow::Result<()> {
        let buckets = vec![AlertFrequencyBucket::new("00:00", 4, 1, 1)];
        let registry = Registry::new(vec![], vec![], vec![], buckets)?;
        assert_eq!(registry.frequency()[0].pending, 1);
        Ok(())
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = Registry::seed().unwrap();
        assert_eq!(registry.feed("4").unwrap().name, "Shopping Complex Cam-04");
        let (index, camera) = registry.location("8").unwrap();
        assert_eq!((index, camera.name.as_str()), (7, "Railway Station"));
        assert_eq!(
            registry.location("CAM009").unwrap_err(),
            DashboardError::UnknownCamera("CAM009".to_string())
        );
        assert_eq!(
            registry.feed("99").unwrap_err(),
            DashboardError::UnknownFeed("99".to_string())
        );
    }
}
