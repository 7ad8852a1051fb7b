use crate::types::{AlertStatus, DistressAlert, GestureType, Severity, Tone};
use rand::Rng;

pub const ACCURACY_MIN: u8 = 85;
pub const ACCURACY_MAX: u8 = 98;

pub fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::High => Tone::Red,
        Severity::Medium => Tone::Amber,
        _ => Tone::Blue,
    }
}

impl GestureType {
    pub fn label(&self) -> &'static str {
        match self {
            GestureType::HelpSignal => "Help Signal Detected",
            GestureType::DistressCall => "Distress Call",
            GestureType::PanicGesture => "Panic Gesture",
            GestureType::IsolationDetected => "Isolated Individual",
            GestureType::Unknown => "Unknown Alert",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GestureType::HelpSignal => "🆘",
            GestureType::DistressCall => "📢",
            GestureType::PanicGesture => "⚠️",
            GestureType::IsolationDetected => "👤",
            GestureType::Unknown => "🚨",
        }
    }
}

pub fn active_alert_count(alerts: &[DistressAlert]) -> usize {
    alerts
        .iter()
        .filter(|a| a.status == AlertStatus::Active)
        .count()
}

/// Decorative detector figures in the threat panel. Walked on their own timer
/// and never read back into the alert list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistressMetrics {
    pub isolated_individuals: u32,
    pub detection_accuracy: u8,
}

impl Default for DistressMetrics {
    fn default() -> Self {
        Self {
            isolated_individuals: 3,
            detection_accuracy: 92,
        }
    }
}

impl DistressMetrics {
    /// One 10-second tick: isolated count moves by -1..=1, accuracy by -3..=2.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let isolated_delta = rng.gen_range(-1..=1);
        let accuracy_delta = rng.gen_range(-3..=2);
        self.apply_walk(isolated_delta, accuracy_delta);
    }

    /// Isolated count floors at 0; accuracy stays in [85, 98].
    pub fn apply_walk(&mut self, isolated_delta: i32, accuracy_delta: i32) {
        let isolated = self.isolated_individuals as i64 + isolated_delta as i64;
        self.isolated_individuals = isolated.clamp(0, u32::MAX as i64) as u32;

        let accuracy = self.detection_accuracy as i32 + accuracy_delta;
        self.detection_accuracy = accuracy.clamp(ACCURACY_MIN as i32, ACCURACY_MAX as i32) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_has_two_active_alerts() {
        assert_eq!(active_alert_count(Registry::seed().unwrap().alerts()), 2);
    }

    #[test]
    fn test_active_count_follows_list() {
        let mut alerts = Registry::seed().unwrap().alerts().to_vec();
        alerts[1].status = AlertStatus::Active;
        assert_eq!(active_alert_count(&alerts), 3);
        alerts.clear();
        assert_eq!(active_alert_count(&alerts), 0);
    }

    #[test]
    fn test_severity_tones() {
        assert_eq!(severity_tone(Severity::High), Tone::Red);
        assert_eq!(severity_tone(Severity::Medium), Tone::Amber);
        assert_eq!(severity_tone(Severity::Low), Tone::Blue);
    }

    #[test]
    fn test_gesture_labels_and_default_arm() {
        assert_eq!(GestureType::HelpSignal.label(), "Help Signal Detected");
        assert_eq!(GestureType::IsolationDetected.icon(), "👤");
        assert_eq!(GestureType::Unknown.label(), "Unknown Alert");
        assert_eq!(GestureType::Unknown.icon(), "🚨");
    }

    #[test]
    fn test_walk_clamps() {
        let mut m = DistressMetrics {
            isolated_individuals: 0,
            detection_accuracy: 86,
        };
        m.apply_walk(-1, -3);
        assert_eq!(m.isolated_individuals, 0);
        assert_eq!(m.detection_accuracy, ACCURACY_MIN);

        m.detection_accuracy = 97;
        m.apply_walk(1, 2);
        assert_eq!(m.isolated_individuals, 1);
        assert_eq!(m.detection_accuracy, ACCURACY_MAX);
    }

    #[test]
    fn test_many_ticks_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = DistressMetrics::default();
        for _ in 0..10_000 {
            let before = m;
            m.step(&mut rng);
            assert!((ACCURACY_MIN..=ACCURACY_MAX).contains(&m.detection_accuracy));
            let moved = m.isolated_individuals as i64 - before.isolated_individuals as i64;
            assert!((-1..=1).contains(&moved));
        }
    }
}
