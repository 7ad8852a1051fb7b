use crate::types::{AlertType, CameraFeed, FeedStatus, Quality, Tone};

pub fn alert_tone(alert_type: Option<AlertType>) -> Tone {
    match alert_type {
        Some(AlertType::Emergency) => Tone::Red,
        Some(AlertType::Distress) => Tone::Orange,
        Some(AlertType::Suspicious) => Tone::Amber,
        None => Tone::Slate,
    }
}

pub fn quality_tone(quality: Quality) -> Tone {
    match quality {
        Quality::FourK => Tone::Emerald,
        Quality::Hd => Tone::Blue,
        Quality::Sd => Tone::Slate,
    }
}

pub fn status_tone(status: FeedStatus) -> Tone {
    match status {
        FeedStatus::Live => Tone::Red,
        FeedStatus::Offline => Tone::Slate,
    }
}

/// Badge shown on a grid card.
pub fn card_status_badge(status: FeedStatus) -> &'static str {
    match status {
        FeedStatus::Live => "🔴 LIVE",
        FeedStatus::Offline => "⚫ OFFLINE",
    }
}

/// Badge shown in the expanded modal header.
pub fn modal_status_badge(status: FeedStatus) -> &'static str {
    match status {
        FeedStatus::Live => "🔴 LIVE STREAM",
        FeedStatus::Offline => "⚫ OFFLINE",
    }
}

/// "EMERGENCY ALERT" for an alerting feed.
pub fn alert_headline(feed: &CameraFeed) -> Option<String> {
    feed.has_alert
        .then_some(feed.alert_type)
        .flatten()
        .map(|t| format!("{} ALERT", t.upper()))
}

/// "⚠️ EMERGENCY DETECTED" overlay on the expanded stream.
pub fn detection_overlay(feed: &CameraFeed) -> Option<String> {
    feed.has_alert
        .then_some(feed.alert_type)
        .flatten()
        .map(|t| format!("⚠️ {} DETECTED", t.upper()))
}

/// Buttons in the modal footer. Rendered only, none of them does anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    CaptureEvidence,
    AlertResponseTeam,
    ViewTimeline,
    CameraSettings,
    FullScreen,
}

impl ModalAction {
    pub const ALL: [ModalAction; 5] = [
        ModalAction::CaptureEvidence,
        ModalAction::AlertResponseTeam,
        ModalAction::ViewTimeline,
        ModalAction::CameraSettings,
        ModalAction::FullScreen,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModalAction::CaptureEvidence => "Capture Evidence",
            ModalAction::AlertResponseTeam => "Alert Response Team",
            ModalAction::ViewTimeline => "View Timeline",
            ModalAction::CameraSettings => "Camera Settings",
            ModalAction::FullScreen => "Full Screen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamControl {
    Play,
    Pause,
}

impl StreamControl {
    pub const ALL: [StreamControl; 2] = [StreamControl::Play, StreamControl::Pause];

    pub fn label(&self) -> &'static str {
        match self {
            StreamControl::Play => "Play",
            StreamControl::Pause => "Pause",
        }
    }
}

/// Expanded-feed modal.
///
/// `Closed -> open -> Open(feed) -> close -> Closed` is the whole machine. The
/// selected feed lives inside the `Open` variant, so "modal open" and
/// "selected feed" can never disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeedModal {
    #[default]
    Closed,
    Open(CameraFeed),
}

impl FeedModal {
    /// Opens the modal on `feed`. Only valid from `Closed`; returns whether
    /// the transition happened.
    pub fn open(&mut self, feed: &CameraFeed) -> bool {
        match self {
            FeedModal::Closed => {
                *self = FeedModal::Open(feed.clone());
                true
            }
            FeedModal::Open(_) => false,
        }
    }

    /// Clears the selection and closes in one step. Closing a closed modal is
    /// a no-op.
    pub fn close(&mut self) {
        *self = FeedModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, FeedModal::Open(_))
    }

    pub fn selected_feed(&self) -> Option<&CameraFeed> {
        match self {
            FeedModal::Open(feed) => Some(feed),
            FeedModal::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_open_then_close_for_every_feed() {
        let registry = Registry::seed().unwrap();
        for feed in registry.feeds() {
            let mut modal = FeedModal::default();
            assert!(modal.open(feed));
            assert!(modal.is_open());
            assert_eq!(modal.selected_feed().map(|f| f.id.as_str()), Some(feed.id.as_str()));

            modal.close();
            assert!(!modal.is_open());
            assert!(modal.selected_feed().is_none());
        }
    }

    #[test]
    fn test_open_is_ignored_while_open() {
        let registry = Registry::seed().unwrap();
        let mut modal = FeedModal::default();
        assert!(modal.open(&registry.feeds()[0]));
        assert!(!modal.open(&registry.feeds()[1]));
        assert_eq!(modal.selected_feed().unwrap().id, "1");
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut modal = FeedModal::Closed;
        modal.close();
        assert_eq!(modal, FeedModal::Closed);
    }

    #[test]
    fn test_alert_tones() {
        assert_eq!(alert_tone(Some(AlertType::Emergency)), Tone::Red);
        assert_eq!(alert_tone(Some(AlertType::Distress)), Tone::Orange);
        assert_eq!(alert_tone(Some(AlertType::Suspicious)), Tone::Amber);
        assert_eq!(alert_tone(None), Tone::Slate);
    }

    #[test]
    fn test_quality_tones() {
        assert_eq!(quality_tone(Quality::FourK), Tone::Emerald);
        assert_eq!(quality_tone(Quality::Hd), Tone::Blue);
        assert_eq!(quality_tone(Quality::Sd), Tone::Slate);
    }

    #[test]
    fn test_headlines_only_for_alerting_feeds() {
        let registry = Registry::seed().unwrap();
        let emergency = registry.feed("6").unwrap();
        assert_eq!(alert_headline(emergency).as_deref(), Some("EMERGENCY ALERT"));
        assert_eq!(detection_overlay(emergency).as_deref(), Some("⚠️ EMERGENCY DETECTED"));

        let quiet = registry.feed("2").unwrap();
        assert!(alert_headline(quiet).is_none());
        assert!(detection_overlay(quiet).is_none());
    }
}
