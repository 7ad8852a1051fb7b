use crate::simulate::TimerKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("unknown feed: {0}")]
    UnknownFeed(String),

    #[error("unknown camera: {0}")]
    UnknownCamera(String),

    #[error("feed {id} has hasAlert={has_alert} but alertType present={has_type}")]
    InconsistentFeedAlert {
        id: String,
        has_alert: bool,
        has_type: bool,
    },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("timer {0:?} needs a non-zero period")]
    ZeroPeriod(TimerKind),
}
