use crate::error::DashboardError;
use serde::Serialize;
use std::time::Duration;

/// The dashboard's interval timers. Each owns a disjoint slice of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    ClockTick,
    AlertMetrics,
    DistressMetrics,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [
        TimerKind::ClockTick,
        TimerKind::AlertMetrics,
        TimerKind::DistressMetrics,
    ];

    pub fn default_period(&self) -> Duration {
        match self {
            TimerKind::ClockTick => Duration::from_secs(1),
            TimerKind::AlertMetrics => Duration::from_secs(15),
            TimerKind::DistressMetrics => Duration::from_secs(10),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimerKind::ClockTick => "clock_tick",
            TimerKind::AlertMetrics => "alert_metrics",
            TimerKind::DistressMetrics => "distress_metrics",
        }
    }
}

#[derive(Debug, Clone)]
struct VirtualTimer {
    kind: TimerKind,
    period: Duration,
    next_due: Duration,
}

/// Deterministic stand-in for interval timers. Time only moves through
/// [`VirtualScheduler::advance`].
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now: Duration,
    timers: Vec<VirtualTimer>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three dashboard timers at their default periods.
    pub fn with_default_timers() -> Self {
        let mut scheduler = Self::new();
        for kind in TimerKind::ALL {
            scheduler.timers.push(VirtualTimer {
                kind,
                period: kind.default_period(),
                next_due: kind.default_period(),
            });
        }
        scheduler
    }

    /// Starts (or restarts) `kind`. First fire is one period from now.
    pub fn register(&mut self, kind: TimerKind, period: Duration) -> Result<(), DashboardError> {
        if period.is_zero() {
            return Err(DashboardError::ZeroPeriod(kind));
        }
        self.cancel(kind);
        self.timers.push(VirtualTimer {
            kind,
            period,
            next_due: self.now + period,
        });
        Ok(())
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.kind != kind);
        self.timers.len() != before
    }

    /// Teardown: nothing fires after this.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_registered(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Moves virtual time forward and returns every fire in due order.
    /// Timers due at the same instant fire in registration order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerKind> {
        let target = self.now + by;
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter_mut()
                .filter(|t| t.next_due <= target)
                .min_by_key(|t| t.next_due);
            let Some(timer) = next else { break };

            self.now = timer.next_due;
            timer.next_due += timer.period;
            fired.push(timer.kind);
        }

        self.now = target;
        fired
    }
}
