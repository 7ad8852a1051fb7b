use crate::simulate::TimerKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct TimerHealth {
    pub timer: TimerKind,
    pub period_ms: u64,
    pub ticks: u64,
    pub last_tick: Option<DateTime<Utc>>,
    pub started_at: DateTime<Utc>,
}

impl TimerHealth {
    pub fn new(timer: TimerKind, period: Duration, started_at: DateTime<Utc>) -> Self {
        Self {
            timer,
            period_ms: period.as_millis() as u64,
            ticks: 0,
            last_tick: None,
            started_at,
        }
    }

    pub fn record_tick(&mut self, at: DateTime<Utc>) {
        self.ticks += 1;
        self.last_tick = Some(at);
    }

    /// Milliseconds since the last tick, or since start if it never ticked.
    pub fn silence_ms(&self, now: DateTime<Utc>) -> i64 {
        let reference = self.last_tick.unwrap_or(self.started_at);
        now.signed_duration_since(reference).num_milliseconds().max(0)
    }

    pub fn status(&self, now: DateTime<Utc>) -> HealthStatus {
        let silence = self.silence_ms(now);
        let period = self.period_ms.max(1) as i64;
        if silence <= period * 2 {
            HealthStatus::Ok
        } else if silence <= period * 5 {
            HealthStatus::Warn
        } else {
            HealthStatus::Fail
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Ok,
    Warn,
    Fail,
}

impl HealthStatus {
    fn rank(&self) -> u8 {
        match self {
            HealthStatus::Fail => 0,
            HealthStatus::Warn => 1,
            HealthStatus::Ok => 2,
        }
    }

    /// Worst of all statuses; `Ok` when there are none.
    pub fn worst(statuses: impl IntoIterator<Item = HealthStatus>) -> HealthStatus {
        statuses
            .into_iter()
            .min_by_key(|s| s.rank())
            .unwrap_or(HealthStatus::Ok)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimerHealthReport {
    #[serde(flatten)]
    pub health: TimerHealth,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallHealth {
    pub status: HealthStatus,
    pub timers: Vec<TimerHealthReport>,
    pub uptime_seconds: u64,
}

impl OverallHealth {
    pub fn from_timers(timers: Vec<TimerHealth>, now: DateTime<Utc>, uptime_seconds: u64) -> Self {
        let timers: Vec<TimerHealthReport> = timers
            .into_iter()
            .map(|health| {
                let status = health.status(now);
                TimerHealthReport { health, status }
            })
            .collect();
        Self {
            status: HealthStatus::worst(timers.iter().map(|t| t.status)),
            timers,
            uptime_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_degrades_with_silence() {
        let start = Utc::now();
        let mut h = TimerHealth::new(TimerKind::AlertMetrics, Duration::from_secs(15), start);

        assert_eq!(h.status(start + chrono::Duration::seconds(20)), HealthStatus::Ok);
        assert_eq!(h.status(start + chrono::Duration::seconds(45)), HealthStatus::Warn);
        assert_eq!(h.status(start + chrono::Duration::seconds(90)), HealthStatus::Fail);

        h.record_tick(start + chrono::Duration::seconds(85));
        assert_eq!(h.ticks, 1);
        assert_eq!(h.status(start + chrono::Duration::seconds(90)), HealthStatus::Ok);
    }

    #[test]
    fn test_overall_takes_worst() {
        let start = Utc::now();
        let now = start + chrono::Duration::seconds(4);
        let timers = vec![
            TimerHealth::new(TimerKind::ClockTick, Duration::from_secs(1), start),
            TimerHealth::new(TimerKind::DistressMetrics, Duration::from_secs(10), start),
        ];
        let overall = OverallHealth::from_timers(timers, now, 4);
        assert_eq!(overall.timers[0].status, HealthStatus::Warn);
        assert_eq!(overall.timers[1].status, HealthStatus::Ok);
        assert_eq!(overall.status, HealthStatus::Warn);
    }

    #[test]
    fn test_no_timers_is_ok() {
        assert_eq!(HealthStatus::worst([]), HealthStatus::Ok);
    }
}
