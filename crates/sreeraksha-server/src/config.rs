use anyhow::Context;
use sreeraksha_core::simulate::TimerKind;
use std::time::Duration;

#[derive(clap::Args, Debug, Clone)]
pub struct TimerArgs {
    /// Header clock refresh interval (e.g., "1s")
    #[arg(long, default_value = "1s")]
    pub clock_interval: String,
    /// Alert analytics walk interval
    #[arg(long, default_value = "15s")]
    pub alert_interval: String,
    /// Threat panel walk interval
    #[arg(long, default_value = "10s")]
    pub distress_interval: String,
    /// Seed for the metric random walks (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub http_addr: Option<String>,
    pub clock_period: Duration,
    pub alert_period: Duration,
    pub distress_period: Duration,
    pub seed: Option<u64>,
}

impl DashboardConfig {
    pub fn from_args(http_addr: Option<String>, timers: &TimerArgs) -> anyhow::Result<Self> {
        let clock_period = parse_period(&timers.clock_interval)
            .context("Invalid clock interval format (e.g., '1s', '500ms')")?;
        let alert_period = parse_period(&timers.alert_interval)
            .context("Invalid alert interval format (e.g., '15s', '1m')")?;
        let distress_period = parse_period(&timers.distress_interval)
            .context("Invalid distress interval format (e.g., '10s', '1m')")?;

        Ok(Self {
            http_addr,
            clock_period,
            alert_period,
            distress_period,
            seed: timers.seed,
        })
    }

    pub fn period(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::ClockTick => self.clock_period,
            TimerKind::AlertMetrics => self.alert_period,
            TimerKind::DistressMetrics => self.distress_period,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            http_addr: None,
            clock_period: TimerKind::ClockTick.default_period(),
            alert_period: TimerKind::AlertMetrics.default_period(),
            distress_period: TimerKind::DistressMetrics.default_period(),
            seed: None,
        }
    }
}

/// Longest accepted timer interval.
pub const MAX_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

fn parse_period(s: &str) -> anyhow::Result<Duration> {
    let period = parse_duration(s)?;
    if period.is_zero() {
        anyhow::bail!("interval must be greater than zero");
    }
    if period > MAX_PERIOD {
        anyhow::bail!("interval must be at most {:?}", MAX_PERIOD);
    }
    Ok(period)
}

pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Ok(Duration::from_millis(ms.parse()?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Ok(Duration::from_secs(secs.parse()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let mins: u64 = mins.parse()?;
        let secs = mins
            .checked_mul(60)
            .ok_or_else(|| anyhow::anyhow!("{} minutes is out of range", mins))?;
        Ok(Duration::from_secs(secs))
    } else {
        // Bare number means seconds
        Ok(Duration::from_secs(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(clock: &str, alert: &str, distress: &str) -> TimerArgs {
        TimerArgs {
            clock_interval: clock.to_string(),
            alert_interval: alert.to_string(),
            distress_interval: distress.to_string(),
            seed: Some(3),
        }
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("15s").unwrap(), Duration::from_secs(15));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration(" 7 ").unwrap(), Duration::from_secs(7));
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn test_defaults_match_timer_periods() {
        let config = DashboardConfig::from_args(None, &args("1s", "15s", "10s")).unwrap();
        for kind in TimerKind::ALL {
            assert_eq!(config.period(kind), kind.default_period());
        }
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_huge_intervals_are_rejected() {
        assert!(parse_duration("307445734561825861m").is_err());
        assert_eq!(parse_duration("1440m").unwrap(), MAX_PERIOD);

        assert!(DashboardConfig::from_args(None, &args("1s", "1440m", "10s")).is_ok());
        let err = DashboardConfig::from_args(None, &args("1s", "86401s", "10s")).unwrap_err();
        assert!(format!("{:#}", err).contains("alert interval"));
        let err = DashboardConfig::from_args(None, &args("1s", "15s", "18446744073709551615")).unwrap_err();
        assert!(format!("{:#}", err).contains("distress interval"));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = DashboardConfig::from_args(None, &args("0s", "15s", "10s")).unwrap_err();
        assert!(format!("{:#}", err).contains("clock interval"));
    }
}
