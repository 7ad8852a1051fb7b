use crate::config::DashboardConfig;
use crate::state::AppState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sreeraksha_core::simulate::TimerKind;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

/// Running interval timers. Dropping the set cancels them all.
pub struct TimerSet {
    handles: Vec<(TimerKind, JoinHandle<()>)>,
}

impl TimerSet {
    /// Starts one task per timer. Each gets its own rng so the walks stay
    /// independent; with a seed the streams are derived from it.
    pub fn spawn(state: &AppState, config: &DashboardConfig) -> Self {
        state.register_timers(config);

        let handles = TimerKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let period = config.period(kind);
                let rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                    None => StdRng::from_entropy(),
                };
                info!("Starting {} timer every {:?}", kind.name(), period);
                let handle = tokio::spawn(run_timer(state.clone(), kind, period, rng));
                (kind, handle)
            })
            .collect();

        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn shutdown(&mut self) {
        for (kind, handle) in self.handles.drain(..) {
            handle.abort();
            info!("Stopped {} timer", kind.name());
        }
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_timer(state: AppState, kind: TimerKind, period: Duration, mut rng: StdRng) {
    // setInterval semantics: first fire one full period after start
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        state.apply_timer(kind, &mut rng).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> DashboardConfig {
        DashboardConfig {
            http_addr: None,
            clock_period: Duration::from_millis(5),
            alert_period: Duration::from_millis(5),
            distress_period: Duration::from_millis(5),
            seed: Some(1),
        }
    }

    #[tokio::test]
    async fn test_timers_tick_and_stop_on_drop() {
        let state = AppState::default();
        let timers = TimerSet::spawn(&state, &fast_config());
        assert_eq!(timers.len(), 3);

        tokio::time::sleep(Duration::from_millis(60)).await;
        drop(timers);
        // let aborted tasks unwind
        tokio::time::sleep(Duration::from_millis(10)).await;

        let ticks: Vec<u64> = TimerKind::ALL
            .iter()
            .map(|k| state.timers.get(k).map(|h| h.ticks).unwrap_or(0))
            .collect();
        assert!(ticks.iter().all(|&t| t > 0), "every timer should have fired: {:?}", ticks);

        tokio::time::sleep(Duration::from_millis(40)).await;
        let after: Vec<u64> = TimerKind::ALL
            .iter()
            .map(|k| state.timers.get(k).map(|h| h.ticks).unwrap_or(0))
            .collect();
        assert_eq!(ticks, after);
    }
}
