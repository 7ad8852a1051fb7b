use crate::analytics::AlertMetrics;
use crate::clock::Clock;
use crate::distress::DistressMetrics;
use crate::registry::Registry;
use crate::simulate::TimerKind;
use chrono::{DateTime, Local};
use rand::Rng;
use std::sync::Arc;

/// Live page state: the immutable registries plus everything the timers
/// mutate. Each timer touches only its own field.
#[derive(Debug, Clone)]
pub struct Dashboard {
    registry: Arc<Registry>,
    pub alert_metrics: AlertMetrics,
    pub distress_metrics: DistressMetrics,
    pub current_time: DateTime<Local>,
}

impl Dashboard {
    pub fn new(registry: Arc<Registry>, clock: &dyn Clock) -> Self {
        Self {
            registry,
            alert_metrics: AlertMetrics::default(),
            distress_metrics: DistressMetrics::default(),
            current_time: clock.now(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn on_timer<R: Rng + ?Sized>(&mut self, kind: TimerKind, rng: &mut R, clock: &dyn Clock) {
        match kind {
            TimerKind::ClockTick => self.current_time = clock.now(),
            TimerKind::AlertMetrics => self.alert_metrics.step(rng),
            TimerKind::DistressMetrics => self.distress_metrics.step(rng),
        }
    }
}
