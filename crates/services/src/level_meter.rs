//! Cosmetic input-level meter shown while recording.
//!
//! The levels are random; they only animate the recording indicator and are never used for
//! analysis. Sampling ends when the [`MeterGuard`] is dropped or the ceiling elapses,
//! whichever comes first.

use std::time::Duration;

use rand::Rng;
use tokio::sync::oneshot;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelMeter {
    tick: Duration,
    ceiling: Duration,
}

impl LevelMeter {
    #[must_use]
    pub fn new(tick: Duration, ceiling: Duration) -> Self {
        Self { tick, ceiling }
    }

    /// Create a sampler plus the guard that stops it.
    #[must_use]
    pub fn start(&self) -> (MeterGuard, LevelSampler) {
        let (stop_tx, stop_rx) = oneshot::channel();
        (
            MeterGuard { _stop: stop_tx },
            LevelSampler {
                tick: self.tick,
                ceiling: self.ceiling,
                stop: stop_rx,
            },
        )
    }
}

/// Dropping the guard stops the paired sampler.
#[derive(Debug)]
pub struct MeterGuard {
    _stop: oneshot::Sender<()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerExit {
    Stopped,
    Ceiling,
}

/// Produces a level in `0..=100` every tick until stopped.
#[derive(Debug)]
pub struct LevelSampler {
    tick: Duration,
    ceiling: Duration,
    stop: oneshot::Receiver<()>,
}

impl LevelSampler {
    /// Drive the meter, calling `on_level` for every sample and once with `0` at the end.
    pub async fn run(self, mut on_level: impl FnMut(u8)) -> SamplerExit {
        let deadline = Instant::now() + self.ceiling;
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut stop = self.stop;

        let exit = loop {
            tokio::select! {
                biased;
                _ = &mut stop => break SamplerExit::Stopped,
                () = tokio::time::sleep_until(deadline) => break SamplerExit::Ceiling,
                _ = interval.tick() => {
                    let level = rand::rng().random_range(0..=100_u8);
                    on_level(level);
                }
            }
        };

        on_level(0);
        debug!(?exit, "level meter stopped");
        exit
    }
}
