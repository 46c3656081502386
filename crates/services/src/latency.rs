use std::time::Duration;

/// Fixed delay standing in for a network round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    #[must_use]
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if self.0.is_zero() {
            return;
        }
        tokio::time::sleep(self.0).await;
    }
}
