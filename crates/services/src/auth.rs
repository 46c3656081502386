use async_trait::async_trait;
use tracing::debug;
use voice_core::model::Role;

use crate::error::AuthError;
use crate::latency::SimulatedLatency;

/// Remote sign-in capability.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError` when the sign-in is refused or the service cannot be reached.
    async fn authenticate(&self, role: Role) -> Result<(), AuthError>;
}

/// Accepts every sign-in after a fixed delay. No credentials are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAuthenticator {
    latency: SimulatedLatency,
}

impl SimulatedAuthenticator {
    #[must_use]
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, role: Role) -> Result<(), AuthError> {
        debug!(?role, delay_ms = self.latency.delay().as_millis(), "simulated sign-in");
        self.latency.wait().await;
        Ok(())
    }
}
