use async_trait::async_trait;
use tracing::debug;
use voice_core::model::{AnswerMarker, AudioHandle, RunId};
use voice_core::{AnalysisTicket, Clock};

use crate::error::AnalysisError;
use crate::latency::SimulatedLatency;

/// What gets sent for analysis: one recording for one prompt of one run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub run_id: RunId,
    pub prompt_index: usize,
    pub audio: &'a AudioHandle,
}

impl<'a> From<&'a AnalysisTicket> for AnalysisRequest<'a> {
    fn from(ticket: &'a AnalysisTicket) -> Self {
        Self {
            run_id: ticket.run_id,
            prompt_index: ticket.prompt_index,
            audio: &ticket.audio,
        }
    }
}

/// Speech analysis capability.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns `AnalysisError` when the backend cannot produce a result.
    async fn analyze(&self, request: AnalysisRequest<'_>) -> Result<AnswerMarker, AnalysisError>;
}

/// Waits a fixed delay and returns a placeholder marker. Performs no computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAnalysis {
    latency: SimulatedLatency,
    clock: Clock,
}

impl SimulatedAnalysis {
    #[must_use]
    pub fn new(latency: SimulatedLatency, clock: Clock) -> Self {
        Self { latency, clock }
    }
}

#[async_trait]
impl AnalysisBackend for SimulatedAnalysis {
    async fn analyze(&self, request: AnalysisRequest<'_>) -> Result<AnswerMarker, AnalysisError> {
        debug!(
            run = %request.run_id,
            prompt = request.prompt_index,
            audio = ?request.audio,
            "simulated analysis"
        );
        self.latency.wait().await;
        Ok(AnswerMarker::processed(request.prompt_index, self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use voice_core::time::{fixed_clock, fixed_now};

    use super::*;

    #[tokio::test]
    async fn simulated_analysis_marks_the_requested_prompt() {
        let backend = SimulatedAnalysis::new(SimulatedLatency::none(), fixed_clock());
        let audio = AudioHandle::new(vec![0; 44], 16_000, Duration::from_secs(1));
        let marker = backend
            .analyze(AnalysisRequest {
                run_id: RunId::new_random(),
                prompt_index: 3,
                audio: &audio,
            })
            .await
            .unwrap();
        assert_eq!(marker.prompt_index(), 3);
        assert_eq!(marker.label(), "Answer 4 processed");
        assert_eq!(marker.answered_at(), fixed_now());
    }
}
