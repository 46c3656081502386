use std::sync::Arc;

use tracing::{debug, info, warn};
use voice_core::model::{AnswerMarker, PromptList};
use voice_core::{AnalysisTicket, QuizEvent, QuizRun, RecordingState};

use crate::analysis::{AnalysisBackend, AnalysisRequest};
use crate::capture::{ActiveCapture, AudioCapture};
use crate::error::{AnalysisError, CaptureError, QuizServiceError};
use crate::level_meter::{LevelMeter, LevelSampler, MeterGuard};

/// A quiz run plus the resources it holds while recording.
///
/// Dropping the session (for example when the quiz page is left) releases the capture device
/// and stops the level meter.
pub struct QuizSession {
    run: QuizRun,
    capture: Option<ActiveCapture>,
    meter: Option<MeterGuard>,
}

impl QuizSession {
    #[must_use]
    pub fn new(run: QuizRun) -> Self {
        Self {
            run,
            capture: None,
            meter: None,
        }
    }

    #[must_use]
    pub fn run(&self) -> &QuizRun {
        &self.run
    }

    #[must_use]
    pub fn state(&self) -> RecordingState {
        self.run.state()
    }

    #[must_use]
    pub fn holds_capture(&self) -> bool {
        self.capture.is_some()
    }

    fn apply(&mut self, event: QuizEvent) -> Result<(), QuizServiceError> {
        self.run = self.run.apply(event)?;
        Ok(())
    }

    fn release_recording_resources(&mut self) -> Option<ActiveCapture> {
        self.meter = None;
        self.capture.take()
    }
}

impl Drop for QuizSession {
    fn drop(&mut self) {
        if self.capture.is_some() {
            info!(run = %self.run.id(), "quiz left while recording; releasing microphone");
        }
        drop(self.release_recording_resources());
    }
}

/// Returned by a successful `start_recording`; drive `sampler` to animate the level meter.
#[derive(Debug)]
pub struct RecordingStarted {
    pub sampler: LevelSampler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Analysis done; the run moved on to this prompt.
    Next { prompt_index: usize },
    /// Every prompt has been answered.
    Complete { answers: usize },
}

/// Orchestrates a quiz run against the capture device and the analysis backend.
#[derive(Clone)]
pub struct QuizService {
    prompts: PromptList,
    capture: Arc<dyn AudioCapture>,
    analysis: Arc<dyn AnalysisBackend>,
    meter: LevelMeter,
}

impl QuizService {
    #[must_use]
    pub fn new(
        prompts: PromptList,
        capture: Arc<dyn AudioCapture>,
        analysis: Arc<dyn AnalysisBackend>,
        meter: LevelMeter,
    ) -> Self {
        Self {
            prompts,
            capture,
            analysis,
            meter,
        }
    }

    #[must_use]
    pub fn prompts(&self) -> &PromptList {
        &self.prompts
    }

    /// Start a fresh run over the configured prompts.
    #[must_use]
    pub fn start_run(&self) -> QuizSession {
        let run = QuizRun::new(self.prompts.clone());
        info!(run = %run.id(), prompts = run.prompt_count(), "quiz run started");
        QuizSession::new(run)
    }

    /// Check that recording may start, without touching any device.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` unless the run is idle.
    pub fn ensure_can_record(&self, session: &QuizSession) -> Result<(), QuizServiceError> {
        session.run.apply(QuizEvent::RecordingStarted)?;
        Ok(())
    }

    /// Acquire the capture device.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError` when the device cannot be acquired.
    pub async fn acquire_capture(&self) -> Result<ActiveCapture, CaptureError> {
        ActiveCapture::acquire(Arc::clone(&self.capture))
            .await
            .inspect_err(|err| warn!(%err, "microphone unavailable"))
    }

    /// Move the run to `Recording` with an already acquired device.
    ///
    /// If the run cannot start recording the capture is dropped and therefore released.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` unless the run is idle.
    pub fn attach_capture(
        &self,
        session: &mut QuizSession,
        capture: ActiveCapture,
    ) -> Result<RecordingStarted, QuizServiceError> {
        session.apply(QuizEvent::RecordingStarted)?;
        let (guard, sampler) = self.meter.start();
        session.capture = Some(capture);
        session.meter = Some(guard);
        Ok(RecordingStarted { sampler })
    }

    /// `startRecording`: check, acquire, attach.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` unless the run is idle and
    /// `QuizServiceError::Capture` when the microphone cannot be acquired; the run stays idle.
    pub async fn start_recording(
        &self,
        session: &mut QuizSession,
    ) -> Result<RecordingStarted, QuizServiceError> {
        self.ensure_can_record(session)?;
        let capture = self.acquire_capture().await?;
        self.attach_capture(session, capture)
    }

    /// `stopRecording`: finalize the recording and release the device.
    ///
    /// Returns `Ok(false)` without doing anything when the run is not recording.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Capture` when the recording cannot be finalized; the device
    /// is still released and the run goes back to idle.
    pub fn stop_recording(&self, session: &mut QuizSession) -> Result<bool, QuizServiceError> {
        if session.state() != RecordingState::Recording {
            return Ok(false);
        }

        let Some(capture) = session.release_recording_resources() else {
            session.apply(QuizEvent::RecordingAborted)?;
            return Err(CaptureError::DeviceUnavailable("no active capture".into()).into());
        };

        match capture.finish() {
            Ok(audio) => {
                session.apply(QuizEvent::RecordingStopped(audio))?;
                Ok(true)
            }
            Err(err) => {
                warn!(%err, "recording could not be finalized");
                session.apply(QuizEvent::RecordingAborted)?;
                Err(err.into())
            }
        }
    }

    /// `discard`: drop the recording and stay on the same prompt.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` unless a recording is waiting for review.
    pub fn discard(&self, session: &mut QuizSession) -> Result<(), QuizServiceError> {
        session.apply(QuizEvent::Discarded)?;
        debug!(prompt = session.run.prompt_index(), "recording discarded");
        Ok(())
    }

    /// First half of `submitForAnalysis`: move to `Processing` and hand out a ticket.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` unless a recording is waiting for review, which also
    /// rejects a second submit while one is processing.
    pub fn begin_analysis(
        &self,
        session: &mut QuizSession,
    ) -> Result<AnalysisTicket, QuizServiceError> {
        session.apply(QuizEvent::AnalysisStarted)?;
        Ok(session.run.analysis_ticket()?)
    }

    /// Call the analysis backend. Does not borrow the session.
    ///
    /// # Errors
    ///
    /// Returns the backend's `AnalysisError`.
    pub async fn analyze(&self, ticket: &AnalysisTicket) -> Result<AnswerMarker, AnalysisError> {
        self.analysis.analyze(AnalysisRequest::from(ticket)).await
    }

    /// Second half of `submitForAnalysis`: record the result.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` with `StaleTicket` if the ticket no longer matches the
    /// run, or `QuizServiceError::Analysis` after a backend failure (the run returns to
    /// `Recorded` so the answer can be resubmitted).
    pub fn finish_analysis(
        &self,
        session: &mut QuizSession,
        ticket: &AnalysisTicket,
        result: Result<AnswerMarker, AnalysisError>,
    ) -> Result<SubmitOutcome, QuizServiceError> {
        session.run.check_ticket(ticket)?;

        let marker = match result {
            Ok(marker) => marker,
            Err(err) => {
                warn!(%err, prompt = ticket.prompt_index, "analysis failed");
                session.apply(QuizEvent::AnalysisFailed)?;
                return Err(err.into());
            }
        };

        session.apply(QuizEvent::AnalysisFinished(marker))?;
        let run = &session.run;
        if run.is_complete() {
            info!(run = %run.id(), answers = run.answers().len(), "quiz run complete");
            Ok(SubmitOutcome::Complete {
                answers: run.answers().len(),
            })
        } else {
            Ok(SubmitOutcome::Next {
                prompt_index: run.prompt_index(),
            })
        }
    }

    /// `submitForAnalysis` in one call.
    ///
    /// # Errors
    ///
    /// See [`QuizService::begin_analysis`] and [`QuizService::finish_analysis`].
    pub async fn submit_for_analysis(
        &self,
        session: &mut QuizSession,
    ) -> Result<SubmitOutcome, QuizServiceError> {
        let ticket = self.begin_analysis(session)?;
        let result = self.analyze(&ticket).await;
        self.finish_analysis(session, &ticket, result)
    }
}
