//! Voice quiz recorder state machine.
//!
//! A run walks a fixed prompt list one prompt at a time:
//! `Idle -> Recording -> Recorded -> Processing -> Idle (next prompt) | Complete`.
//! Events describe things that already happened (capture acquired, analysis returned);
//! the async work itself belongs to the services layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{AnswerMarker, AudioHandle, PromptList, RunId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot apply {event} while {from:?}")]
    InvalidTransition {
        from: RecordingState,
        event: &'static str,
    },
    #[error("quiz run already completed")]
    Completed,
    #[error("analysis result does not belong to the current prompt")]
    StaleTicket,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
    Recorded,
    Processing,
    Complete,
}

impl RecordingState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RecordingState::Idle => "idle",
            RecordingState::Recording => "recording",
            RecordingState::Recorded => "recorded",
            RecordingState::Processing => "processing",
            RecordingState::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// The capture device was acquired.
    RecordingStarted,
    /// Capture stopped and produced a playable recording.
    RecordingStopped(AudioHandle),
    /// Capture ended without a usable recording.
    RecordingAborted,
    /// "Re-record": drop the recording, stay on the same prompt.
    Discarded,
    AnalysisStarted,
    AnalysisFinished(AnswerMarker),
    /// The analysis backend reported an error; the recording is kept for resubmission.
    AnalysisFailed,
}

impl QuizEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::RecordingStarted => "recording_started",
            QuizEvent::RecordingStopped(_) => "recording_stopped",
            QuizEvent::RecordingAborted => "recording_aborted",
            QuizEvent::Discarded => "discarded",
            QuizEvent::AnalysisStarted => "analysis_started",
            QuizEvent::AnalysisFinished(_) => "analysis_finished",
            QuizEvent::AnalysisFailed => "analysis_failed",
        }
    }
}

/// Proof that analysis was started for one prompt of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub run_id: RunId,
    pub prompt_index: usize,
    pub audio: AudioHandle,
}

/// One traversal of the prompt list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRun {
    id: RunId,
    prompts: PromptList,
    prompt_index: usize,
    state: RecordingState,
    answers: Vec<AnswerMarker>,
    audio: Option<AudioHandle>,
}

impl QuizRun {
    #[must_use]
    pub fn new(prompts: PromptList) -> Self {
        let capacity = prompts.len();
        Self {
            id: RunId::new_random(),
            prompts,
            prompt_index: 0,
            state: RecordingState::Idle,
            answers: Vec::with_capacity(capacity),
            audio: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> RunId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> RecordingState {
        self.state
    }

    #[must_use]
    pub fn prompt_index(&self) -> usize {
        self.prompt_index
    }

    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    #[must_use]
    pub fn prompts(&self) -> &PromptList {
        &self.prompts
    }

    /// Text of the prompt being answered, `None` once complete.
    #[must_use]
    pub fn current_prompt(&self) -> Option<&str> {
        if self.is_complete() {
            return None;
        }
        self.prompts.get(self.prompt_index).map(|p| p.text())
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerMarker] {
        &self.answers
    }

    #[must_use]
    pub fn audio(&self) -> Option<&AudioHandle> {
        self.audio.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == RecordingState::Complete
    }

    /// Ticket for the analysis currently in flight.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the run is processing.
    pub fn analysis_ticket(&self) -> Result<AnalysisTicket, QuizError> {
        match (self.state, self.audio.as_ref()) {
            (RecordingState::Processing, Some(audio)) => Ok(AnalysisTicket {
                run_id: self.id,
                prompt_index: self.prompt_index,
                audio: audio.clone(),
            }),
            _ => Err(QuizError::InvalidTransition {
                from: self.state,
                event: "analysis_ticket",
            }),
        }
    }

    /// Check that a ticket still refers to this run's in-flight analysis.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::StaleTicket` for a ticket from another run or prompt.
    pub fn check_ticket(&self, ticket: &AnalysisTicket) -> Result<(), QuizError> {
        if ticket.run_id != self.id
            || ticket.prompt_index != self.prompt_index
            || self.state != RecordingState::Processing
        {
            return Err(QuizError::StaleTicket);
        }
        Ok(())
    }

    /// Apply one event and return the next run value.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` once the run is complete,
    /// `QuizError::InvalidTransition` when the event is not valid from the current state,
    /// and `QuizError::StaleTicket` for an answer that does not match the current prompt.
    pub fn apply(&self, event: QuizEvent) -> Result<QuizRun, QuizError> {
        use RecordingState as S;

        if self.is_complete() {
            return Err(QuizError::Completed);
        }

        let name = event.name();
        let mut next = self.clone();
        match (self.state, event) {
            (S::Idle, QuizEvent::RecordingStarted) => {
                next.state = S::Recording;
            }
            (S::Recording, QuizEvent::RecordingStopped(audio)) => {
                next.audio = Some(audio);
                next.state = S::Recorded;
            }
            (S::Recording, QuizEvent::RecordingAborted) => {
                next.state = S::Idle;
            }
            (S::Recorded, QuizEvent::Discarded) => {
                next.audio = None;
                next.state = S::Idle;
            }
            (S::Recorded, QuizEvent::AnalysisStarted) => {
                next.state = S::Processing;
            }
            (S::Processing, QuizEvent::AnalysisFailed) => {
                next.state = S::Recorded;
            }
            (S::Processing, QuizEvent::AnalysisFinished(marker)) => {
                if marker.prompt_index() != self.prompt_index {
                    return Err(QuizError::StaleTicket);
                }
                next.answers.push(marker);
                next.audio = None;
                if self.prompt_index + 1 < self.prompts.len() {
                    next.prompt_index += 1;
                    next.state = S::Idle;
                } else {
                    next.state = S::Complete;
                }
            }
            (from, _) => {
                return Err(QuizError::InvalidTransition { from, event: name });
            }
        }

        debug!(
            run = %self.id,
            event = name,
            from = self.state.as_str(),
            to = next.state.as_str(),
            prompt = next.prompt_index,
            answers = next.answers.len(),
            "quiz transition"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::time::fixed_now;

    fn prompts(n: usize) -> PromptList {
        PromptList::from_texts((0..n).map(|i| format!("Prompt {i}"))).unwrap()
    }

    fn audio() -> AudioHandle {
        AudioHandle::new(vec![0; 44], 16_000, Duration::from_millis(250))
    }

    fn record(run: &QuizRun) -> QuizRun {
        run.apply(QuizEvent::RecordingStarted)
            .and_then(|r| r.apply(QuizEvent::RecordingStopped(audio())))
            .unwrap()
    }

    fn answer(run: &QuizRun) -> QuizRun {
        let processing = record(run).apply(QuizEvent::AnalysisStarted).unwrap();
        let ticket = processing.analysis_ticket().unwrap();
        processing
            .apply(QuizEvent::AnalysisFinished(AnswerMarker::processed(
                ticket.prompt_index,
                fixed_now(),
            )))
            .unwrap()
    }

    #[test]
    fn new_run_starts_idle_on_first_prompt() {
        let run = QuizRun::new(prompts(5));
        assert_eq!(run.state(), RecordingState::Idle);
        assert_eq!(run.prompt_index(), 0);
        assert_eq!(run.current_prompt(), Some("Prompt 0"));
        assert!(run.answers().is_empty());
        assert!(run.audio().is_none());
    }

    #[test]
    fn five_prompts_complete_after_five_submissions() {
        let mut run = QuizRun::new(prompts(5));
        for expected in 1..=5 {
            let before = run.answers().len();
            run = answer(&run);
            assert_eq!(run.answers().len(), before + 1);
            assert_eq!(run.answers().len(), expected);
            assert!(run.audio().is_none());
            if expected < 5 {
                assert_eq!(run.state(), RecordingState::Idle);
                assert_eq!(run.prompt_index(), expected);
            }
        }
        assert!(run.is_complete());
        assert_eq!(run.current_prompt(), None);
        let order: Vec<usize> = run.answers().iter().map(AnswerMarker::prompt_index).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn complete_run_rejects_everything() {
        let run = answer(&QuizRun::new(prompts(1)));
        assert!(run.is_complete());
        assert_eq!(
            run.apply(QuizEvent::RecordingStarted).unwrap_err(),
            QuizError::Completed
        );
    }

    #[test]
    fn discard_keeps_prompt_and_answers() {
        let run = answer(&QuizRun::new(prompts(3)));
        let recorded = record(&run);
        let discarded = recorded.apply(QuizEvent::Discarded).unwrap();
        assert_eq!(discarded.state(), RecordingState::Idle);
        assert_eq!(discarded.prompt_index(), run.prompt_index());
        assert_eq!(discarded.answers(), run.answers());
        assert!(discarded.audio().is_none());
    }

    #[test]
    fn second_recording_cannot_start_while_recording() {
        let recording = QuizRun::new(prompts(2))
            .apply(QuizEvent::RecordingStarted)
            .unwrap();
        let err = recording.apply(QuizEvent::RecordingStarted).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidTransition {
                from: RecordingState::Recording,
                event: "recording_started",
            }
        );
    }

    #[test]
    fn submit_is_rejected_while_processing() {
        let processing = record(&QuizRun::new(prompts(2)))
            .apply(QuizEvent::AnalysisStarted)
            .unwrap();
        assert!(matches!(
            processing.apply(QuizEvent::AnalysisStarted),
            Err(QuizError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn recorded_cannot_skip_processing() {
        let recorded = record(&QuizRun::new(prompts(1)));
        let marker = AnswerMarker::processed(0, fixed_now());
        assert!(matches!(
            recorded.apply(QuizEvent::AnalysisFinished(marker)),
            Err(QuizError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn failed_analysis_returns_to_recorded_with_audio() {
        let processing = record(&QuizRun::new(prompts(2)))
            .apply(QuizEvent::AnalysisStarted)
            .unwrap();
        let failed = processing.apply(QuizEvent::AnalysisFailed).unwrap();
        assert_eq!(failed.state(), RecordingState::Recorded);
        assert!(failed.audio().is_some());
        assert!(failed.answers().is_empty());
    }

    #[test]
    fn answer_for_wrong_prompt_is_stale() {
        let processing = record(&QuizRun::new(prompts(3)))
            .apply(QuizEvent::AnalysisStarted)
            .unwrap();
        let marker = AnswerMarker::processed(2, fixed_now());
        assert_eq!(
            processing.apply(QuizEvent::AnalysisFinished(marker)).unwrap_err(),
            QuizError::StaleTicket
        );
    }

    #[test]
    fn ticket_from_other_run_is_stale() {
        let first = record(&QuizRun::new(prompts(2)))
            .apply(QuizEvent::AnalysisStarted)
            .unwrap();
        let second = record(&QuizRun::new(prompts(2)))
            .apply(QuizEvent::AnalysisStarted)
            .unwrap();
        let ticket = first.analysis_ticket().unwrap();
        assert!(first.check_ticket(&ticket).is_ok());
        assert_eq!(second.check_ticket(&ticket), Err(QuizError::StaleTicket));
    }

    #[test]
    fn aborted_recording_returns_to_idle() {
        let run = QuizRun::new(prompts(2))
            .apply(QuizEvent::RecordingStarted)
            .and_then(|r| r.apply(QuizEvent::RecordingAborted))
            .unwrap();
        assert_eq!(run.state(), RecordingState::Idle);
        assert!(run.audio().is_none());
    }

    #[test]
    fn ticket_requires_processing() {
        let run = QuizRun::new(prompts(1));
        assert!(run.analysis_ticket().is_err());
    }
}
