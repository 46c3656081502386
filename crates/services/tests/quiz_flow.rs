use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use voice_core::model::AudioHandle;
use voice_core::time::fixed_clock;
use voice_core::RecordingState;
use services::{
    AppServices, AudioCapture, CaptureError, CaptureStream, MicPermission, QuizServiceError,
    SimulatedAnalysis, SimulatedAuthenticator, SimulatedLatency, SimulatedMicrophone,
    SimulationSettings, SubmitOutcome,
};

/// Simulated microphone that counts open streams.
#[derive(Default)]
struct CountingMic {
    inner: SimulatedMicrophone,
    open: AtomicUsize,
}

#[async_trait]
impl AudioCapture for CountingMic {
    async fn acquire(&self) -> Result<CaptureStream, CaptureError> {
        let stream = self.inner.acquire().await?;
        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(stream)
    }

    fn release(&self, stream: CaptureStream) -> Result<AudioHandle, CaptureError> {
        self.open.fetch_sub(1, Ordering::SeqCst);
        self.inner.release(stream)
    }

    fn abandon(&self, stream: CaptureStream) {
        self.open.fetch_sub(1, Ordering::SeqCst);
        self.inner.abandon(stream);
    }
}

fn services_with(mic: Arc<CountingMic>) -> AppServices {
    AppServices::with_backends(
        SimulationSettings::immediate(),
        Arc::new(SimulatedAuthenticator::default()),
        mic,
        Arc::new(SimulatedAnalysis::new(SimulatedLatency::none(), fixed_clock())),
    )
    .unwrap()
}

#[tokio::test]
async fn five_answers_complete_the_run() {
    let mic = Arc::new(CountingMic::default());
    let quiz = services_with(Arc::clone(&mic)).quiz();
    let mut session = quiz.start_run();

    for expected_next in 1..5 {
        quiz.start_recording(&mut session).await.unwrap();
        assert!(quiz.stop_recording(&mut session).unwrap());
        let outcome = quiz.submit_for_analysis(&mut session).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Next { prompt_index: expected_next });
        assert_eq!(session.state(), RecordingState::Idle);
    }

    quiz.start_recording(&mut session).await.unwrap();
    quiz.stop_recording(&mut session).unwrap();
    let outcome = quiz.submit_for_analysis(&mut session).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Complete { answers: 5 });

    let run = session.run();
    assert!(run.is_complete());
    assert_eq!(run.answers().len(), 5);
    assert_eq!(run.answers()[4].label(), "Answer 5 processed");
    assert_eq!(mic.open.load(Ordering::SeqCst), 0);

    let err = quiz.start_recording(&mut session).await.unwrap_err();
    assert!(matches!(err, QuizServiceError::Quiz(_)));
}

#[tokio::test]
async fn denied_microphone_leaves_run_idle() {
    let settings = SimulationSettings::immediate().with_microphone(MicPermission::Denied);
    let quiz = AppServices::simulated(settings, fixed_clock()).unwrap().quiz();
    let mut session = quiz.start_run();

    let err = quiz.start_recording(&mut session).await.unwrap_err();
    assert!(err.is_capture_denied());
    assert_eq!(session.state(), RecordingState::Idle);
    assert!(session.run().audio().is_none());
    assert!(!session.holds_capture());
}

#[tokio::test]
async fn leaving_mid_recording_releases_microphone() {
    let mic = Arc::new(CountingMic::default());
    let quiz = services_with(Arc::clone(&mic)).quiz();
    let mut session = quiz.start_run();

    let started = quiz.start_recording(&mut session).await.unwrap();
    assert_eq!(mic.open.load(Ordering::SeqCst), 1);

    drop(session);
    assert_eq!(mic.open.load(Ordering::SeqCst), 0);

    // The meter notices its guard is gone and stops right away.
    let mut levels = Vec::new();
    started.sampler.run(|level| levels.push(level)).await;
    assert_eq!(levels.last(), Some(&0));
}

#[tokio::test]
async fn discard_keeps_prompt_and_allows_retake() {
    let mic = Arc::new(CountingMic::default());
    let quiz = services_with(mic).quiz();
    let mut session = quiz.start_run();

    quiz.start_recording(&mut session).await.unwrap();
    quiz.stop_recording(&mut session).unwrap();
    quiz.discard(&mut session).unwrap();
    assert_eq!(session.state(), RecordingState::Idle);
    assert_eq!(session.run().prompt_index(), 0);
    assert!(session.run().audio().is_none());

    quiz.start_recording(&mut session).await.unwrap();
    assert_eq!(session.state(), RecordingState::Recording);
}
