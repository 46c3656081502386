use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{debug, warn};
use voice_core::model::Page;
use voice_core::{NavAction, RecordingState, Session};

use services::{QuizService, QuizSession, RecordingStarted};

use crate::app::nav;
use crate::context::AppContext;
#[cfg(test)]
use crate::views::test_harness::ViewTestHandles;
use crate::views::ViewError;
use crate::vm::{AudioSrcCache, QuizVm, level_bar_heights};

const COMPLETED_STEPS: [&str; 3] = ["Speech Analysis", "Sentiment Processing", "Risk Assessment"];
const PROCESSING_STEPS: [&str; 3] = [
    "Speech-to-text transcription",
    "Sentiment analysis",
    "Voice pattern recognition",
];

/// Everything the quiz page can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QuizIntent {
    Start,
    Stop,
    Discard,
    Submit,
    ViewResults,
}

/// Page-local state shared by the intent handlers.
#[derive(Clone, Copy)]
struct QuizPage {
    run: Signal<QuizSession>,
    level: Signal<u8>,
    acquiring: Signal<bool>,
    error: Signal<Option<ViewError>>,
}

impl QuizPage {
    fn start(mut self, quiz: Arc<QuizService>) {
        if *self.acquiring.peek() {
            return;
        }
        if let Err(err) = quiz.ensure_can_record(&self.run.peek()) {
            debug!(%err, "start ignored");
            return;
        }
        self.error.set(None);
        self.acquiring.set(true);
        spawn(async move {
            let acquired = quiz.acquire_capture().await;
            self.acquiring.set(false);
            let capture = match acquired {
                Ok(capture) => capture,
                Err(err) => {
                    self.error.set(Some(ViewError::from(&err)));
                    return;
                }
            };
            let started = quiz.attach_capture(&mut self.run.write(), capture);
            match started {
                Ok(RecordingStarted { sampler }) => {
                    let mut level = self.level;
                    sampler.run(move |value| level.set(value)).await;
                }
                Err(err) => {
                    warn!(%err, "recording could not start");
                    self.error.set(Some(ViewError::from(&err)));
                }
            }
        });
    }

    fn stop(mut self, quiz: &QuizService) {
        if let Err(err) = quiz.stop_recording(&mut self.run.write()) {
            self.error.set(Some(ViewError::from(&err)));
        }
        self.level.set(0);
    }

    fn discard(mut self, quiz: &QuizService) {
        if let Err(err) = quiz.discard(&mut self.run.write()) {
            debug!(%err, "discard ignored");
        }
        self.error.set(None);
    }

    fn submit(mut self, quiz: Arc<QuizService>) {
        let ticket = match quiz.begin_analysis(&mut self.run.write()) {
            Ok(ticket) => ticket,
            Err(err) => {
                debug!(%err, "submit ignored");
                return;
            }
        };
        self.error.set(None);
        spawn(async move {
            let result = quiz.analyze(&ticket).await;
            if let Err(err) = quiz.finish_analysis(&mut self.run.write(), &ticket, result) {
                self.error.set(Some(ViewError::from(&err)));
            }
        });
    }
}

/// Voice quiz page. Owns one `QuizSession`; leaving the page drops it, which releases the
/// microphone and stops the level meter.
#[component]
pub fn VoiceQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<Session>>();

    let page = QuizPage {
        run: use_signal({
            let quiz = ctx.quiz();
            move || quiz.start_run()
        }),
        level: use_signal(|| 0_u8),
        acquiring: use_signal(|| false),
        error: use_signal(|| None::<ViewError>),
    };
    let audio_cache = use_hook(|| Rc::new(AudioSrcCache::default()));

    let dispatch = use_callback(move |intent: QuizIntent| {
        let quiz = ctx.quiz();
        match intent {
            QuizIntent::Start => page.start(quiz),
            QuizIntent::Stop => page.stop(&quiz),
            QuizIntent::Discard => page.discard(&quiz),
            QuizIntent::Submit => page.submit(quiz),
            QuizIntent::ViewResults => nav(session, NavAction::Navigate(Page::Dashboard)),
        }
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ViewTestHandles>() {
            handles.register_quiz(dispatch);
        }
    });

    let vm = QuizVm::from_run(page.run.read().run(), &audio_cache);
    let error_copy = page.error.cloned().map(|err| (err.title(), err.message()));
    let dot_classes: Vec<&'static str> = vm.dots.iter().map(|dot| dot.class()).collect();

    if vm.is_complete() {
        return rsx! {
            div { class: "page quiz",
                section { class: "card quiz-complete",
                    div { class: "brand-mark tone-success", "✓" }
                    h1 { "Analysis Complete!" }
                    p { class: "muted",
                        "Your voice analysis has been processed. The AI is now generating your personalized mental health insights."
                    }
                    ul { class: "step-list",
                        for step in COMPLETED_STEPS {
                            li { key: "{step}", class: "step done", span { "{step}" } span { class: "tone-success", "✓" } }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::ViewResults),
                        "View Your Results →"
                    }
                }
            }
        };
    }

    let bars = level_bar_heights(page.level.cloned());
    let starting = page.acquiring.cloned();

    rsx! {
        div { class: "page quiz",
            header { class: "quiz-header",
                h1 { "Voice Analysis Quiz" }
                span { class: "badge badge-outline", "{vm.question_badge}" }
            }
            div { class: "progress", div { class: "progress-fill", style: "width: {vm.progress_percent}%" } }

            div { class: "grid grid-2",
                section { class: "card",
                    h2 { "{vm.question_title}" }
                    div { class: "prompt-box", p { class: "prompt-text", "{vm.prompt_text}" } }
                    ul { class: "muted small tips",
                        li { "Speak naturally and take your time" }
                        li { "Aim for 30-60 seconds per response" }
                        li { "Your voice patterns help us understand your mental state" }
                    }
                }

                section { class: "card recorder",
                    h2 { "Voice Recording" }

                    if let Some((title, message)) = error_copy {
                        div { class: "toast toast-error",
                            strong { "{title}" }
                            p { "{message}" }
                        }
                    }

                    {match vm.state {
                        RecordingState::Idle => rsx! {
                            div { class: "recorder-icon", "🎤" }
                            p { class: "muted", "Click to start recording your response" }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: starting,
                                onclick: move |_| dispatch.call(QuizIntent::Start),
                                if starting { "Starting..." } else { "Start Recording" }
                            }
                        },
                        RecordingState::Recording => rsx! {
                            div { class: "recorder-icon recording", "●" }
                            p { class: "tone-destructive strong", "Recording..." }
                            p { class: "muted small", "Speak clearly into your microphone" }
                            div { class: "level-meter",
                                for (i, height) in bars.iter().enumerate() {
                                    div { key: "{i}", class: "level-bar", style: "height: {height}px" }
                                }
                            }
                            button { class: "btn btn-destructive", r#type: "button", onclick: move |_| dispatch.call(QuizIntent::Stop), "■ Stop Recording" }
                        },
                        RecordingState::Recorded => rsx! {
                            div { class: "recorder-icon tone-success", "✓" }
                            p { class: "tone-success strong", "Recording Complete" }
                            p { class: "muted small", "Review your audio and submit for analysis" }
                            if let Some(recording) = vm.recording.as_ref() {
                                audio { class: "playback", controls: true, src: "{recording.audio_src}" }
                                span { class: "muted small", "{recording.duration_str}" }
                            }
                            div { class: "button-row",
                                button { class: "btn btn-outline", r#type: "button", onclick: move |_| dispatch.call(QuizIntent::Discard), "Re-record" }
                                button { class: "btn btn-primary grow", r#type: "button", onclick: move |_| dispatch.call(QuizIntent::Submit), "Analyze Response" }
                            }
                        },
                        RecordingState::Processing => rsx! {
                            div { class: "recorder-icon spinner" }
                            p { class: "strong", "Processing Audio..." }
                            p { class: "muted small", "AI is analyzing your speech patterns, tone, and content" }
                            ul { class: "step-list",
                                for step in PROCESSING_STEPS {
                                    li { key: "{step}", class: "step pending", span { class: "spinner small" } span { "{step}" } }
                                }
                            }
                        },
                        RecordingState::Complete => rsx! {},
                    }}
                }
            }

            section { class: "card quiz-progress",
                span { class: "muted small", "{vm.progress_label}" }
                div { class: "dots",
                    for (i, dot_class) in dot_classes.iter().enumerate() {
                        span { key: "{i}", class: "{dot_class}" }
                    }
                }
            }
        }
    }
}
