use std::cell::RefCell;
use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use voice_core::model::{AudioHandle, AudioId};
use voice_core::{QuizRun, RecordingState};

use crate::vm::time_fmt::format_duration;

/// Bars in the recording level meter.
pub const LEVEL_BARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptDot {
    Answered,
    Current,
    Pending,
}

impl PromptDot {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            PromptDot::Answered => "dot dot-answered",
            PromptDot::Current => "dot dot-current",
            PromptDot::Pending => "dot dot-pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingVm {
    pub audio_src: Rc<str>,
    pub duration_str: String,
}

/// Data URI of the latest recording. Re-encoded only when a different recording shows up.
#[derive(Debug, Default)]
pub struct AudioSrcCache {
    entry: RefCell<Option<(AudioId, Rc<str>)>>,
}

impl AudioSrcCache {
    #[must_use]
    pub fn src(&self, audio: &AudioHandle) -> Rc<str> {
        let mut entry = self.entry.borrow_mut();
        if let Some((id, src)) = entry.as_ref() {
            if *id == audio.id() {
                return Rc::clone(src);
            }
        }
        let src: Rc<str> = audio_data_uri(audio).into();
        *entry = Some((audio.id(), Rc::clone(&src)));
        src
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub state: RecordingState,
    pub question_badge: String,
    pub question_title: String,
    pub prompt_text: String,
    pub progress_percent: u32,
    pub progress_label: String,
    pub dots: Vec<PromptDot>,
    pub recording: Option<RecordingVm>,
}

impl QuizVm {
    #[must_use]
    pub fn from_run(run: &QuizRun, audio_cache: &AudioSrcCache) -> Self {
        let total = run.prompt_count();
        let index = run.prompt_index();
        let answered = run.answers().len();
        let dots = (0..total)
            .map(|i| {
                if i < answered {
                    PromptDot::Answered
                } else if i == index {
                    PromptDot::Current
                } else {
                    PromptDot::Pending
                }
            })
            .collect();

        Self {
            state: run.state(),
            question_badge: format!("Question {} of {total}", index + 1),
            question_title: format!("Question {}", index + 1),
            prompt_text: run.current_prompt().unwrap_or_default().to_string(),
            progress_percent: progress_percent(index, total),
            progress_label: format!("Progress: {answered} of {total} completed"),
            dots,
            recording: run.audio().map(|audio| RecordingVm {
                audio_src: audio_cache.src(audio),
                duration_str: format_duration(audio.duration()),
            }),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == RecordingState::Complete
    }
}

/// Share of the run reached when showing prompt `index`, counting the current prompt.
#[must_use]
pub fn progress_percent(index: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (index + 1).min(total) * 100 / total;
    u32::try_from(percent).unwrap_or(100)
}

/// Heights in pixels of the meter bars for one level sample.
#[must_use]
pub fn level_bar_heights(level: u8) -> [u32; LEVEL_BARS] {
    let mut heights = [0; LEVEL_BARS];
    for (i, height) in heights.iter_mut().enumerate() {
        let offset = u32::try_from(i).unwrap_or(0) * 10;
        *height = ((u32::from(level) + offset) % 40).max(8);
    }
    heights
}

/// Inline `data:` URI so the webview can play the recording without a file.
#[must_use]
pub fn audio_data_uri(audio: &AudioHandle) -> String {
    format!("data:audio/wav;base64,{}", STANDARD.encode(audio.wav_bytes()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use voice_core::QuizEvent;
    use voice_core::model::{AnswerMarker, PromptList};
    use voice_core::time::fixed_now;

    use super::*;

    fn run() -> QuizRun {
        QuizRun::new(PromptList::from_texts(["a", "b", "c", "d", "e"]).unwrap())
    }

    fn audio() -> AudioHandle {
        AudioHandle::new(b"RIFF".to_vec(), 16_000, Duration::from_secs(3))
    }

    #[test]
    fn fresh_run_shows_first_question() {
        let vm = QuizVm::from_run(&run(), &AudioSrcCache::default());
        assert_eq!(vm.question_badge, "Question 1 of 5");
        assert_eq!(vm.progress_percent, 20);
        assert_eq!(vm.progress_label, "Progress: 0 of 5 completed");
        assert_eq!(vm.dots[0], PromptDot::Current);
        assert_eq!(vm.dots[1], PromptDot::Pending);
        assert!(vm.recording.is_none());
    }

    #[test]
    fn recorded_answer_is_playable_and_dots_advance() {
        let recorded = run()
            .apply(QuizEvent::RecordingStarted)
            .and_then(|r| r.apply(QuizEvent::RecordingStopped(audio())))
            .unwrap();
        let cache = AudioSrcCache::default();
        let vm = QuizVm::from_run(&recorded, &cache);
        let recording = vm.recording.expect("audio to review");
        assert_eq!(&*recording.audio_src, "data:audio/wav;base64,UklGRg==");
        assert_eq!(recording.duration_str, "0:03");

        let answered = recorded
            .apply(QuizEvent::AnalysisStarted)
            .and_then(|r| {
                r.apply(QuizEvent::AnalysisFinished(AnswerMarker::processed(0, fixed_now())))
            })
            .unwrap();
        let vm = QuizVm::from_run(&answered, &cache);
        assert_eq!(vm.dots[0], PromptDot::Answered);
        assert_eq!(vm.dots[1], PromptDot::Current);
        assert_eq!(vm.progress_percent, 40);
    }

    #[test]
    fn rerenders_reuse_the_encoded_recording() {
        let cache = AudioSrcCache::default();
        let first = audio();
        let src = cache.src(&first);
        assert!(Rc::ptr_eq(&src, &cache.src(&first.clone())));

        let retake = audio();
        let retake_src = cache.src(&retake);
        assert!(!Rc::ptr_eq(&src, &retake_src));
        assert_eq!(src, retake_src);
    }

    #[test]
    fn meter_bars_stay_in_range() {
        for level in [0, 37, 100] {
            let heights = level_bar_heights(level);
            assert!(heights.iter().all(|h| (8..40).contains(h)));
        }
        assert_eq!(level_bar_heights(0)[0], 8);
        assert_eq!(level_bar_heights(0)[2], 20);
    }
}
