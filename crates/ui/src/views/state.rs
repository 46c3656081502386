use services::{CaptureError, LoginError, QuizServiceError};
use voice_core::NavError;

/// User-facing failures. Details go to the log; the view shows fixed copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    ConsentRequired,
    SignInFailed,
    MicrophoneUnavailable,
    RecordingFailed,
    AnalysisFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ViewError::ConsentRequired => "Consent Required",
            ViewError::SignInFailed => "Sign-in Failed",
            ViewError::MicrophoneUnavailable | ViewError::RecordingFailed => "Recording Error",
            ViewError::AnalysisFailed => "Analysis Error",
            ViewError::Unknown => "Error",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ConsentRequired => {
                "Please agree to the terms and consent for audio recording."
            }
            ViewError::SignInFailed => "We couldn't sign you in. Please try again.",
            ViewError::MicrophoneUnavailable => {
                "Unable to access microphone. Please check permissions."
            }
            ViewError::RecordingFailed => "The recording could not be saved. Please try again.",
            ViewError::AnalysisFailed => {
                "We couldn't analyze this response. Your recording was kept; please try again."
            }
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&LoginError> for ViewError {
    fn from(err: &LoginError) -> Self {
        match err {
            LoginError::Navigation(NavError::ConsentRequired) => ViewError::ConsentRequired,
            LoginError::Auth(_) => ViewError::SignInFailed,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&CaptureError> for ViewError {
    fn from(err: &CaptureError) -> Self {
        match err {
            CaptureError::PermissionDenied | CaptureError::DeviceUnavailable(_) => {
                ViewError::MicrophoneUnavailable
            }
            _ => ViewError::RecordingFailed,
        }
    }
}

impl From<&QuizServiceError> for ViewError {
    fn from(err: &QuizServiceError) -> Self {
        match err {
            QuizServiceError::Capture(err) => ViewError::from(err),
            QuizServiceError::Analysis(_) => ViewError::AnalysisFailed,
            _ => ViewError::Unknown,
        }
    }
}
