//! Shared error types for the services crate.

use thiserror::Error;

use voice_core::{NavError, QuizError};

/// Errors emitted by `AudioCapture` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CaptureError {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),
    #[error("failed to encode recording: {0}")]
    Encode(#[from] hound::Error),
}

/// Errors emitted by `Authenticator` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("credentials rejected: {0}")]
    Rejected(String),
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `AnalysisBackend` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("analysis backend failed: {0}")]
    Backend(String),
}

/// Errors emitted by `LoginService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoginError {
    #[error(transparent)]
    Navigation(#[from] NavError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl QuizServiceError {
    /// True when the microphone could not be acquired.
    #[must_use]
    pub fn is_capture_denied(&self) -> bool {
        matches!(self, QuizServiceError::Capture(CaptureError::PermissionDenied))
    }
}
