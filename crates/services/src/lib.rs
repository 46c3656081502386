#![forbid(unsafe_code)]

pub mod analysis;
pub mod app_services;
pub mod auth;
pub mod capture;
pub mod catalog;
pub mod error;
pub mod latency;
pub mod level_meter;
pub mod login_service;
pub mod quiz_service;
pub mod settings;

pub use voice_core::Clock;

pub use analysis::{AnalysisBackend, AnalysisRequest, SimulatedAnalysis};
pub use app_services::AppServices;
pub use auth::{Authenticator, SimulatedAuthenticator};
pub use capture::{ActiveCapture, AudioCapture, CaptureStream, MicPermission, SimulatedMicrophone};
pub use catalog::{ContentCatalog, TherapistDashboardData, UserDashboardData};
pub use error::{AnalysisError, AuthError, CaptureError, LoginError, QuizServiceError};
pub use latency::SimulatedLatency;
pub use level_meter::{LevelMeter, LevelSampler, MeterGuard};
pub use login_service::{LoginService, PendingLogin};
pub use quiz_service::{QuizService, QuizSession, RecordingStarted, SubmitOutcome};
pub use settings::SimulationSettings;
