mod answer;
mod audio;
mod ids;
mod prompt;
mod risk;
mod role;

pub use answer::AnswerMarker;
pub use audio::AudioHandle;
pub use ids::{AudioId, ClientId, LoginAttempt, RunId};
pub use prompt::{Prompt, PromptList, PromptListError};
pub use risk::{ClientTrend, IndicatorStatus, RiskLevel, RiskScore, RiskScoreError, Trend};
pub use role::{Consent, Page, Role, Screen};
