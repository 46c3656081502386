use std::sync::Arc;

use voice_core::model::PromptListError;

use crate::Clock;
use crate::analysis::{AnalysisBackend, SimulatedAnalysis};
use crate::auth::{Authenticator, SimulatedAuthenticator};
use crate::capture::{AudioCapture, SimulatedMicrophone};
use crate::catalog::ContentCatalog;
use crate::latency::SimulatedLatency;
use crate::level_meter::LevelMeter;
use crate::login_service::LoginService;
use crate::quiz_service::QuizService;
use crate::settings::SimulationSettings;

/// Assembles app-facing services from the simulated collaborators.
#[derive(Clone)]
pub struct AppServices {
    settings: SimulationSettings,
    catalog: ContentCatalog,
    login: Arc<LoginService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by the simulated authenticator, microphone and analyzer.
    ///
    /// # Errors
    ///
    /// Returns `PromptListError` if the catalog has no quiz prompts.
    pub fn simulated(settings: SimulationSettings, clock: Clock) -> Result<Self, PromptListError> {
        let auth: Arc<dyn Authenticator> = Arc::new(SimulatedAuthenticator::new(
            SimulatedLatency::new(settings.login_delay),
        ));
        let capture: Arc<dyn AudioCapture> = Arc::new(SimulatedMicrophone::new(
            settings.microphone,
            settings.sample_rate,
        ));
        let analysis: Arc<dyn AnalysisBackend> = Arc::new(SimulatedAnalysis::new(
            SimulatedLatency::new(settings.analysis_delay),
            clock,
        ));
        Self::with_backends(settings, auth, capture, analysis)
    }

    /// Build services around caller-supplied collaborators.
    ///
    /// # Errors
    ///
    /// Returns `PromptListError` if the catalog has no quiz prompts.
    pub fn with_backends(
        settings: SimulationSettings,
        auth: Arc<dyn Authenticator>,
        capture: Arc<dyn AudioCapture>,
        analysis: Arc<dyn AnalysisBackend>,
    ) -> Result<Self, PromptListError> {
        let catalog = ContentCatalog;
        let meter = LevelMeter::new(settings.level_tick, settings.level_ceiling);
        let quiz = QuizService::new(catalog.quiz_prompts()?, capture, analysis, meter);

        Ok(Self {
            settings,
            catalog,
            login: Arc::new(LoginService::new(auth)),
            quiz: Arc::new(quiz),
        })
    }

    #[must_use]
    pub fn settings(&self) -> SimulationSettings {
        self.settings
    }

    #[must_use]
    pub fn catalog(&self) -> ContentCatalog {
        self.catalog
    }

    #[must_use]
    pub fn login(&self) -> Arc<LoginService> {
        Arc::clone(&self.login)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[cfg(test)]
mod tests {
    use voice_core::time::fixed_clock;

    use super::*;

    #[test]
    fn simulated_services_use_catalog_prompts() {
        let services = AppServices::simulated(SimulationSettings::immediate(), fixed_clock()).unwrap();
        assert_eq!(services.quiz().prompts().len(), 5);
        assert_eq!(services.settings(), SimulationSettings::immediate());
    }
}
