use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capture::MicPermission;

/// Knobs for the simulated collaborators.
///
/// Defaults reproduce the product mockup: 1.5 s sign-in, 3 s analysis, a 100 ms level tick that
/// stops after 10 s, 16 kHz mono capture with microphone access granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub login_delay: Duration,
    pub analysis_delay: Duration,
    pub level_tick: Duration,
    pub level_ceiling: Duration,
    pub sample_rate: u32,
    pub microphone: MicPermission,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1500),
            analysis_delay: Duration::from_millis(3000),
            level_tick: Duration::from_millis(100),
            level_ceiling: Duration::from_secs(10),
            sample_rate: 16_000,
            microphone: MicPermission::Granted,
        }
    }
}

impl SimulationSettings {
    /// Zero delays everywhere; meant for tests and scripted runs.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            login_delay: Duration::ZERO,
            analysis_delay: Duration::ZERO,
            level_tick: Duration::from_millis(1),
            level_ceiling: Duration::from_millis(20),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    #[must_use]
    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }

    #[must_use]
    pub fn with_microphone(mut self, microphone: MicPermission) -> Self {
        self.microphone = microphone;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mockup_timings() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.login_delay, Duration::from_millis(1500));
        assert_eq!(settings.analysis_delay, Duration::from_secs(3));
        assert_eq!(settings.level_tick, Duration::from_millis(100));
        assert_eq!(settings.level_ceiling, Duration::from_secs(10));
    }

    #[test]
    fn builders_override_single_fields() {
        let settings = SimulationSettings::default()
            .with_login_delay(Duration::ZERO)
            .with_microphone(MicPermission::Denied);
        assert_eq!(settings.login_delay, Duration::ZERO);
        assert_eq!(settings.microphone, MicPermission::Denied);
        assert_eq!(settings.analysis_delay, Duration::from_secs(3));
    }

    #[test]
    fn settings_serialize_for_logging() {
        let json = serde_json::to_value(SimulationSettings::immediate()).unwrap();
        assert_eq!(json["microphone"], "granted");
        assert_eq!(json["sample_rate"], 16_000);
        assert_eq!(json["login_delay"]["secs"], 0);
    }
}
