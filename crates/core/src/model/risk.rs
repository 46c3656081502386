use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RiskScoreError {
    #[error("risk score must be between 0 and 100, got {0}")]
    OutOfRange(u8),
}

//
// ─── SCORE & LEVEL ────────────────────────────────────────────────────────────
//

/// Display-only depression risk score on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: u8 = 100;

    /// # Errors
    ///
    /// Returns `RiskScoreError::OutOfRange` for values above 100.
    pub fn new(value: u8) -> Result<Self, RiskScoreError> {
        if value > Self::MAX {
            return Err(RiskScoreError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Clamp out-of-range values to the top of the scale.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX { Self(Self::MAX) } else { Self(value) }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn level(self) -> RiskLevel {
        RiskLevel::from_score(self)
    }

    /// Fraction of the full scale, used for gauges and progress bars.
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

/// Fixed thresholds: 0-40 low, 41-70 moderate, 71-100 high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const LOW_MAX: u8 = 40;
    pub const MODERATE_MAX: u8 = 70;

    #[must_use]
    pub fn from_score(score: RiskScore) -> Self {
        match score.value() {
            0..=Self::LOW_MAX => RiskLevel::Low,
            41..=Self::MODERATE_MAX => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Guidance shown under the gauge on the user dashboard.
    #[must_use]
    pub fn guidance(self) -> &'static str {
        match self {
            RiskLevel::Low => "Your mental wellness indicators are within healthy ranges.",
            RiskLevel::Moderate => "Some indicators suggest monitoring your mental wellness.",
            RiskLevel::High => "Consider reaching out for professional support.",
        }
    }

    /// Theme token used for colouring the level.
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            RiskLevel::Low => "success",
            RiskLevel::Moderate => "warning",
            RiskLevel::High => "destructive",
        }
    }
}

//
// ─── TRENDS ───────────────────────────────────────────────────────────────────
//

/// Direction of a score compared to the previous analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Therapist-facing summary of a client's trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientTrend {
    Improving,
    Stable,
    Concerning,
    Declining,
}

impl ClientTrend {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ClientTrend::Improving => "improving",
            ClientTrend::Stable => "stable",
            ClientTrend::Concerning => "concerning",
            ClientTrend::Declining => "declining",
        }
    }

    #[must_use]
    pub fn is_worsening(self) -> bool {
        matches!(self, ClientTrend::Concerning | ClientTrend::Declining)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Positive,
    Neutral,
    Negative,
}

impl IndicatorStatus {
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            IndicatorStatus::Positive => "success",
            IndicatorStatus::Neutral => "warning",
            IndicatorStatus::Negative => "destructive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u8) -> RiskLevel {
        RiskScore::new(value).unwrap().level()
    }

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        assert_eq!(level(0), RiskLevel::Low);
        assert_eq!(level(40), RiskLevel::Low);
        assert_eq!(level(41), RiskLevel::Moderate);
        assert_eq!(level(70), RiskLevel::Moderate);
        assert_eq!(level(71), RiskLevel::High);
        assert_eq!(level(100), RiskLevel::High);
    }

    #[test]
    fn score_above_scale_is_rejected() {
        assert_eq!(RiskScore::new(101), Err(RiskScoreError::OutOfRange(101)));
    }

    #[test]
    fn clamped_caps_at_max() {
        assert_eq!(RiskScore::clamped(250).value(), 100);
        assert_eq!(RiskScore::clamped(35).value(), 35);
    }

    #[test]
    fn fraction_scales_to_unit() {
        let score = RiskScore::new(35).unwrap();
        assert!((score.fraction() - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn worsening_trends() {
        assert!(ClientTrend::Declining.is_worsening());
        assert!(ClientTrend::Concerning.is_worsening());
        assert!(!ClientTrend::Improving.is_worsening());
    }
}
