//! Fixed sample content shown by the app. Nothing here is computed or persisted.

use chrono::{NaiveDate, NaiveTime};
use voice_core::model::{
    ClientId, ClientTrend, IndicatorStatus, PromptList, PromptListError, RiskLevel, RiskScore,
    Trend,
};

const QUIZ_PROMPTS: [&str; 5] = [
    "How are you feeling today? Please describe your current mood and energy level.",
    "Can you tell me about something that brought you joy this week?",
    "Describe any challenges or stressors you've been experiencing lately.",
    "How has your sleep been over the past few days?",
    "What are you looking forward to in the coming week?",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

//
// ─── USER DASHBOARD ───────────────────────────────────────────────────────────
//

/// One explainable factor behind the latest risk assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub label: &'static str,
    pub value: &'static str,
    pub status: IndicatorStatus,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisPoint {
    pub date: NaiveDate,
    pub score: RiskScore,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDashboardData {
    pub first_name: &'static str,
    pub latest_analysis: NaiveDate,
    pub risk_score: RiskScore,
    pub indicators: Vec<Indicator>,
    pub recent: Vec<AnalysisPoint>,
}

//
// ─── THERAPIST DASHBOARD ──────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    Stable,
    NeedsAttention,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSummary {
    pub id: ClientId,
    pub name: &'static str,
    pub last_score: RiskScore,
    pub trend: ClientTrend,
    pub last_analysis: NaiveDate,
    pub status: ClientStatus,
}

impl ClientSummary {
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        self.last_score.level()
    }

    /// Case-insensitive substring match on the client name. Empty queries match everyone.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub time: NaiveTime,
    pub client: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TherapistDashboardData {
    pub total_clients: u32,
    pub high_risk: u32,
    pub improving: u32,
    pub clients: Vec<ClientSummary>,
    pub appointments: Vec<Appointment>,
}

impl TherapistDashboardData {
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a ClientSummary> + 'a {
        self.clients.iter().filter(move |client| client.matches(query))
    }
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

/// Content source for prompts and dashboards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentCatalog;

impl ContentCatalog {
    /// # Errors
    ///
    /// Never fails for the built-in list; the error type is kept for alternative sources.
    pub fn quiz_prompts(&self) -> Result<PromptList, PromptListError> {
        PromptList::from_texts(QUIZ_PROMPTS)
    }

    #[must_use]
    pub fn user_dashboard(&self) -> UserDashboardData {
        UserDashboardData {
            first_name: "Alex",
            latest_analysis: date(2024, 1, 15),
            risk_score: RiskScore::clamped(35),
            indicators: vec![
                Indicator {
                    label: "Speech Tone",
                    value: "Normal variation",
                    status: IndicatorStatus::Positive,
                    description: "Good emotional expression in voice",
                },
                Indicator {
                    label: "Speech Patterns",
                    value: "Some hesitation",
                    status: IndicatorStatus::Neutral,
                    description: "Slight increase in pauses detected",
                },
                Indicator {
                    label: "Word Choice",
                    value: "Positive sentiment",
                    status: IndicatorStatus::Positive,
                    description: "Generally optimistic language patterns",
                },
                Indicator {
                    label: "Energy Level",
                    value: "Moderate energy",
                    status: IndicatorStatus::Neutral,
                    description: "Voice energy within normal range",
                },
            ],
            recent: vec![
                AnalysisPoint {
                    date: date(2024, 1, 15),
                    score: RiskScore::clamped(28),
                    trend: Trend::Down,
                },
                AnalysisPoint {
                    date: date(2024, 1, 10),
                    score: RiskScore::clamped(35),
                    trend: Trend::Up,
                },
                AnalysisPoint {
                    date: date(2024, 1, 5),
                    score: RiskScore::clamped(32),
                    trend: Trend::Stable,
                },
                AnalysisPoint {
                    date: date(2023, 12, 30),
                    score: RiskScore::clamped(40),
                    trend: Trend::Up,
                },
            ],
        }
    }

    #[must_use]
    pub fn therapist_dashboard(&self) -> TherapistDashboardData {
        TherapistDashboardData {
            total_clients: 24,
            high_risk: 3,
            improving: 12,
            clients: vec![
                ClientSummary {
                    id: ClientId::new(1),
                    name: "Alex Johnson",
                    last_score: RiskScore::clamped(35),
                    trend: ClientTrend::Improving,
                    last_analysis: date(2024, 1, 15),
                    status: ClientStatus::Stable,
                },
                ClientSummary {
                    id: ClientId::new(2),
                    name: "Sarah Chen",
                    last_score: RiskScore::clamped(65),
                    trend: ClientTrend::Concerning,
                    last_analysis: date(2024, 1, 14),
                    status: ClientStatus::NeedsAttention,
                },
                ClientSummary {
                    id: ClientId::new(3),
                    name: "Michael Davis",
                    last_score: RiskScore::clamped(28),
                    trend: ClientTrend::Stable,
                    last_analysis: date(2024, 1, 13),
                    status: ClientStatus::Stable,
                },
                ClientSummary {
                    id: ClientId::new(4),
                    name: "Emma Wilson",
                    last_score: RiskScore::clamped(78),
                    trend: ClientTrend::Declining,
                    last_analysis: date(2024, 1, 12),
                    status: ClientStatus::Urgent,
                },
            ],
            appointments: vec![
                Appointment {
                    time: time(9, 0),
                    client: "Alex Johnson",
                    kind: "Follow-up",
                },
                Appointment {
                    time: time(11, 30),
                    client: "Sarah Chen",
                    kind: "Check-in",
                },
                Appointment {
                    time: time(14, 0),
                    client: "New Client",
                    kind: "Initial Assessment",
                },
                Appointment {
                    time: time(16, 30),
                    client: "Emma Wilson",
                    kind: "Crisis Support",
                },
            ],
        }
    }
}
