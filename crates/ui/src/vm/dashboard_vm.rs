use services::catalog::{
    AnalysisPoint, Appointment, ClientStatus, ClientSummary, Indicator, TherapistDashboardData,
    UserDashboardData,
};
use voice_core::model::{RiskScore, Trend};

use crate::vm::time_fmt::{format_clock, format_numeric_date, format_short_date};

/// Circumference of the gauge ring (radius 56).
pub const GAUGE_CIRCUMFERENCE: f64 = 351.86;

//
// ─── USER ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq)]
pub struct RiskGaugeVm {
    pub score: u8,
    pub level_label: String,
    pub guidance: &'static str,
    pub tone: &'static str,
    pub dash_array: String,
}

impl From<RiskScore> for RiskGaugeVm {
    fn from(score: RiskScore) -> Self {
        let level = score.level();
        let filled = score.fraction() * GAUGE_CIRCUMFERENCE;
        Self {
            score: score.value(),
            level_label: format!("{} Risk", level.label()),
            guidance: level.guidance(),
            tone: level.tone(),
            dash_array: format!("{filled:.2} {GAUGE_CIRCUMFERENCE}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentAnalysisVm {
    pub date_str: String,
    pub score_label: String,
    pub trend_class: &'static str,
    pub trend_symbol: &'static str,
}

impl From<&AnalysisPoint> for RecentAnalysisVm {
    fn from(point: &AnalysisPoint) -> Self {
        // A falling score is good news.
        let (trend_class, trend_symbol) = match point.trend {
            Trend::Up => ("trend-up", "↑"),
            Trend::Down => ("trend-down", "↓"),
            Trend::Stable => ("trend-stable", "→"),
        };
        Self {
            date_str: format_short_date(point.date),
            score_label: format!("Score: {}", point.score.value()),
            trend_class,
            trend_symbol,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorVm {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
}

impl From<&Indicator> for IndicatorVm {
    fn from(indicator: &Indicator) -> Self {
        Self {
            label: indicator.label,
            value: indicator.value,
            description: indicator.description,
            tone: indicator.status.tone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserDashboardVm {
    pub greeting: String,
    pub gauge: RiskGaugeVm,
    pub latest_str: String,
    pub recent: Vec<RecentAnalysisVm>,
    pub indicators: Vec<IndicatorVm>,
}

#[must_use]
pub fn map_user_dashboard(data: &UserDashboardData) -> UserDashboardVm {
    UserDashboardVm {
        greeting: format!("Welcome back, {}!", data.first_name),
        gauge: RiskGaugeVm::from(data.risk_score),
        latest_str: format_short_date(data.latest_analysis),
        recent: data.recent.iter().map(RecentAnalysisVm::from).collect(),
        indicators: data.indicators.iter().map(IndicatorVm::from).collect(),
    }
}

//
// ─── THERAPIST ────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub label: &'static str,
    pub value: String,
    pub caption: &'static str,
    pub tone: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientRowVm {
    pub key: u32,
    pub name: &'static str,
    pub initials: String,
    pub last_analysis_str: String,
    pub score: u8,
    pub trend_label: &'static str,
    pub trend_worsening: bool,
    pub risk_label: String,
    pub risk_tone: &'static str,
    pub status_class: &'static str,
}

impl From<&ClientSummary> for ClientRowVm {
    fn from(client: &ClientSummary) -> Self {
        let level = client.risk_level();
        let initials = client
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect();
        let status_class = match client.status {
            ClientStatus::Stable => "status-stable",
            ClientStatus::NeedsAttention => "status-attention",
            ClientStatus::Urgent => "status-urgent",
        };
        Self {
            key: client.id.value(),
            name: client.name,
            initials,
            last_analysis_str: format!("Last analysis: {}", format_numeric_date(client.last_analysis)),
            score: client.last_score.value(),
            trend_label: client.trend.label(),
            trend_worsening: client.trend.is_worsening(),
            risk_label: format!("{} Risk", level.label()),
            risk_tone: level.tone(),
            status_class,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentVm {
    pub time_str: String,
    pub client: &'static str,
    pub kind: &'static str,
}

impl From<&Appointment> for AppointmentVm {
    fn from(appointment: &Appointment) -> Self {
        Self {
            time_str: format_clock(appointment.time),
            client: appointment.client,
            kind: appointment.kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TherapistDashboardVm {
    pub stats: Vec<StatTileVm>,
    pub clients: Vec<ClientRowVm>,
    pub appointments: Vec<AppointmentVm>,
}

/// Map the therapist dashboard, keeping only clients whose name matches `query`.
#[must_use]
pub fn map_therapist_dashboard(data: &TherapistDashboardData, query: &str) -> TherapistDashboardVm {
    let stats = vec![
        StatTileVm {
            label: "Total Clients",
            value: data.total_clients.to_string(),
            caption: "Active this month",
            tone: "default",
        },
        StatTileVm {
            label: "High Risk",
            value: data.high_risk.to_string(),
            caption: "Require attention",
            tone: "destructive",
        },
        StatTileVm {
            label: "Improving",
            value: data.improving.to_string(),
            caption: "Positive trends",
            tone: "success",
        },
        StatTileVm {
            label: "Today",
            value: data.appointments.len().to_string(),
            caption: "Appointments",
            tone: "default",
        },
    ];

    TherapistDashboardVm {
        stats,
        clients: data.search(query).map(ClientRowVm::from).collect(),
        appointments: data.appointments.iter().map(AppointmentVm::from).collect(),
    }
}
