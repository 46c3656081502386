mod dashboard_vm;
mod nav_vm;
mod quiz_vm;
mod time_fmt;

pub use dashboard_vm::{
    AppointmentVm, ClientRowVm, GAUGE_CIRCUMFERENCE, IndicatorVm, RecentAnalysisVm, RiskGaugeVm,
    StatTileVm, TherapistDashboardVm, UserDashboardVm, map_therapist_dashboard,
    map_user_dashboard,
};
pub use nav_vm::{NavBarVm, NavItemVm, map_nav_bar};
pub use quiz_vm::{
    AudioSrcCache, LEVEL_BARS, PromptDot, QuizVm, RecordingVm, audio_data_uri,
    level_bar_heights, progress_percent,
};
pub use time_fmt::{format_clock, format_duration, format_numeric_date, format_short_date};
