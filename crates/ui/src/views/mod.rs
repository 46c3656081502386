mod login;
mod quiz;
mod role_select;
mod shell;
mod state;
mod therapist_dashboard;
mod user_dashboard;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use login::LoginView;
pub use quiz::VoiceQuizView;
pub use role_select::RoleSelectView;
pub use shell::AppShell;
pub use state::ViewError;
pub use therapist_dashboard::TherapistDashboardView;
pub use user_dashboard::UserDashboardView;
