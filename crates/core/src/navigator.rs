//! Top-level screen and page navigation.
//!
//! `Session` is a plain value. Every change goes through [`Session::apply`], which either
//! returns the next value or an error; a rejected action leaves the caller's value untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{Consent, LoginAttempt, Page, Role, Screen};

/// Errors returned when an action is not valid for the current screen.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavError {
    #[error("{action} is not available on the {screen} screen")]
    InvalidAction {
        action: &'static str,
        screen: &'static str,
    },
    #[error("consent to audio recording is required before signing in")]
    ConsentRequired,
    #[error("a sign-in is already in progress")]
    LoginPending,
    #[error("sign-in result does not belong to the pending attempt")]
    StaleLogin,
}

/// User-facing actions plus the outcome of the simulated sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    SelectRole(Role),
    SubmitLogin { consent: Consent },
    /// The sign-in started by `attempt` succeeded.
    LoginCompleted { attempt: LoginAttempt },
    /// The sign-in started by `attempt` was refused; stay on the form.
    LoginFailed { attempt: LoginAttempt },
    Back,
    Navigate(Page),
    Logout,
}

impl NavAction {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NavAction::SelectRole(_) => "select_role",
            NavAction::SubmitLogin { .. } => "login",
            NavAction::LoginCompleted { .. } => "login_completed",
            NavAction::LoginFailed { .. } => "login_failed",
            NavAction::Back => "back",
            NavAction::Navigate(_) => "navigate",
            NavAction::Logout => "logout",
        }
    }
}

/// Navigation state for one app session. Nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    screen: Screen,
    role: Role,
    page: Page,
    pending_login: Option<LoginAttempt>,
    last_attempt: LoginAttempt,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Active page. Only meaningful while an application screen is shown.
    #[must_use]
    pub fn page(&self) -> Option<Page> {
        self.screen.is_app().then_some(self.page)
    }

    #[must_use]
    pub fn is_login_pending(&self) -> bool {
        self.pending_login.is_some()
    }

    /// The sign-in currently in flight, if any.
    #[must_use]
    pub fn pending_login(&self) -> Option<LoginAttempt> {
        self.pending_login
    }

    /// Page content to render for the current role and page, if inside an app shell.
    #[must_use]
    pub fn page_kind(&self) -> Option<PageKind> {
        self.page().map(|page| resolve_page(self.role, page))
    }

    /// `SubmitLogin`, also returning the attempt that the matching `LoginCompleted` or
    /// `LoginFailed` must name.
    ///
    /// # Errors
    ///
    /// Same as [`Session::apply`] with `NavAction::SubmitLogin`.
    pub fn submit_login(&self, consent: Consent) -> Result<(Session, LoginAttempt), NavError> {
        let next = self.apply(NavAction::SubmitLogin { consent })?;
        Ok((next, next.last_attempt))
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Returns `NavError` when the action is not valid from the current screen, when a user
    /// login is submitted without consent, or when a sign-in completion no longer applies.
    pub fn apply(&self, action: NavAction) -> Result<Session, NavError> {
        let next = match action {
            NavAction::SelectRole(role) => {
                self.require(action, self.screen == Screen::RoleSelection)?;
                Session {
                    screen: role.login_screen(),
                    role,
                    ..*self
                }
            }
            NavAction::SubmitLogin { consent } => {
                self.require(action, self.screen.is_login())?;
                if self.pending_login.is_some() {
                    return Err(NavError::LoginPending);
                }
                if self.screen == Screen::UserLogin && !consent.is_granted() {
                    return Err(NavError::ConsentRequired);
                }
                let attempt = self.last_attempt.next();
                Session {
                    pending_login: Some(attempt),
                    last_attempt: attempt,
                    ..*self
                }
            }
            NavAction::LoginCompleted { attempt } => {
                self.require_pending(attempt)?;
                Session {
                    screen: self.role.app_screen(),
                    page: Page::Dashboard,
                    pending_login: None,
                    ..*self
                }
            }
            NavAction::LoginFailed { attempt } => {
                self.require_pending(attempt)?;
                Session {
                    pending_login: None,
                    ..*self
                }
            }
            NavAction::Back => {
                self.require(action, self.screen.is_login())?;
                Session {
                    screen: Screen::RoleSelection,
                    pending_login: None,
                    ..*self
                }
            }
            NavAction::Navigate(page) => {
                self.require(action, self.screen.is_app())?;
                Session { page, ..*self }
            }
            NavAction::Logout => {
                self.require(action, self.screen.is_app())?;
                Session {
                    screen: Screen::RoleSelection,
                    page: Page::Dashboard,
                    pending_login: None,
                    ..*self
                }
            }
        };

        debug!(
            action = action.name(),
            from = self.screen.as_str(),
            to = next.screen.as_str(),
            page = next.page.as_str(),
            "navigation"
        );
        Ok(next)
    }

    fn require_pending(&self, attempt: LoginAttempt) -> Result<(), NavError> {
        if self.screen.is_login() && self.pending_login == Some(attempt) {
            Ok(())
        } else {
            Err(NavError::StaleLogin)
        }
    }

    fn require(&self, action: NavAction, allowed: bool) -> Result<(), NavError> {
        if allowed {
            Ok(())
        } else {
            Err(NavError::InvalidAction {
                action: action.name(),
                screen: self.screen.as_str(),
            })
        }
    }
}

//
// ─── PAGE DISPATCH ────────────────────────────────────────────────────────────
//

/// What an application shell renders for a `(role, page)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    UserDashboard,
    TherapistDashboard,
    VoiceQuiz,
    Placeholder(&'static str),
}

/// Pages that a role has no view for fall back to that role's dashboard.
#[must_use]
pub fn resolve_page(role: Role, page: Page) -> PageKind {
    match (role, page) {
        (Role::User, Page::Dashboard) => PageKind::UserDashboard,
        (Role::User, Page::Quiz) => PageKind::VoiceQuiz,
        (Role::User, Page::Reports) => PageKind::Placeholder("Reports page coming soon..."),
        (Role::User, Page::Appointments) => {
            PageKind::Placeholder("Appointments page coming soon...")
        }
        (Role::User, Page::Profile) | (Role::Therapist, Page::Profile) => {
            PageKind::Placeholder("Profile page coming soon...")
        }
        (Role::User, Page::Clients | Page::Sessions) => PageKind::UserDashboard,
        (Role::Therapist, Page::Dashboard) => PageKind::TherapistDashboard,
        (Role::Therapist, Page::Clients) => {
            PageKind::Placeholder("Client list page coming soon...")
        }
        (Role::Therapist, Page::Sessions) => {
            PageKind::Placeholder("Session notes page coming soon...")
        }
        (Role::Therapist, Page::Appointments) => {
            PageKind::Placeholder("Schedule page coming soon...")
        }
        (Role::Therapist, Page::Quiz | Page::Reports) => PageKind::TherapistDashboard,
    }
}

/// Entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
}

const USER_NAV: [NavItem; 5] = [
    NavItem {
        page: Page::Dashboard,
        label: "Dashboard",
    },
    NavItem {
        page: Page::Quiz,
        label: "Voice Quiz",
    },
    NavItem {
        page: Page::Reports,
        label: "Reports",
    },
    NavItem {
        page: Page::Appointments,
        label: "Appointments",
    },
    NavItem {
        page: Page::Profile,
        label: "Profile",
    },
];

const THERAPIST_NAV: [NavItem; 5] = [
    NavItem {
        page: Page::Dashboard,
        label: "Dashboard",
    },
    NavItem {
        page: Page::Clients,
        label: "Clients",
    },
    NavItem {
        page: Page::Sessions,
        label: "Sessions",
    },
    NavItem {
        page: Page::Appointments,
        label: "Schedule",
    },
    NavItem {
        page: Page::Profile,
        label: "Profile",
    },
];

#[must_use]
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::User => &USER_NAV,
        Role::Therapist => &THERAPIST_NAV,
    }
}
