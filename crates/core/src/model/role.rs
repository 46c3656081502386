use serde::{Deserialize, Serialize};

/// Who is using the app. Chosen on the role selection screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Therapist,
}

impl Role {
    /// Login screen reached after picking this role.
    #[must_use]
    pub fn login_screen(self) -> Screen {
        match self {
            Role::User => Screen::UserLogin,
            Role::Therapist => Screen::TherapistLogin,
        }
    }

    /// Application shell reached after a successful login.
    #[must_use]
    pub fn app_screen(self) -> Screen {
        match self {
            Role::User => Screen::UserApp,
            Role::Therapist => Screen::TherapistApp,
        }
    }

    /// Subtitle shown under the product name in the navigation bar.
    #[must_use]
    pub fn portal_label(self) -> &'static str {
        match self {
            Role::User => "User Portal",
            Role::Therapist => "Therapist Portal",
        }
    }
}

/// Top-level view. Exactly one is rendered at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    RoleSelection,
    UserLogin,
    TherapistLogin,
    UserApp,
    TherapistApp,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::RoleSelection,
        Screen::UserLogin,
        Screen::TherapistLogin,
        Screen::UserApp,
        Screen::TherapistApp,
    ];

    #[must_use]
    pub fn is_login(self) -> bool {
        matches!(self, Screen::UserLogin | Screen::TherapistLogin)
    }

    #[must_use]
    pub fn is_app(self) -> bool {
        matches!(self, Screen::UserApp | Screen::TherapistApp)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::RoleSelection => "role_selection",
            Screen::UserLogin => "user_login",
            Screen::TherapistLogin => "therapist_login",
            Screen::UserApp => "user_app",
            Screen::TherapistApp => "therapist_app",
        }
    }
}

/// Sub-view inside an application shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    Quiz,
    Reports,
    Appointments,
    Profile,
    Clients,
    Sessions,
}

impl Page {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Quiz => "quiz",
            Page::Reports => "reports",
            Page::Appointments => "appointments",
            Page::Profile => "profile",
            Page::Clients => "clients",
            Page::Sessions => "sessions",
        }
    }
}

/// State of the consent checkbox on the user login form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consent {
    Granted,
    #[default]
    Withheld,
}

impl Consent {
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Granted } else { Self::Withheld }
    }

    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Consent::Granted)
    }
}
