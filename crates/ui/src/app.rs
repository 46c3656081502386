use dioxus::prelude::*;
use tracing::warn;
use voice_core::model::Screen;
use voice_core::{NavAction, NavError, Session};

use crate::views::{AppShell, LoginView, RoleSelectView};

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Session::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "VoiceCare" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ScreenView {}
            }
        }
    }
}

/// Renders exactly one screen for the shared `Session`.
#[component]
pub fn ScreenView() -> Element {
    let session = use_context::<Signal<Session>>();
    let screen = session.read().screen();

    match screen {
        Screen::RoleSelection => rsx! { RoleSelectView {} },
        Screen::UserLogin | Screen::TherapistLogin => rsx! { LoginView {} },
        Screen::UserApp | Screen::TherapistApp => rsx! { AppShell {} },
    }
}

/// Apply a navigator action to the shared session. Rejected actions leave it untouched.
///
/// # Errors
///
/// Returns the navigator's `NavError` when the action is not valid right now.
pub fn dispatch_nav(mut session: Signal<Session>, action: NavAction) -> Result<(), NavError> {
    let next = session.peek().apply(action)?;
    session.set(next);
    Ok(())
}

/// Click-handler form of [`dispatch_nav`]. A rejected click is logged and otherwise ignored.
pub fn nav(session: Signal<Session>, action: NavAction) {
    if let Err(err) = dispatch_nav(session, action) {
        warn!(%err, action = action.name(), "navigation rejected");
    }
}
