use dioxus::prelude::*;
use voice_core::{NavAction, PageKind, Session};

use crate::app::nav;
use crate::views::{TherapistDashboardView, UserDashboardView, VoiceQuizView};
use crate::vm::map_nav_bar;

/// Application shell: navigation bar plus exactly one page.
#[component]
pub fn AppShell() -> Element {
    let session = use_context::<Signal<Session>>();
    let page_kind = session.read().page_kind();

    rsx! {
        div { class: "shell",
            NavigationBar {}
            main { class: "shell-page",
                {match page_kind {
                    Some(PageKind::UserDashboard) => rsx! { UserDashboardView {} },
                    Some(PageKind::TherapistDashboard) => rsx! { TherapistDashboardView {} },
                    Some(PageKind::VoiceQuiz) => rsx! { VoiceQuizView {} },
                    Some(PageKind::Placeholder(message)) => rsx! { PlaceholderView { message } },
                    None => rsx! {},
                }}
            }
        }
    }
}

#[component]
fn NavigationBar() -> Element {
    let session = use_context::<Signal<Session>>();
    let vm = map_nav_bar(&session.read());

    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-brand",
                div { class: "brand-mark", "♥" }
                div {
                    h1 { "Voice Analysis" }
                    p { class: "muted", "{vm.portal_label}" }
                }
            }
            div { class: "nav-items",
                for item in vm.items {
                    button {
                        key: "{item.label}",
                        class: if item.active { "btn nav-item active" } else { "btn nav-item" },
                        r#type: "button",
                        onclick: move |_| {
                            nav(session, NavAction::Navigate(item.page));
                        },
                        "{item.label}"
                    }
                }
            }
            button {
                class: "btn btn-ghost nav-logout",
                r#type: "button",
                onclick: move |_| {
                    nav(session, NavAction::Logout);
                },
                "Logout"
            }
        }
    }
}

#[component]
fn PlaceholderView(message: &'static str) -> Element {
    rsx! {
        div { class: "page placeholder muted", "{message}" }
    }
}
