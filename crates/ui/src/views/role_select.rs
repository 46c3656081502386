use dioxus::prelude::*;
use voice_core::model::Role;
use voice_core::{NavAction, Session};

use crate::app::nav;

struct RoleCard {
    role: Role,
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    cta: &'static str,
}

static ROLE_CARDS: [RoleCard; 2] = [
    RoleCard {
        role: Role::User,
        slug: "user",
        title: "I'm a User",
        description: "Access personalized mental health insights and support",
        features: [
            "Voice-based depression screening",
            "Personal progress tracking",
            "AI-powered insights",
            "Therapist consultations",
        ],
        cta: "Continue as User",
    },
    RoleCard {
        role: Role::Therapist,
        slug: "therapist",
        title: "I'm a Therapist",
        description: "Professional tools for client care and analysis",
        features: [
            "Client progress monitoring",
            "Session management",
            "Detailed analytics",
            "Secure note-taking",
        ],
        cta: "Continue as Therapist",
    },
];

#[component]
pub fn RoleSelectView() -> Element {
    let session = use_context::<Signal<Session>>();

    rsx! {
        div { class: "screen screen-centered",
            div { class: "role-select",
                header { class: "role-select-header",
                    div { class: "brand-mark", "♥" }
                    h1 { "Voice Depression Analysis" }
                    p { class: "muted",
                        "AI-powered mental health support through voice analysis. Professional, secure, and compassionate care."
                    }
                }
                div { class: "role-grid",
                    for card in ROLE_CARDS.iter() {
                        button {
                            key: "{card.slug}",
                            class: "role-card role-card-{card.slug}",
                            r#type: "button",
                            onclick: {
                                let role = card.role;
                                move |_| {
                                    nav(session, NavAction::SelectRole(role));
                                }
                            },
                            h2 { "{card.title}" }
                            p { class: "muted", "{card.description}" }
                            ul { class: "feature-list",
                                for feature in card.features {
                                    li { key: "{feature}", "{feature}" }
                                }
                            }
                            span { class: "btn btn-primary btn-block", "{card.cta}" }
                        }
                    }
                }
                footer { class: "trust-line muted",
                    "HIPAA Compliant • End-to-End Encrypted • Secure & Private"
                }
            }
        }
    }
}
