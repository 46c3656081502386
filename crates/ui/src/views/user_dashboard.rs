use dioxus::prelude::*;
use voice_core::model::Page;
use voice_core::{NavAction, Session};

use crate::app::nav;
use crate::context::AppContext;
use crate::vm::map_user_dashboard;

#[component]
pub fn UserDashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<Session>>();
    let vm = map_user_dashboard(&ctx.catalog().user_dashboard());
    let gauge = &vm.gauge;

    rsx! {
        div { class: "page dashboard",
            header { class: "page-header",
                h1 { "{vm.greeting}" }
                p { class: "muted", "Keep tracking your mental wellness journey." }
            }

            div { class: "grid grid-2",
                section { class: "card",
                    h2 { "Depression Risk Score" }
                    p { class: "muted", "Based on your latest voice analysis ({vm.latest_str})" }
                    div { class: "gauge",
                        svg { class: "gauge-ring", width: "128", height: "128", "viewBox": "0 0 128 128",
                            circle { class: "gauge-track", cx: "64", cy: "64", r: "56" }
                            circle {
                                class: "gauge-fill tone-{gauge.tone}",
                                cx: "64",
                                cy: "64",
                                r: "56",
                                "stroke-dasharray": "{gauge.dash_array}",
                            }
                        }
                        span { class: "gauge-score", "{gauge.score}" }
                    }
                    span { class: "badge tone-{gauge.tone}", "{gauge.level_label}" }
                    p { class: "guidance", "{gauge.guidance}" }
                    div { class: "button-row",
                        button { class: "btn btn-outline", r#type: "button", "Book Appointment" }
                        button { class: "btn btn-outline", r#type: "button", "Request Call" }
                    }
                }

                section { class: "card",
                    h2 { "Progress Over Time" }
                    p { class: "muted", "Your depression risk scores from recent analyses" }
                    ul { class: "recent-list",
                        for row in vm.recent.iter() {
                            li { key: "{row.date_str}", class: "recent-row",
                                span { class: "recent-date", "{row.date_str}" }
                                span { class: "recent-score", "{row.score_label}" }
                                span { class: "trend {row.trend_class}", "{row.trend_symbol}" }
                            }
                        }
                    }
                }
            }

            section { class: "card",
                h2 { "AI Analysis Breakdown" }
                p { class: "muted", "Understanding the factors that influenced your risk assessment" }
                div { class: "grid grid-4",
                    for indicator in vm.indicators.iter() {
                        div { key: "{indicator.label}", class: "indicator tone-{indicator.tone}",
                            span { class: "indicator-label", "{indicator.label}" }
                            p { class: "indicator-value", "{indicator.value}" }
                            p { class: "muted small", "{indicator.description}" }
                        }
                    }
                }
            }

            div { class: "grid grid-3",
                div { class: "card action-card",
                    h3 { "Take Voice Quiz" }
                    p { class: "muted", "Complete your next voice analysis session" }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        onclick: move |_| {
                            nav(session, NavAction::Navigate(Page::Quiz));
                        },
                        "Start Quiz"
                    }
                }
                div { class: "card action-card",
                    h3 { "Download Report" }
                    p { class: "muted", "Get detailed analysis in PDF format" }
                    button { class: "btn btn-outline btn-block", r#type: "button", "Download PDF" }
                }
                div { class: "card action-card",
                    h3 { "Schedule Check-in" }
                    p { class: "muted", "Book a session with a therapist" }
                    button {
                        class: "btn btn-outline btn-block",
                        r#type: "button",
                        onclick: move |_| {
                            nav(session, NavAction::Navigate(Page::Appointments));
                        },
                        "View Calendar"
                    }
                }
            }
        }
    }
}
