use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_therapist_dashboard;

#[component]
pub fn TherapistDashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(String::new);
    let data = ctx.catalog().therapist_dashboard();
    let vm = map_therapist_dashboard(&data, &query.read());

    rsx! {
        div { class: "page dashboard",
            header { class: "page-header page-header-therapist",
                h1 { "Therapist Dashboard" }
                p { class: "muted",
                    "Overview of your clients' mental health analytics and upcoming sessions"
                }
            }

            div { class: "grid grid-4",
                for tile in vm.stats.iter() {
                    div { key: "{tile.label}", class: "card stat-tile",
                        span { class: "stat-label", "{tile.label}" }
                        div { class: "stat-value tone-{tile.tone}", "{tile.value}" }
                        p { class: "muted small", "{tile.caption}" }
                    }
                }
            }

            div { class: "grid grid-3",
                section { class: "card span-2",
                    div { class: "card-header-row",
                        div {
                            h2 { "Client Overview" }
                            p { class: "muted", "Recent analyses and risk assessments" }
                        }
                        input {
                            class: "search",
                            r#type: "search",
                            placeholder: "Search clients...",
                            value: "{query}",
                            oninput: move |evt: FormEvent| query.set(evt.value()),
                        }
                    }
                    if vm.clients.is_empty() {
                        p { class: "muted empty", "No clients match your search." }
                    }
                    ul { class: "client-list",
                        for client in vm.clients.iter() {
                            li { key: "{client.key}", class: "client-row {client.status_class}",
                                div { class: "avatar", "{client.initials}" }
                                div { class: "client-main",
                                    span { class: "client-name", "{client.name}" }
                                    span { class: "muted small", "{client.last_analysis_str}" }
                                }
                                div { class: "client-score",
                                    span { "Score: {client.score}" }
                                    span {
                                        class: if client.trend_worsening { "trend trend-up" } else { "trend trend-down" },
                                        "{client.trend_label}"
                                    }
                                }
                                span { class: "badge tone-{client.risk_tone}", "{client.risk_label}" }
                                div { class: "button-row",
                                    button { class: "btn btn-ghost", r#type: "button", "Notes" }
                                    button { class: "btn btn-ghost", r#type: "button", "Call" }
                                    button { class: "btn btn-outline", r#type: "button", "View Details" }
                                }
                            }
                        }
                    }
                }

                div { class: "stack",
                    section { class: "card",
                        h2 { "Today's Schedule" }
                        p { class: "muted", "Upcoming appointments and sessions" }
                        ul { class: "schedule-list",
                            for appointment in vm.appointments.iter() {
                                li { key: "{appointment.time_str}", class: "schedule-row",
                                    span { class: "schedule-time", "{appointment.time_str}" }
                                    div {
                                        span { class: "schedule-client", "{appointment.client}" }
                                        span { class: "muted small", "{appointment.kind}" }
                                    }
                                    button { class: "btn btn-outline", r#type: "button", "Join" }
                                }
                            }
                        }
                        button { class: "btn btn-outline btn-block", r#type: "button", "View Full Calendar" }
                    }
                    section { class: "card",
                        h2 { "Quick Actions" }
                        button { class: "btn btn-outline btn-block", r#type: "button", "Create Session Note" }
                        button { class: "btn btn-outline btn-block", r#type: "button", "Add New Client" }
                        button { class: "btn btn-outline btn-block", r#type: "button", "Generate Report" }
                    }
                }
            }
        }
    }
}
