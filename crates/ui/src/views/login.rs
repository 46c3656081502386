use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;
use voice_core::model::{Consent, Role};
use voice_core::{NavAction, NavError, Session};

use services::{LoginError, LoginService};

use crate::app::nav;
use crate::context::AppContext;
#[cfg(test)]
use crate::views::test_harness::ViewTestHandles;
use crate::views::ViewError;

struct LoginCopy {
    title: &'static str,
    subtitle: &'static str,
    card_title: &'static str,
    card_description: &'static str,
    submit: &'static str,
    pending: &'static str,
    footer: &'static str,
}

const USER_COPY: LoginCopy = LoginCopy {
    title: "Welcome Back",
    subtitle: "Your mental health journey continues here",
    card_title: "Sign In",
    card_description: "Enter your credentials to access your dashboard",
    submit: "Sign In",
    pending: "Signing in...",
    footer: "Your data is encrypted and HIPAA compliant",
};

const THERAPIST_COPY: LoginCopy = LoginCopy {
    title: "Therapist Portal",
    subtitle: "Professional access to client care tools",
    card_title: "Professional Sign In",
    card_description: "Secure access to your client dashboard and analytics",
    submit: "Professional Sign In",
    pending: "Verifying credentials...",
    footer: "Professional-grade security & compliance",
};

fn copy_for(role: Role) -> &'static LoginCopy {
    match role {
        Role::User => &USER_COPY,
        Role::Therapist => &THERAPIST_COPY,
    }
}

/// Everything the login form can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoginIntent {
    SetConsent(bool),
    Submit,
    Back,
}

/// Login form for the role chosen on the previous screen.
#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<Session>>();
    let mut consent_checked = use_signal(|| false);
    let error = use_signal(|| None::<ViewError>);

    let role = session.read().role();
    let pending = session.read().is_login_pending();
    let copy = copy_for(role);

    let dispatch = use_callback(move |intent: LoginIntent| match intent {
        LoginIntent::SetConsent(checked) => consent_checked.set(checked),
        LoginIntent::Submit => submit(ctx.login(), session, error, *consent_checked.peek()),
        LoginIntent::Back => nav(session, NavAction::Back),
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ViewTestHandles>() {
            handles.register_login(dispatch);
        }
    });

    let submit_label = if pending { copy.pending } else { copy.submit };
    let error_copy = error().map(|err| (err.title(), err.message()));

    rsx! {
        div { class: "screen screen-centered",
            button {
                class: "btn btn-ghost back-button",
                r#type: "button",
                onclick: move |_| dispatch.call(LoginIntent::Back),
                "← Back"
            }
            div { class: "login",
                header { class: "login-header",
                    div { class: "brand-mark", "♥" }
                    h1 { "{copy.title}" }
                    p { class: "muted", "{copy.subtitle}" }
                }
                div { class: "card",
                    h2 { "{copy.card_title}" }
                    p { class: "muted", "{copy.card_description}" }

                    {match role {
                        Role::User => rsx! {
                            label { r#for: "email", "Email" }
                            input { id: "email", r#type: "email", placeholder: "your@email.com" }
                            label { r#for: "password", "Password" }
                            input { id: "password", r#type: "password", placeholder: "••••••••" }
                            div { class: "consent-row",
                                input {
                                    id: "consent",
                                    r#type: "checkbox",
                                    checked: consent_checked(),
                                    onchange: move |evt: FormEvent| dispatch.call(LoginIntent::SetConsent(evt.checked())),
                                }
                                label { r#for: "consent",
                                    "I consent to audio recording and data processing for mental health analysis"
                                }
                            }
                        },
                        Role::Therapist => rsx! {
                            label { r#for: "therapist-id", "Therapist ID / Email" }
                            input { id: "therapist-id", r#type: "text", placeholder: "your.professional@email.com" }
                            label { r#for: "password", "Password" }
                            input { id: "password", r#type: "password", placeholder: "••••••••" }
                            label { r#for: "license", "License Number" }
                            input { id: "license", r#type: "text", placeholder: "Professional License #" }
                        },
                    }}

                    if let Some((title, message)) = error_copy {
                        div { class: "toast toast-error",
                            strong { "{title}" }
                            p { "{message}" }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        disabled: pending,
                        onclick: move |_| dispatch.call(LoginIntent::Submit),
                        "{submit_label}"
                    }
                }
                p { class: "trust-line muted", "{copy.footer}" }
            }
        }
    }
}

/// Validate locally, then sign in in the background. Only the attempt submitted here can
/// finish or cancel its own sign-in.
fn submit(
    login: Arc<LoginService>,
    mut session: Signal<Session>,
    mut error: Signal<Option<ViewError>>,
    consent_checked: bool,
) {
    let current = *session.peek();
    let consent = match current.role() {
        Role::User => Consent::from_checked(consent_checked),
        Role::Therapist => Consent::Granted,
    };

    let pending = match login.submit(&current, consent) {
        Ok(pending) => pending,
        Err(err) => {
            error.set(Some(ViewError::from(&err)));
            return;
        }
    };
    error.set(None);
    session.set(pending.session);

    spawn(async move {
        let outcome = match login.authenticate(&pending).await {
            Ok(()) => login.complete(&session.peek(), pending.attempt),
            Err(err) => Err(err),
        };
        match outcome {
            Ok(next) => session.set(next),
            Err(LoginError::Navigation(NavError::StaleLogin)) => {
                debug!(attempt = pending.attempt.value(), "sign-in outlived its form; ignored");
            }
            Err(err) => {
                error.set(Some(ViewError::from(&err)));
                let restored = login.abort(&session.peek(), pending.attempt);
                session.set(restored);
            }
        }
    });
}
