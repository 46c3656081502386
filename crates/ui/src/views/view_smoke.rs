use std::sync::Arc;

use voice_core::model::{Consent, Page, Role, Screen};
use voice_core::{NavAction, Session};

use super::login::LoginIntent;
use super::quiz::QuizIntent;
use super::test_harness::{
    CountingMic, on_login, on_page, setup_view_harness, setup_view_harness_with_mic,
};

fn render(session: Session) -> String {
    let mut harness = setup_view_harness(session);
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn role_selection_offers_both_roles() {
    let html = render(Session::new());
    assert!(html.contains("Continue as User"), "missing user card in {html}");
    assert!(html.contains("Continue as Therapist"), "missing therapist card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn user_login_shows_consent_checkbox() {
    let html = render(on_login(Role::User));
    assert!(html.contains("Welcome Back"), "missing title in {html}");
    assert!(html.contains("I consent to audio recording"), "missing consent in {html}");
    assert!(html.contains("Sign In"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn therapist_login_has_no_consent_checkbox() {
    let html = render(on_login(Role::Therapist));
    assert!(html.contains("License Number"), "missing license field in {html}");
    assert!(!html.contains("I consent to audio recording"), "unexpected consent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn pending_login_disables_submit() {
    let (pending, _) = on_login(Role::User).submit_login(Consent::Granted).unwrap();
    let html = render(pending);
    assert!(html.contains("Signing in..."), "missing pending label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn user_dashboard_renders_sample_content() {
    let html = render(on_page(Role::User, Page::Dashboard));
    assert!(html.contains("Welcome back, Alex!"), "missing greeting in {html}");
    assert!(html.contains("Low Risk"), "missing risk level in {html}");
    assert!(html.contains("Jan 15"), "missing recent date in {html}");
    assert!(html.contains("User Portal"), "missing portal label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn therapist_dashboard_lists_clients_and_schedule() {
    let html = render(on_page(Role::Therapist, Page::Dashboard));
    assert!(html.contains("Emma Wilson"), "missing client in {html}");
    assert!(html.contains("High Risk"), "missing badge in {html}");
    assert!(html.contains("04:30 PM"), "missing appointment in {html}");
    assert!(html.contains("Therapist Portal"), "missing portal label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_starts_on_first_question() {
    let html = render(on_page(Role::User, Page::Quiz));
    assert!(html.contains("Question 1 of 5"), "missing badge in {html}");
    assert!(html.contains("Progress: 0 of 5 completed"), "missing progress in {html}");
    assert!(html.contains("Start Recording"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unbuilt_pages_render_placeholder_copy() {
    let html = render(on_page(Role::User, Page::Reports));
    assert!(html.contains("Reports page coming soon..."), "missing placeholder in {html}");

    let html = render(on_page(Role::Therapist, Page::Appointments));
    assert!(html.contains("Schedule page coming soon..."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sign_in_without_consent_shows_consent_error() {
    let mut harness = setup_view_harness(on_login(Role::User));
    harness.rebuild();

    harness.send_login(LoginIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Consent Required"), "missing toast title in {html}");
    assert!(
        html.contains("Please agree to the terms and consent for audio recording."),
        "missing toast message in {html}"
    );
    assert_eq!(harness.session().screen(), Screen::UserLogin);
    assert!(!harness.session().is_login_pending());
}

#[tokio::test(flavor = "current_thread")]
async fn user_sign_in_opens_dashboard() {
    let mut harness = setup_view_harness(on_login(Role::User));
    harness.rebuild();

    harness.send_login(LoginIntent::SetConsent(true));
    harness.send_login(LoginIntent::Submit);
    let html = harness.drive_until("Welcome back, Alex!").await;
    assert!(html.contains("Welcome back, Alex!"), "missing dashboard in {html}");
    assert_eq!(harness.session().screen(), Screen::UserApp);
}

#[tokio::test(flavor = "current_thread")]
async fn back_from_login_returns_to_role_cards() {
    let mut harness = setup_view_harness(on_login(Role::Therapist));
    harness.rebuild();

    harness.send_login(LoginIntent::Back);
    let html = harness.render();
    assert!(html.contains("Continue as Therapist"), "missing role cards in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_buttons_walk_through_recording_states() {
    let mic = Arc::new(CountingMic::default());
    let mut harness = setup_view_harness_with_mic(on_page(Role::User, Page::Quiz), mic.clone());
    harness.rebuild();

    harness.send_quiz(QuizIntent::Start);
    let html = harness.drive_until("Recording...").await;
    assert!(html.contains("Stop Recording"), "missing stop button in {html}");
    assert_eq!(mic.open_streams(), 1);

    harness.send_quiz(QuizIntent::Stop);
    let html = harness.render();
    assert!(html.contains("Recording Complete"), "missing review state in {html}");
    assert!(html.contains("data:audio/wav;base64,"), "missing playback in {html}");
    assert_eq!(mic.open_streams(), 0);

    harness.send_quiz(QuizIntent::Submit);
    let html = harness.drive_until("Question 2 of 5").await;
    assert!(html.contains("Progress: 1 of 5 completed"), "missing progress in {html}");
    assert!(html.contains("Start Recording"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_quiz_mid_recording_releases_microphone() {
    let mic = Arc::new(CountingMic::default());
    let mut harness = setup_view_harness_with_mic(on_page(Role::User, Page::Quiz), mic.clone());
    harness.rebuild();

    harness.send_quiz(QuizIntent::Start);
    harness.drive_until("Recording...").await;
    assert_eq!(mic.open_streams(), 1);

    harness.navigate(NavAction::Logout);
    let html = harness.render();
    assert!(html.contains("Continue as User"), "missing role cards in {html}");
    assert_eq!(mic.open_streams(), 0);
}
