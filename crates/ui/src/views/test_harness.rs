use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    AppServices, AudioCapture, CaptureError, CaptureStream, SimulatedAnalysis,
    SimulatedAuthenticator, SimulatedLatency, SimulatedMicrophone, SimulationSettings,
};
use voice_core::model::{AudioHandle, Consent, Page, Role};
use voice_core::time::fixed_clock;
use voice_core::{NavAction, Session};

use crate::app::ScreenView;
use crate::context::{UiApp, build_app_context};

use super::login::LoginIntent;
use super::quiz::QuizIntent;

/// Hooks the views register so tests can act the way a click would.
#[derive(Clone, Default)]
pub(crate) struct ViewTestHandles {
    login: Rc<RefCell<Option<Callback<LoginIntent>>>>,
    quiz: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<Session>>>>,
}

impl ViewTestHandles {
    pub(crate) fn register_login(&self, dispatch: Callback<LoginIntent>) {
        *self.login.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn register_quiz(&self, dispatch: Callback<QuizIntent>) {
        *self.quiz.borrow_mut() = Some(dispatch);
    }

    fn login(&self) -> Callback<LoginIntent> {
        (*self.login.borrow()).expect("login dispatch registered")
    }

    fn quiz(&self) -> Callback<QuizIntent> {
        (*self.quiz.borrow()).expect("quiz dispatch registered")
    }

    fn session(&self) -> Signal<Session> {
        (*self.session.borrow()).expect("session registered")
    }
}

/// Simulated microphone that counts open streams.
#[derive(Default)]
pub struct CountingMic {
    inner: SimulatedMicrophone,
    open: AtomicUsize,
}

impl CountingMic {
    pub fn open_streams(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioCapture for CountingMic {
    async fn acquire(&self) -> Result<CaptureStream, CaptureError> {
        let stream = self.inner.acquire().await?;
        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(stream)
    }

    fn release(&self, stream: CaptureStream) -> Result<AudioHandle, CaptureError> {
        self.open.fetch_sub(1, Ordering::SeqCst);
        self.inner.release(stream)
    }

    fn abandon(&self, stream: CaptureStream) {
        self.open.fetch_sub(1, Ordering::SeqCst);
        self.inner.abandon(stream);
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<AppServices>,
    session: Session,
    handles: ViewTestHandles,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let session = use_context_provider(|| Signal::new(props.session));
    use_context_provider(|| props.handles.clone());
    use_hook(|| *props.handles.session.borrow_mut() = Some(session));
    rsx! { ScreenView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: ViewTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep driving spawned tasks until `needle` shows up or the attempts run out.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub(crate) fn send_login(&mut self, intent: LoginIntent) {
        let dispatch = self.handles.login();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub(crate) fn send_quiz(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.quiz();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn navigate(&mut self, action: NavAction) {
        let session = self.handles.session();
        self.dom
            .in_runtime(|| crate::app::dispatch_nav(session, action))
            .expect("navigation accepted");
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> Session {
        let session = self.handles.session();
        self.dom.in_runtime(|| *session.peek())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(session: Session) -> ViewHarness {
    let app = AppServices::simulated(SimulationSettings::immediate(), fixed_clock())
        .expect("catalog prompts");
    setup_view_harness_with(session, app)
}

/// Harness whose quiz records through `mic`.
pub fn setup_view_harness_with_mic(session: Session, mic: Arc<CountingMic>) -> ViewHarness {
    let app = AppServices::with_backends(
        SimulationSettings::immediate(),
        Arc::new(SimulatedAuthenticator::default()),
        mic,
        Arc::new(SimulatedAnalysis::new(SimulatedLatency::none(), fixed_clock())),
    )
    .expect("catalog prompts");
    setup_view_harness_with(session, app)
}

fn setup_view_harness_with(session: Session, app: AppServices) -> ViewHarness {
    let handles = ViewTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ScreenHarness,
        ScreenHarnessProps {
            app: Arc::new(app),
            session,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

pub fn on_login(role: Role) -> Session {
    Session::new()
        .apply(NavAction::SelectRole(role))
        .expect("select role")
}

pub fn on_page(role: Role, page: Page) -> Session {
    let (pending, attempt) = on_login(role)
        .submit_login(Consent::Granted)
        .expect("submitted");
    pending
        .apply(NavAction::LoginCompleted { attempt })
        .and_then(|s| s.apply(NavAction::Navigate(page)))
        .expect("signed in")
}
