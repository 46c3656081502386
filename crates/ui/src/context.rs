use std::sync::Arc;

use services::{AppServices, ContentCatalog, LoginService, QuizService};

pub trait UiApp: Send + Sync {
    fn login(&self) -> Arc<LoginService>;
    fn quiz(&self) -> Arc<QuizService>;
    fn catalog(&self) -> ContentCatalog;
}

impl UiApp for AppServices {
    fn login(&self) -> Arc<LoginService> {
        AppServices::login(self)
    }

    fn quiz(&self) -> Arc<QuizService> {
        AppServices::quiz(self)
    }

    fn catalog(&self) -> ContentCatalog {
        AppServices::catalog(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    login: Arc<LoginService>,
    quiz: Arc<QuizService>,
    catalog: ContentCatalog,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            login: app.login(),
            quiz: app.quiz(),
            catalog: app.catalog(),
        }
    }

    #[must_use]
    pub fn login(&self) -> Arc<LoginService> {
        Arc::clone(&self.login)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn catalog(&self) -> ContentCatalog {
        self.catalog
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
