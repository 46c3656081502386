use std::sync::Arc;

use tracing::{info, warn};
use voice_core::model::{Consent, LoginAttempt};
use voice_core::{NavAction, Session};

use crate::auth::Authenticator;
use crate::error::LoginError;

/// A submitted sign-in: the pending session plus the attempt its outcome must name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLogin {
    pub session: Session,
    pub attempt: LoginAttempt,
}

/// Drives the sign-in half of the navigator: submit, authenticate, complete.
#[derive(Clone)]
pub struct LoginService {
    auth: Arc<dyn Authenticator>,
}

impl LoginService {
    #[must_use]
    pub fn new(auth: Arc<dyn Authenticator>) -> Self {
        Self { auth }
    }

    /// Validate the form locally and mark the session as signing in.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Navigation` when consent is missing, a sign-in is already in
    /// flight, or the session is not on a login screen.
    pub fn submit(&self, session: &Session, consent: Consent) -> Result<PendingLogin, LoginError> {
        let (pending, attempt) = session.submit_login(consent).map_err(|err| {
            warn!(%err, screen = session.screen().as_str(), "sign-in refused locally");
            LoginError::from(err)
        })?;
        Ok(PendingLogin {
            session: pending,
            attempt,
        })
    }

    /// Run the remote half of a submitted sign-in. Does not touch the session, so the caller
    /// can keep rendering the pending state while this runs.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Auth` when the authenticator refuses.
    pub async fn authenticate(&self, pending: &PendingLogin) -> Result<(), LoginError> {
        let role = pending.session.role();
        self.auth.authenticate(role).await?;
        info!(?role, attempt = pending.attempt.value(), "signed in");
        Ok(())
    }

    /// Apply a successful sign-in to the *current* session value.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Navigation` with `NavError::StaleLogin` if `attempt` is no longer
    /// the pending one (the user went back, or submitted again since).
    pub fn complete(
        &self,
        current: &Session,
        attempt: LoginAttempt,
    ) -> Result<Session, LoginError> {
        Ok(current.apply(NavAction::LoginCompleted { attempt })?)
    }

    /// Clear the pending flag after a refused sign-in and stay on the form. A refusal for an
    /// attempt that is no longer pending leaves `current` as it is.
    #[must_use]
    pub fn abort(&self, current: &Session, attempt: LoginAttempt) -> Session {
        current
            .apply(NavAction::LoginFailed { attempt })
            .unwrap_or(*current)
    }

    /// Submit, authenticate and complete in one call.
    ///
    /// # Errors
    ///
    /// See [`LoginService::submit`], [`LoginService::authenticate`] and
    /// [`LoginService::complete`].
    pub async fn login(&self, session: &Session, consent: Consent) -> Result<Session, LoginError> {
        let pending = self.submit(session, consent)?;
        self.authenticate(&pending).await?;
        self.complete(&pending.session, pending.attempt)
    }
}
