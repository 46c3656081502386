use thiserror::Error;

use crate::navigator::NavError;
use crate::quiz::QuizError;

/// Umbrella error for callers that drive both state machines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Navigation(#[from] NavError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Session;
    use crate::navigator::NavAction;

    fn logout_fresh() -> Result<Session, Error> {
        Ok(Session::new().apply(NavAction::Logout)?)
    }

    #[test]
    fn navigation_errors_convert() {
        let err = logout_fresh().unwrap_err();
        assert!(matches!(err, Error::Navigation(NavError::InvalidAction { .. })));
        assert!(err.to_string().contains("logout"));
    }
}
