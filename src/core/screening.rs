use crate::core::state::StateCell;
use crate::domain::model::{
    ControllerSettings, Credentials, IdentifierRule, LoginState, OnInvalidIdentifier,
};
use crate::domain::ports::LoginView;
use crate::utils::error::LoginError;
use crate::utils::validation::is_email_shaped;

/// What the local checks decided about a pair of credentials.
#[derive(Debug)]
pub enum Verdict {
    /// Good to send.
    Accept(Credentials),
    /// Something is wrong, but the settings say to send anyway.
    Flag(Credentials, LoginError),
    /// Do not call the api.
    Reject(LoginError),
}

pub fn check_credentials(settings: &ControllerSettings, login: &str, password: &str) -> Verdict {
    if login.is_empty() || password.is_empty() {
        return Verdict::Reject(LoginError::EmptyCredential);
    }

    let credentials = Credentials::new(login, password);

    if settings.identifier_rule == IdentifierRule::Email && !is_email_shaped(login) {
        return match settings.on_invalid_identifier {
            OnInvalidIdentifier::Abort => Verdict::Reject(LoginError::InvalidIdentifierShape),
            OnInvalidIdentifier::Report => {
                Verdict::Flag(credentials, LoginError::InvalidIdentifierShape)
            }
        };
    }

    Verdict::Accept(credentials)
}

/// Runs the local checks and tells the view about any problem. Returns the
/// credentials when the api should still be called.
pub(crate) fn screen<V: LoginView + ?Sized>(
    settings: &ControllerSettings,
    view: &V,
    state: &StateCell,
    login: &str,
    password: &str,
) -> Option<Credentials> {
    state.set(LoginState::Validating);

    match check_credentials(settings, login, password) {
        Verdict::Accept(credentials) => Some(credentials),
        Verdict::Flag(credentials, problem) => {
            tracing::debug!(%problem, "calling the api despite a validation problem");
            view.show_error(&problem);
            Some(credentials)
        }
        Verdict::Reject(problem) => {
            tracing::debug!(%problem, "credentials rejected locally");
            state.set(LoginState::Rejected);
            view.show_error(&problem);
            None
        }
    }
}

/// Hands the api's answer to the view.
pub(crate) fn report_outcome<V: LoginView + ?Sized>(
    view: &V,
    state: &StateCell,
    outcome: Result<(), LoginError>,
) {
    match outcome {
        Ok(()) => {
            tracing::info!("login succeeded");
            state.set(LoginState::Succeeded);
            view.open_next_screen();
        }
        Err(problem) => {
            tracing::warn!(error = ?problem, "login failed");
            state.set(LoginState::Failed);
            view.show_error(&problem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_rejected() {
        let settings = ControllerSettings::default();
        assert!(matches!(
            check_credentials(&settings, "", "password"),
            Verdict::Reject(LoginError::EmptyCredential)
        ));
        assert!(matches!(
            check_credentials(&settings, "login", ""),
            Verdict::Reject(LoginError::EmptyCredential)
        ));
    }

    #[test]
    fn test_any_identifier_is_accepted_without_email_rule() {
        let settings = ControllerSettings::default();
        match check_credentials(&settings, "login", "password") {
            Verdict::Accept(credentials) => {
                assert_eq!(credentials, Credentials::new("login", "password"));
            }
            other => panic!("expected Accept, got {:?}", other),
        }
    }

    #[test]
    fn test_email_rule_abort() {
        let settings = ControllerSettings::email(OnInvalidIdentifier::Abort);
        assert!(matches!(
            check_credentials(&settings, "login", "password"),
            Verdict::Reject(LoginError::InvalidIdentifierShape)
        ));
        assert!(matches!(
            check_credentials(&settings, "a@b.com", "pw"),
            Verdict::Accept(_)
        ));
    }

    #[test]
    fn test_email_rule_report() {
        let settings = ControllerSettings::email(OnInvalidIdentifier::Report);
        assert!(matches!(
            check_credentials(&settings, "login", "password"),
            Verdict::Flag(_, LoginError::InvalidIdentifierShape)
        ));
    }

    #[test]
    fn test_empty_wins_over_shape() {
        let settings = ControllerSettings::email(OnInvalidIdentifier::Report);
        assert!(matches!(
            check_credentials(&settings, "", "password"),
            Verdict::Reject(LoginError::EmptyCredential)
        ));
    }
}
