use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user typed. Lives for one `on_login` call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Validating,
    Rejected,
    Calling,
    Succeeded,
    Failed,
    /// Handed to a call-and-forget api; no outcome will ever arrive.
    Dispatched,
}

impl LoginState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            LoginState::Rejected
                | LoginState::Succeeded
                | LoginState::Failed
                | LoginState::Dispatched
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierRule {
    /// Any non-empty identifier.
    #[default]
    Any,
    /// The identifier must look like an email address.
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnInvalidIdentifier {
    /// Show "Wrong email" and stop.
    #[default]
    Abort,
    /// Show "Wrong email" and call the api anyway.
    Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub identifier_rule: IdentifierRule,
    pub on_invalid_identifier: OnInvalidIdentifier,
    pub show_progress: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            identifier_rule: IdentifierRule::Any,
            on_invalid_identifier: OnInvalidIdentifier::Abort,
            show_progress: true,
        }
    }
}

impl ControllerSettings {
    pub fn email(on_invalid_identifier: OnInvalidIdentifier) -> Self {
        Self {
            identifier_rule: IdentifierRule::Email,
            on_invalid_identifier,
            ..Self::default()
        }
    }

    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }
}
