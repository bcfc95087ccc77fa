use crate::domain::model::LoginState;
use std::sync::{Arc, Mutex, PoisonError};

/// The controller's current `LoginState`, shareable with the task that
/// finishes an asynchronous call.
#[derive(Debug, Clone)]
pub struct StateCell {
    inner: Arc<Mutex<LoginState>>,
}

impl StateCell {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(LoginState::Idle)),
        }
    }

    pub fn get(&self) -> LoginState {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, next: LoginState) {
        let mut current = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(from = ?*current, to = ?next, "login state changed");
        *current = next;
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}
