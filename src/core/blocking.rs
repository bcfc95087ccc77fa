use crate::core::screening::{report_outcome, screen};
use crate::core::state::StateCell;
use crate::domain::model::{ControllerSettings, LoginState};
use crate::domain::ports::{BlockingLoginApi, LoginView};
use crate::utils::error::LoginError;
use std::sync::Arc;

/// Login controller for an api that answers with a plain `bool`. Everything,
/// including the view's terminal notification, happens inside `on_login`.
pub struct BlockingLoginController<A: ?Sized, V: ?Sized> {
    api: Arc<A>,
    view: Arc<V>,
    settings: ControllerSettings,
    state: StateCell,
}

impl<A, V> BlockingLoginController<A, V>
where
    A: BlockingLoginApi + ?Sized,
    V: LoginView + ?Sized,
{
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self::with_settings(api, view, ControllerSettings::default())
    }

    pub fn with_settings(api: Arc<A>, view: Arc<V>, settings: ControllerSettings) -> Self {
        Self {
            api,
            view,
            settings,
            state: StateCell::new(),
        }
    }

    pub fn state(&self) -> LoginState {
        self.state.get()
    }

    pub fn on_login(&self, login: &str, password: &str) {
        let Some(credentials) = screen(&self.settings, &*self.view, &self.state, login, password)
        else {
            return;
        };

        if self.settings.show_progress {
            self.view.show_loader();
        }

        self.state.set(LoginState::Calling);
        tracing::info!(login = %credentials.login, "calling login api");
        let accepted = self.api.login(&credentials.login, &credentials.password);

        if self.settings.show_progress {
            self.view.hide_loader();
        }

        let outcome = if accepted {
            Ok(())
        } else {
            Err(LoginError::api_refused())
        };
        report_outcome(&*self.view, &self.state, outcome);
    }
}
