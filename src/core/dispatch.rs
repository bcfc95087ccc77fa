use crate::core::screening::screen;
use crate::core::state::StateCell;
use crate::domain::model::{ControllerSettings, LoginState};
use crate::domain::ports::{DispatchLoginApi, LoginView};
use std::sync::Arc;

/// Login controller for a call-and-forget api. The view only ever hears
/// about local validation problems; there is no loader because nothing would
/// ever hide it.
pub struct DispatchLoginController<A: ?Sized, V: ?Sized> {
    api: Arc<A>,
    view: Arc<V>,
    settings: ControllerSettings,
    state: StateCell,
}

impl<A, V> DispatchLoginController<A, V>
where
    A: DispatchLoginApi + ?Sized,
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

    pub async fn on_login(&self, login: &str, password: &str) {
        let Some(credentials) = screen(&self.settings, &*self.view, &self.state, login, password)
        else {
            return;
        };

        self.state.set(LoginState::Calling);
        tracing::info!(login = %credentials.login, "dispatching login");
        self.api
            .login(&credentials.login, &credentials.password)
            .await;

        self.state.set(LoginState::Dispatched);
    }
}
