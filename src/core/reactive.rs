use crate::core::screening::{report_outcome, screen};
use crate::core::state::StateCell;
use crate::domain::model::{ControllerSettings, LoginState};
use crate::domain::ports::{LoginApi, LoginView};
use crate::utils::error::LoginError;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Login controller for an api that answers asynchronously.
///
/// `on_login` shows the loader, invokes the api and returns right away. The
/// api's future is driven on a tokio task which hides the loader and then
/// either opens the next screen or shows "Cannot login".
///
/// The task runs on the runtime captured at construction, so `on_login` can
/// be called from a thread outside tokio. Without a runtime to run on, the
/// login fails with "Cannot login" before the loader or the api is touched.
pub struct ReactiveLoginController<A: ?Sized, V: ?Sized> {
    api: Arc<A>,
    view: Arc<V>,
    settings: ControllerSettings,
    state: StateCell,
    runtime: Option<Handle>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl<A, V> ReactiveLoginController<A, V>
where
    A: LoginApi + ?Sized,
    V: LoginView + ?Sized + 'static,
{
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self::with_settings(api, view, ControllerSettings::default())
    }

    /// Captures the current tokio runtime, if there is one.
    pub fn with_settings(api: Arc<A>, view: Arc<V>, settings: ControllerSettings) -> Self {
        Self::build(api, view, settings, Handle::try_current().ok())
    }

    /// Runs completions on `runtime` no matter where `on_login` is called.
    pub fn with_handle(
        api: Arc<A>,
        view: Arc<V>,
        settings: ControllerSettings,
        runtime: Handle,
    ) -> Self {
        Self::build(api, view, settings, Some(runtime))
    }

    fn build(
        api: Arc<A>,
        view: Arc<V>,
        settings: ControllerSettings,
        runtime: Option<Handle>,
    ) -> Self {
        Self {
            api,
            view,
            settings,
            state: StateCell::new(),
            runtime,
            pending: Mutex::new(Vec::new()),
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

        let Some(runtime) = self
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok())
        else {
            tracing::error!("no tokio runtime to complete the login on");
            report_outcome(&*self.view, &self.state, Err(LoginError::api_refused()));
            return;
        };

        if self.settings.show_progress {
            self.view.show_loader();
        }

        self.state.set(LoginState::Calling);
        tracing::info!(login = %credentials.login, "calling login api");
        let call = self.api.login(&credentials.login, &credentials.password);

        let view = Arc::clone(&self.view);
        let state = self.state.clone();
        let show_progress = self.settings.show_progress;

        let handle = runtime.spawn(async move {
            let outcome = call.await.map_err(LoginError::api_failure);

            if show_progress {
                view.hide_loader();
            }

            report_outcome(&*view, &state, outcome);
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }

    /// Waits for every login started so far to deliver its outcome to the
    /// view. Never returns if the api never answers.
    pub async fn finish_pending(&self) {
        let handles: Vec<_> = {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            pending.drain(..).collect()
        };

        for handle in handles {
            if let Err(e) = handle.await {
                tracing::error!("login task did not complete: {}", e);
            }
        }
    }
}
