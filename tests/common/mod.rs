#![allow(dead_code)]

use async_trait::async_trait;
use futures::future;
use login_controller::{
    ApiError, BlockingLoginApi, DispatchLoginApi, LoginApi, LoginCall, LoginError, LoginView,
};
use std::sync::{Arc, Mutex};

/// Everything the controller did to its collaborators, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ApiLogin(String, String),
    ShowLoader,
    HideLoader,
    ShowError(String),
    OpenNextScreen,
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, wanted: &Event) -> usize {
        self.events().iter().filter(|e| *e == wanted).count()
    }

    pub fn api_calls(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::ApiLogin(login, password) => Some((login, password)),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::ShowError(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, wanted: &Event) -> Option<usize> {
        self.events().iter().position(|e| e == wanted)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Answer {
    Succeed,
    Fail,
    /// The api never completes.
    Never,
}

pub struct MockApi {
    recorder: Recorder,
    answer: Answer,
}

impl MockApi {
    pub fn new(recorder: &Recorder, answer: Answer) -> Arc<Self> {
        Arc::new(Self {
            recorder: recorder.clone(),
            answer,
        })
    }

    fn record_call(&self, login: &str, password: &str) {
        self.recorder
            .record(Event::ApiLogin(login.to_string(), password.to_string()));
    }
}

impl LoginApi for MockApi {
    fn login(&self, login: &str, password: &str) -> LoginCall {
        self.record_call(login, password);
        match self.answer {
            Answer::Succeed => Box::pin(future::ready(Ok(()))),
            Answer::Fail => Box::pin(future::ready(Err(ApiError::Status(500)))),
            Answer::Never => Box::pin(future::pending()),
        }
    }
}

impl BlockingLoginApi for MockApi {
    fn login(&self, login: &str, password: &str) -> bool {
        self.record_call(login, password);
        matches!(self.answer, Answer::Succeed)
    }
}

#[async_trait]
impl DispatchLoginApi for MockApi {
    async fn login(&self, login: &str, password: &str) {
        self.record_call(login, password);
    }
}

pub struct MockView {
    recorder: Recorder,
}

impl MockView {
    pub fn new(recorder: &Recorder) -> Arc<Self> {
        Arc::new(Self {
            recorder: recorder.clone(),
        })
    }
}

impl LoginView for MockView {
    fn show_loader(&self) {
        self.recorder.record(Event::ShowLoader);
    }

    fn hide_loader(&self) {
        self.recorder.record(Event::HideLoader);
    }

    fn show_error(&self, error: &LoginError) {
        self.recorder.record(Event::ShowError(error.to_string()));
    }

    fn open_next_screen(&self) {
        self.recorder.record(Event::OpenNextScreen);
    }
}

pub fn error(message: &str) -> Event {
    Event::ShowError(message.to_string())
}
