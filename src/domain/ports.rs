use crate::utils::error::{ApiError, LoginError};
use async_trait::async_trait;
use futures::future::BoxFuture;

/// The result of an asynchronous login call, already started.
pub type LoginCall = BoxFuture<'static, Result<(), ApiError>>;

/// An api whose `login` hands back a single-value future. Calling `login`
/// counts as invoking the api; the returned future only delivers the outcome.
pub trait LoginApi: Send + Sync {
    fn login(&self, login: &str, password: &str) -> LoginCall;
}

/// An api that answers on the spot.
pub trait BlockingLoginApi: Send + Sync {
    fn login(&self, login: &str, password: &str) -> bool;
}

/// An api that takes the credentials and never reports back. Awaiting
/// `login` only waits for the hand-off, not for any outcome.
#[async_trait]
pub trait DispatchLoginApi: Send + Sync {
    async fn login(&self, login: &str, password: &str);
}

pub trait LoginView: Send + Sync {
    fn show_loader(&self);
    fn hide_loader(&self);
    fn show_error(&self, error: &LoginError);
    fn open_next_screen(&self);
}
