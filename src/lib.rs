pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Variant};

pub use adapters::{ConsoleView, HttpLoginApi, InMemoryAccounts};
pub use config::toml_config::{ApiSource, LoginConfig};
pub use core::{
    blocking::BlockingLoginController, dispatch::DispatchLoginController,
    reactive::ReactiveLoginController,
};
pub use domain::model::{
    ControllerSettings, Credentials, IdentifierRule, LoginState, OnInvalidIdentifier,
};
pub use domain::ports::{BlockingLoginApi, DispatchLoginApi, LoginApi, LoginCall, LoginView};
pub use utils::error::{ApiError, AppError, LoginError, Result};
