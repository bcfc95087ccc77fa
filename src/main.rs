use clap::Parser;
use login_controller::utils::logger::{self, LogFormat};
use login_controller::utils::validation::Validate;
use login_controller::{
    ApiSource, AppError, BlockingLoginController, CliConfig, ConsoleView, DispatchLoginApi,
    DispatchLoginController, HttpLoginApi, LoginApi, LoginConfig, LoginState,
    ReactiveLoginController, Result, Variant,
};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, log_format);

    tracing::info!("Starting login-controller");
    if cli.verbose {
        tracing::debug!("CLI variant: {:?}, config: {:?}", cli.variant, cli.config);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            return ExitCode::from(2);
        }
    };

    match run(&cli, &config).await {
        Ok(state) => {
            tracing::info!("Login finished in state {:?}", state);
            match state {
                LoginState::Succeeded | LoginState::Dispatched => ExitCode::SUCCESS,
                state if !state.is_terminal() => {
                    tracing::warn!("Login never reached an outcome");
                    ExitCode::from(1)
                }
                _ => ExitCode::from(1),
            }
        }
        Err(e) => {
            tracing::error!("❌ Could not set up the login: {}", e);
            eprintln!("❌ {}", e);
            ExitCode::from(2)
        }
    }
}

fn load_config(cli: &CliConfig) -> Result<LoginConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            LoginConfig::from_file(path)?
        }
        None => LoginConfig::default(),
    };

    if let Some(endpoint) = &cli.endpoint {
        tracing::info!("🔧 Endpoint overridden to: {}", endpoint);
        config.override_endpoint(endpoint.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: &CliConfig, config: &LoginConfig) -> Result<LoginState> {
    let view = Arc::new(ConsoleView::new());
    let settings = config.controller;

    let state = match (cli.variant, config.api_source()?) {
        (Variant::Blocking, ApiSource::Accounts(accounts)) => {
            let controller =
                BlockingLoginController::with_settings(Arc::new(accounts), view, settings);
            controller.on_login(&cli.login, &cli.password);
            controller.state()
        }
        (Variant::Blocking, ApiSource::Http(_)) => {
            return Err(AppError::ConfigValidation {
                field: "variant".to_string(),
                message: "the blocking variant only works with api.accounts".to_string(),
            });
        }
        (Variant::Reactive, source) => {
            let api: Arc<dyn LoginApi> = match source {
                ApiSource::Http(endpoint) => Arc::new(HttpLoginApi::new(&endpoint)?),
                ApiSource::Accounts(accounts) => Arc::new(accounts),
            };
            let controller = ReactiveLoginController::with_settings(api, view, settings);
            controller.on_login(&cli.login, &cli.password);
            controller.finish_pending().await;
            controller.state()
        }
        (Variant::Dispatch, source) => {
            let api: Arc<dyn DispatchLoginApi> = match source {
                ApiSource::Http(endpoint) => Arc::new(HttpLoginApi::new(&endpoint)?),
                ApiSource::Accounts(accounts) => Arc::new(accounts),
            };
            let controller = DispatchLoginController::with_settings(api, view, settings);
            controller.on_login(&cli.login, &cli.password).await;
            controller.state()
        }
    };

    Ok(state)
}
