use thiserror::Error;

/// Why a login attempt did not reach the next screen. These never leave the
/// controller; the view receives them through `LoginView::show_error`.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Login and password are required")]
    EmptyCredential,

    #[error("Wrong email")]
    InvalidIdentifierShape,

    #[error("Cannot login")]
    ApiFailure(#[source] Option<ApiError>),
}

impl LoginError {
    pub fn api_failure(source: ApiError) -> Self {
        LoginError::ApiFailure(Some(source))
    }

    /// A failure with no api error behind it, such as a blocking api's bare
    /// `false`.
    pub fn api_refused() -> Self {
        LoginError::ApiFailure(None)
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Credentials rejected")]
    Rejected,

    #[error("Login endpoint answered with status {0}")]
    Status(u16),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid login endpoint: {0}")]
    UrlParse(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Api error: {0}")]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, AppError>;
