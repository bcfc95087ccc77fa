use crate::adapters::InMemoryAccounts;
use crate::domain::model::ControllerSettings;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub controller: ControllerSettings,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub login: String,
    pub password: String,
}

/// Where the controller's api comes from.
#[derive(Debug, Clone)]
pub enum ApiSource {
    Http(String),
    Accounts(InMemoryAccounts),
}

impl LoginConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR_NAME}` with the variable's value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Point the api at an HTTP endpoint, dropping any configured accounts.
    pub fn override_endpoint(&mut self, endpoint: String) {
        self.api.endpoint = Some(endpoint);
        self.api.accounts.clear();
    }

    pub fn api_source(&self) -> Result<ApiSource> {
        if let Some(endpoint) = &self.api.endpoint {
            return Ok(ApiSource::Http(endpoint.clone()));
        }

        if self.api.accounts.is_empty() {
            return Err(AppError::MissingConfig {
                field: "api.endpoint or api.accounts".to_string(),
            });
        }

        Ok(ApiSource::Accounts(
            self.api
                .accounts
                .iter()
                .map(|account| (account.login.clone(), account.password.clone()))
                .collect(),
        ))
    }
}

impl Validate for LoginConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api.endpoint {
            validate_url("api.endpoint", endpoint)?;

            if !self.api.accounts.is_empty() {
                return Err(AppError::ConfigValidation {
                    field: "api".to_string(),
                    message: "set either endpoint or accounts, not both".to_string(),
                });
            }
        }

        for account in &self.api.accounts {
            validate_non_empty_string("api.accounts.login", &account.login)?;
        }

        Ok(())
    }
}
