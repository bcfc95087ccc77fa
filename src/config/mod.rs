pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Which controller drives the login.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Api answers with a bool on the spot
    Blocking,
    /// Api answers with a future; loader shown while waiting
    Reactive,
    /// Api takes the credentials and never answers
    Dispatch,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "login-controller")]
#[command(about = "Run one login attempt through a login controller")]
pub struct CliConfig {
    /// Identifier to log in with
    #[arg(long, default_value = "")]
    pub login: String,

    /// Password to log in with
    #[arg(long, env = "LOGIN_PASSWORD", hide_env_values = true, default_value = "")]
    pub password: String,

    /// TOML file with [controller] and [api] sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Login endpoint; overrides [api] from the config file
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, value_enum, default_value_t = Variant::Reactive)]
    pub variant: Variant,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["login-controller", "--login", "a@b.com"]);
        assert_eq!(config.login, "a@b.com");
        assert_eq!(config.variant, Variant::Reactive);
        assert!(config.config.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_variant_and_endpoint() {
        let config = CliConfig::parse_from([
            "login-controller",
            "--login",
            "a@b.com",
            "--password",
            "pw",
            "--variant",
            "blocking",
            "--endpoint",
            "http://localhost:8080/login",
        ]);
        assert_eq!(config.password, "pw");
        assert_eq!(config.variant, Variant::Blocking);
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8080/login")
        );
    }
}
