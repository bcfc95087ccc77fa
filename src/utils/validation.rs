use crate::utils::error::{AppError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Exactly one `@` with something on either side. Anything stricter is the
/// server's business.
pub fn is_email_shaped(identifier: &str) -> bool {
    static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();

    EMAIL_SHAPE
        .get_or_init(|| Regex::new(r"^[^@]+@[^@]+$").expect("static regex is valid"))
        .is_match(identifier)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email_shaped() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("user@localhost"));
        assert!(!is_email_shaped("login"));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@"));
        assert!(!is_email_shaped("a@b@c"));
        assert!(!is_email_shaped(""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.endpoint", "https://example.com/login").is_ok());
        assert!(validate_url("api.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("api.endpoint", "").is_err());
        assert!(validate_url("api.endpoint", "not a url").is_err());
        assert!(validate_url("api.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("login", "alice").is_ok());
        assert!(validate_non_empty_string("login", "   ").is_err());
    }
}
