use crate::domain::ports::{BlockingLoginApi, DispatchLoginApi, LoginApi, LoginCall};
use crate::utils::error::ApiError;
use async_trait::async_trait;
use futures::future;
use std::collections::HashMap;

/// A fixed table of identifier to password, for running the controllers
/// without a server.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    accounts: HashMap<String, String>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts.insert(login.into(), password.into());
        self
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn matches(&self, login: &str, password: &str) -> bool {
        self.accounts
            .get(login)
            .is_some_and(|expected| expected == password)
    }
}

impl<L, P> FromIterator<(L, P)> for InMemoryAccounts
where
    L: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, P)>>(iter: I) -> Self {
        Self {
            accounts: iter
                .into_iter()
                .map(|(login, password)| (login.into(), password.into()))
                .collect(),
        }
    }
}

impl BlockingLoginApi for InMemoryAccounts {
    fn login(&self, login: &str, password: &str) -> bool {
        self.matches(login, password)
    }
}

impl LoginApi for InMemoryAccounts {
    fn login(&self, login: &str, password: &str) -> LoginCall {
        let outcome = if self.matches(login, password) {
            Ok(())
        } else {
            Err(ApiError::Rejected)
        };
        Box::pin(future::ready(outcome))
    }
}

#[async_trait]
impl DispatchLoginApi for InMemoryAccounts {
    async fn login(&self, login: &str, password: &str) {
        tracing::debug!(
            login,
            known = self.matches(login, password),
            "login dispatched to in-memory accounts"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> InMemoryAccounts {
        InMemoryAccounts::new().with_account("a@b.com", "pw")
    }

    #[test]
    fn test_blocking_lookup() {
        let accounts = accounts();
        assert!(BlockingLoginApi::login(&accounts, "a@b.com", "pw"));
        assert!(!BlockingLoginApi::login(&accounts, "a@b.com", "wrong"));
        assert!(!BlockingLoginApi::login(&accounts, "nobody@b.com", "pw"));
    }

    #[tokio::test]
    async fn test_async_lookup() {
        let accounts = accounts();
        assert!(LoginApi::login(&accounts, "a@b.com", "pw").await.is_ok());
        assert!(matches!(
            LoginApi::login(&accounts, "a@b.com", "nope").await,
            Err(ApiError::Rejected)
        ));
    }

    #[test]
    fn test_from_iter() {
        let accounts: InMemoryAccounts = vec![("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(accounts.len(), 2);
        assert!(!accounts.is_empty());
    }
}
