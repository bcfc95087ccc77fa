use crate::domain::ports::{DispatchLoginApi, LoginApi, LoginCall};
use crate::utils::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

#[derive(Debug, Serialize)]
struct LoginRequest {
    login: String,
    password: String,
}

/// Posts the credentials as JSON to a single endpoint. Any 2xx counts as a
/// successful login.
#[derive(Debug, Clone)]
pub struct HttpLoginApi {
    client: Client,
    endpoint: Url,
}

impl HttpLoginApi {
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    async fn post(client: Client, endpoint: Url, body: LoginRequest) -> Result<(), ApiError> {
        tracing::debug!("Posting login request to: {}", endpoint);
        let response = client.post(endpoint).json(&body).send().await?;

        let status = response.status();
        tracing::debug!("Login response status: {}", status);

        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(ApiError::Rejected)
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    fn request(&self, login: &str, password: &str) -> LoginRequest {
        LoginRequest {
            login: login.to_string(),
            password: password.to_string(),
        }
    }
}

impl LoginApi for HttpLoginApi {
    fn login(&self, login: &str, password: &str) -> LoginCall {
        Box::pin(Self::post(
            self.client.clone(),
            self.endpoint.clone(),
            self.request(login, password),
        ))
    }
}

/// Sends the request on its own task and returns as soon as it is spawned.
/// A failure only shows up in the log.
#[async_trait]
impl DispatchLoginApi for HttpLoginApi {
    async fn login(&self, login: &str, password: &str) {
        let post = Self::post(
            self.client.clone(),
            self.endpoint.clone(),
            self.request(login, password),
        );

        tokio::spawn(async move {
            if let Err(e) = post.await {
                tracing::warn!("Dispatched login was not accepted: {}", e);
            }
        });
    }
}
