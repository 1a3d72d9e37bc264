//! HTTP client - network communication

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::error::ErrorCode;

/// Error response format returned by the server
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
}

/// HTTP client trait
///
/// The subset of verbs the panel screens exercise. Generic over the
/// response type so API wrappers stay one-liners.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
}

/// Map a structured server error to the most specific client error
fn api_error_to_client(code: u16, message: String) -> ClientError {
    match ErrorCode::try_from(code) {
        Ok(ErrorCode::NotFound | ErrorCode::OrderNotFound | ErrorCode::StoreNotFound) => {
            ClientError::NotFound(message)
        }
        Ok(ErrorCode::ValidationFailed | ErrorCode::InvalidRequest) => {
            ClientError::Validation(message)
        }
        _ => ClientError::Api { code, message },
    }
}

/// Map a failed HTTP response to a client error
///
/// Prefers the structured `{code, message}` envelope; falls back to the
/// status code when the body is not structured.
fn error_from_response(status: StatusCode, body: String) -> ClientError {
    if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
        return api_error_to_client(api_err.code, api_err.message);
    }
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(body),
        StatusCode::NOT_FOUND => ClientError::NotFound(body),
        StatusCode::BAD_REQUEST => ClientError::Validation(body),
        _ => ClientError::Internal(body),
    }
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(ClientConfig::new(base_url))
    }

    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
            token: config.token,
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!(status = %status, "request failed");
            return Err(error_from_response(status, body));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut req = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut req = self.client.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }
}
