use crate::core::models::{Account, Budget};
use crate::credentials::Credentials;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Could not send the request: {source}")]
    SendRequestError {
        #[from]
        source: reqwest::Error,
    },
    #[error("The service sent a response that could not be parsed: {source}")]
    MalformedJsonResponse {
        #[from]
        source: serde_json::Error,
    },
    #[error("The service responded with error {code}: {message}")]
    ApiErrorResponse { code: u16, message: String },
    #[error("The login response did not contain a session token")]
    MissingToken,
}

/// Source of the accounts and budget a runway is computed from.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FinanceServiceTrait: Send + Sync {
    async fn get_accounts(&self) -> Result<Vec<Account>, ServiceError>;
    async fn get_budgets(&self) -> Result<Budget, ServiceError>;
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    #[serde(default)]
    token: Option<String>,
}

pub struct MintService {
    client: Client,
    api_url: String,
    token: String,
}

impl MintService {
    pub async fn login(api_url: &str, credentials: &Credentials) -> Result<Self, ServiceError> {
        Self::login_with_client(Client::new(), api_url, credentials).await
    }

    pub async fn login_with_client(
        client: Client,
        api_url: &str,
        credentials: &Credentials,
    ) -> Result<Self, ServiceError> {
        let api_url = api_url.trim_end_matches('/').to_string();
        let endpoint = format!("{}/session", api_url);
        debug!("Logging in as {} at {}", credentials.email(), endpoint);

        let req = client.post(&endpoint).json(&LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        });
        let body = send_request(req).await?;
        let session: SessionResponse = serde_json::from_str(&body)?;
        let token = session.token.ok_or(ServiceError::MissingToken)?;

        Ok(Self { client, api_url, token })
    }

    async fn api_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let endpoint = format!("{}/{}", self.api_url, path);
        debug!("Initiating GET {}", endpoint);

        let req = self.client.get(&endpoint).bearer_auth(&self.token);
        let body = send_request(req).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FinanceServiceTrait for MintService {
    async fn get_accounts(&self) -> Result<Vec<Account>, ServiceError> {
        let accounts: Vec<Account> = self.api_get("accounts").await?;
        debug!("Fetched {} accounts", accounts.len());
        Ok(accounts)
    }

    async fn get_budgets(&self) -> Result<Budget, ServiceError> {
        self.api_get("budgets").await
    }
}

async fn send_request(req: RequestBuilder) -> Result<String, ServiceError> {
    let res = req.send().await?;
    let status = res.status();
    let body = res.text().await?;
    debug!("Response {} with {} bytes", status, body.len());
    check_response(status, body)
}

fn check_response(status: StatusCode, body: String) -> Result<String, ServiceError> {
    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(body);
    }

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or(body);

    Err(ServiceError::ApiErrorResponse {
        code: status.as_u16(),
        message,
    })
}
