use std::time::Duration;
use anyhow::{anyhow, Context};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::errors::FormError;
use crate::models::user::{CurrentUserResponse, Role, SessionUser};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const CURRENT_USER_PATH: &str = "/api/auth/me";

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum CredentialRequest {
    SignIn {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        role: Role,
    },
}

impl CredentialRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            CredentialRequest::SignIn { .. } => LOGIN_PATH,
            CredentialRequest::Register { .. } => REGISTER_PATH,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            CredentialRequest::SignIn { email, .. } => email,
            CredentialRequest::Register { email, .. } => email,
        }
    }
}

pub struct ApiConnectionRepo {
    client: Client,
    base_url: String,
}

impl ApiConnectionRepo {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build the HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts credentials and returns the parsed body of a successful answer.
    pub async fn authenticate(
        &self,
        request: &CredentialRequest,
    ) -> Result<Value, FormError> {
        let endpoint = request.endpoint();
        info!("Sending credential request to {} for {}", endpoint, request.email());

        let response = self
            .client
            .post(self.url(endpoint))
            .json(request)
            .send()
            .await
            .map_err(FormError::Network)?;

        let status = response.status();
        debug!("Credential request to {} answered with {}", endpoint, status);

        if !is_json(&response) {
            let body = response.text().await.unwrap_or_default();
            warn!("Response from {} is not JSON: {}", endpoint, body);
            return Err(FormError::MalformedResponse);
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|_| FormError::MalformedResponse)?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(FormError::REJECTED_FALLBACK)
                .to_string();
            return Err(FormError::Rejected(message));
        }

        Ok(body)
    }

    /// Fetches one of the owner-scoped listing endpoints as raw JSON.
    pub async fn fetch_owned(
        &self,
        path: &str,
        token: &str,
    ) -> anyhow::Result<Value> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .with_context(|| format!("Request to {} failed", path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} answered with status {}", path, status));
        }
        if !is_json(&response) {
            return Err(anyhow!("{} did not answer with JSON", path));
        }

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Response from {} is not valid JSON", path))
    }

    pub async fn current_user(
        &self,
        token: &str,
    ) -> anyhow::Result<SessionUser> {
        let body = self.fetch_owned(CURRENT_USER_PATH, token).await?;
        let response: CurrentUserResponse = serde_json::from_value(body)
            .context("Unexpected shape for the current user")?;
        Ok(response.user)
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}
