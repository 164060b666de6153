//! HTTP client for the IDentify user API.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    outcome::{normalize, CallResult},
    types::{ApiResponse, LoginRequest, RegisterRequest},
    Error,
};

/// Status the availability endpoints answer with when the email or nickname
/// is still free. Any other status, including 200, means it is taken.
pub const AVAILABLE_STATUS: u16 = 202;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "IDENTIFY_API_URL";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the `/users` endpoints.
///
/// Every operation performs exactly one request and reports its outcome as a
/// [`CallResult`]; none of them return an error to the caller. Cloning is
/// cheap and clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Prefix for every request path. May be empty.
    base_api_url: String,
}

impl Client {
    /// Creates a client rooted at `base_url`.
    ///
    /// The base is not validated here. An empty or malformed base makes every
    /// call fail with an `Invalid URL` result.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from `IDENTIFY_API_URL`, defaulting to an empty base.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_default();
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::warn!("Invalid URL constructed for {}: {}", path, e);
            Error::InvalidUrl(e.to_string())
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let url = self.get_url(path)?;
        tracing::debug!("{} {}", method, url);
        Ok(self
            .http
            .request(method, url)
            .header("accept", "application/json, text/plain, */*"))
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse<Value>, Error> {
        let resp = request.send().await.map_err(|e| {
            tracing::warn!("Request failed before a response arrived: {}", e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!("Failed to read response body (status {}): {}", status, e);
            Error::Body {
                status: status.as_u16(),
                source: e,
            }
        })?;

        if !status.is_success() {
            tracing::warn!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            data: decode_body(&body),
        })
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<Value>, Error> {
        let request = self.request(Method::GET, path)?.query(query);
        self.send(request).await
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse<Value>, Error>
    where
        B: Serialize,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.send(request).await
    }

    async fn check_available(&self, path: &str, key: &str, value: &str) -> bool {
        let query = [(key, value)];
        let result = normalize(|| self.get(path, &query)).await;
        result.status() == Some(AVAILABLE_STATUS)
    }

    /// Returns `true` if no account uses `email` yet.
    pub async fn check_email(&self, email: &str) -> bool {
        self.check_available("/users/checkByEmail", "email", email)
            .await
    }

    /// Returns `true` if no account uses `nickname` yet.
    pub async fn check_nickname(&self, nickname: &str) -> bool {
        self.check_available("/users/checkByNickname", "nickname", nickname)
            .await
    }

    /// Creates an account.
    ///
    /// The payload is whatever the server sent back. Use
    /// [`AuthResponse::from_payload`](crate::types::AuthResponse::from_payload)
    /// for a typed view of it.
    pub async fn register(
        &self,
        nickname: &str,
        email: &str,
        password: &str,
    ) -> CallResult<Value> {
        let body = RegisterRequest {
            nickname: nickname.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        normalize(|| self.post("/users/register", &body)).await
    }

    /// Logs in with an email address or nickname.
    pub async fn login(&self, identifier: &str, password: &str) -> CallResult<Value> {
        let body = LoginRequest {
            identifier: identifier.to_string(),
            password: password.to_string(),
        };
        normalize(|| self.post("/users/login", &body)).await
    }

    /// Checks a token issued by `register` or `login`.
    pub async fn verify(&self, token: &str) -> CallResult<Value> {
        normalize(move || async move {
            let request = self
                .request(Method::GET, "/users/verify")?
                .bearer_auth(token);
            self.send(request).await
        })
        .await
    }
}

/// Decodes a success body. An empty body reads as JSON `null`, and a body
/// that is not JSON is kept as a plain string.
fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
