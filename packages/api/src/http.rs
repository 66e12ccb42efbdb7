//! HTTP primitives and the transport seam.
//!
//! The session layer assembles [`HttpRequest`] values and hands them to a
//! [`Transport`]. Keeping the transport a trait lets the session tests
//! script responses without a network; the application always uses the
//! reqwest-backed [`HttpClient`], which compiles for wasm32 and native
//! targets alike.

use serde_json::Value;

use crate::error::ApiError;

/// The HTTP methods the backend contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request as assembled by the session layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential attached as the `Authorization` header.
    pub bearer: Option<String>,
    /// JSON body, when the method carries one.
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn with_bearer(mut self, bearer: Option<String>) -> Self {
        self.bearer = bearer;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response reduced to what the client cares about. Bodies that are not
/// JSON (or are empty, like a DELETE's 204) become [`Value::Null`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// The backend's error message, when it sent one. DRF uses `detail`,
    /// the auth views use `error`.
    pub fn detail(&self) -> Option<String> {
        self.body
            .get("detail")
            .or_else(|| self.body.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Executes a single request. No retries, no auth decisions; that is the
/// session layer's job.
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// reqwest-backed transport used by the running application.
#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.inner.get(&request.url),
            Method::Post => self.inner.post(&request.url),
            Method::Patch => self.inner.patch(&request.url),
            Method::Delete => self.inner.delete(&request.url),
        };

        if let Some(bearer) = &request.bearer {
            builder = builder.bearer_auth(bearer);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };

        Ok(HttpResponse { status, body })
    }
}
