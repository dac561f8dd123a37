use crate::{Error, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Shared HTTP transport for the Courier API.
///
/// Owns the `reqwest` client, the base URL, and the bearer token. Service
/// clients hand it a method, path, query pairs, and an optional JSON body;
/// it dispatches the request and maps the response to typed values or
/// [`Error::Api`].
pub(crate) struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

// Manual impl so the bearer token never lands in logs.
impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

impl HttpTransport {
    pub fn new(base_url: String, auth_token: String, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let resp = self.dispatch(Method::GET, path, query, None, None).await?;
        Self::decode(resp).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_with_idempotency(path, body, None).await
    }

    pub async fn post_with_idempotency<B, T>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: Option<&str>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let resp = self
            .dispatch(Method::POST, path, &[], Some(body), idempotency_key)
            .await?;
        Self::decode(resp).await
    }

    pub async fn post_empty<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        self.dispatch(Method::POST, path, &[], body, None).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let resp = self.dispatch(Method::PUT, path, &[], Some(body), None).await?;
        Self::decode(resp).await
    }

    pub async fn put_empty<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        self.dispatch(Method::PUT, path, &[], body, None).await?;
        Ok(())
    }

    pub async fn patch_empty<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::PATCH, path, &[], Some(body), None)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(Method::DELETE, path, &[], None, None).await?;
        Ok(())
    }

    /// DELETE for the few endpoints whose response body matters.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.dispatch(Method::DELETE, path, &[], None, None).await?;
        Self::decode(resp).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        idempotency_key: Option<&str>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "dispatching Courier API request");

        let mut req = self
            .http
            .request(method, &url)
            .bearer_auth(&self.auth_token);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }
        if let Some(key) = idempotency_key {
            req = req.header("Idempotency-Key", key);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body_text = resp.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "Courier API request failed");
        Err(api_error(status.as_u16(), body_text))
    }

    // Decode through serde_json so malformed bodies surface as
    // Error::Serialization rather than a transport error.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Courier error bodies look like `{"message": "...", "type": "invalid_request_error"}`.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    code: Option<String>,
}

fn api_error(status: u16, body: String) -> Error {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => Error::Api {
            status,
            code: parsed.code,
            message: parsed.message.unwrap_or(body),
        },
        Err(_) => Error::Api {
            status,
            code: None,
            message: body,
        },
    }
}
