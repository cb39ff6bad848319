use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::constants::LOGOUT_ENDPOINT;
use crate::error::{AdminError, AdminResult};

/// Thin JSON client for the organization's REST API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<&str>) -> AdminResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| AdminError::ConfigError("Invalid auth token format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(AdminError::RequestError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> AdminResult<Value> {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AdminResult<Value> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AdminResult<Value> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    pub async fn delete_json(&self, path: &str) -> AdminResult<Value> {
        self.send(self.client.delete(self.url(path))).await
    }

    /// Tell the server to drop its session. The caller clears the local marker
    /// whatever the outcome.
    pub async fn logout(&self) -> AdminResult<()> {
        self.get_json(LOGOUT_ENDPOINT, &[]).await.map(|_| ())
    }

    /// Non-2xx statuses are transport failures. An empty 2xx body reads as `null`.
    async fn send(&self, request: RequestBuilder) -> AdminResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "api response");

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AdminError::ApiError(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
