use axum::body::Bytes;
use reqwest::Method;

use crate::shared::error::ProxyError;

/// Ответ core API, прочитанный целиком
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Non-2xx statuses become an error
    pub fn ensure_success(self) -> Result<Self, ProxyError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ProxyError::UpstreamStatus(self.status))
        }
    }

    /// Body as JSON; non-JSON bodies are kept as a string value
    pub fn json_or_text(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&self.body).into_owned())
        })
    }
}

/// HTTP-клиент для core API.
///
/// Клонируется в каждый обработчик через состояние axum, общего изменяемого
/// состояния между запросами нет.
#[derive(Debug, Clone)]
pub struct CoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl CoreClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a bodyless request to `{base_url}{path}` and read the full body.
    pub async fn send(&self, method: Method, path: &str) -> Result<UpstreamResponse, ProxyError> {
        let url = self.url(path);
        tracing::debug!("-> core {} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(ProxyError::Transport)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(ProxyError::Body)?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Percent-encode one path segment
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
