//! reqwest-backed [`Transport`].

use crate::config::ApiConfig;
use placepick_core::{PlacepickError, Result, Transport};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

/// JSON-over-HTTP transport for the user-account API.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlacepickError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder, method: &str, path: &str) -> Result<Value> {
        let request = match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        tracing::debug!(target: "placepick::http", %method, %path, "Sending request");
        let response = request.send().await.map_err(|e| {
            tracing::warn!(target: "placepick::http", %method, %path, error = %e, "Request failed");
            PlacepickError::transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                target: "placepick::http",
                %method,
                %path,
                status = status.as_u16(),
                "Unexpected status"
            );
            return Err(PlacepickError::status(status.as_u16(), path));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PlacepickError::json(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        let request = self.client.get(self.url(path));
        self.send(request, "GET", path).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        let request = self.client.post(self.url(path)).json(&body);
        self.send(request, "POST", path).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.access_token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placepick_core::api::paths;

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        assert_eq!(
            transport("https://api.example/").url(paths::USERS),
            "https://api.example/api/users"
        );
        assert_eq!(
            transport("https://api.example").url(paths::CHECK_NICKNAME),
            "https://api.example/api/users/check/nickname"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let transport = HttpTransport::new(&ApiConfig {
            access_token: Some("secret-token".to_string()),
            ..ApiConfig::default()
        })
        .unwrap();

        let debug = format!("{:?}", transport);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("authenticated: true"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is closed on CI runners.
        let transport = HttpTransport::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            access_token: None,
        })
        .unwrap();

        let err = transport.get(paths::USERS).await.unwrap_err();
        assert!(err.is_request_failure());
    }
}
