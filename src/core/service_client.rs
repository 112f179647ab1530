// src/core/service_client.rs
//! Shared outbound HTTP client for the job-search provider and the chat model

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, trace};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Thin wrapper over a pooled `reqwest::Client`. Cloning is cheap and shares
/// the connection pool.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
}

impl ServiceClient {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// POST a JSON payload with extra headers and decode a JSON reply.
    pub async fn post_json<T, R>(&self, url: &str, headers: &[(&str, &str)], payload: &T) -> Result<R>
    where
        T: serde::Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let mut request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(payload);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        trace!("POST {} -> {}", url, status);

        if status.is_success() {
            response
                .json::<R>()
                .await
                .with_context(|| format!("Failed to parse JSON response from {}", url))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Service error response from {}: {} {}", url, status, error_text);
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_post_json_sends_headers_and_decodes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/echo")
            .match_header("x-custom", "abc")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = ServiceClient::new(5).unwrap();
        let reply: Value = client
            .post_json(
                &format!("{}/echo", server.url()),
                &[("X-Custom", "abc")],
                &json!({"hello": "world"}),
            )
            .await
            .unwrap();

        assert_eq!(reply, json!({"ok": true}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_json_non_success_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/fail")
            .with_status(429)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let client = ServiceClient::new(5).unwrap();
        let result: Result<Value> = client
            .post_json(&format!("{}/fail", server.url()), &[], &json!({}))
            .await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("429"));
        assert!(err.contains("quota exceeded"));
    }
}
