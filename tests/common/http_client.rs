//! HTTP client helpers for tests.

use folio::orchestrator::PrioritizeResponse;
use folio::project::Project;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

/// Status code, `x-folio-status` label and body of one prioritize call.
#[derive(Debug)]
pub struct PrioritizeOutcome {
    pub status: u16,
    pub label: String,
    pub body: PrioritizeResponse,
}

impl PrioritizeOutcome {
    pub fn titles(&self) -> Vec<&str> {
        self.body
            .data
            .as_ref()
            .map(|ps| ps.iter().map(|p| p.title.as_str()).collect())
            .unwrap_or_default()
    }
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn prioritize(
        &self,
        body: &serde_json::Value,
    ) -> Result<PrioritizeOutcome, TestClientError> {
        let resp = self
            .client
            .post(self.url("/v1/projects/prioritize"))
            .json(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let label = resp
            .headers()
            .get("x-folio-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let body = resp.json().await?;

        Ok(PrioritizeOutcome {
            status,
            label,
            body,
        })
    }

    pub async fn prioritize_raw(&self, raw: &str) -> Result<(u16, String), TestClientError> {
        let resp = self
            .client
            .post(self.url("/v1/projects/prioritize"))
            .header("Content-Type", "application/json")
            .body(raw.to_string())
            .send()
            .await?;

        let status = resp.status().as_u16();
        Ok((status, resp.text().await?))
    }

    pub async fn projects(&self) -> Result<Vec<Project>, TestClientError> {
        let resp = self.client.get(self.url("/v1/projects")).send().await?;
        self.expect_json(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;
        self.expect_json(resp).await
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;
        self.expect_json(resp).await
    }

    async fn expect_json<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, TestClientError> {
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    pub status: String,
    pub model: String,
    pub strategy: String,
    pub timeout_ms: u64,
}

impl ReadyResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),
}
