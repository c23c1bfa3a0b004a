//! HTTP client helpers for tests.

use std::time::Duration;

use serde::Deserialize;

use triage::cache::TRIAGE_STATUS_HEADER;
use triage::generation::ConversationTurn;
use triage::orchestrator::Reply;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub knowledge_entries: usize,
    pub semantic_mode: String,
    pub generator: String,
    pub cache_enabled: bool,
    pub cache_entries: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
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

    /// Posts to `/analyze`; returns the reply and the triage status header.
    pub async fn analyze(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<(Reply, String), TestClientError> {
        let body = serde_json::json!({
            "message": message,
            "conversation_history": history,
        });
        let resp = self.client.post(self.url("/analyze")).json(&body).send().await?;

        let status_header = resp
            .headers()
            .get(TRIAGE_STATUS_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            400 => Err(TestClientError::BadRequest(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}
