//! HTTP client for the vocabulary backend.

use reqwest::{Client, Response};
use serde::Deserialize;

use vocab_core::rules::RuleTable;
use vocab_core::types::{LevelRule, SeedEntry, SeedReport, VocabularyItem};

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

// === API Response Types ===

#[derive(Debug, Deserialize)]
struct LoadVocabResponse {
    #[allow(dead_code)]
    message: String,
    #[serde(flatten)]
    report: SeedReport,
}

/// Thin wrapper over the backend's `/api` routes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    backend_url: String,
}

impl ApiClient {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            backend_url,
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// GET /api/rules
    pub async fn fetch_rules(&self) -> Result<RuleTable, ClientError> {
        let url = format!("{}/api/rules", self.backend_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let rules: Vec<LevelRule> = check(resp)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        RuleTable::new(rules).map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// GET /api/vocab
    pub async fn list_vocab(&self) -> Result<Vec<VocabularyItem>, ClientError> {
        let url = format!("{}/api/vocab", self.backend_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check(resp)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// POST /api/vocab/load
    ///
    /// With no entries the request goes out without a body, so the backend
    /// falls back to its own seed file.
    pub async fn load_vocab(&self, entries: &[SeedEntry]) -> Result<SeedReport, ClientError> {
        let url = format!("{}/api/vocab/load", self.backend_url);
        let mut request = self.client.post(&url);
        if !entries.is_empty() {
            request = request.json(entries);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let response: LoadVocabResponse = check(resp)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(response.report)
    }

    /// PUT /api/vocab/:id
    pub async fn update_vocab(&self, item: &VocabularyItem) -> Result<VocabularyItem, ClientError> {
        let url = format!("{}/api/vocab/{}", self.backend_url, item.id);
        let resp = self
            .client
            .put(&url)
            .json(item)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check(resp)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let message = resp.text().await.unwrap_or_default();
    Err(ClientError::Backend { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.backend_url(), "http://localhost:3000");
    }

    #[test]
    fn parses_load_response() {
        let response: LoadVocabResponse = serde_json::from_str(
            r#"{"message":"ok","inserted":3,"skipped":1,"failed":0}"#,
        )
        .unwrap();
        assert_eq!(response.report.inserted, 3);
        assert_eq!(response.report.skipped, 1);
    }

    #[test]
    fn backend_error_display() {
        let error = ClientError::Backend {
            status: 500,
            message: "seed file missing".to_string(),
        };
        assert_eq!(error.to_string(), "Backend error: 500 - seed file missing");
    }
}
