//! LM Studio (or any local OpenAI-compatible server) embedding backend.
//! Same wire format as the hosted endpoint, minus authentication.

use crate::{EmbedResponse, EmbeddingProvider, ProviderError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct LmStudioConfig {
    pub base_url: String,
    pub embedding_model: String,
}

#[derive(Clone)]
pub struct LmStudioProvider {
    client: Client,
    cfg: Arc<LmStudioConfig>,
}

impl LmStudioProvider {
    pub fn new(cfg: LmStudioConfig) -> Self {
        Self {
            client: Client::new(),
            cfg: Arc::new(cfg),
        }
    }
}

#[derive(Deserialize)]
struct EmbeddingApiResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait::async_trait]
impl EmbeddingProvider for LmStudioProvider {
    async fn embed(&self, texts: &[String]) -> Result<EmbedResponse, ProviderError> {
        #[derive(serde::Serialize)]
        struct EmbedRequest<'a> {
            model: &'a str,
            input: &'a [String],
        }

        let body = EmbedRequest {
            model: &self.cfg.embedding_model,
            input: texts,
        };

        let resp = self
            .client
            .post(format!("{}/v1/embeddings", self.cfg.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::RequestFailed(format!(
                "status {} body {}",
                status, body
            )));
        }

        let parsed: EmbeddingApiResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if parsed.data.len() != texts.len() {
            return Err(ProviderError::MalformedResponse(format!(
                "asked for {} embeddings, got {}",
                texts.len(),
                parsed.data.len()
            )));
        }

        Ok(EmbedResponse {
            vectors: parsed.data.into_iter().map(|d| d.embedding).collect(),
        })
    }
}
