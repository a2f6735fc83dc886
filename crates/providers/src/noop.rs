use crate::{EmbedResponse, EmbeddingProvider, ProviderError};

/// Inert provider for wiring tests; returns an empty vector per text.
#[derive(Debug, Default)]
pub struct NoopProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for NoopProvider {
    async fn embed(&self, texts: &[String]) -> Result<EmbedResponse, ProviderError> {
        Ok(EmbedResponse {
            vectors: vec![vec![]; texts.len()],
        })
    }
}
