use providers::ProviderRegistry;

#[derive(Debug, Clone)]
pub struct EmbeddingRequest {
    pub texts: Vec<String>,
    pub provider: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EmbeddingResult {
    pub vectors: Vec<Vec<f32>>,
}

pub async fn embed(
    req: EmbeddingRequest,
    registry: &ProviderRegistry,
) -> anyhow::Result<EmbeddingResult> {
    let provider = registry.embedding(req.provider.as_deref())?;
    let resp = provider.embed(&req.texts).await?;
    Ok(EmbeddingResult {
        vectors: resp.vectors,
    })
}

/// Encode a text batch in chunks of `batch_size` so large reference lists
/// stay under provider request limits. Vector order matches text order.
pub async fn embed_batched(
    texts: &[String],
    provider: Option<&str>,
    batch_size: usize,
    registry: &ProviderRegistry,
) -> anyhow::Result<EmbeddingResult> {
    let batch_size = batch_size.max(1);
    let mut vectors = Vec::with_capacity(texts.len());
    for batch in texts.chunks(batch_size) {
        let req = EmbeddingRequest {
            texts: batch.to_vec(),
            provider: provider.map(str::to_string),
        };
        let result = embed(req, registry).await?;
        vectors.extend(result.vectors);
    }
    Ok(EmbeddingResult { vectors })
}
