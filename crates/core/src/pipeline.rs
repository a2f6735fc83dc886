use crate::catalog;
use crate::config::AppConfig;
use crate::embeddings;
use crate::ranker;
use crate::tabulator::{self, ResultTable};
use crate::MatchError;
use anyhow::Context;
use providers::lmstudio::{LmStudioConfig, LmStudioProvider};
use providers::noop::NoopProvider;
use providers::openai::{OpenAiConfig, OpenAiProvider};
use providers::ProviderRegistry;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct MatchSummary {
    pub classification: String,
    pub inputs: usize,
    pub references: usize,
    pub guesses: usize,
}

/// Run one matching session: load the catalog, encode both sides, rank,
/// tabulate. Stateless; any failure aborts the whole session.
pub async fn run_matching(
    config: &AppConfig,
    registry: &ProviderRegistry,
    classification: &str,
    inputs: &[String],
    top_n: usize,
) -> anyhow::Result<(ResultTable, MatchSummary)> {
    let catalog = catalog::load(Path::new(&config.catalogs.data_dir), classification)
        .context("load reference catalog")?;
    info!(
        "Loaded {} reference entries for {}",
        catalog.len(),
        catalog.name()
    );

    // Validate the request before paying for any embedding calls.
    if top_n == 0 || top_n > catalog.len() {
        return Err(MatchError::InsufficientReferenceEntries {
            requested: top_n,
            available: catalog.len(),
        }
        .into());
    }
    if inputs.is_empty() {
        return Err(MatchError::EmptyInput.into());
    }

    let labels = catalog.labels();
    let batch_size = config.embeddings.batch_size;
    info!("Encoding {} reference labels...", labels.len());
    let reference = embeddings::embed_batched(&labels, None, batch_size, registry)
        .await
        .context("embed reference labels")?;
    info!("Encoding {} inputs...", inputs.len());
    let encoded = embeddings::embed_batched(inputs, None, batch_size, registry)
        .await
        .context("embed inputs")?;

    debug!("Scoring {} x {} pairs", inputs.len(), labels.len());
    let ranked = ranker::rank(&encoded.vectors, &reference.vectors)?;
    let table = tabulator::tabulate(inputs, &ranked, &catalog, top_n)?;

    let summary = MatchSummary {
        classification: catalog.name().to_string(),
        inputs: inputs.len(),
        references: catalog.len(),
        guesses: top_n,
    };
    Ok((table, summary))
}

pub fn build_registry(config: &AppConfig) -> ProviderRegistry {
    let mut reg = ProviderRegistry::new().with_embedding("noop", Arc::new(NoopProvider));

    if let (Some(key), Some(base)) = (
        std::env::var_os("OPENAI_API_KEY"),
        std::env::var_os("OPENAI_BASE_URL"),
    ) {
        let provider = OpenAiProvider::new(OpenAiConfig {
            api_key: key.to_string_lossy().into_owned(),
            base_url: base.to_string_lossy().into_owned(),
            embedding_model: config.embeddings.model.clone(),
        });
        reg = reg.with_embedding("openai", Arc::new(provider));
    }

    if let Some(base) = std::env::var_os("LMSTUDIO_BASE_URL") {
        let provider = LmStudioProvider::new(LmStudioConfig {
            base_url: base.to_string_lossy().into_owned(),
            embedding_model: config.embeddings.model.clone(),
        });
        reg = reg.with_embedding("lmstudio", Arc::new(provider));
    }

    reg.set_preferred_embedding(&config.embeddings.provider)
}
