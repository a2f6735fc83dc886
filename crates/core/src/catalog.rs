//! Reference classification catalogs and the registry that selects them by name.

use crate::MatchError;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Whether a classification carries codes alongside its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogShape {
    Plain,
    Coded,
}

#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    pub code: Option<String>,
    pub label: String,
}

/// Ordered reference list for one classification. Immutable after load;
/// entries are identified by their index.
#[derive(Debug, Clone)]
pub struct ClassificationCatalog {
    name: String,
    shape: CatalogShape,
    entries: Vec<ReferenceEntry>,
}

impl ClassificationCatalog {
    pub fn from_labels(name: &str, labels: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            shape: CatalogShape::Plain,
            entries: labels
                .into_iter()
                .map(|label| ReferenceEntry { code: None, label })
                .collect(),
        }
    }

    pub fn from_pairs(name: &str, pairs: Vec<(String, String)>) -> Self {
        Self {
            name: name.to_string(),
            shape: CatalogShape::Coded,
            entries: pairs
                .into_iter()
                .map(|(code, label)| ReferenceEntry {
                    code: Some(code),
                    label,
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> CatalogShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&ReferenceEntry> {
        self.entries.get(index)
    }

    /// The label column, in entry order. This is the text that gets embedded;
    /// codes never reach the model.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }
}

/// Classification identifier -> (data file, row shape). Aliases point at the
/// same file. Adding a classification means adding a row here and a file under
/// the data directory, nothing else.
const REGISTRY: &[(&str, &str, CatalogShape)] = &[
    ("IOCC", "IOCC_sectors.json", CatalogShape::Plain),
    ("openIO-Canada", "IOCC_sectors.json", CatalogShape::Plain),
    ("NACE", "NACE_sectors.json", CatalogShape::Coded),
    ("NAICS", "NAICS_sectors.json", CatalogShape::Coded),
    ("exiobase", "exiobase_sectors.json", CatalogShape::Plain),
    ("ecoinvent", "ecoinvent_flows.json", CatalogShape::Plain),
    ("IMPACT World+", "IW_flows.json", CatalogShape::Plain),
];

/// Supported classification identifiers, in registry order.
pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _, _)| *name).collect()
}

/// Resolve a classification identifier without touching the filesystem.
/// This is the pre-flight check: unknown names fail here, before any
/// embedding work is attempted.
pub fn resolve(classification: &str) -> Result<(&'static str, CatalogShape), MatchError> {
    REGISTRY
        .iter()
        .find(|(name, _, _)| *name == classification)
        .map(|(_, file, shape)| (*file, *shape))
        .ok_or_else(|| MatchError::UnknownClassification(classification.to_string()))
}

/// Load the reference list for a classification from the data directory.
pub fn load(data_dir: &Path, classification: &str) -> anyhow::Result<ClassificationCatalog> {
    let (file, shape) = resolve(classification)?;
    let path = data_dir.join(file);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("read reference list {}", path.display()))?;
    let catalog = match shape {
        CatalogShape::Plain => {
            let labels: Vec<String> = serde_json::from_str(&raw)
                .with_context(|| format!("parse {} as a label list", path.display()))?;
            ClassificationCatalog::from_labels(classification, labels)
        }
        CatalogShape::Coded => {
            let pairs: Vec<(String, String)> = serde_json::from_str(&raw)
                .with_context(|| format!("parse {} as (code, label) pairs", path.display()))?;
            ClassificationCatalog::from_pairs(classification, pairs)
        }
    };
    Ok(catalog)
}
