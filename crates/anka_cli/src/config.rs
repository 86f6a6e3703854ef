use std::path::{Path, PathBuf};

use anka_base::{MemoryContentStore, RelationshipType};
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Top-level `anka` configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnkaConfig {
    /// Interpretive content.
    #[serde(default)]
    pub content: ContentToml,

    /// Symbolic tree settings.
    #[serde(default)]
    pub tree: TreeToml,

    /// Compatibility settings.
    #[serde(default)]
    pub compatibility: CompatibilityToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentToml {
    /// JSON content store. Relative paths resolve against the config file.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeToml {
    #[serde(default = "default_significant_edges")]
    pub significant_edges: usize,
}

impl Default for TreeToml {
    fn default() -> Self {
        Self {
            significant_edges: default_significant_edges(),
        }
    }
}

fn default_significant_edges() -> usize {
    5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompatibilityToml {
    #[serde(default = "default_relationship")]
    pub relationship: String,
}

impl Default for CompatibilityToml {
    fn default() -> Self {
        Self {
            relationship: default_relationship(),
        }
    }
}

fn default_relationship() -> String {
    "romantic".to_string()
}

impl AnkaConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        if let (Some(content), Some(dir)) = (config.content.path.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The configured content store, or an empty one.
    pub fn content_store(&self) -> Result<MemoryContentStore> {
        let Some(path) = &self.content.path else {
            return Ok(MemoryContentStore::new());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read content store {}", path.display()))?;
        let store = MemoryContentStore::from_json(&text)
            .with_context(|| format!("failed to parse content store {}", path.display()))?;
        tracing::info!(path = %path.display(), records = store.len(), "loaded content store");
        Ok(store)
    }

    /// The default relationship type.
    pub fn relationship(&self) -> Result<RelationshipType> {
        parse_relationship(&self.compatibility.relationship)
    }
}

/// Parse a relationship name, listing the valid names on failure.
pub fn parse_relationship(name: &str) -> Result<RelationshipType> {
    RelationshipType::from_name(name).ok_or_else(|| {
        anyhow!("invalid relationship: {name} (romantic, friendship, business, family)")
    })
}
