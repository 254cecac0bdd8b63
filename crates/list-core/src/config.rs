//! Store Configuration
//!
//! Seed items and the text policy applied to new and edited text.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Which texts the store accepts for `add` and `commit_edit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPolicy {
    /// Any text, including the empty string
    #[default]
    AllowEmpty,
    /// Text must contain something other than whitespace
    RejectBlank,
}

impl TextPolicy {
    pub fn check(&self, text: &str) -> DomainResult<()> {
        match self {
            TextPolicy::AllowEmpty => Ok(()),
            TextPolicy::RejectBlank if text.trim().is_empty() => {
                Err(DomainError::InvalidInput("item text is blank".to_string()))
            }
            TextPolicy::RejectBlank => Ok(()),
        }
    }
}

/// Configuration for a new [`ItemStore`](crate::ItemStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Texts added in order when the store is built
    pub seed: Vec<String>,
    pub text_policy: TextPolicy,
}

impl StoreConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::Config(format!("invalid config: {}", e)))
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }
}
