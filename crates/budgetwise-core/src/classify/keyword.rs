//! Keyword-based classifier artifact
//!
//! The pre-trained artifact is a JSON file mapping category labels to
//! keyword lists. Each keyword is compiled to a case-insensitive
//! word-boundary pattern; prediction picks the first label with a matching
//! keyword and falls back to the artifact's fallback label otherwise.

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

use super::Classifier;

const DEFAULT_FALLBACK: &str = "other";

/// On-disk artifact format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Label assigned when no keyword matches
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// Category label -> keyword list. BTreeMap keeps prediction order
    /// stable when keywords from several labels would match.
    pub categories: BTreeMap<String, Vec<String>>,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

/// Classifier backed by compiled keyword patterns
pub struct KeywordClassifier {
    rules: Vec<(String, Vec<Regex>)>,
    fallback: String,
}

impl KeywordClassifier {
    /// Load the artifact from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let artifact: ClassifierArtifact = serde_json::from_str(&data)?;
        debug!(
            path = %path.display(),
            labels = artifact.categories.len(),
            "Loaded classifier artifact"
        );
        Self::from_artifact(artifact)
    }

    /// Compile an artifact into matchable rules
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self> {
        let mut rules = Vec::with_capacity(artifact.categories.len());

        for (label, keywords) in artifact.categories {
            let mut patterns = Vec::with_capacity(keywords.len());
            for keyword in &keywords {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword.trim()));
                patterns.push(Regex::new(&pattern)?);
            }
            rules.push((label, patterns));
        }

        Ok(Self {
            rules,
            fallback: artifact.fallback,
        })
    }
}

impl Classifier for KeywordClassifier {
    fn predict(&self, description: &str) -> Result<String> {
        for (label, patterns) in &self.rules {
            if patterns.iter().any(|p| p.is_match(description)) {
                return Ok(label.clone());
            }
        }

        debug!(description, "No keyword match, using fallback label");
        Ok(self.fallback.clone())
    }
}
