//! Mock classifier for testing and offline use

use crate::error::Result;

use super::Classifier;

/// Classifier that returns a fixed label for every description
pub struct MockClassifier {
    label: String,
}

impl MockClassifier {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new("other")
    }
}

impl Classifier for MockClassifier {
    fn predict(&self, _description: &str) -> Result<String> {
        Ok(self.label.clone())
    }
}
