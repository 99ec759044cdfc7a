//! Dataset configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;
use crate::domain::quiz::LoadOptions;

/// Where the quiz definition lives and how strictly it is checked
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the dataset file (.json, .yaml or .yml)
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Refuse to start when the step graph contains a cycle
    #[serde(default)]
    pub reject_cycles: bool,
}

impl DatasetConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options handed to the dataset loader
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            reject_cycles: self.reject_cycles,
        }
    }

    /// Validate dataset configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("dataset.path"));
        }
        let supported = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "json" | "yaml" | "yml"))
            .unwrap_or(false);
        if !supported {
            return Err(ValidationError::UnsupportedDatasetFormat);
        }
        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            reject_cycles: false,
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("questions.json")
}
