use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Location of a paired image/label dataset and the window of items to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub image_path: PathBuf,
    pub label_path: PathBuf,
    /// First item of the window.
    pub offset: usize,
    /// Number of items; `None` takes everything after `offset`.
    pub limit: Option<usize>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("data/train-images-idx3-ubyte"),
            label_path: PathBuf::from("data/train-labels-idx1-ubyte"),
            offset: 0,
            limit: None,
        }
    }
}

impl DatasetConfig {
    pub fn new<P: Into<PathBuf>>(image_path: P, label_path: P) -> Self {
        Self {
            image_path: image_path.into(),
            label_path: label_path.into(),
            ..Self::default()
        }
    }

    pub fn with_window(mut self, offset: usize, limit: Option<usize>) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }
}

/// Load a dataset configuration from a JSON file.
pub fn load_dataset_config<P: AsRef<Path>>(path: P) -> Result<DatasetConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DatasetConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded dataset config: images={}, labels={}, offset={}, limit={:?}",
        config.image_path.display(),
        config.label_path.display(),
        config.offset,
        config.limit
    );
    Ok(config)
}
