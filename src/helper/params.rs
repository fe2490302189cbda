use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::helper::error::{Result, SubsampleError};
use crate::helper::record::{COUNT_COLUMN, KEY_COLUMN};
use crate::helper::sampler::SUBSAMPLE_SEED;

/// Tunables for the scan and draw steps, optionally loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubsampleParams {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_key_column", alias = "gene_column")]
    pub key_column: usize,
    #[serde(default = "default_count_column")]
    pub count_column: usize,
}

fn default_seed() -> u64 {
    SUBSAMPLE_SEED
}

fn default_key_column() -> usize {
    KEY_COLUMN
}

fn default_count_column() -> usize {
    COUNT_COLUMN
}

impl Default for SubsampleParams {
    fn default() -> Self {
        SubsampleParams {
            seed: SUBSAMPLE_SEED,
            key_column: KEY_COLUMN,
            count_column: COUNT_COLUMN,
        }
    }
}

impl SubsampleParams {
    pub fn from_json_string(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json_str = fs::read_to_string(path)
            .map_err(|_| SubsampleError::ParamFileAccessError(path.display().to_string()))?;
        Self::from_json_string(&json_str)
    }

    /// Loads `path` when given, falling back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }
}
