use crate::cipher::{CipherMode, CipherType};
use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of concurrent chunks for Caesar stages
pub const DEFAULT_CHUNKS: usize = 4;

/// Default threshold after which a slow stage is reported
pub const DEFAULT_SLOW_STAGE_WARNING_MS: u64 = 10_000;

/// One cipher in the pipeline: its type and raw key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub cipher: CipherType,
    #[serde(default)]
    pub key: String,
}

/// Full pipeline definition, loadable from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub mode: CipherMode,
    pub stages: Vec<StageConfig>,
    #[serde(default = "default_chunks")]
    pub chunks: usize,
    #[serde(default = "default_slow_stage_warning_ms")]
    pub slow_stage_warning_ms: u64,
}

fn default_chunks() -> usize {
    DEFAULT_CHUNKS
}

fn default_slow_stage_warning_ms() -> u64 {
    DEFAULT_SLOW_STAGE_WARNING_MS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: CipherMode::default(),
            stages: Vec::new(),
            chunks: DEFAULT_CHUNKS,
            slow_stage_warning_ms: DEFAULT_SLOW_STAGE_WARNING_MS,
        }
    }
}

impl PipelineConfig {
    /// Pair up cipher types with keys. Both lists must have the same length.
    pub fn from_pairs(types: &[CipherType], keys: &[String], mode: CipherMode) -> Result<Self> {
        if types.len() != keys.len() {
            return Err(CipherError::InconsistentArguments {
                types: types.len(),
                keys: keys.len(),
            });
        }
        let stages = types
            .iter()
            .zip(keys)
            .map(|(&cipher, key)| StageConfig {
                cipher,
                key: key.clone(),
            })
            .collect();
        Ok(Self {
            mode,
            stages,
            ..Default::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Chunk count actually used; zero is treated as one
    pub fn effective_chunks(&self) -> usize {
        self.chunks.max(1)
    }
}
