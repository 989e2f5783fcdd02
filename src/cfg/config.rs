// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::cfg::enums::BufferMode;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    /// Log-buffer backing-store selection and sizing (spec §6).
    pub buffer: BufferConfig,
    /// Pipeline-wide knobs outside the buffer's concern.
    pub pipeline: PipelineConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
/// Parameters driving [`crate::buffer::factory::open_buffer`].
pub struct BufferConfig {
    #[serde(rename = "Mode", default = "default_buffer_mode")]
    /// Which store to use, or `Auto` to decide from `EstimatedBytes`.
    pub mode: BufferMode,

    #[serde(rename = "TempDir", default = "default_temp_dir")]
    /// Directory in which `logbuffer_<uuid>.tmp` is created for the
    /// file-backed store.
    pub temp_dir: PathBuf,

    #[serde(rename = "EstimatedBytes", default)]
    /// Expected byte volume of the log being replayed; consulted only in
    /// `Auto` mode.
    pub estimated_bytes: u64,

    #[serde(rename = "TotalAvailableMemory", default = "default_total_available_memory")]
    /// Memory budget the `Auto` heuristic compares `EstimatedBytes` against.
    pub total_available_memory: u64,
}

fn default_buffer_mode() -> BufferMode {
    BufferMode::Auto
}

fn default_temp_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_total_available_memory() -> u64 {
    // 1 GiB: a conservative default when the host's real memory budget is
    // not known to the caller.
    1 << 30
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            mode: default_buffer_mode(),
            temp_dir: default_temp_dir(),
            estimated_bytes: 0,
            total_available_memory: default_total_available_memory(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
/// Knobs for the top-level [`crate::pipeline::Pipeline`] driver.
pub struct PipelineConfig {
    #[serde(rename = "LogStatsOnCompletion", default = "default_true")]
    /// Whether `Pipeline::run` logs a [`crate::pipeline::PipelineStats`]
    /// summary via `tracing::info!` once the input is exhausted.
    pub log_stats_on_completion: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig { log_stats_on_completion: default_true() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { buffer: BufferConfig::default(), pipeline: PipelineConfig::default() }
    }
}

impl Config {
    /// Loads the configuration from YAML, validates it, and returns the
    /// ready-to-use value.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&s).context("failed to parse config YAML")?;
        cfg.validate_and_normalize()?;
        Ok(cfg)
    }

    /// Validates invariants and normalizes derived fields.
    pub fn validate_and_normalize(&mut self) -> Result<()> {
        ensure!(
            self.buffer.total_available_memory > 0,
            "TotalAvailableMemory must be > 0"
        );

        // A directory that does not yet exist is fine (the file buffer
        // creates it on demand); a path that exists and is not a directory
        // is a misconfiguration worth catching early.
        if self.buffer.temp_dir.exists() {
            ensure!(
                self.buffer.temp_dir.is_dir(),
                "TempDir exists and is not a directory: {}",
                self.buffer.temp_dir.display()
            );
        }

        Ok(())
    }
}
