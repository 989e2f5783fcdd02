// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::fs;

use anyhow::{Context, Result};
use scada_log_replay::cfg::config::Config;

/// Path to a fixture log under `tests/integration_tests/fixtures/`, or the
/// value of `TEST_LOG_FIXTURE` when set, mirroring the teacher's
/// environment-overridable `test_path` for its own integration config.
pub fn fixture_path(name: &str) -> String {
    std::env::var("TEST_LOG_FIXTURE").unwrap_or_else(|_| {
        format!("{}/tests/integration_tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
    })
}

pub fn load_fixture_text(name: &str) -> Result<String> {
    let path = fixture_path(name);
    fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))
}

pub fn default_config() -> Config {
    Config::default()
}
