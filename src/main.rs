// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{env, fs};

use anyhow::{Context, Result};
use scada_log_replay::{
    buffer::factory::open_buffer,
    cfg::{cli::resolve_config_path, config::Config, logger::init_logger},
    pipeline::Pipeline,
};
use tracing::info;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let log_path = args.next().context(
        "usage: scada-log-replay <log-file> [config.yaml] [logger.yaml]",
    )?;
    let config_arg = args.next();
    let logger_arg = args.next();

    // Logging is optional: a bare invocation with no logger config still
    // runs, it just stays quiet on stderr/stdout.
    let _guard = match logger_arg {
        Some(path) => Some(init_logger(&path).context("failed to initialize logger")?),
        None => None,
    };

    let cfg = match config_arg {
        Some(path) => resolve_config_path(&path)
            .and_then(Config::load_from_file)
            .context("failed to resolve or load config")?,
        None => Config::default(),
    };

    let text = fs::read_to_string(&log_path)
        .with_context(|| format!("failed to read log file {log_path}"))?;

    let buffer = open_buffer(
        cfg.buffer.mode,
        cfg.buffer.estimated_bytes,
        &cfg.buffer.temp_dir,
        cfg.buffer.total_available_memory,
    )
    .context("failed to open log buffer")?;

    let mut pipeline = Pipeline::new(buffer, cfg.pipeline.log_stats_on_completion);
    let (results, stats) = pipeline.run(&text).context("pipeline run failed")?;
    pipeline.dispose().context("failed to dispose log buffer")?;

    info!(decoded = results.len(), "replay complete");
    for result in &results {
        println!("{result:?}");
    }
    println!("{stats:?}");

    Ok(())
}
