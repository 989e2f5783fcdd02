// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Buffer-selection heuristic (spec §6, "Buffer-mode selection").

use std::path::Path;

use crate::{
    buffer::{LogBufferImpl, file::FileLogBuffer, memory::MemoryLogBuffer},
    cfg::enums::BufferMode,
    error::Result,
};

/// Fraction of total available memory below which `Auto` mode prefers the
/// in-memory store (spec §6: `estimated < 0.30 × total_available_memory`).
const AUTO_MEMORY_FRACTION: f64 = 0.30;

/// Open a [`LogBufferImpl`] per `mode`, applying the `Auto` heuristic when
/// `mode` is [`BufferMode::Auto`].
pub fn open_buffer(
    mode: BufferMode,
    estimated_bytes: u64,
    temp_dir: &Path,
    total_available_memory: u64,
) -> Result<LogBufferImpl> {
    let resolved = match mode {
        BufferMode::Auto => {
            let threshold = (total_available_memory as f64) * AUTO_MEMORY_FRACTION;
            if (estimated_bytes as f64) < threshold { BufferMode::InMemory } else { BufferMode::File }
        },
        other => other,
    };

    match resolved {
        BufferMode::InMemory => Ok(LogBufferImpl::Memory(MemoryLogBuffer::new())),
        BufferMode::File => Ok(LogBufferImpl::File(FileLogBuffer::create(temp_dir)?)),
        BufferMode::Auto => unreachable!("Auto is resolved above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::LogBuffer;

    #[test]
    fn auto_picks_in_memory_below_threshold() {
        let mut buf =
            open_buffer(BufferMode::Auto, 10, &std::env::temp_dir(), 1_000_000).expect("open");
        assert!(matches!(buf, LogBufferImpl::Memory(_)));
        buf.dispose().expect("dispose");
    }

    #[test]
    fn auto_picks_file_above_threshold() {
        let dir = std::env::temp_dir().join("replay_factory_test");
        let mut buf = open_buffer(BufferMode::Auto, 900_000, &dir, 1_000_000).expect("open");
        assert!(matches!(buf, LogBufferImpl::File(_)));
        buf.dispose().expect("dispose");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn explicit_mode_is_never_overridden() {
        let mut buf =
            open_buffer(BufferMode::InMemory, 900_000, &std::env::temp_dir(), 1_000_000)
                .expect("open");
        assert!(matches!(buf, LogBufferImpl::Memory(_)));
        buf.dispose().expect("dispose");
    }
}
