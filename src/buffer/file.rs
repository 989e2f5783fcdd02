// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! File-backed log buffer (spec §6): an append-only JSON-lines temp file,
//! re-scanned on `find`. Chosen by the `Auto` heuristic (see
//! [`crate::buffer::factory`]) when the estimated record volume is too
//! large to comfortably hold in memory.

use std::{
    fs::{self, File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use rand::Rng;

use crate::{
    buffer::LogBuffer,
    error::{ReplayError, Result},
    models::persisted::PersistedRecord,
};

fn random_temp_name() -> String {
    let suffix: u64 = rand::rng().random();
    format!("logbuffer_{suffix:016x}.tmp")
}

#[derive(Debug)]
pub struct FileLogBuffer {
    path: PathBuf,
    writer: BufWriter<File>,
    inserted: usize,
    disposed: bool,
}

impl FileLogBuffer {
    /// Create a new temp file named `logbuffer_<uuid>.tmp` under `dir`.
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| ReplayError::BufferIo(e.to_string()))?;
        let path = dir.join(random_temp_name());
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ReplayError::BufferIo(e.to_string()))?;
        Ok(FileLogBuffer { path, writer: BufWriter::new(file), inserted: 0, disposed: false })
    }

    fn reader(&self) -> Result<BufReader<File>> {
        let file = File::open(&self.path).map_err(|e| ReplayError::BufferIo(e.to_string()))?;
        Ok(BufReader::new(file))
    }
}

impl LogBuffer for FileLogBuffer {
    fn add(&mut self, record: PersistedRecord) -> Result<()> {
        let line = record.to_json_line()?;
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| ReplayError::BufferIo(e.to_string()))?;
        self.writer.flush().map_err(|e| ReplayError::BufferIo(e.to_string()))?;
        self.inserted += 1;
        Ok(())
    }

    fn find(&self, predicate: &dyn Fn(&PersistedRecord) -> bool) -> Result<Vec<PersistedRecord>> {
        let reader = self.reader()?;
        let mut out = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| ReplayError::BufferIo(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = PersistedRecord::from_json_line(&line)?;
            if predicate(&record) {
                out.push(record);
            }
        }
        Ok(out)
    }

    /// Spec §6: the file-backed buffer is allowed to treat removal as a
    /// no-op.
    fn remove(&mut self, _record: &PersistedRecord) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> usize {
        self.inserted
    }

    fn dispose(&mut self) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(_) if !self.path.exists() => Ok(()),
            Err(e) => Err(ReplayError::BufferIo(e.to_string())),
        }
    }
}

impl Drop for FileLogBuffer {
    fn drop(&mut self) {
        if !self.disposed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
