// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Log Buffer — the external collaborator of spec §6.
//!
//! The spec fixes only the contract (`add`/`find`/`remove`/`count`/
//! `dispose`) and leaves the store itself out of scope. This crate needs
//! something runnable behind that contract, so it provides two concrete
//! stores — [`memory::MemoryLogBuffer`] and [`file::FileLogBuffer`] — behind
//! one [`LogBuffer`] trait, dispatched through a closed enum the same way
//! the teacher dispatches over `Pdu` variants rather than boxing a trait
//! object (see `models/common.rs` in the teacher crate).

pub mod factory;
pub mod file;
pub mod memory;

use enum_dispatch::enum_dispatch;

use crate::{
    buffer::{file::FileLogBuffer, memory::MemoryLogBuffer},
    error::Result,
    models::persisted::PersistedRecord,
};

/// Contract shared by every log-buffer implementation (spec §6).
#[enum_dispatch]
pub trait LogBuffer {
    /// Append a record. Never fails for the in-memory store; the
    /// file-backed store may surface [`crate::error::ReplayError::BufferIo`].
    fn add(&mut self, record: PersistedRecord) -> Result<()>;

    /// Return every stored record matching `predicate`, re-reading from
    /// disk on demand for the file-backed store.
    fn find(&self, predicate: &dyn Fn(&PersistedRecord) -> bool) -> Result<Vec<PersistedRecord>>;

    /// Best-effort removal; the file-backed store is allowed to no-op.
    fn remove(&mut self, record: &PersistedRecord) -> Result<()>;

    /// Number of records ever inserted (not reduced by `remove` in file
    /// mode).
    fn count(&self) -> usize;

    /// Idempotent teardown; releases any held file, which must then be
    /// deleted.
    fn dispose(&mut self) -> Result<()>;
}

/// The concrete store behind a [`LogBuffer`] handle, chosen at pipeline
/// start by [`factory::open_buffer`].
#[enum_dispatch(LogBuffer)]
pub enum LogBufferImpl {
    Memory(MemoryLogBuffer),
    File(FileLogBuffer),
}
