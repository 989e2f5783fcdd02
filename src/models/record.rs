// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Log record types (spec §3).
//!
//! The reference implementation models `LogEntry` and its two protocol
//! variants through class inheritance. Rust has no inheritance; we use
//! composition instead — `ModbusRecord`/`PowerRecord` embed a `LogRecord`
//! and `Deref` to it, so callers reach common fields (`record.timestamp`)
//! without repeating them on every variant.

use std::ops::{Deref, DerefMut};

use chrono::{DateTime, FixedOffset};

/// Fields shared by every decoded log line (spec §3, "LogRecord (base)").
///
/// All textual fields default to empty strings rather than being optional —
/// a log line with a missing bracketed field is still a line, just one with
/// less information.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogRecord {
    /// ISO-8601 timestamp with UTC offset, millisecond precision.
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Time-zone label as printed in the line (e.g. `+08:00`).
    pub time_zone: String,
    pub level: String,
    pub module: String,
    /// Thread id, normalized to its textual form (hex or decimal, as found).
    pub thread_id: String,
    pub source: String,
    pub function: String,
    pub file: String,
    pub file_path: String,
    /// Source line number; absent when the field is missing from the line.
    pub source_line: Option<i32>,
    pub message: String,
    /// Raw bytes carried by the line, when the tail includes a hex dump.
    pub payload: Option<Vec<u8>>,
}

/// A Modbus trace line (spec §3, "ModbusRecord").
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModbusRecord {
    pub header: LogRecord,
    /// e.g. `Request`, `Reply()`, `Raw Receive`.
    pub action: String,
    pub dcb: Option<String>,
    /// Transaction ID tag, kept as the literal hex string from the line.
    pub id: Option<String>,
    pub expected_length: Option<usize>,
}

impl Deref for ModbusRecord {
    type Target = LogRecord;

    fn deref(&self) -> &LogRecord {
        &self.header
    }
}

impl DerefMut for ModbusRecord {
    fn deref_mut(&mut self) -> &mut LogRecord {
        &mut self.header
    }
}

/// A power (IEC 60870-5-104) trace line (spec §3, "PowerRecord").
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PowerRecord {
    pub header: LogRecord,
    pub channel: Option<i64>,
    pub sequence_number: Option<i64>,
    pub delay_ack: bool,
    /// `Sending`/`Received`, or an engine-internal op token.
    pub action: String,
    pub expected_length: Option<usize>,
}

impl Deref for PowerRecord {
    type Target = LogRecord;

    fn deref(&self) -> &LogRecord {
        &self.header
    }
}

impl DerefMut for PowerRecord {
    fn deref_mut(&mut self) -> &mut LogRecord {
        &mut self.header
    }
}

impl PowerRecord {
    /// Whether this record can open a new frame (spec §4.4, step 1):
    /// non-empty action equal to `Sending`/`Received`, with a positive
    /// expected length.
    pub fn is_frame_start(&self) -> bool {
        matches!(self.action.as_str(), "Sending" | "Received")
            && self.expected_length.is_some_and(|len| len > 0)
    }

    /// Whether this record is a continuation candidate (spec §4.4, step 3):
    /// empty action and a non-empty payload. Time-match against the open
    /// frame's start record is checked by the caller.
    pub fn is_continuation_candidate(&self) -> bool {
        self.action.is_empty() && self.payload.as_ref().is_some_and(|p| !p.is_empty())
    }
}
