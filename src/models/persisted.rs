// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! JSON-lines persistence format used by the file-backed log buffer (spec
//! §6, "Persisted record format").
//!
//! Every line is one JSON object carrying a `$type` discriminator
//! (`ModbusLogEntry` / `PowerLogEntry`). An unrecognised discriminator is
//! not an error: it degrades to the base `LogEntry` shape, the same
//! never-fail posture the rest of the pipeline takes toward malformed
//! input.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{ReplayError, Result},
    models::record::{LogRecord, ModbusRecord, PowerRecord},
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct BaseFields {
    #[serde(default)]
    timestamp: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    time_zone: String,
    #[serde(default)]
    level: String,
    #[serde(default)]
    module: String,
    #[serde(default)]
    thread_id: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    function: String,
    #[serde(default)]
    file: String,
    #[serde(default)]
    file_path: String,
    #[serde(default)]
    source_line: Option<i32>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    payload: Option<Vec<u8>>,
}

impl From<&LogRecord> for BaseFields {
    fn from(r: &LogRecord) -> Self {
        BaseFields {
            timestamp: r.timestamp,
            time_zone: r.time_zone.clone(),
            level: r.level.clone(),
            module: r.module.clone(),
            thread_id: r.thread_id.clone(),
            source: r.source.clone(),
            function: r.function.clone(),
            file: r.file.clone(),
            file_path: r.file_path.clone(),
            source_line: r.source_line,
            message: r.message.clone(),
            payload: r.payload.clone(),
        }
    }
}

impl From<BaseFields> for LogRecord {
    fn from(b: BaseFields) -> Self {
        LogRecord {
            timestamp: b.timestamp,
            time_zone: b.time_zone,
            level: b.level,
            module: b.module,
            thread_id: b.thread_id,
            source: b.source,
            function: b.function,
            file: b.file,
            file_path: b.file_path,
            source_line: b.source_line,
            message: b.message,
            payload: b.payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModbusFields {
    #[serde(flatten)]
    base: BaseFields,
    #[serde(default)]
    action: String,
    #[serde(default)]
    dcb: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    expected_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PowerFields {
    #[serde(flatten)]
    base: BaseFields,
    #[serde(default)]
    channel: Option<i64>,
    #[serde(default)]
    sequence_number: Option<i64>,
    #[serde(default)]
    delay_ack: bool,
    #[serde(default)]
    action: String,
    #[serde(default)]
    expected_length: Option<usize>,
}

/// A record as stored in / loaded from the file-backed buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedRecord {
    Modbus(ModbusRecord),
    Power(PowerRecord),
    Base(LogRecord),
}

impl PersistedRecord {
    /// Serialize to a single JSON line, newline-terminated.
    pub fn to_json_line(&self) -> Result<String> {
        let mut value = match self {
            PersistedRecord::Modbus(m) => serde_json::to_value(ModbusFields {
                base: BaseFields::from(&m.header),
                action: m.action.clone(),
                dcb: m.dcb.clone(),
                id: m.id.clone(),
                expected_length: m.expected_length,
            }),
            PersistedRecord::Power(p) => serde_json::to_value(PowerFields {
                base: BaseFields::from(&p.header),
                channel: p.channel,
                sequence_number: p.sequence_number,
                delay_ack: p.delay_ack,
                action: p.action.clone(),
                expected_length: p.expected_length,
            }),
            PersistedRecord::Base(b) => serde_json::to_value(BaseFields::from(b)),
        }
        .map_err(|e| ReplayError::BufferIo(e.to_string()))?;

        let tag = match self {
            PersistedRecord::Modbus(_) => "ModbusLogEntry",
            PersistedRecord::Power(_) => "PowerLogEntry",
            PersistedRecord::Base(_) => "LogEntry",
        };
        if let Value::Object(map) = &mut value {
            map.insert("$type".to_string(), Value::String(tag.to_string()));
        }
        let mut line =
            serde_json::to_string(&value).map_err(|e| ReplayError::BufferIo(e.to_string()))?;
        line.push('\n');
        Ok(line)
    }

    /// Parse one JSON line, degrading an unrecognised `$type` to the base
    /// shape rather than failing.
    pub fn from_json_line(line: &str) -> Result<PersistedRecord> {
        let value: Value = serde_json::from_str(line.trim_end())
            .map_err(|e| ReplayError::BufferIo(e.to_string()))?;
        let tag = value.get("$type").and_then(Value::as_str).unwrap_or("LogEntry");

        match tag {
            "ModbusLogEntry" => {
                let fields: ModbusFields = serde_json::from_value(value)
                    .map_err(|e| ReplayError::BufferIo(e.to_string()))?;
                Ok(PersistedRecord::Modbus(ModbusRecord {
                    header: fields.base.into(),
                    action: fields.action,
                    dcb: fields.dcb,
                    id: fields.id,
                    expected_length: fields.expected_length,
                }))
            },
            "PowerLogEntry" => {
                let fields: PowerFields = serde_json::from_value(value)
                    .map_err(|e| ReplayError::BufferIo(e.to_string()))?;
                Ok(PersistedRecord::Power(PowerRecord {
                    header: fields.base.into(),
                    channel: fields.channel,
                    sequence_number: fields.sequence_number,
                    delay_ack: fields.delay_ack,
                    action: fields.action,
                    expected_length: fields.expected_length,
                }))
            },
            _ => {
                let fields: BaseFields = serde_json::from_value(value)
                    .map_err(|e| ReplayError::BufferIo(e.to_string()))?;
                Ok(PersistedRecord::Base(fields.into()))
            },
        }
    }
}
