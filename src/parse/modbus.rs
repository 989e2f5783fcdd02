// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Modbus Line Parser (MLP) — spec §4.2.
//!
//! Selector fingerprint: the raw line contains the literal `IOServer` or
//! `DCB=` (checked by [`crate::parse::selector`], not here).

use tracing::warn;

use crate::{
    models::record::ModbusRecord,
    parse::{header::extract_header, hex_scan::length_gated_scan},
};

/// Extract the action token per spec §4.2, "Action extraction".
fn extract_action(tail: &str) -> String {
    if tail.is_empty() {
        return String::new();
    }
    let cut = tail.find([',', '\t']).unwrap_or(tail.len());
    let prefix = tail[..cut].trim();
    if prefix.starts_with("Reply()") {
        return "Reply()".to_string();
    }
    prefix.split_whitespace().next().unwrap_or("").to_string()
}

/// Find `marker` and take the characters up to the next space, stripping
/// the marker prefix and surrounding whitespace (spec §4.2, "DCB"/"ID").
///
/// The reference behaviour's field-boundary arithmetic is flagged in spec
/// §9 as brittle; matched against the worked example in spec §8 scenario 1
/// (`DCB=0x1093b93c, ID=...` → `DCB` == `0x1093b93c`, no trailing comma),
/// the boundary is "next space or comma", not "next space" alone.
fn field_after_marker(tail: &str, marker: &str) -> Option<String> {
    let idx = tail.find(marker)?;
    let rest = &tail[idx + marker.len()..];
    let end = rest.find([' ', ',']).unwrap_or(rest.len());
    let value = rest[..end].trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Find the literal `Length`, skip it and following whitespace, then take
/// the decimal run up to the next space or tab (spec §4.2, "Expected
/// length").
fn extract_expected_length(tail: &str) -> Option<usize> {
    const MARKER: &str = "Length";
    let idx = tail.find(MARKER)?;
    let rest = tail[idx + MARKER.len()..].trim_start();
    let end = rest.find([' ', '\t']).unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Parse a Modbus trace line into a [`ModbusRecord`].
///
/// Never fails: a malformed header yields a record with default fields and
/// skips the protocol-specific extraction entirely (spec §4.1/§7).
pub fn parse_modbus_line(line: &str) -> ModbusRecord {
    let mut record = ModbusRecord::default();

    let tail = match extract_header(line, &mut record.header) {
        Ok(tail) => tail,
        Err(e) => {
            warn!(error = %e, "modbus line header invalid, using defaults");
            return record;
        },
    };

    record.action = extract_action(tail);
    record.dcb = field_after_marker(tail, "DCB=");
    record.id = field_after_marker(tail, "ID=");
    record.expected_length = extract_expected_length(tail);
    record.header.payload = Some(length_gated_scan(tail));

    record
}
