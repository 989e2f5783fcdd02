// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Power Line Parser (PLP) — spec §4.3.
//!
//! Selector fingerprint: the raw line contains the literal `[iec870ip`
//! (checked by [`crate::parse::selector`], not here). All extractions below
//! are independent and best-effort.

use tracing::warn;

use crate::{
    models::record::PowerRecord,
    parse::{header::extract_header, hex_scan::greedy_scan},
};

fn extract_channel(tail: &str) -> Option<i64> {
    const MARKER: &str = "Channel (";
    let idx = tail.find(MARKER)?;
    let rest = &tail[idx + MARKER.len()..];
    let end = rest.find(')')?;
    rest[..end].trim().parse().ok()
}

fn extract_sequence_number(tail: &str) -> Option<i64> {
    const MARKER: &str = "SequenceNumber:";
    let idx = tail.find(MARKER)?;
    let rest = &tail[idx + MARKER.len()..];
    let end = rest.find(',').unwrap_or(rest.len());
    rest[..end].trim().parse().ok()
}

/// Only the first non-whitespace character after `DelayACK:` is
/// semantically meaningful (spec §9, open question): trim, then compare.
fn extract_delay_ack(tail: &str) -> bool {
    const MARKER: &str = "DelayACK:";
    let Some(idx) = tail.find(MARKER) else {
        return false;
    };
    let rest = tail[idx + MARKER.len()..].trim_start();
    rest.starts_with('1')
}

/// Action token (spec §4.3, "Action", with a documented deviation — see
/// DESIGN.md). The literal algorithm ("substring before the first `:`,
/// trimmed; otherwise look for `Sending`/`Received`") disagrees with spec
/// §8 scenario 6 whenever the tail's first colon precedes unrelated text
/// (e.g. `Channel (0) : Sending ...`). We search for the keyword first so
/// the invariant in spec §8 — action is one of `Sending`/`Received` iff an
/// expected length was found — actually holds.
fn extract_action(tail: &str) -> String {
    if tail.contains("Sending") {
        return "Sending".to_string();
    }
    if tail.contains("Received") {
        return "Received".to_string();
    }
    match tail.find(':') {
        Some(idx) => tail[..idx].trim().to_string(),
        None => String::new(),
    }
}

/// Find the first `<digits> bytes` token pair (the literal-text equivalent
/// of `\b(\d+)\s+bytes`).
fn digits_before_bytes(tail: &str) -> Option<usize> {
    let mut tokens = tail.split_whitespace().peekable();
    while let Some(tok) = tokens.next() {
        if !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(&next) = tokens.peek() {
                if next.starts_with("bytes") {
                    return tok.parse().ok();
                }
            }
        }
    }
    None
}

/// Two heuristics, last-wins (spec §4.3, "Expected length").
fn extract_expected_length(tail: &str) -> Option<usize> {
    let mut result = None;
    if tail.contains("Sending") || tail.contains("Received") {
        result = digits_before_bytes(tail);
    }
    if tail.contains("bytes of data") {
        if let Some(v) = digits_before_bytes(tail) {
            result = Some(v);
        }
    }
    result
}

/// Parse an IEC 60870-5-104 trace line into a [`PowerRecord`].
///
/// Never fails: a malformed header yields a record with default fields
/// (spec §4.1/§7).
pub fn parse_power_line(line: &str) -> PowerRecord {
    let mut record = PowerRecord::default();

    let tail = match extract_header(line, &mut record.header) {
        Ok(tail) => tail,
        Err(e) => {
            warn!(error = %e, "power line header invalid, using defaults");
            return record;
        },
    };

    record.channel = extract_channel(tail);
    record.sequence_number = extract_sequence_number(tail);
    record.delay_ack = extract_delay_ack(tail);
    record.action = extract_action(tail);
    record.expected_length = extract_expected_length(tail);
    record.header.payload = Some(greedy_scan(tail.as_bytes()));

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with_tail(tail: &str) -> String {
        format!(
            "2023-03-17 07:18:24.250\t+08:00\t[TRACE]\t[iec870ip]\t[0x1]\t[S]\t[F]\t[f]\t\
             [p]\t[1]\t{tail}"
        )
    }

    #[test]
    fn sending_start_line() {
        let line = line_with_tail("Channel (0) : Sending 6 bytes of data");
        let record = parse_power_line(&line);
        assert_eq!(record.channel, Some(0));
        assert_eq!(record.action, "Sending");
        assert_eq!(record.expected_length, Some(6));
        assert!(record.is_frame_start());
    }

    #[test]
    fn action_expected_length_invariant() {
        for tail in [
            "Channel (0) : Sending 6 bytes of data",
            "Channel (1) : Received 4 bytes of data",
            "engine-op SequenceNumber:5,DelayACK:1",
        ] {
            let line = line_with_tail(tail);
            let record = parse_power_line(&line);
            let is_send_recv = matches!(record.action.as_str(), "Sending" | "Received");
            let has_length = record.expected_length.is_some_and(|l| l > 0);
            assert_eq!(is_send_recv, has_length, "tail = {tail:?}");
        }
    }

    #[test]
    fn delay_ack_true_only_for_one() {
        let line = line_with_tail("Received 4 bytes of data, DelayACK:1,trailing");
        assert!(parse_power_line(&line).delay_ack);
        let line = line_with_tail("Received 4 bytes of data, DelayACK:0,trailing");
        assert!(!parse_power_line(&line).delay_ack);
    }

    #[test]
    fn sequence_number_parsed_up_to_comma() {
        let line = line_with_tail("engine-op SequenceNumber:42,DelayACK:0");
        assert_eq!(parse_power_line(&line).sequence_number, Some(42));
    }
}
