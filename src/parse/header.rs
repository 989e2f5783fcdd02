// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Header Extractor (HE) — spec §4.1.
//!
//! Splits a log line on horizontal tabs into the ten fixed header fields
//! plus a message tail, filling the common [`LogRecord`] fields. Operates
//! over `&str` views only: no field is copied until we actually need an
//! owned `String` (thread id, source, …), and the returned tail is a
//! sub-slice of the caller's line — it must not outlive it.

use chrono::{FixedOffset, NaiveDateTime};

use crate::{
    error::{ReplayError, Result},
    models::record::LogRecord,
};

const EXPECTED_TAB_FIELDS: usize = 11;

/// Strip a single leading `[` and trailing `]`, if present.
fn strip_brackets(s: &str) -> &str {
    let s = s.strip_prefix('[').unwrap_or(s);
    s.strip_suffix(']').unwrap_or(s)
}

/// Parse an offset label like `+08:00` or `-05:30` into a [`FixedOffset`].
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    let total_seconds = sign * (hours * 3600 + minutes * 60);
    FixedOffset::east_opt(total_seconds)
}

/// Extracts the common header into `out` and returns the message tail.
///
/// On failure, `out` is left untouched — the caller already holds a
/// record populated with defaults (spec §7, `HeaderInvalid`).
pub fn extract_header<'a>(line: &'a str, out: &mut LogRecord) -> Result<&'a str> {
    let parts: Vec<&str> = line.splitn(EXPECTED_TAB_FIELDS, '\t').collect();
    if parts.len() < EXPECTED_TAB_FIELDS {
        return Err(ReplayError::HeaderInvalid(format!(
            "expected {EXPECTED_TAB_FIELDS} tab-delimited fields, found {}",
            parts.len()
        )));
    }

    let naive = NaiveDateTime::parse_from_str(parts[0], "%Y-%m-%d %H:%M:%S%.3f")
        .map_err(|e| ReplayError::HeaderInvalid(format!("bad timestamp: {e}")))?;
    let offset = parse_offset(parts[1])
        .ok_or_else(|| ReplayError::HeaderInvalid(format!("bad offset: {}", parts[1])))?;
    let timestamp = offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ReplayError::HeaderInvalid("ambiguous local timestamp".into()))?;

    out.timestamp = Some(timestamp);
    out.time_zone = parts[1].to_string();
    out.level = strip_brackets(parts[2]).to_string();
    out.module = strip_brackets(parts[3]).to_string();
    out.thread_id = strip_brackets(parts[4]).to_string();
    out.source = strip_brackets(parts[5]).to_string();
    out.function = strip_brackets(parts[6]).to_string();
    out.file = strip_brackets(parts[7]).to_string();
    out.file_path = strip_brackets(parts[8]).to_string();
    out.source_line = strip_brackets(parts[9]).trim().parse().ok();

    let tail = parts[10];
    out.message = match tail.split_once(':') {
        Some((_, rest)) => rest.trim().to_string(),
        None => tail.to_string(),
    };

    Ok(tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_fields() {
        let line = "2023-03-17 07:18:24.250\t+08:00\t[TRACE]\t[CORE       ]\t\
                     [0x11fc]\t[IOServer        ]\t[(GLOBAL)        ]\t\
                     [DrvDebug()]\t[dsp_fmt.cpp]\t[533 ]\tRequest, DCB=x";
        let mut rec = LogRecord::default();
        let tail = extract_header(line, &mut rec).expect("header should parse");
        assert_eq!(rec.level, "TRACE");
        assert_eq!(rec.module, "CORE       ");
        assert_eq!(rec.thread_id, "0x11fc");
        assert_eq!(rec.source, "IOServer        ");
        assert_eq!(rec.function, "(GLOBAL)        ");
        assert_eq!(rec.file, "DrvDebug()");
        assert_eq!(rec.file_path, "dsp_fmt.cpp");
        assert_eq!(rec.source_line, Some(533));
        assert!(tail.starts_with("Request"));
    }

    #[test]
    fn missing_tabs_is_header_invalid() {
        let mut rec = LogRecord::default();
        let err = extract_header("not enough tabs here", &mut rec).unwrap_err();
        assert!(matches!(err, ReplayError::HeaderInvalid(_)));
    }

    #[test]
    fn bad_timestamp_is_header_invalid() {
        let line = "not-a-date\t+08:00\t[TRACE]\t[CORE]\t[0x1]\t[S]\t[F]\t[f]\t[p]\t[1]\tmsg";
        let mut rec = LogRecord::default();
        let err = extract_header(line, &mut rec).unwrap_err();
        assert!(matches!(err, ReplayError::HeaderInvalid(_)));
    }

    #[test]
    fn missing_source_line_defaults_to_none() {
        let line = "2023-03-17 07:18:24.250\t+08:00\t[TRACE]\t[CORE]\t[0x1]\t[S]\t[F]\t[f]\t[p]\t[]\tmsg: hi";
        let mut rec = LogRecord::default();
        extract_header(line, &mut rec).expect("header should parse");
        assert_eq!(rec.source_line, None);
        assert_eq!(rec.message, "hi");
    }
}
