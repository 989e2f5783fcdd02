// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Parser Selector (PS) — spec §4, routes a raw line to MLP or PLP by
//! prefix fingerprinting.

use crate::{
    models::record::{ModbusRecord, PowerRecord},
    parse::{modbus::parse_modbus_line, power::parse_power_line},
};

/// The outcome of routing one raw log line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Modbus(ModbusRecord),
    Power(PowerRecord),
}

/// Route `line` to the Modbus or Power line parser, or `None` if it matches
/// neither fingerprint.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    if line.contains("IOServer") || line.contains("DCB=") {
        Some(ParsedLine::Modbus(parse_modbus_line(line)))
    } else if line.contains("[iec870ip") {
        Some(ParsedLine::Power(parse_power_line(line)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_modbus_by_ioserver() {
        let line = "ts\ttz\t[L]\t[M]\t[T]\t[IOServer]\t[F]\t[f]\t[p]\t[1]\tRequest";
        assert!(matches!(parse_line(line), Some(ParsedLine::Modbus(_))));
    }

    #[test]
    fn routes_modbus_by_dcb() {
        let line = "ts\ttz\t[L]\t[M]\t[T]\t[S]\t[F]\t[f]\t[p]\t[1]\tDCB=0x1 ID=0x2";
        assert!(matches!(parse_line(line), Some(ParsedLine::Modbus(_))));
    }

    #[test]
    fn routes_power_by_iec_prefix() {
        let line = "ts\ttz\t[L]\t[iec870ip]\t[T]\t[S]\t[F]\t[f]\t[p]\t[1]\tSending 4 bytes of data";
        assert!(matches!(parse_line(line), Some(ParsedLine::Power(_))));
    }

    #[test]
    fn unrecognized_line_is_none() {
        let line = "ts\ttz\t[L]\t[M]\t[T]\t[S]\t[F]\t[f]\t[p]\t[1]\tsomething else";
        assert!(parse_line(line).is_none());
    }
}
