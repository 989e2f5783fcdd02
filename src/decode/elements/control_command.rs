// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! ControlCommandDecoder — spec §4.7, "Control command" row.
//! TypeIDs 45, 46, 58, 59, 47.
//!
//! Body: 1-byte SCO. `isSelect` is bit 7; `commandValue` is the low two
//! bits, which covers both the single-command (bit 0 only) and
//! double-command (bits 0-1) cases uniformly — the data model's
//! `commandValue ∈ {0..3}` range (spec §3) already assumes the wider mask.

use crate::{
    decode::elements::walk_elements,
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 1, |ioa, body| {
        let sco = body[0];
        out.push(DecodedResult::ControlCommand {
            header: ElementHeader { ioa, ..base },
            command_value: sco & 0x03,
            is_select: (sco & 0x80) != 0,
        });
        Ok(())
    })?;
    Ok(out)
}
