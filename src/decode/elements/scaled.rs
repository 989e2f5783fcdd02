// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! ScaledMeasurementDecoder — spec §4.7, "Scaled meas." row. TypeIDs 11, 12.
//!
//! Same wire layout as [`super::normalized`] (2-byte signed LE + 1-byte
//! QDS), but a scaled value is the plain signed integer, not a fraction of
//! full scale (see DESIGN.md).

use crate::{
    decode::elements::{Quality, walk_elements},
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 3, |ioa, body| {
        let raw = i16::from_le_bytes([body[0], body[1]]);
        let qds = body[2];
        out.push(DecodedResult::Measurement {
            header: ElementHeader { ioa, ..base },
            value: f64::from(raw),
            is_valid: Quality::from_bits_truncate(qds).is_valid(),
        });
        Ok(())
    })?;
    Ok(out)
}
