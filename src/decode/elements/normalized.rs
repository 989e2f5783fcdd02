// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! NormalizedMeasurementDecoder — spec §4.7, "Normalized meas." row.
//! TypeIDs 9, 10.
//!
//! Body: 2-byte signed little-endian value, 1-byte QDS. The spec leaves the
//! numeric interpretation of the raw 16-bit value unstated; per IEC
//! 60870-5-101/104 convention a normalized value is a fixed-point fraction
//! in `[-1.0, 1.0)` with full scale at `32768` (see DESIGN.md).

use crate::{
    decode::elements::{Quality, walk_elements},
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

const FULL_SCALE: f64 = 32768.0;

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 3, |ioa, body| {
        let raw = i16::from_le_bytes([body[0], body[1]]);
        let qds = body[2];
        out.push(DecodedResult::Measurement {
            header: ElementHeader { ioa, ..base },
            value: f64::from(raw) / FULL_SCALE,
            is_valid: Quality::from_bits_truncate(qds).is_valid(),
        });
        Ok(())
    })?;
    Ok(out)
}
