// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! NoQualityMeasurementDecoder — spec §4.7, "No-quality meas." row.
//! TypeID 21. Body is a bare 2-byte signed LE value with no quality byte,
//! so every decoded element is unconditionally valid.

use crate::{
    decode::elements::walk_elements,
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 2, |ioa, body| {
        let raw = i16::from_le_bytes([body[0], body[1]]);
        out.push(DecodedResult::Measurement {
            header: ElementHeader { ioa, ..base },
            value: f64::from(raw),
            is_valid: true,
        });
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_valid() {
        let header = ElementHeader { type_id: 21, common_address: 1, ioa: 0, cause_of_transmission: 3, timestamp: None };
        let payload = [0x03, 0x00, 0x00, 0x0A, 0x00];
        let results = decode(header, Vsq { is_sequence: false, count: 1 }, &payload).expect("decode");
        match &results[0] {
            DecodedResult::Measurement { value, is_valid, .. } => {
                assert!((*value - 10.0).abs() < f64::EPSILON);
                assert!(*is_valid);
            },
            other => panic!("expected Measurement, got {other:?}"),
        }
    }
}
