// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! ShortFloatMeasurementDecoder — spec §4.7, "Short-float meas." row.
//! TypeIDs 13, 14.

use crate::{
    decode::elements::{Quality, walk_elements},
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 5, |ioa, body| {
        let raw = f32::from_le_bytes([body[0], body[1], body[2], body[3]]);
        let qds = body[4];
        out.push(DecodedResult::Measurement {
            header: ElementHeader { ioa, ..base },
            value: f64::from(raw),
            is_valid: Quality::from_bits_truncate(qds).is_valid(),
        });
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ieee754_little_endian() {
        let header = ElementHeader { type_id: 13, common_address: 1, ioa: 0, cause_of_transmission: 3, timestamp: None };
        let value_bytes = 1.5f32.to_le_bytes();
        let mut payload = vec![0x02, 0x00, 0x00];
        payload.extend_from_slice(&value_bytes);
        payload.push(0x00);
        let results = decode(header, Vsq { is_sequence: false, count: 1 }, &payload).expect("decode");
        match &results[0] {
            DecodedResult::Measurement { header, value, is_valid } => {
                assert_eq!(header.ioa, 2);
                assert!((*value - 1.5).abs() < f64::EPSILON);
                assert!(*is_valid);
            },
            other => panic!("expected Measurement, got {other:?}"),
        }
    }
}
