// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! DoublePointDecoder — spec §4.7, "DoublePoint" row. TypeIDs 3, 4, 31.

use crate::{
    decode::elements::{Quality, walk_elements},
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 1, |ioa, body| {
        let diq = body[0];
        out.push(DecodedResult::Status {
            header: ElementHeader { ioa, ..base },
            state: diq & 0x03,
            is_valid: Quality::from_bits_truncate(diq).is_valid(),
        });
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_point_state_is_two_bits() {
        let header = ElementHeader { type_id: 3, common_address: 1, ioa: 0, cause_of_transmission: 3, timestamp: None };
        let payload = [0x02, 0x00, 0x00, 0x03];
        let results = decode(header, Vsq { is_sequence: false, count: 1 }, &payload).expect("decode");
        match &results[0] {
            DecodedResult::Status { state, is_valid, .. } => {
                assert_eq!(*state, 3);
                assert!(*is_valid);
            },
            other => panic!("expected Status, got {other:?}"),
        }
    }
}
