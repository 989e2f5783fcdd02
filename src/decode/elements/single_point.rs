// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! SinglePointDecoder — spec §4.7, "SinglePoint" row.
//!
//! TypeIDs 1, 2, 30; also reachable for TypeID 20 when called directly
//! (spec §4.6, legacy direct-call path — the Payload Dispatcher itself
//! never routes 20 here).

use crate::{
    decode::elements::{Quality, walk_elements},
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 1, |ioa, body| {
        let siq = body[0];
        out.push(DecodedResult::Status {
            header: ElementHeader { ioa, ..base },
            state: siq & 0x01,
            is_valid: Quality::from_bits_truncate(siq).is_valid(),
        });
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> ElementHeader {
        ElementHeader { type_id: 1, common_address: 1, ioa: 0, cause_of_transmission: 3, timestamp: None }
    }

    #[test]
    fn individual_single_point_scenario_2() {
        let payload = [0x01, 0x00, 0x00, 0x01];
        let results = decode(header(), Vsq { is_sequence: false, count: 1 }, &payload).expect("decode");
        assert_eq!(results.len(), 1);
        match &results[0] {
            DecodedResult::Status { header, state, is_valid } => {
                assert_eq!(header.ioa, 1);
                assert_eq!(*state, 1);
                assert!(*is_valid);
            },
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn invalid_bit_clears_valid() {
        let payload = [0x05, 0x00, 0x00, 0x81];
        let results = decode(header(), Vsq { is_sequence: false, count: 1 }, &payload).expect("decode");
        match &results[0] {
            DecodedResult::Status { is_valid, .. } => assert!(!is_valid),
            other => panic!("expected Status, got {other:?}"),
        }
    }
}
