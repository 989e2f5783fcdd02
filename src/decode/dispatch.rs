// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Payload Dispatcher (PD) — spec §4.6.
//!
//! A constant TypeID → decoder routing table. TypeID 20 is listed under
//! both the single-point and packed-single-point families in the
//! reference; the canonical dispatch target is `PackedSinglePointDecoder`
//! (spec §9, "Dispatcher TypeID 20 appears in two tables"). The
//! single-point decoder remains reachable for TypeID 20 only via a direct
//! call, never through this table.

use crate::{
    decode::elements::{
        control_command, double_point, interrogation, no_quality, normalized, packed_single_point,
        scaled, short_float, single_point, time_sync,
    },
    error::{ReplayError, Result},
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

type ElementDecoder = fn(ElementHeader, Vsq, &[u8]) -> Result<Vec<DecodedResult>>;

fn decoder_for(type_id: u8) -> Option<ElementDecoder> {
    match type_id {
        1 | 2 | 30 => Some(single_point::decode),
        20 => Some(packed_single_point::decode),
        3 | 4 | 31 => Some(double_point::decode),
        9 | 10 => Some(normalized::decode),
        11 | 12 => Some(scaled::decode),
        13 | 14 => Some(short_float::decode),
        21 => Some(no_quality::decode),
        45 | 46 | 58 | 59 | 47 => Some(control_command::decode),
        100 | 101 => Some(interrogation::decode),
        103 => Some(time_sync::decode),
        _ => None,
    }
}

/// Dispatch a classified I-frame ASDU to its family decoder.
///
/// Unknown TypeIDs fail with `UnsupportedType` (spec §4.6); the caller
/// (the APDU Decoder) turns that into an empty result list rather than
/// surfacing the error further (spec §7).
pub fn dispatch(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let decoder = decoder_for(base.type_id).ok_or(ReplayError::UnsupportedType(base.type_id))?;
    decoder(base, vsq, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(type_id: u8) -> ElementHeader {
        ElementHeader { type_id, common_address: 1, ioa: 0, cause_of_transmission: 3, timestamp: None }
    }

    #[test]
    fn type_id_20_routes_to_packed_single_point() {
        let payload = [0x00, 0x00, 0x00, 0xFF];
        let results = dispatch(header(20), Vsq { is_sequence: true, count: 8 }, &payload).expect("decode");
        assert_eq!(results.len(), 8);
    }

    #[test]
    fn unknown_type_id_is_unsupported() {
        let err = dispatch(header(255), Vsq { is_sequence: false, count: 1 }, &[]).unwrap_err();
        assert_eq!(err, ReplayError::UnsupportedType(255));
    }
}
