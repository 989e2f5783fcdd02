// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! PackedSinglePointDecoder — spec §4.7, "PackedSinglePointDecoder".
//!
//! `numberOfObjects` (the VSQ count) denotes *points*, not state bytes or
//! IOA groups: each state byte packs up to 8 points LSB-first, so the
//! number of state bytes read is `ceil(points / 8)`, with the final byte
//! contributing only the remaining points. `isValid` is always true — this
//! family carries no quality bits.

use crate::{
    decode::elements::read_ioa,
    error::{ReplayError, Result},
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let total_points = u32::from(vsq.count);
    let num_groups = total_points.div_ceil(8);

    let mut out = Vec::with_capacity(total_points as usize);

    if vsq.is_sequence {
        let (ioa_base, mut rest) = read_ioa(payload)?;
        for group in 0..num_groups {
            let [state, tail @ ..] = rest else {
                return Err(ReplayError::PayloadTooShort("packed single-point state byte".to_string()));
            };
            let points_in_group = (total_points - group * 8).min(8);
            emit_group(&mut out, base, ioa_base + group * 8, *state, points_in_group);
            rest = tail;
        }
    } else {
        let mut rest = payload;
        for group in 0..num_groups {
            let (ioa, after_ioa) = read_ioa(rest)?;
            let [state, tail @ ..] = after_ioa else {
                return Err(ReplayError::PayloadTooShort("packed single-point state byte".to_string()));
            };
            let points_in_group = (total_points - group * 8).min(8);
            emit_group(&mut out, base, ioa, *state, points_in_group);
            rest = tail;
        }
    }

    Ok(out)
}

fn emit_group(out: &mut Vec<DecodedResult>, base: ElementHeader, group_base_ioa: u32, state: u8, points: u32) {
    for bit in 0..points {
        let value = (state >> bit) & 0x01;
        out.push(DecodedResult::Status {
            header: ElementHeader { ioa: group_base_ioa + bit, ..base },
            state: value,
            is_valid: true,
        });
    }
}
