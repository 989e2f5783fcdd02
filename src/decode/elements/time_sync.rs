// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! TimeSyncDecoder — spec §4.7, "TimeSync" row. TypeID 103.

use crate::{
    decode::elements::{cp56time2a, walk_elements},
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 7, |ioa, body| {
        let sync_time = cp56time2a::decode(body)?;
        out.push(DecodedResult::TimeSyncCommand { header: ElementHeader { ioa, ..base }, sync_time });
        Ok(())
    })?;
    Ok(out)
}
