// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! InterrogationDecoder — spec §4.7, "Interrogation" row. TypeIDs 100, 101.

use crate::{
    decode::elements::walk_elements,
    error::Result,
    models::{apdu::Vsq, result::{DecodedResult, ElementHeader}},
};

pub fn decode(base: ElementHeader, vsq: Vsq, payload: &[u8]) -> Result<Vec<DecodedResult>> {
    let mut out = Vec::new();
    walk_elements(payload, vsq.is_sequence, vsq.count, 1, |ioa, body| {
        out.push(DecodedResult::InterrogationCommand { header: ElementHeader { ioa, ..base }, qoi: body[0] });
        Ok(())
    })?;
    Ok(out)
}
