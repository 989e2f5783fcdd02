// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! APDU Decoder (AD) and Payload Dispatcher (PD) — spec §4.5-§4.6.

pub mod apdu;
pub mod dispatch;
pub mod elements;

use chrono::{DateTime, Utc};

use crate::{
    error::ReplayError,
    models::{
        apdu::ApduFrame,
        result::{DecodedResult, ElementHeader},
    },
};

/// Classify and fully decode one reassembled frame.
///
/// Never fails (spec §4.5): an invalid APCI, an unknown TypeID, or a
/// too-short payload all collapse to an empty result list rather than
/// propagating an error to the caller.
pub fn decode_frame(data: &[u8], received_at: Option<DateTime<Utc>>) -> Vec<DecodedResult> {
    decode_frame_diagnostic(data, received_at).0
}

/// As [`decode_frame`], but also reports whether the I-frame's TypeID fell
/// outside the Payload Dispatcher's routing table — used by
/// [`crate::pipeline::Pipeline`] to accumulate the "unsupported-type hits"
/// statistic (SPEC_FULL §11) without weakening the never-fail public API.
pub fn decode_frame_diagnostic(
    data: &[u8],
    received_at: Option<DateTime<Utc>>,
) -> (Vec<DecodedResult>, bool) {
    match apdu::classify(data) {
        ApduFrame::Supervisory { receive_seq } => (vec![DecodedResult::SFrame { receive_seq }], false),
        ApduFrame::Unnumbered { kind, action } => {
            (vec![DecodedResult::UFrame { action, which: kind }], false)
        },
        ApduFrame::Information { type_id, vsq, cot, ca, payload } => {
            let base = ElementHeader { type_id, common_address: ca, ioa: 0, cause_of_transmission: cot, timestamp: received_at };
            match dispatch::dispatch(base, vsq, payload) {
                Ok(results) => (results, false),
                Err(ReplayError::UnsupportedType(_)) => (Vec::new(), true),
                Err(_) => (Vec::new(), false),
            }
        },
        ApduFrame::Invalid => (Vec::new(), false),
    }
}
