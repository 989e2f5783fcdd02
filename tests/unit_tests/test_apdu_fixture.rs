// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use scada_log_replay::{decode::decode_frame, models::result::DecodedResult};

use crate::unit_tests::load_hex_fixture;

#[test]
fn decodes_a_raw_apdu_frame_loaded_from_a_hex_fixture() {
    let bytes = load_hex_fixture("u_frame_startdt_confirm.hex").expect("load hex fixture");
    let results = decode_frame(&bytes, None);
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], DecodedResult::UFrame { .. }));
}
