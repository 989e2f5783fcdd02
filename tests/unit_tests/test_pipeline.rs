// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use scada_log_replay::{
    buffer::memory::MemoryLogBuffer,
    models::result::DecodedResult,
    pipeline::Pipeline,
};

use crate::unit_tests::load_fixture;

#[test]
fn modbus_fixture_is_buffered_and_produces_no_decoded_results() {
    let text = load_fixture("modbus_request.log").expect("load fixture");
    let mut pipeline = Pipeline::new(MemoryLogBuffer::new(), false);
    let (results, stats) = pipeline.run(&text).expect("run");
    assert_eq!(stats.modbus_records, 1);
    assert_eq!(stats.power_records, 0);
    assert!(results.is_empty());
}

#[test]
fn power_fixture_assembles_one_frame_and_decodes_a_u_frame() {
    let text = load_fixture("power_frame.log").expect("load fixture");
    let mut pipeline = Pipeline::new(MemoryLogBuffer::new(), false);
    let (results, stats) = pipeline.run(&text).expect("run");
    assert_eq!(stats.power_records, 2);
    assert_eq!(stats.frames_assembled, 1);
    assert_eq!(stats.frames_complete, 1);
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], DecodedResult::UFrame { .. }));
}
