// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use scada_log_replay::{
    buffer::factory::open_buffer, cfg::enums::BufferMode, models::result::DecodedResult,
    pipeline::Pipeline,
};

use crate::integration_tests::common::load_fixture_text;

#[test]
fn mixed_modbus_and_power_session_replays_end_to_end_via_the_file_backed_buffer() {
    let text = load_fixture_text("mixed_session.log").expect("load fixture");

    let dir = std::env::temp_dir().join("scada_log_replay_integration_full_replay");
    let buffer =
        open_buffer(BufferMode::File, 0, &dir, 1 << 20).expect("open file-backed buffer");

    let mut pipeline = Pipeline::new(buffer, true);
    let (results, stats) = pipeline.run(&text).expect("pipeline run");

    assert_eq!(stats.modbus_records, 2);
    assert_eq!(stats.power_records, 4);
    assert_eq!(stats.frames_assembled, 2);
    assert_eq!(stats.frames_complete, 2);
    assert_eq!(stats.frames_truncated, 0);
    assert_eq!(results.len(), 2);

    assert!(results.iter().any(|r| matches!(r, DecodedResult::Status { state: 1, is_valid: true, .. })));
    assert!(results.iter().any(|r| matches!(r, DecodedResult::UFrame { .. })));

    pipeline.dispose().expect("dispose buffer");
    let _ = std::fs::remove_dir_all(&dir);
}
