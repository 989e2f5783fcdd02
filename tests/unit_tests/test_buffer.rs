// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use scada_log_replay::{
    buffer::{LogBuffer, factory::open_buffer},
    cfg::enums::BufferMode,
    models::{persisted::PersistedRecord, record::LogRecord},
};

fn sample(message: &str) -> PersistedRecord {
    PersistedRecord::Base(LogRecord { message: message.to_string(), ..Default::default() })
}

#[test]
fn in_memory_buffer_round_trips_through_the_open_buffer_factory() {
    let mut buffer = open_buffer(BufferMode::InMemory, 0, &std::env::temp_dir(), 1 << 20)
        .expect("open in-memory buffer");
    buffer.add(sample("hello")).expect("add");
    buffer.add(sample("world")).expect("add");
    assert_eq!(buffer.count(), 2);
    let found = buffer
        .find(&|r| matches!(r, PersistedRecord::Base(l) if l.message == "world"))
        .expect("find");
    assert_eq!(found.len(), 1);
    buffer.dispose().expect("dispose");
}

#[test]
fn file_buffer_survives_a_round_trip_to_disk() {
    let dir = std::env::temp_dir().join("scada_log_replay_unit_test_buffer");
    let mut buffer =
        open_buffer(BufferMode::File, 0, &dir, 1 << 20).expect("open file buffer");
    buffer.add(sample("persisted")).expect("add");
    let found = buffer.find(&|_| true).expect("find");
    assert_eq!(found.len(), 1);
    buffer.dispose().expect("dispose");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn auto_mode_falls_back_to_file_above_the_memory_threshold() {
    let dir = std::env::temp_dir().join("scada_log_replay_unit_test_buffer_auto");
    let total_available_memory = 1_000u64;
    let estimated_bytes = 900u64;
    let mut buffer = open_buffer(BufferMode::Auto, estimated_bytes, &dir, total_available_memory)
        .expect("open auto buffer");
    buffer.add(sample("big")).expect("add");
    assert_eq!(buffer.count(), 1);
    buffer.dispose().expect("dispose");
    let _ = std::fs::remove_dir_all(&dir);
}
