// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Power Frame Assembler (FA) — spec §4.4.
//!
//! A lazy, pull-based adapter over an ordered [`PowerRecord`] stream,
//! yielding [`PowerFrame`]s as boundaries are detected. The caller must not
//! reorder the underlying record sequence — the assembler is a sequential
//! state machine, not a sorter.

use std::collections::VecDeque;

use chrono::Timelike;

use crate::models::{
    frame::{Direction, PowerFrame},
    record::PowerRecord,
};

struct OpenFrame {
    start: PowerRecord,
    buffer: Vec<u8>,
    data_line: Option<i32>,
    bound_data_line: bool,
}

impl OpenFrame {
    fn new(start: PowerRecord) -> Self {
        OpenFrame {
            buffer: Vec::new(),
            data_line: None,
            bound_data_line: false,
            start,
        }
    }

    fn into_frame(self) -> PowerFrame {
        let direction = Direction::from_action(&self.start.action).unwrap_or(Direction::Sending);
        PowerFrame {
            direction,
            timestamp: self.start.timestamp,
            expected_length: self.start.expected_length,
            data: self.buffer,
            start: self.start,
        }
    }
}

/// Streaming assembler: consumes an ordered [`PowerRecord`] iterator and
/// produces [`PowerFrame`]s.
pub struct FrameAssembler<I> {
    inner: I,
    current: Option<OpenFrame>,
    pending: VecDeque<PowerFrame>,
    input_exhausted: bool,
}

/// Wrap any ordered record iterator into a [`FrameAssembler`].
pub fn assemble<I>(records: I) -> FrameAssembler<I::IntoIter>
where I: IntoIterator<Item = PowerRecord> {
    FrameAssembler {
        inner: records.into_iter(),
        current: None,
        pending: VecDeque::new(),
        input_exhausted: false,
    }
}

impl<I: Iterator<Item = PowerRecord>> FrameAssembler<I> {
    fn process(&mut self, record: PowerRecord) {
        if record.is_frame_start() {
            if let Some(open) = self.current.take() {
                self.pending.push_back(open.into_frame());
            }
            self.current = Some(OpenFrame::new(record));
            return;
        }

        let Some(open) = self.current.as_mut() else {
            // Orphan data: no open frame.
            return;
        };

        if !record.is_continuation_candidate() {
            return;
        }

        let same_minute = match (record.timestamp, open.start.timestamp) {
            (Some(t), Some(s)) => t.minute() == s.minute(),
            _ => false,
        };
        if !same_minute {
            return;
        }

        if open.bound_data_line {
            if record.source_line != open.data_line {
                return;
            }
        } else {
            open.data_line = record.source_line;
            open.bound_data_line = true;
        }

        if let Some(bytes) = &record.payload {
            open.buffer.extend_from_slice(bytes);
        }

        if let Some(expected) = open.start.expected_length {
            if open.buffer.len() >= expected {
                let finished = self
                    .current
                    .take()
                    .unwrap_or_else(|| unreachable!("just matched Some above"));
                self.pending.push_back(finished.into_frame());
            }
        }
    }
}

impl<I: Iterator<Item = PowerRecord>> Iterator for FrameAssembler<I> {
    type Item = PowerFrame;

    fn next(&mut self) -> Option<PowerFrame> {
        loop {
            if let Some(frame) = self.pending.pop_front() {
                return Some(frame);
            }
            if self.input_exhausted {
                return self.current.take().map(OpenFrame::into_frame);
            }
            match self.inner.next() {
                Some(record) => self.process(record),
                None => self.input_exhausted = true,
            }
        }
    }
}
