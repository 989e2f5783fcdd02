// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! The reassembled frame produced by the Frame Assembler (spec §3,
//! "PowerFrame").
//!
//! Design note (spec §9, "Cyclic reference (PowerFrame -> StartEntry)"): no
//! cycle exists in practice, so we simply own the start record by value
//! instead of reaching for an `Rc`/`Arc` the way a reference-counted
//! language would.

use chrono::{DateTime, FixedOffset};

use crate::models::record::PowerRecord;

/// Which way the frame travelled, per the log line's action token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sending,
    Received,
}

impl Direction {
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "Sending" => Some(Direction::Sending),
            "Received" => Some(Direction::Received),
            _ => None,
        }
    }
}

/// An assembled unit of raw bytes, ready to be handed to the APDU decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerFrame {
    pub direction: Direction,
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub expected_length: Option<usize>,
    pub data: Vec<u8>,
    pub start: PowerRecord,
}

impl PowerFrame {
    pub fn actual_length(&self) -> usize {
        self.data.len()
    }

    /// A frame with no advertised expected length has no authoritative
    /// length to compare against, so it is trivially complete (spec §9,
    /// last open question).
    pub fn is_complete(&self) -> bool {
        match self.expected_length {
            Some(expected) => self.data.len() >= expected,
            None => true,
        }
    }
}
