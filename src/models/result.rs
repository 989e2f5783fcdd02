// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Decoded result types (spec §3, "Decoded result (sum type)").

use chrono::{DateTime, Utc};

use crate::models::apdu::{LinkAction, UFrameKind};

/// Fields common to every information-object-level decode: TypeID, common
/// address, IOA (24-bit, stored widened), cause of transmission, and an
/// optional timestamp (carried through from the reassembled frame, not
/// produced by every decoder).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementHeader {
    pub type_id: u8,
    pub common_address: u16,
    pub ioa: u32,
    pub cause_of_transmission: u16,
    pub timestamp: Option<DateTime<Utc>>,
}

/// One decoded application-level event.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedResult {
    Status {
        header: ElementHeader,
        state: u8,
        is_valid: bool,
    },
    Measurement {
        header: ElementHeader,
        value: f64,
        is_valid: bool,
    },
    ControlCommand {
        header: ElementHeader,
        command_value: u8,
        is_select: bool,
    },
    InterrogationCommand {
        header: ElementHeader,
        qoi: u8,
    },
    TimeSyncCommand {
        header: ElementHeader,
        sync_time: DateTime<Utc>,
    },
    SFrame {
        receive_seq: u16,
    },
    UFrame {
        action: LinkAction,
        which: UFrameKind,
    },
}

impl DecodedResult {
    /// The element header, for the variants that carry one.
    pub fn header(&self) -> Option<&ElementHeader> {
        match self {
            DecodedResult::Status { header, .. }
            | DecodedResult::Measurement { header, .. }
            | DecodedResult::ControlCommand { header, .. }
            | DecodedResult::InterrogationCommand { header, .. }
            | DecodedResult::TimeSyncCommand { header, .. } => Some(header),
            DecodedResult::SFrame { .. } | DecodedResult::UFrame { .. } => None,
        }
    }
}
