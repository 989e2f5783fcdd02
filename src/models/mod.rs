// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Data model: log records, the reassembled power frame, APDU
//! classification, decoded results, and the JSON-lines persistence shape.

pub mod apdu;
pub mod frame;
pub mod persisted;
pub mod record;
pub mod result;
