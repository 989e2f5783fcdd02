// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Typed error taxonomy for the log-to-APDU decode pipeline.
//!
//! Most of these variants are *recovered locally* per the degrade-gracefully
//! philosophy of the pipeline: a malformed line yields a record with
//! whatever fields could be recovered, a malformed APDU yields an empty
//! result list. They are still modeled as concrete error values (rather than
//! silently swallowed) so internal code and tests can assert on the exact
//! failure, the way [`crate::models::opcode`]-style parsing in the teacher
//! crate keeps `UnknownOpcode` around as a real type even though most
//! callers only ever see it boxed inside an `anyhow::Error`.

use thiserror::Error;

/// Failure modes of the decode pipeline (see spec §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The line lacks the expected tab structure, or the timestamp could
    /// not be parsed. Recovered: the caller still receives a record with
    /// default fields.
    #[error("header invalid: {0}")]
    HeaderInvalid(String),

    /// A protocol-specific field (e.g. `DCB=`) could not be located.
    /// Recovered: the field is left at its default.
    #[error("field missing: {0}")]
    FieldMissing(&'static str),

    /// The APDU length prefix is inconsistent with the input, or an
    /// information-element decoder would read past the end of the payload.
    #[error("payload too short: {0}")]
    PayloadTooShort(String),

    /// The APDU decoder encountered an unknown TypeID, or a decoder was
    /// invoked with a TypeID outside its support set.
    #[error("unsupported type id: {0}")]
    UnsupportedType(u8),

    /// Only produced by the file-backed log buffer; surfaced to the caller.
    #[error("buffer I/O error: {0}")]
    BufferIo(String),
}

pub type Result<T> = std::result::Result<T, ReplayError>;
