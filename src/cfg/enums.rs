// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use core::fmt;

use serde::{Deserialize, Serialize};

/// Log-buffer backing store selection (spec §6, "Buffer-mode selection").
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferMode {
    #[serde(rename = "InMemory", alias = "inmemory", alias = "memory")]
    InMemory,
    #[serde(rename = "File", alias = "file")]
    File,
    #[serde(rename = "Auto", alias = "auto")]
    Auto,
}

impl fmt::Display for BufferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BufferMode::InMemory => "InMemory",
            BufferMode::File => "File",
            BufferMode::Auto => "Auto",
        })
    }
}
