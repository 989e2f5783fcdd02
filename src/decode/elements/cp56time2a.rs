// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! CP56Time2a decoding — spec §4.7.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{ReplayError, Result};

/// Decode 7 raw bytes into a UTC timestamp. Field ranges are not validated —
/// out-of-range values (e.g. month 13) are passed through to `chrono`, whose
/// `LocalResult` rejection becomes a `PayloadTooShort`-flavoured error since
/// there is no dedicated "invalid timestamp" kind in the taxonomy.
pub fn decode(bytes: &[u8]) -> Result<DateTime<Utc>> {
    if bytes.len() < 7 {
        return Err(ReplayError::PayloadTooShort("CP56Time2a".to_string()));
    }

    let ms = u16::from(bytes[0]) | (u16::from(bytes[1]) << 8);
    let second = ms / 1000;
    let millisecond = ms % 1000;
    let minute = bytes[2] & 0x3F;
    let hour = bytes[3] & 0x1F;
    let day = bytes[4] & 0x1F;
    let month = bytes[5] & 0x0F;
    let year = 2000 + u32::from(bytes[6] & 0x7F);

    Utc.with_ymd_and_hms(year as i32, u32::from(month), u32::from(day), u32::from(hour), u32::from(minute), u32::from(second))
        .single()
        .and_then(|dt| dt.checked_add_signed(chrono::Duration::milliseconds(i64::from(millisecond))))
        .ok_or_else(|| ReplayError::PayloadTooShort("CP56Time2a out of calendar range".to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn decodes_c_rtc_sync_example() {
        // spec §8 scenario 7's timestamp portion: 6C E8 3B 17 1F 0C 19
        let bytes = [0x6C, 0xE8, 0x3B, 0x17, 0x1F, 0x0C, 0x19];
        let dt = decode(&bytes).expect("valid CP56Time2a");
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.month(), 12);
        assert_eq!(dt.day(), 31);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 59);
        assert_eq!(dt.second(), 59);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn too_short_is_rejected() {
        assert!(decode(&[0x00; 6]).is_err());
    }
}
