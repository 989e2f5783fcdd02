// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! APDU Decoder (AD) — spec §4.5.
//!
//! Classifies the fixed 6-byte APCI prefix of a reassembled frame and, for
//! I-frames, reads the ASDU header (TypeID/VSQ/COT/CA) before handing the
//! remaining payload view to the Payload Dispatcher.

use zerocopy::FromBytes;

use crate::models::apdu::{ApciRaw, ApduFrame, AsduHeaderRaw, LinkAction, UFrameKind, Vsq};

const START_BYTE: u8 = 0x68;

/// Classify one reassembled frame's bytes into an [`ApduFrame`].
///
/// Never fails: malformed input (too short, bad start byte, inconsistent
/// length prefix, or an unrecognized control field) classifies as
/// [`ApduFrame::Invalid`] rather than surfacing an error (spec §7).
pub fn classify(data: &[u8]) -> ApduFrame<'_> {
    let Ok((apci, rest)) = ApciRaw::ref_from_prefix(data) else {
        return ApduFrame::Invalid;
    };
    if apci.start != START_BYTE {
        return ApduFrame::Invalid;
    }
    if apci.length as usize != data.len() - 2 {
        return ApduFrame::Invalid;
    }

    match apci.ctrl0 & 0x03 {
        0b01 => classify_s_frame(apci.ctrl2, apci.ctrl3),
        0b11 => classify_u_frame(apci.ctrl0),
        _ => classify_i_frame(apci.ctrl0, rest),
    }
}

fn classify_s_frame(ctrl2: u8, ctrl3: u8) -> ApduFrame<'static> {
    let receive_seq = (u16::from(ctrl2) | (u16::from(ctrl3) << 8)) >> 1;
    ApduFrame::Supervisory { receive_seq: receive_seq & 0x7FFF }
}

fn classify_u_frame(ctrl0: u8) -> ApduFrame<'static> {
    let (kind, action) = match ctrl0 {
        0x07 => (UFrameKind::StartDt, LinkAction::Activate),
        0x0B => (UFrameKind::StartDt, LinkAction::Confirm),
        0x13 => (UFrameKind::StopDt, LinkAction::Activate),
        0x23 => (UFrameKind::StopDt, LinkAction::Confirm),
        0x43 => (UFrameKind::TestDt, LinkAction::Activate),
        0x83 => (UFrameKind::TestDt, LinkAction::Confirm),
        _ => return ApduFrame::Invalid,
    };
    ApduFrame::Unnumbered { kind, action }
}

fn classify_i_frame(ctrl0: u8, asdu: &[u8]) -> ApduFrame<'_> {
    debug_assert_eq!(ctrl0 & 0x01, 0, "I-frame control byte must have low bit clear");
    let Ok((header, payload)) = AsduHeaderRaw::ref_from_prefix(asdu) else {
        return ApduFrame::Invalid;
    };
    ApduFrame::Information {
        type_id: header.type_id,
        vsq: Vsq::from_byte(header.vsq),
        cot: header.cot.get(),
        ca: header.ca.get(),
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_frame_ack_receive_sequence() {
        let data = [0x68, 0x04, 0x01, 0x00, 0x58, 0x6A];
        let frame = classify(&data);
        assert_eq!(frame, ApduFrame::Supervisory { receive_seq: ((0x58u16 | (0x6Au16 << 8)) >> 1) & 0x7FFF });
    }

    #[test]
    fn u_frame_startdt_confirm() {
        let data = [0x68, 0x04, 0x0B, 0x00, 0x00, 0x00];
        let frame = classify(&data);
        assert_eq!(frame, ApduFrame::Unnumbered { kind: UFrameKind::StartDt, action: LinkAction::Confirm });
    }

    #[test]
    fn u_frame_unknown_ctrl0_is_invalid() {
        let data = [0x68, 0x04, 0xFF, 0x00, 0x00, 0x00];
        assert_eq!(classify(&data), ApduFrame::Invalid);
    }

    #[test]
    fn i_frame_single_point_individual() {
        // type_id=1, vsq=0x01 (count=1, individual), cot=0, ca=1, then IOA=1 + SIQ=0x01.
        let asdu = [0x01u8, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01];
        let mut data = vec![0x68, (4 + asdu.len()) as u8, 0x00, 0x00, 0x00, 0x00];
        data.extend_from_slice(&asdu);
        let frame = classify(&data);
        match frame {
            ApduFrame::Information { type_id, vsq, cot, ca, payload } => {
                assert_eq!(type_id, 1);
                assert!(!vsq.is_sequence);
                assert_eq!(vsq.count, 1);
                assert_eq!(cot, 0);
                assert_eq!(ca, 1);
                assert_eq!(payload, &[0x01, 0x00, 0x00, 0x01]);
            },
            other => panic!("expected Information frame, got {other:?}"),
        }
    }

    #[test]
    fn too_short_is_invalid() {
        assert_eq!(classify(&[0x68, 0x04]), ApduFrame::Invalid);
    }

    #[test]
    fn wrong_start_byte_is_invalid() {
        assert_eq!(classify(&[0x00, 0x04, 0x01, 0x00, 0x58, 0x6A]), ApduFrame::Invalid);
    }

    #[test]
    fn length_prefix_mismatch_is_invalid() {
        assert_eq!(classify(&[0x68, 0xFF, 0x01, 0x00, 0x58, 0x6A]), ApduFrame::Invalid);
    }
}
