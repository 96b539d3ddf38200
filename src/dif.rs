//! DIF block identifiers
//!
//! Every 80-byte DIF block opens with a 3-byte id naming its section,
//! channel, sequence and position. Subcode sync blocks carry their own
//! 3-byte id. These are packed and unpacked here.

use crate::error::{BitstreamError, BitstreamResult};
use crate::types::{PackType, SectionType};

/// Fields of a DIF block id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionId {
    pub section: SectionType,
    /// DIF channel 0-3
    pub chan_num: u8,
    /// DIF sequence 0-9 (525/60) or 0-11 (625/50)
    pub seq_num: u8,
    /// Block number within the section
    pub dif_num: u8,
}

/// Pack a DIF block id
///
/// Byte 1 holds the sequence number, the FSC bit (odd channel), the FSP bit
/// (channels 2 and 3) and two reserved one bits.
pub fn pack_section_id(section: SectionType, chan_num: u8, seq_num: u8, dif_num: u8) -> [u8; 3] {
    let fsc = chan_num & 1;
    let fsp = (chan_num >> 1) & 1;
    [
        section.tag(),
        (seq_num << 4) | (fsc << 3) | (fsp << 2) | 3,
        dif_num,
    ]
}

/// Inverse of `pack_section_id`; `None` for an unknown section tag
pub fn unpack_section_id(id: [u8; 3]) -> Option<SectionId> {
    let section = SectionType::from_tag(id[0])?;
    let fsc = (id[1] >> 3) & 1;
    let fsp = (id[1] >> 2) & 1;
    Some(SectionId {
        section,
        chan_num: (fsp << 1) | fsc,
        seq_num: id[1] >> 4,
        dif_num: id[2],
    })
}

/// Pack a subcode sync block id
///
/// `fr` is 1 for the first half of a channel. Sync block 11 sets all
/// reserved bits of byte 0.
pub fn pack_subcode_id(syb_num: u8, fr: u8) -> [u8; 3] {
    let fr = (fr & 1) << 7;
    let byte0 = if syb_num == 11 { fr | 0x7f } else { fr | 0x0f };
    [byte0, 0xf0 | (syb_num & 0x0f), 0xff]
}

/// Inverse of `pack_subcode_id`, returning `(syb_num, fr)`
pub fn unpack_subcode_id(id: [u8; 3]) -> (u8, u8) {
    (id[1] & 0x0f, id[0] >> 7)
}

fn write_id(id: [u8; 3], buf: &mut [u8]) -> BitstreamResult<usize> {
    let available = buf.len() * 8;
    let dst = buf.get_mut(..3).ok_or(BitstreamError::Overflow {
        requested: 24,
        available,
    })?;
    dst.copy_from_slice(&id);
    Ok(3)
}

/// Write a DIF block id at the start of `buf`, returning the bytes written
pub fn write_section_id(
    section: SectionType,
    chan_num: u8,
    seq_num: u8,
    dif_num: u8,
    buf: &mut [u8],
) -> BitstreamResult<usize> {
    write_id(pack_section_id(section, chan_num, seq_num, dif_num), buf)
}

/// Write a subcode sync block id at the start of `buf`
pub fn write_subcode_id(syb_num: u8, fr: u8, buf: &mut [u8]) -> BitstreamResult<usize> {
    write_id(pack_subcode_id(syb_num, fr), buf)
}

/// Channel flags byte of a frame's header DIF block
pub fn frame_flags(frame: &[u8]) -> Option<u8> {
    frame.get(1).copied()
}

/// Pack type of a 5-byte pack
pub fn pack_type(pack: &[u8]) -> PackType {
    pack.first().map_or(PackType::Unknown, |&id| PackType::from_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_video_section_id() {
        assert_eq!(pack_section_id(SectionType::Video, 1, 5, 10), [0x96, 0x5b, 10]);
        assert_eq!(pack_section_id(SectionType::Header, 0, 0, 0), [0x1f, 0x03, 0]);
        assert_eq!(pack_section_id(SectionType::Audio, 2, 11, 8), [0x76, 0xb7, 8]);
    }

    #[test]
    fn test_subcode_id() {
        assert_eq!(pack_subcode_id(0, 1), [0x8f, 0xf0, 0xff]);
        assert_eq!(pack_subcode_id(11, 0), [0x7f, 0xfb, 0xff]);
        assert_eq!(pack_subcode_id(6, 0), [0x0f, 0xf6, 0xff]);
    }

    #[test]
    fn test_write_needs_three_bytes() {
        let mut buf = [0u8; 2];
        assert!(matches!(
            write_subcode_id(3, 1, &mut buf),
            Err(BitstreamError::Overflow { requested: 24, available: 16 })
        ));
        assert_eq!(buf, [0, 0]);
        let mut buf = [0u8; 80];
        assert_eq!(write_section_id(SectionType::Vaux, 0, 1, 2, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[0x56, 0x13, 2]);
    }

    #[test]
    fn test_frame_flags_and_pack_type() {
        let frame = [0x1f, 0x07, 0x00, 0x80];
        assert_eq!(frame_flags(&frame), Some(0x07));
        assert_eq!(frame_flags(&[]), None);
        assert_eq!(pack_type(&[0x13, 0, 0, 0, 0]), PackType::Timecode);
        assert_eq!(pack_type(&[]), PackType::Unknown);
    }

    proptest! {
        #[test]
        fn test_section_id_round_trip(
            section in prop::sample::select(vec![
                SectionType::Header,
                SectionType::Subcode,
                SectionType::Vaux,
                SectionType::Audio,
                SectionType::Video,
            ]),
            chan in 0u8..4,
            seq in 0u8..12,
            dif in any::<u8>(),
        ) {
            let id = pack_section_id(section, chan, seq, dif);
            prop_assert_eq!(id[1] & 3, 3);
            prop_assert_eq!(
                unpack_section_id(id),
                Some(SectionId { section, chan_num: chan, seq_num: seq, dif_num: dif })
            );
        }

        #[test]
        fn test_subcode_id_round_trip(syb in 0u8..12, fr in 0u8..2) {
            prop_assert_eq!(unpack_subcode_id(pack_subcode_id(syb, fr)), (syb, fr));
        }
    }
}
