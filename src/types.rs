//! Value types shared across the DV core
//!
//! Small copyable types: rationals, pixel formats, qlevels, packed
//! macroblock coordinates and work chunks, plus the DIF section and pack
//! type enumerations.

use std::fmt;

#[cfg(feature = "diagnostics")]
use serde::Serialize;

use crate::tables::{DV100_NUM_QLEVELS, DV100_QLEVELS, DV100_QSTEP, MACROBLOCKS_PER_SEGMENT};

/// Exact rational number, used for time bases and aspect ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct Rational {
    pub num: u32,
    pub den: u32,
}

impl Rational {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Planar YUV layouts carried by DV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub enum PixelFormat {
    /// 4:1:1 (NTSC DV25, SMPTE 314M PAL DV25)
    Yuv411p,
    /// 4:2:0 (IEC 61834 PAL DV25)
    Yuv420p,
    /// 4:2:2 (DV50 and DV100)
    Yuv422p,
}

impl PixelFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelFormat::Yuv411p => "yuv411p",
            PixelFormat::Yuv420p => "yuv420p",
            PixelFormat::Yuv422p => "yuv422p",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DV100 quantization level: QNO in the upper bits, CNO in the low two bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct Qlevel(u8);

impl Qlevel {
    /// QNO saturates at the last step table entry
    pub const fn new(qno: u8, cno: u8) -> Self {
        let max_qno = (DV100_QSTEP.len() - 1) as u8;
        let qno = if qno > max_qno { max_qno } else { qno };
        Self((qno << 2) | (cno & 3))
    }

    /// Entry `index` of the DV100 qlevel table, clamped to its last entry
    pub const fn from_index(index: usize) -> Self {
        let index = if index < DV100_NUM_QLEVELS {
            index
        } else {
            DV100_NUM_QLEVELS - 1
        };
        Self(DV100_QLEVELS[index])
    }

    /// Packed QNO/CNO byte
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Quantization number, indexes the step table
    pub const fn qno(self) -> usize {
        (self.0 >> 2) as usize
    }

    /// Class number, an extra power-of-two multiplier
    pub const fn cno(self) -> u32 {
        (self.0 & 3) as u32
    }

    /// Effective quantization step
    pub fn step(self) -> u32 {
        (DV100_QSTEP[self.qno()] as u32) << self.cno()
    }
}

/// Macroblock position packed into 16 bits: x in the low byte, y in the high
/// byte. Units depend on the layout that produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct MbCoord(u16);

impl MbCoord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self(x as u16 | ((y as u16) << 8))
    }

    pub const fn from_packed(packed: u16) -> Self {
        Self(packed)
    }

    pub const fn packed(self) -> u16 {
        self.0
    }

    pub const fn x(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub const fn y(self) -> u8 {
        (self.0 >> 8) as u8
    }
}

/// One unit of parallel work: a video segment of five macroblocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct WorkChunk {
    /// Offset of the segment's first DIF block within the frame, in DIF blocks
    pub buf_offset: u16,
    /// Coordinates of the five macroblocks, in segment order
    pub mb_coordinates: [MbCoord; MACROBLOCKS_PER_SEGMENT],
}

impl WorkChunk {
    /// Byte offset of the segment within the frame
    pub fn byte_offset(&self) -> usize {
        self.buf_offset as usize * crate::tables::DIF_BLOCK_SIZE
    }
}

/// DIF block section type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub enum SectionType {
    Header,
    Subcode,
    Vaux,
    Audio,
    Video,
}

impl SectionType {
    /// First byte of the section id for this section
    pub const fn tag(self) -> u8 {
        match self {
            SectionType::Header => 0x1f,
            SectionType::Subcode => 0x3f,
            SectionType::Vaux => 0x56,
            SectionType::Audio => 0x76,
            SectionType::Video => 0x96,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x1f => Some(SectionType::Header),
            0x3f => Some(SectionType::Subcode),
            0x56 => Some(SectionType::Vaux),
            0x76 => Some(SectionType::Audio),
            0x96 => Some(SectionType::Video),
            _ => None,
        }
    }
}

/// Pack identifiers of the AAUX/VAUX/subcode packs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub enum PackType {
    Header525,
    Header625,
    Timecode,
    AudioSource,
    AudioControl,
    AudioRecdate,
    AudioRectime,
    VideoSource,
    VideoControl,
    VideoRecdate,
    VideoRectime,
    Unknown,
}

impl PackType {
    pub const fn id(self) -> u8 {
        match self {
            PackType::Header525 => 0x3f,
            PackType::Header625 => 0xbf,
            PackType::Timecode => 0x13,
            PackType::AudioSource => 0x50,
            PackType::AudioControl => 0x51,
            PackType::AudioRecdate => 0x52,
            PackType::AudioRectime => 0x53,
            PackType::VideoSource => 0x60,
            PackType::VideoControl => 0x61,
            PackType::VideoRecdate => 0x62,
            PackType::VideoRectime => 0x63,
            PackType::Unknown => 0xff,
        }
    }

    pub fn from_id(id: u8) -> Self {
        match id {
            0x3f => PackType::Header525,
            0xbf => PackType::Header625,
            0x13 => PackType::Timecode,
            0x50 => PackType::AudioSource,
            0x51 => PackType::AudioControl,
            0x52 => PackType::AudioRecdate,
            0x53 => PackType::AudioRectime,
            0x60 => PackType::VideoSource,
            0x61 => PackType::VideoControl,
            0x62 => PackType::VideoRecdate,
            0x63 => PackType::VideoRectime,
            _ => PackType::Unknown,
        }
    }
}
