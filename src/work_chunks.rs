//! Work partitioning of a DV frame
//!
//! A frame is a grid of DIF channels x DIF sequences x 27 video segments.
//! Each video segment holds five macroblocks scattered over the picture so
//! that tape dropouts spread out; one segment is one unit of parallel work.
//! This module computes the DIF block offset of every segment and the
//! picture position of each of its macroblocks.

use crate::profile::Profile;
use crate::tables::{MACROBLOCKS_PER_SEGMENT, SEGMENTS_PER_SEQUENCE};
use crate::types::{MbCoord, PixelFormat, WorkChunk};

/// Per-macroblock offsets that scatter a segment's five macroblocks
const OFF: [usize; 5] = [2, 6, 8, 0, 4];
const SHUF1: [usize; 5] = [36, 18, 54, 0, 72];
const SHUF2: [usize; 5] = [24, 12, 36, 0, 48];
const SHUF3: [usize; 5] = [18, 9, 27, 0, 36];

const L_START: [usize; 10] = [0, 4, 9, 13, 18, 22, 27, 31, 36, 40];
const L_START_SHUFFLED: [usize; 5] = [9, 4, 13, 0, 18];

const SERPENT1: [usize; 27] = [
    0, 1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1, 2,
];

const SERPENT2: [usize; 30] = [
    0, 1, 2, 3, 4, 5, 5, 4, 3, 2, 1, 0, 0, 1, 2, 3, 4, 5, 5, 4, 3, 2, 1, 0, 0, 1, 2, 3, 4, 5,
];

/// Relocation of the right-hand macroblock columns of 1080i60, indexed by row
const REMAP: [[u8; 2]; 64] = [
    [0, 0], [0, 0], [0, 0], [0, 0], [0, 0], [0, 1], [0, 2], [0, 3],
    [10, 0], [10, 1], [10, 2], [10, 3], [20, 0], [20, 1], [20, 2], [20, 3],
    [30, 0], [30, 1], [30, 2], [30, 3], [40, 0], [40, 1], [40, 2], [40, 3],
    [50, 0], [50, 1], [50, 2], [50, 3], [60, 0], [60, 1], [60, 2], [60, 3],
    [70, 0], [70, 1], [70, 2], [70, 3], [0, 64], [0, 65], [0, 66], [10, 64],
    [10, 65], [10, 66], [20, 64], [20, 65], [20, 66], [30, 64], [30, 65], [30, 66],
    [40, 64], [40, 65], [40, 66], [50, 64], [50, 65], [50, 66], [60, 64], [60, 65],
    [60, 66], [70, 64], [70, 65], [70, 66], [0, 67], [20, 67], [40, 67], [60, 67],
];

/// Number of video segments a frame of this profile carries
pub fn work_pool_size(profile: &Profile) -> usize {
    let mut size = profile.n_difchan * profile.difseg_size * SEGMENTS_PER_SEQUENCE;
    if profile.is_1080i50() {
        size -= 3 * SEGMENTS_PER_SEQUENCE;
    }
    if profile.is_720p50() {
        size -= 4 * SEGMENTS_PER_SEQUENCE;
    }
    size
}

/// Whether a (channel, sequence) pair holds no video segments
fn is_empty_sequence(profile: &Profile, chan: usize, seq: usize) -> bool {
    (profile.is_1080i50() && chan != 0 && seq == 11) || (profile.is_720p50() && seq > 9)
}

/// Build the work chunk table of a profile, in DIF stream order
pub fn build_work_chunks(profile: &Profile) -> Vec<WorkChunk> {
    let mut chunks = Vec::with_capacity(work_pool_size(profile));
    let mut p = 0usize;

    for c in 0..profile.n_difchan {
        for s in 0..profile.difseg_size {
            // header, 2 subcode and 3 VAUX blocks
            p += 6;
            for j in 0..SEGMENTS_PER_SEQUENCE {
                // one audio block before every third segment
                if j % 3 == 0 {
                    p += 1;
                }
                if !is_empty_sequence(profile, c, s) {
                    chunks.push(WorkChunk {
                        buf_offset: p as u16,
                        mb_coordinates: segment_coordinates(profile, c, s, j),
                    });
                }
                p += MACROBLOCKS_PER_SEGMENT;
            }
        }
    }

    chunks
}

/// Picture positions of the five macroblocks of one video segment
pub fn segment_coordinates(
    profile: &Profile,
    chan: usize,
    seq: usize,
    slot: usize,
) -> [MbCoord; MACROBLOCKS_PER_SEGMENT] {
    let mut coords = [MbCoord::default(); MACROBLOCKS_PER_SEGMENT];
    for (m, coord) in coords.iter_mut().enumerate() {
        *coord = macroblock_coordinate(profile, chan, seq, slot, m);
    }
    coords
}

fn macroblock_coordinate(profile: &Profile, chan: usize, seq: usize, slot: usize, m: usize) -> MbCoord {
    let packed = match profile.width {
        1440 => coordinate_1080i50(chan, seq, slot, m),
        1280 => coordinate_1080i60(chan, seq, slot, m),
        960 => coordinate_720p(chan, seq, slot, m),
        _ => coordinate_sd(profile, chan, seq, slot, m),
    };
    MbCoord::from_packed(packed as u16)
}

fn coordinate_1080i50(chan: usize, seq: usize, slot: usize, m: usize) -> usize {
    let blk = (chan * 11 + seq) * SEGMENTS_PER_SEQUENCE + slot;
    let (x, y) = if chan == 0 && seq == 11 {
        let x = m * 27 + slot;
        if x < 90 {
            (x, 0)
        } else {
            ((x - 90) * 2, 67)
        }
    } else {
        let i = (4 * chan + blk + OFF[m]) % 11;
        let k = (blk / 11) % 27;
        let x = SHUF1[m] + (chan & 1) * 9 + k % 9;
        let y = (i * 3 + k / 9) * 2 + (chan >> 1) + 1;
        (x, y)
    };
    (x << 1) | (y << 9)
}

fn coordinate_1080i60(chan: usize, seq: usize, slot: usize, m: usize) -> usize {
    let blk = (chan * 10 + seq) * SEGMENTS_PER_SEQUENCE + slot;
    let i = (4 * chan + seq / 5 + 2 * blk + OFF[m]) % 10;
    let k = (blk / 5) % 27;

    let mut x = SHUF1[m] + (chan & 1) * 9 + k % 9;
    let mut y = (i * 3 + k / 9) * 2 + (chan >> 1) + 4;

    if x >= 80 {
        let shift = if y > 59 { 1 } else { 0 };
        x = REMAP[y][0] as usize + ((x - 80) << shift);
        y = REMAP[y][1] as usize;
    }
    (x << 1) | (y << 9)
}

fn coordinate_720p(chan: usize, seq: usize, slot: usize, m: usize) -> usize {
    let blk = (chan * 10 + seq) * SEGMENTS_PER_SEQUENCE + slot;
    let i = (4 * chan + seq / 5 + 2 * blk + OFF[m]) % 10;
    let k = (blk / 5) % 27 + (i & 1) * 3;

    let x = SHUF2[m] + k % 6 + 6 * (chan & 1);
    let y = L_START[i] + k / 6 + 45 * (chan >> 1);
    (x << 1) | (y << 9)
}

fn coordinate_sd(profile: &Profile, chan: usize, seq: usize, slot: usize, m: usize) -> usize {
    let difseg = profile.difseg_size;
    match profile.pix_fmt {
        PixelFormat::Yuv422p => {
            let x = SHUF3[m] + slot / 3;
            let y = SERPENT1[slot] + ((((seq + OFF[m]) % difseg) << 1) + chan) * 3;
            (x << 1) | (y << 8)
        }
        PixelFormat::Yuv420p => {
            let x = SHUF3[m] + slot / 3;
            let y = SERPENT1[slot] + ((seq + OFF[m]) % difseg) * 3;
            (x << 1) | (y << 9)
        }
        PixelFormat::Yuv411p => {
            let i = (seq + OFF[m]) % difseg;
            let k = slot + if m == 1 || m == 2 { 3 } else { 0 };

            let x = L_START_SHUFFLED[m] + k / 6;
            let mut y = SERPENT2[k] + i * 6;
            if x > 21 {
                y = y * 2 - i * 6;
            }
            (x << 2) | (y << 8)
        }
    }
}

/// Decode macroblock `index` of a chunk into (x, y)
///
/// 720-line frames are coded as two half-frames; when the frame flags carry
/// no channel bits the odd half-frame rows are displaced by 36 macroblock
/// rows and are moved back here.
pub fn map_chunk_macroblock(profile: &Profile, chunk: &WorkChunk, index: usize, frame_flags: u8) -> (u32, u32) {
    let coord = chunk.mb_coordinates[index];
    let x = coord.x() as u32;
    let mut y = coord.y() as u32;

    if profile.height == 720 && frame_flags & 0x0c == 0 {
        if y > 17 {
            y -= 18;
        } else {
            y += 72;
        }
    }
    (x, y)
}
