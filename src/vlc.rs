//! Run-level variable-length coding
//!
//! Maps (zero-run, level) pairs of quantized AC coefficients to DV code
//! words. Two map sizes exist: a compact 15x23 map that falls back to
//! composing a run prefix with a level code, and a full 64x256 map that
//! covers every pair a block can produce. Both are built once from the base
//! table in `tables` and yield identical codes.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::bitstream::BitReader;
use crate::error::{BitstreamError, BitstreamResult};
use crate::tables::{DV_VLC_BITS, DV_VLC_LEN, DV_VLC_LEVEL, DV_VLC_RUN, NB_DV_VLC};

/// End-of-block code word
pub const EOB_CODE: u32 = 0b0110;
pub const EOB_BITS: u32 = 4;

/// Run marking the end-of-block entry of the base table
const EOB_RUN: u8 = 127;

/// Longest base code, in bits
const MAX_VLC_LEN: u32 = 15;

pub const COMPACT_RUN_SIZE: usize = 15;
pub const COMPACT_LEV_SIZE: usize = 23;
pub const FULL_RUN_SIZE: usize = 64;
pub const FULL_LEV_SIZE: usize = 256;

/// A code word, right-aligned, and its length in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VlcPair {
    pub code: u32,
    pub len: u32,
}

/// Size of the run-level map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VlcMode {
    /// 15x23 entries plus composition for everything else
    Compact,
    /// 64x256 entries
    Full,
}

impl Default for VlcMode {
    #[cfg(feature = "small-tables")]
    fn default() -> Self {
        VlcMode::Compact
    }

    #[cfg(not(feature = "small-tables"))]
    fn default() -> Self {
        VlcMode::Full
    }
}

/// Run-level lookup table, row-major by run
#[derive(Debug)]
pub struct VlcMap {
    run_size: usize,
    lev_size: usize,
    entries: Vec<VlcPair>,
}

impl VlcMap {
    /// Build the map from the base table
    ///
    /// Direct codes come first; every other in-range pair is composed from
    /// the run-only code for `run - 1` followed by the zero-run level code.
    fn build(run_size: usize, lev_size: usize) -> Self {
        let mut map = Self {
            run_size,
            lev_size,
            entries: vec![VlcPair::default(); run_size * lev_size],
        };

        // the last base entry is end-of-block
        for i in 0..NB_DV_VLC - 1 {
            let run = DV_VLC_RUN[i] as usize;
            let level = DV_VLC_LEVEL[i] as usize;
            if run >= run_size || level >= lev_size {
                continue;
            }
            if map.get(run, level).len != 0 {
                continue;
            }
            let signed = (level != 0) as u32;
            *map.get_mut(run, level) = VlcPair {
                code: (DV_VLC_BITS[i] as u32) << signed,
                len: DV_VLC_LEN[i] as u32 + signed,
            };
        }

        for run in 0..run_size {
            for level in 1..lev_size {
                if map.get(run, level).len != 0 {
                    continue;
                }
                // run 0 rows are fully populated by the level escapes
                let Some(prev_run) = run.checked_sub(1) else {
                    continue;
                };
                let prefix = map.get(prev_run, 0);
                let suffix = map.get(0, level);
                *map.get_mut(run, level) = VlcPair {
                    code: suffix.code | (prefix.code << suffix.len),
                    len: prefix.len + suffix.len,
                };
            }
        }

        map
    }

    #[inline]
    pub fn get(&self, run: usize, level: usize) -> VlcPair {
        self.entries[run * self.lev_size + level]
    }

    #[inline]
    fn get_mut(&mut self, run: usize, level: usize) -> &mut VlcPair {
        &mut self.entries[run * self.lev_size + level]
    }

    pub fn run_size(&self) -> usize {
        self.run_size
    }

    pub fn lev_size(&self) -> usize {
        self.lev_size
    }
}

lazy_static! {
    static ref COMPACT_MAP: VlcMap = VlcMap::build(COMPACT_RUN_SIZE, COMPACT_LEV_SIZE);
    static ref FULL_MAP: VlcMap = VlcMap::build(FULL_RUN_SIZE, FULL_LEV_SIZE);

    /// (length, code) -> base table index, for decoding
    static ref DECODE_TABLE: HashMap<(u32, u32), usize> = (0..NB_DV_VLC)
        .map(|i| ((DV_VLC_LEN[i] as u32, DV_VLC_BITS[i] as u32), i))
        .collect();
}

/// Run-level encoder bound to one map size
#[derive(Debug, Clone, Copy)]
pub struct RunLevelCoder {
    mode: VlcMode,
    map: &'static VlcMap,
}

impl RunLevelCoder {
    pub fn new(mode: VlcMode) -> Self {
        let map: &'static VlcMap = match mode {
            VlcMode::Compact => &COMPACT_MAP,
            VlcMode::Full => &FULL_MAP,
        };
        Self { mode, map }
    }

    pub fn mode(&self) -> VlcMode {
        self.mode
    }

    pub fn map(&self) -> &'static VlcMap {
        self.map
    }

    /// Code word for `run` zeros followed by a coefficient of magnitude
    /// `level`; `sign` (0 or 1) lands in bit 0.
    ///
    /// Callers clamp `level` to 255 and keep `run` below 64.
    pub fn encode(&self, run: u32, level: u32, sign: u32) -> VlcPair {
        let map = self.map;
        let (run, level) = (run as usize, level as usize);
        if run < map.run_size && level < map.lev_size {
            let entry = map.get(run, level);
            return VlcPair {
                code: entry.code | sign,
                len: entry.len,
            };
        }

        let mut pair = if level < map.lev_size {
            let entry = map.get(0, level);
            VlcPair {
                code: entry.code | sign,
                len: entry.len,
            }
        } else {
            VlcPair {
                code: 0xfe00 | ((level as u32) << 1) | sign,
                len: 16,
            }
        };
        if run != 0 {
            let prefix = if run < 16 {
                map.get(run - 1, 0)
            } else {
                VlcPair {
                    code: 0x1f80 | (run as u32 - 1),
                    len: 13,
                }
            };
            pair.code |= prefix.code << pair.len;
            pair.len += prefix.len;
        }
        pair
    }

    /// Length in bits of `encode(run, level, _)`
    pub fn size(&self, run: u32, level: u32) -> u32 {
        let map = self.map;
        let (run, level) = (run as usize, level as usize);
        if run < map.run_size && level < map.lev_size {
            return map.get(run, level).len;
        }

        let mut size = if level < map.lev_size {
            map.get(0, level).len
        } else {
            16
        };
        if run != 0 {
            size += if run < 16 { map.get(run - 1, 0).len } else { 13 };
        }
        size
    }
}

impl Default for RunLevelCoder {
    fn default() -> Self {
        Self::new(VlcMode::default())
    }
}

/// One decoded run-level code word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLevelSymbol {
    /// `run` zero coefficients followed by a nonzero one
    Coefficient { run: u8, level: u8, negative: bool },
    /// A run of zero coefficients with no coefficient after it
    Zeros(u8),
    EndOfBlock,
}

/// Read one code word from the base table, plus its sign bit
pub fn decode_run_level(reader: &mut BitReader<'_>) -> BitstreamResult<RunLevelSymbol> {
    let start = reader.position();
    let mut code = 0u32;
    for len in 1..=MAX_VLC_LEN {
        code = (code << 1) | reader.get_bits(1)?;
        if let Some(&i) = DECODE_TABLE.get(&(len, code)) {
            let run = DV_VLC_RUN[i];
            let level = DV_VLC_LEVEL[i];
            if run == EOB_RUN {
                return Ok(RunLevelSymbol::EndOfBlock);
            }
            if level == 0 {
                return Ok(RunLevelSymbol::Zeros(run + 1));
            }
            let negative = reader.get_bits(1)? != 0;
            return Ok(RunLevelSymbol::Coefficient {
                run,
                level: level as u8,
                negative,
            });
        }
    }
    Err(BitstreamError::InvalidCode { position: start })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitstream::BitWriter;
    use proptest::prelude::*;

    #[test]
    fn test_known_codes() {
        for mode in [VlcMode::Compact, VlcMode::Full] {
            let coder = RunLevelCoder::new(mode);
            assert_eq!(coder.encode(0, 1, 0), VlcPair { code: 0, len: 3 });
            assert_eq!(coder.encode(1, 1, 0), VlcPair { code: 14, len: 5 });
            assert_eq!(coder.encode(0, 22, 0), VlcPair { code: 990, len: 10 });
            assert_eq!(coder.encode(0, 23, 0), VlcPair { code: 65070, len: 16 });
            assert_eq!(coder.encode(15, 1, 0), VlcPair { code: 64624, len: 16 });
            assert_eq!(
                coder.encode(20, 30, 0),
                VlcPair {
                    code: 529792572,
                    len: 29
                }
            );
            assert_eq!(
                coder.encode(62, 255, 0),
                VlcPair {
                    code: 532545534,
                    len: 29
                }
            );
            assert_eq!(coder.encode(5, 0, 0), VlcPair { code: 4015, len: 12 });
            assert_eq!(coder.encode(6, 0, 0), VlcPair { code: 8070, len: 13 });
        }
    }

    #[test]
    fn test_sign_in_bit_zero() {
        let coder = RunLevelCoder::new(VlcMode::Full);
        let pos = coder.encode(3, 7, 0);
        let neg = coder.encode(3, 7, 1);
        assert_eq!(neg.code, pos.code | 1);
        assert_eq!(neg.len, pos.len);
    }

    #[test]
    fn test_map_dimensions() {
        let compact = RunLevelCoder::new(VlcMode::Compact);
        let full = RunLevelCoder::new(VlcMode::Full);
        assert_eq!((compact.map().run_size(), compact.map().lev_size()), (15, 23));
        assert_eq!((full.map().run_size(), full.map().lev_size()), (64, 256));
    }

    #[test]
    fn test_decode_end_of_block() {
        let buf = [0b0110_0000u8];
        let mut r = BitReader::new(&buf);
        assert_eq!(decode_run_level(&mut r).unwrap(), RunLevelSymbol::EndOfBlock);
        assert_eq!(r.position(), 4);
    }

    proptest! {
        #[test]
        fn test_compact_matches_full(run in 0u32..64, level in 1u32..256, sign in 0u32..2) {
            let compact = RunLevelCoder::new(VlcMode::Compact);
            let full = RunLevelCoder::new(VlcMode::Full);
            prop_assert_eq!(compact.encode(run, level, sign), full.encode(run, level, sign));
            prop_assert_eq!(compact.size(run, level), compact.encode(run, level, sign).len);
            prop_assert_eq!(full.size(run, level), full.encode(run, level, sign).len);
        }

        #[test]
        fn test_encoded_pair_decodes_back(run in 0u32..63, level in 1u32..256, sign in 0u32..2) {
            let coder = RunLevelCoder::new(VlcMode::Full);
            let pair = coder.encode(run, level, sign);
            let mut buf = [0u8; 8];
            {
                let mut w = BitWriter::new(&mut buf);
                w.put_bits(pair.code, pair.len).unwrap();
                w.flush();
            }
            let mut r = BitReader::new(&buf);
            let mut zeros = 0u32;
            loop {
                match decode_run_level(&mut r).unwrap() {
                    RunLevelSymbol::Zeros(n) => zeros += n as u32,
                    RunLevelSymbol::Coefficient { run: r2, level: l2, negative } => {
                        prop_assert_eq!(zeros + r2 as u32, run);
                        prop_assert_eq!(l2 as u32, level);
                        prop_assert_eq!(negative, sign == 1);
                        break;
                    }
                    RunLevelSymbol::EndOfBlock => prop_assert!(false, "unexpected end of block"),
                }
            }
            prop_assert_eq!(r.position(), pair.len as usize);
        }
    }
}
