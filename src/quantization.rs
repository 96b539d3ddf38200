//! Quantization and qlevel search
//!
//! DV100 blocks are quantized with a QNO step and a CNO power-of-two
//! multiplier picked from an ordered table of qlevels. The search walks
//! that table to find the finest level whose coded size fits the block's
//! bit budget. DV25/50 blocks use per-area shifts instead.
//!
//! Block emission writes the block header, run-level codes and the
//! end-of-block marker through a `BitWriter`; `read_block` parses it back.

use log::trace;

use crate::bitstream::{BitReader, BitWriter};
use crate::config::{QualityMode, QuantConfig};
use crate::error::{BitstreamError, BitstreamResult};
use crate::tables::{
    DV100_NUM_QLEVELS, DV100_QSTEP_BITS, DV100_QSTEP_INV, DV_QUANT_AREAS,
    DV_QUANT_OFFSET, DV_QUANT_SHIFTS,
};
use crate::transform::{BlockTransform, BlockWeights};
use crate::types::Qlevel;
use crate::vlc::{decode_run_level, RunLevelCoder, RunLevelSymbol, EOB_BITS, EOB_CODE};

/// Largest AC magnitude a code word can carry
pub const MAX_AC_LEVEL: i32 = 255;

const DC_BITS: u32 = 9;
const DC_MIN: i32 = -256;
const DC_MAX: i32 = 255;

/// A weighted block ready for quantization, in scan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncBlock {
    /// Weighted DC term
    pub dc: i32,
    /// Weighted AC magnitudes; index 0 is unused
    pub save: [i32; 64],
    /// 1 where the AC coefficient is negative
    pub sign: [u8; 64],
    pub chroma: bool,
    /// Smallest qlevel table index at which no AC level exceeds 255
    pub min_qlevel: usize,
    /// DCT mode bit of the block header
    pub dct_mode: u32,
}

impl EncBlock {
    /// Build a block from already weighted, scan-ordered values
    pub fn from_weighted(dc: i32, weighted: &[i32; 64], chroma: bool) -> Self {
        let mut save = [0i32; 64];
        let mut sign = [0u8; 64];
        for i in 1..64 {
            save[i] = weighted[i].saturating_abs();
            sign[i] = (weighted[i] < 0) as u8;
        }
        let mut block = Self {
            dc: dc.clamp(DC_MIN, DC_MAX),
            save,
            sign,
            chroma,
            min_qlevel: 0,
            dct_mode: 0,
        };
        block.min_qlevel = block.find_min_qlevel();
        block
    }

    /// Weight natural-order transform coefficients
    pub fn from_coefficients(coeffs: &[i32; 64], weights: &BlockWeights, chroma: bool) -> Self {
        let mut weighted = [0i32; 64];
        for (i, w) in weighted.iter_mut().enumerate() {
            *w = weights.weigh(coeffs, i);
        }
        let mut block = Self::from_weighted(weighted[0], &weighted, chroma);
        block.dct_mode = weights.shape.dct_mode();
        block
    }

    /// Transform pixels through the caller's kernel, then weight them
    pub fn from_pixels(
        transform: &dyn BlockTransform,
        pixels: &[i32; 64],
        weights: &BlockWeights,
        chroma: bool,
    ) -> Self {
        let mut coeffs = *pixels;
        transform.forward(&mut coeffs, weights.shape);
        Self::from_coefficients(&coeffs, weights, chroma)
    }

    fn find_min_qlevel(&self) -> usize {
        let max = self.save[1..].iter().copied().max().unwrap_or(0);
        (0..DV100_NUM_QLEVELS)
            .find(|&index| quantize_level(max, Qlevel::from_index(index)) <= MAX_AC_LEVEL)
            .unwrap_or(DV100_NUM_QLEVELS - 1)
    }
}

/// A quantized block in scan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedBlock {
    pub dc: i32,
    /// Signed AC levels; index 0 is unused
    pub levels: [i32; 64],
    pub class: u32,
    pub dct_mode: u32,
}

/// DV100 quantization of a single magnitude, unclamped
#[inline]
fn quantize_level(save: i32, qlevel: Qlevel) -> i32 {
    let scaled = save as i64 * DV100_QSTEP_INV[qlevel.qno()] as i64 + 1024 + (1 << 15);
    ((scaled >> DV100_QSTEP_BITS) >> qlevel.cno()).min(i32::MAX as i64) as i32
}

/// Quantize a block at qlevel table `index`
pub fn quantize_hd(block: &EncBlock, index: usize) -> QuantizedBlock {
    let qlevel = Qlevel::from_index(index);
    let mut levels = [0i32; 64];
    for i in 1..64 {
        let ac = quantize_level(block.save[i], qlevel).min(MAX_AC_LEVEL);
        levels[i] = if block.sign[i] != 0 { -ac } else { ac };
    }
    QuantizedBlock {
        dc: block.dc,
        levels,
        class: qlevel.cno(),
        dct_mode: block.dct_mode,
    }
}

/// Coded AC size of the block at qlevel table `index`, including end-of-block
pub fn hd_block_bits(block: &EncBlock, index: usize, coder: &RunLevelCoder) -> u32 {
    let qlevel = Qlevel::from_index(index);
    let mut bits = EOB_BITS;
    let mut prev = 0;
    for k in 1..64 {
        let ac = quantize_level(block.save[k], qlevel).min(MAX_AC_LEVEL);
        if ac != 0 {
            bits += coder.size((k - prev - 1) as u32, ac as u32);
            prev = k;
        }
    }
    bits
}

/// Outcome of a qlevel search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QlevelChoice {
    /// Index into the qlevel table
    pub index: usize,
    pub qlevel: Qlevel,
    /// Coded AC size at that level; above the budget when nothing fits
    pub bits: u32,
}

/// Rate control over the DV100 qlevel table
#[derive(Debug, Clone)]
pub struct QlevelSearch {
    config: QuantConfig,
    coder: RunLevelCoder,
}

impl QlevelSearch {
    /// The run-level map is the one named by `config.vlc_mode`
    pub fn new(config: QuantConfig) -> Self {
        let coder = RunLevelCoder::new(config.vlc_mode);
        Self { config, coder }
    }

    pub fn config(&self) -> &QuantConfig {
        &self.config
    }

    pub fn coder(&self) -> &RunLevelCoder {
        &self.coder
    }

    /// Finest qlevel at which `block` fits `budget_bits`
    pub fn search(&self, block: &EncBlock, budget_bits: u32) -> QlevelChoice {
        self.search_from(block, budget_bits, self.config.starting_qlevel)
    }

    /// As `search`, starting from qlevel table index `starting_index`
    pub fn search_from(&self, block: &EncBlock, budget_bits: u32, starting_index: usize) -> QlevelChoice {
        let mut start = starting_index + self.config.min_bias;
        if block.chroma {
            start += self.config.chroma_bias;
        }
        let start = start.max(self.config.min_qlevel).max(block.min_qlevel);

        self.walk(start, budget_bits, |index| hd_block_bits(block, index, &self.coder))
    }

    /// One shared qlevel for all blocks of a macroblock, sized against the
    /// macroblock's total budget. The chroma bias applies when any block is
    /// chroma.
    pub fn search_macroblock(&self, blocks: &[EncBlock], budget_bits: u32) -> QlevelChoice {
        let block_floor = blocks.iter().map(|b| b.min_qlevel).max().unwrap_or(0);
        let mut start = self.config.starting_qlevel + self.config.min_bias;
        if blocks.iter().any(|b| b.chroma) {
            start += self.config.chroma_bias;
        }
        let start = start.max(self.config.min_qlevel).max(block_floor);

        self.walk(start, budget_bits, |index| {
            blocks
                .iter()
                .map(|b| hd_block_bits(b, index, &self.coder))
                .sum()
        })
    }

    /// Step through the table from `start`: coarser until the cost fits,
    /// then finer while it still fits, never revisiting an index already
    /// known to overshoot.
    fn walk(&self, start: usize, budget: u32, cost: impl Fn(usize) -> u32) -> QlevelChoice {
        let last = DV100_NUM_QLEVELS - 1;
        let mode: QualityMode = self.config.mode;
        let (step_up, step_back, increment) = (mode.step_up(), mode.step_back(), mode.base_increment());

        let start = start.min(last);
        let mut index = start;
        let mut bits = cost(index);
        let mut last_over: Option<usize> = None;

        while bits > budget && index < last {
            let qno = Qlevel::from_index(index).qno();
            let delta = match step_up[qno] {
                0 => increment,
                d => d as usize,
            };
            last_over = Some(index);
            index = (index + delta).min(last);
            bits = cost(index);
            trace!("qlevel up: index {} costs {} of {} bits", index, bits, budget);
        }

        if bits < budget {
            let floor = last_over.map_or(start, |i| i + 1);
            loop {
                let qno = Qlevel::from_index(index).qno();
                let delta = match step_back[qno] {
                    0 => increment,
                    d => d as usize,
                };
                let candidate = index.saturating_sub(delta).max(floor);
                if candidate >= index {
                    break;
                }
                let candidate_bits = cost(candidate);
                trace!(
                    "qlevel back: index {} costs {} of {} bits",
                    candidate,
                    candidate_bits,
                    budget
                );
                if candidate_bits > budget {
                    break;
                }
                index = candidate;
                bits = candidate_bits;
            }
        }

        QlevelChoice {
            index,
            qlevel: Qlevel::from_index(index),
            bits,
        }
    }
}

/// Quantization area of scan position `i`
fn quant_area(i: usize) -> usize {
    DV_QUANT_AREAS
        .iter()
        .position(|&end| i < end as usize)
        .unwrap_or(DV_QUANT_AREAS.len() - 1)
}

/// DV25/50 quantization: per-area right shifts selected by QNO and class,
/// with class 3 halving once more
pub fn quantize_sd(block: &EncBlock, qno: usize, class: usize) -> QuantizedBlock {
    let class = class.min(3);
    let row = (qno + DV_QUANT_OFFSET[class] as usize).min(DV_QUANT_SHIFTS.len() - 1);
    let extra = (class == 3) as u32;
    let mut levels = [0i32; 64];
    for i in 1..64 {
        let shift = DV_QUANT_SHIFTS[row][quant_area(i)] as u32 + extra;
        let ac = (block.save[i] >> shift).min(MAX_AC_LEVEL);
        levels[i] = if block.sign[i] != 0 { -ac } else { ac };
    }
    QuantizedBlock {
        dc: block.dc,
        levels,
        class: class as u32,
        dct_mode: block.dct_mode,
    }
}

/// Coded AC size of a DV25/50 block, including end-of-block
pub fn sd_block_bits(block: &EncBlock, qno: usize, class: usize, coder: &RunLevelCoder) -> u32 {
    ac_bits(&quantize_sd(block, qno, class).levels, coder)
}

/// Coded size of scan-ordered AC levels, including end-of-block
pub fn ac_bits(levels: &[i32; 64], coder: &RunLevelCoder) -> u32 {
    let mut bits = EOB_BITS;
    let mut prev = 0;
    for (k, &level) in levels.iter().enumerate().skip(1) {
        if level != 0 {
            bits += coder.size((k - prev - 1) as u32, level.unsigned_abs());
            prev = k;
        }
    }
    bits
}

/// Write a quantized block: DC, DCT mode, class, AC codes, end-of-block.
/// Returns the number of bits written.
pub fn write_block(
    block: &QuantizedBlock,
    coder: &RunLevelCoder,
    writer: &mut BitWriter<'_>,
) -> BitstreamResult<u32> {
    let start = writer.bits_written();
    writer.put_sbits(block.dc, DC_BITS)?;
    writer.put_bits(block.dct_mode, 1)?;
    writer.put_bits(block.class, 2)?;

    let mut prev = 0;
    for k in 1..64 {
        let level = block.levels[k];
        if level != 0 {
            let pair = coder.encode((k - prev - 1) as u32, level.unsigned_abs(), (level < 0) as u32);
            writer.put_bits(pair.code, pair.len)?;
            prev = k;
        }
    }
    writer.put_bits(EOB_CODE, EOB_BITS)?;

    Ok((writer.bits_written() - start) as u32)
}

/// Quantize a DV100 block at qlevel table `index` and write it
pub fn write_hd_block(
    block: &EncBlock,
    index: usize,
    coder: &RunLevelCoder,
    writer: &mut BitWriter<'_>,
) -> BitstreamResult<u32> {
    write_block(&quantize_hd(block, index), coder, writer)
}

/// A block parsed back from the bitstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    pub dc: i32,
    pub dct_mode: u32,
    pub class: u32,
    /// Signed AC levels in scan order; index 0 is unused
    pub levels: [i32; 64],
}

/// Parse one block written by `write_block`
pub fn read_block(reader: &mut BitReader<'_>) -> BitstreamResult<ParsedBlock> {
    let dc = reader.get_sbits(DC_BITS)?;
    let dct_mode = reader.get_bits(1)?;
    let class = reader.get_bits(2)?;

    let mut levels = [0i32; 64];
    let mut pos = 0usize;
    loop {
        match decode_run_level(reader)? {
            RunLevelSymbol::EndOfBlock => break,
            RunLevelSymbol::Zeros(n) => {
                pos += n as usize;
                if pos > 63 {
                    return Err(BitstreamError::TooManyCoefficients);
                }
            }
            RunLevelSymbol::Coefficient {
                run,
                level,
                negative,
            } => {
                pos += run as usize + 1;
                if pos > 63 {
                    return Err(BitstreamError::TooManyCoefficients);
                }
                levels[pos] = if negative { -(level as i32) } else { level as i32 };
            }
        }
    }

    Ok(ParsedBlock {
        dc,
        dct_mode,
        class,
        levels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vlc::VlcMode;

    fn sample_block() -> EncBlock {
        let mut weighted = [0i32; 64];
        let values = [200, 150, 120, 90, 60, 40, 30, 20, 10, 5];
        for (i, &v) in values.iter().enumerate() {
            weighted[i + 1] = if i % 2 == 0 { v } else { -v };
        }
        EncBlock::from_weighted(12, &weighted, false)
    }

    fn search(mode: QualityMode) -> QlevelSearch {
        QlevelSearch::new(QuantConfig::new().mode(mode).vlc_mode(VlcMode::Full))
    }

    #[test]
    fn test_bits_per_qlevel() {
        let block = sample_block();
        let coder = RunLevelCoder::new(VlcMode::Full);
        let bits: Vec<u32> = (0..12).map(|i| hd_block_bits(&block, i, &coder)).collect();
        assert_eq!(bits, vec![140, 140, 122, 111, 106, 96, 88, 78, 76, 63, 58, 51]);
        assert_eq!(hd_block_bits(&block, DV100_NUM_QLEVELS - 1, &coder), 4);
    }

    #[test]
    fn test_speed_search() {
        let block = sample_block();
        let s = search(QualityMode::Speed);
        let choice = s.search(&block, 100);
        assert_eq!((choice.index, choice.bits), (8, 76));
        assert_eq!(choice.qlevel, Qlevel::new(8, 0));
        let choice = s.search(&block, 20);
        assert_eq!((choice.index, choice.bits), (26, 18));
    }

    #[test]
    fn test_quality_search() {
        let block = sample_block();
        let choice = search(QualityMode::Quality).search(&block, 100);
        assert_eq!((choice.index, choice.bits), (5, 96));
    }

    #[test]
    fn test_generous_budget_keeps_start() {
        let block = sample_block();
        let choice = search(QualityMode::Quality).search(&block, 10_000);
        assert_eq!(choice.index, 1);
        assert_eq!(choice.bits, 140);
    }

    #[test]
    fn test_zero_budget_ends_at_last_level() {
        let block = sample_block();
        let choice = search(QualityMode::Speed).search(&block, 0);
        assert_eq!(choice.index, DV100_NUM_QLEVELS - 1);
        assert_eq!(choice.bits, 4);
    }

    #[test]
    fn test_min_qlevel_of_large_coefficients() {
        let mut weighted = [0i32; 64];
        weighted[1] = 1000;
        let block = EncBlock::from_weighted(0, &weighted, false);
        // 1000 needs at least a step of 4 to fit in 255
        assert_eq!(block.min_qlevel, 4);
        let q = quantize_hd(&block, block.min_qlevel);
        assert!(q.levels[1] <= MAX_AC_LEVEL);
    }

    #[test]
    fn test_chroma_bias_raises_start() {
        let mut weighted = [0i32; 64];
        weighted[1] = 3;
        let block = EncBlock::from_weighted(0, &weighted, true);
        let s = QlevelSearch::new(QuantConfig::new().mode(QualityMode::Quality).chroma_bias(5));
        assert_eq!(s.search(&block, 10_000).index, 6);
    }

    #[test]
    fn test_macroblock_chroma_bias() {
        let mut weighted = [0i32; 64];
        weighted[1] = 3;
        let luma = EncBlock::from_weighted(0, &weighted, false);
        let chroma = EncBlock::from_weighted(0, &weighted, true);
        let s = QlevelSearch::new(QuantConfig::new().mode(QualityMode::Quality).chroma_bias(5));

        let all_luma = vec![luma.clone(); 4];
        assert_eq!(s.search_macroblock(&all_luma, 10_000).index, 1);

        let mixed = vec![luma.clone(), luma, chroma.clone(), chroma];
        assert_eq!(s.search_macroblock(&mixed, 10_000).index, 6);
    }

    #[test]
    fn test_extreme_coefficients_saturate() {
        let mut weighted = [0i32; 64];
        weighted[1] = i32::MIN;
        weighted[2] = i32::MAX;
        let block = EncBlock::from_weighted(i32::MIN, &weighted, false);
        assert_eq!(block.save[1], i32::MAX);
        assert_eq!(block.sign[1], 1);
        assert_eq!(block.dc, DC_MIN);
        assert_eq!(block.min_qlevel, DV100_NUM_QLEVELS - 1);
        let q = quantize_hd(&block, block.min_qlevel);
        assert_eq!(q.levels[1], -MAX_AC_LEVEL);
        assert_eq!(q.levels[2], MAX_AC_LEVEL);
    }

    #[test]
    fn test_coder_follows_config_vlc_mode() {
        for mode in [VlcMode::Compact, VlcMode::Full] {
            let s = QlevelSearch::new(QuantConfig::new().vlc_mode(mode));
            assert_eq!(s.coder().mode(), mode);
            assert_eq!(s.coder().mode(), s.config().vlc_mode);
        }
    }

    #[test]
    fn test_write_read_round_trip() {
        let block = sample_block();
        let coder = RunLevelCoder::new(VlcMode::Compact);
        let mut buf = [0u8; 64];
        let written;
        {
            let mut w = BitWriter::new(&mut buf);
            written = write_hd_block(&block, 9, &coder, &mut w).unwrap();
            w.flush();
        }
        assert_eq!(written, 12 + hd_block_bits(&block, 9, &coder));

        let mut r = BitReader::new(&buf);
        let parsed = read_block(&mut r).unwrap();
        let quantized = quantize_hd(&block, 9);
        assert_eq!(parsed.dc, 12);
        assert_eq!(parsed.class, quantized.class);
        assert_eq!(parsed.levels, quantized.levels);
        assert_eq!(r.position(), written as usize);
    }

    #[test]
    fn test_sd_quantization_by_area() {
        let mut weighted = [0i32; 64];
        weighted[1] = 64;
        weighted[10] = -64;
        weighted[63] = 64;
        let block = EncBlock::from_weighted(0, &weighted, false);
        // class 0 offset 6: shifts [1, 2, 2, 3]
        let q = quantize_sd(&block, 0, 0);
        assert_eq!(q.levels[1], 32);
        assert_eq!(q.levels[10], -16);
        assert_eq!(q.levels[63], 8);
        // class 3 halves once more
        let q3 = quantize_sd(&block, 0, 3);
        assert_eq!(q3.levels[1], 4);
        let coder = RunLevelCoder::new(VlcMode::Full);
        assert_eq!(sd_block_bits(&block, 0, 0, &coder), ac_bits(&q.levels, &coder));
    }
}
