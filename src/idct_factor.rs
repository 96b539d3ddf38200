//! Dequantization factor tables
//!
//! Each profile gets one table of per-coefficient factors that fold the
//! quantization step and the inverse DCT weight into a single multiplier.
//! DV100 tables are indexed by (luma/chroma, class, QNO); DV25/50 tables by
//! (class 3 or not, DCT mode, QNO + class offset).

use crate::profile::Profile;
use crate::tables::{
    DV100_QSTEP, DV_IWEIGHT_1080_C, DV_IWEIGHT_1080_Y, DV_IWEIGHT_248, DV_IWEIGHT_720_C,
    DV_IWEIGHT_720_Y, DV_IWEIGHT_88, DV_IWEIGHT_BITS, DV_QUANT_AREAS, DV_QUANT_OFFSET,
    DV_QUANT_SHIFTS,
};

const HD_CLASSES: usize = 4;
const HD_QNOS: usize = 16;
const SD_DCT_MODES: usize = 2;
const SD_QUANTS: usize = 22;

/// Layout of a factor table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorLayout {
    /// [luma, chroma][class 0..4][qno 0..16][64]
    Hd,
    /// [class < 3, class == 3][dct mode 0..2][quant 0..22][64]
    Sd,
}

/// Dequantization factors of one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdctFactors {
    layout: FactorLayout,
    factors: Vec<u32>,
}

impl IdctFactors {
    pub fn build(profile: &Profile) -> Self {
        if profile.is_hd() {
            Self::build_hd(profile)
        } else {
            Self::build_sd()
        }
    }

    fn build_hd(profile: &Profile) -> Self {
        let (iweight_y, iweight_c) = if profile.height == 720 {
            (&DV_IWEIGHT_720_Y, &DV_IWEIGHT_720_C)
        } else {
            (&DV_IWEIGHT_1080_Y, &DV_IWEIGHT_1080_C)
        };

        let half = HD_CLASSES * HD_QNOS * 64;
        let mut factors = vec![0u32; 2 * half];
        let (luma, chroma) = factors.split_at_mut(half);

        let mut n = 0;
        for c in 0..HD_CLASSES {
            for s in 0..HD_QNOS {
                let step = (DV100_QSTEP[s] as u32) << (c + 9);
                for i in 0..64 {
                    luma[n] = step * iweight_y[i] as u32;
                    chroma[n] = step * iweight_c[i] as u32;
                    n += 1;
                }
            }
        }

        Self {
            layout: FactorLayout::Hd,
            factors,
        }
    }

    fn build_sd() -> Self {
        let half = SD_DCT_MODES * SD_QUANTS * 64;
        let mut factors = vec![0u32; 2 * half];
        let (plain, class3) = factors.split_at_mut(half);

        let mut n = 0;
        for iweight in [&DV_IWEIGHT_88, &DV_IWEIGHT_248] {
            for shifts in DV_QUANT_SHIFTS.iter() {
                let mut i = 0;
                for (area, &end) in DV_QUANT_AREAS.iter().enumerate() {
                    while i < end as usize {
                        plain[n] = (iweight[i] as u32) << (shifts[area] + 1);
                        class3[n] = plain[n] << 1;
                        i += 1;
                        n += 1;
                    }
                }
            }
        }

        Self {
            layout: FactorLayout::Sd,
            factors,
        }
    }

    pub fn layout(&self) -> FactorLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.factors
    }

    /// DV100 factors for a block; `None` on an SD table or out-of-range input
    pub fn hd(&self, chroma: bool, class: usize, qno: usize) -> Option<&[u32]> {
        if self.layout != FactorLayout::Hd || class >= HD_CLASSES || qno >= HD_QNOS {
            return None;
        }
        let base = ((chroma as usize) * HD_CLASSES * HD_QNOS + class * HD_QNOS + qno) * 64;
        Some(&self.factors[base..base + 64])
    }

    /// DV25/50 factors for a block; `None` on an HD table or out-of-range input
    pub fn sd(&self, class: usize, dct_mode: usize, qno: usize) -> Option<&[u32]> {
        if self.layout != FactorLayout::Sd || class >= 4 || dct_mode >= SD_DCT_MODES {
            return None;
        }
        let quant = qno + DV_QUANT_OFFSET[class] as usize;
        if quant >= SD_QUANTS {
            return None;
        }
        let base = (((class == 3) as usize * SD_DCT_MODES + dct_mode) * SD_QUANTS + quant) * 64;
        Some(&self.factors[base..base + 64])
    }
}

/// Scale quantized AC levels back up, in scan order. The DC term passes
/// through unchanged.
pub fn dequantize(levels: &[i32; 64], factors: &[u32]) -> [i32; 64] {
    let mut out = [0i32; 64];
    out[0] = levels[0];
    let round = 1i64 << (DV_IWEIGHT_BITS - 1);
    for pos in 1..64 {
        let level = levels[pos] as i64;
        if level != 0 {
            out[pos] = ((level * factors[pos] as i64 + round) >> DV_IWEIGHT_BITS) as i32;
        }
    }
    out
}
