//! Transform kernel boundary
//!
//! The DCT itself is supplied by the caller through `BlockTransform`; this
//! crate only chooses the scan order and coefficient weights that go with
//! each transform shape and profile.

use crate::profile::Profile;
use crate::tables::{
    DV100_WEIGHT_SHIFT, DV_WEIGHT_1080, DV_WEIGHT_248, DV_WEIGHT_720, DV_WEIGHT_88,
    DV_WEIGHT_BITS, DV_ZIGZAG_248, DV_ZIGZAG_88,
};

/// Shape of the 8x8 block transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformShape {
    /// Plain 8x8 DCT
    Full8x8,
    /// Two 4x8 DCTs over the field-separated rows (DV25/50 only)
    Split2x4x8,
}

impl TransformShape {
    /// DCT mode bit written in the block header
    pub fn dct_mode(self) -> u32 {
        match self {
            TransformShape::Full8x8 => 0,
            TransformShape::Split2x4x8 => 1,
        }
    }

    pub fn zigzag(self) -> &'static [u8; 64] {
        match self {
            TransformShape::Full8x8 => &DV_ZIGZAG_88,
            TransformShape::Split2x4x8 => &DV_ZIGZAG_248,
        }
    }
}

/// A forward/inverse block transform in natural (row-major) order
pub trait BlockTransform: Send + Sync {
    fn forward(&self, block: &mut [i32; 64], shape: TransformShape);
    fn inverse(&self, block: &mut [i32; 64], shape: TransformShape);
}

/// Scan order and weighting applied to transformed coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWeights {
    /// Weight per scan position
    pub table: &'static [i32; 64],
    /// Fixed-point shift of `table`
    pub shift: u32,
    /// Natural-order index of each scan position
    pub scan: &'static [u8; 64],
    pub shape: TransformShape,
}

impl BlockWeights {
    /// Weight a natural-order coefficient found at scan position `i`
    pub fn weigh(&self, coeffs: &[i32; 64], i: usize) -> i32 {
        let value = coeffs[self.scan[i] as usize] as i64;
        let round = 1i64 << (self.shift - 1);
        let weighted = value.abs() * self.table[i] as i64 + round;
        let magnitude = (weighted >> self.shift).min(i32::MAX as i64) as i32;
        if value < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Weights for a block of `profile`. DV100 only codes full 8x8 blocks and
/// ignores `shape`.
pub fn weights_for(profile: &Profile, shape: TransformShape, chroma: bool) -> BlockWeights {
    if profile.is_hd() {
        let tables = if profile.height == 720 {
            &DV_WEIGHT_720
        } else {
            &DV_WEIGHT_1080
        };
        return BlockWeights {
            table: &tables[chroma as usize],
            shift: DV100_WEIGHT_SHIFT,
            scan: &DV_ZIGZAG_88,
            shape: TransformShape::Full8x8,
        };
    }

    let table = match shape {
        TransformShape::Full8x8 => &DV_WEIGHT_88,
        TransformShape::Split2x4x8 => &DV_WEIGHT_248,
    };
    BlockWeights {
        table,
        shift: DV_WEIGHT_BITS,
        scan: shape.zigzag(),
        shape,
    }
}
