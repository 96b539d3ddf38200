//! Configuration for the DV encoder core
//!
//! `QuantConfig` carries the construction-time knobs of the qlevel search
//! and the entropy coder; `CodecParameters` describes a stream whose profile
//! has to be resolved from its declared geometry.

use crate::error::{ConfigError, ConfigResult};
use crate::tables::{
    DV100_CHROMA_BIAS, DV100_MIN_BIAS, DV100_MIN_QNO, DV100_NUM_QLEVELS,
    DV100_QBACKSTEP_DELTA_QUALITY, DV100_QBACKSTEP_DELTA_SPEED, DV100_QLEVEL_INC_QUALITY,
    DV100_QLEVEL_INC_SPEED, DV100_QSTEP_DELTA_QUALITY, DV100_QSTEP_DELTA_SPEED,
    DV100_STARTING_QNO,
};
use crate::types::{PixelFormat, Rational};
use crate::vlc::VlcMode;

/// Trade-off between search speed and picture quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityMode {
    /// Coarse steps through the qlevel table
    #[default]
    Speed,
    /// Visit every qlevel
    Quality,
}

impl QualityMode {
    /// Per-QNO step deltas used when moving to coarser qlevels
    pub fn step_up(self) -> &'static [u8; 16] {
        match self {
            QualityMode::Speed => &DV100_QSTEP_DELTA_SPEED,
            QualityMode::Quality => &DV100_QSTEP_DELTA_QUALITY,
        }
    }

    /// Per-QNO step deltas used when backing off to finer qlevels
    pub fn step_back(self) -> &'static [u8; 16] {
        match self {
            QualityMode::Speed => &DV100_QBACKSTEP_DELTA_SPEED,
            QualityMode::Quality => &DV100_QBACKSTEP_DELTA_QUALITY,
        }
    }

    /// Increment applied where the delta tables hold zero
    pub fn base_increment(self) -> usize {
        match self {
            QualityMode::Speed => DV100_QLEVEL_INC_SPEED,
            QualityMode::Quality => DV100_QLEVEL_INC_QUALITY,
        }
    }
}

/// Qlevel search and entropy coder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantConfig {
    /// Speed/quality trade-off of the search
    pub mode: QualityMode,
    /// Qlevel table index the search starts from
    pub starting_qlevel: usize,
    /// Lowest qlevel table index the search may choose
    pub min_qlevel: usize,
    /// Added to the starting index for every block
    pub min_bias: usize,
    /// Added to the starting index for chroma blocks
    pub chroma_bias: usize,
    /// Run-level map variant
    pub vlc_mode: VlcMode,
}

impl Default for QuantConfig {
    fn default() -> Self {
        Self {
            mode: QualityMode::default(),
            starting_qlevel: DV100_STARTING_QNO,
            min_qlevel: DV100_MIN_QNO,
            min_bias: DV100_MIN_BIAS,
            chroma_bias: DV100_CHROMA_BIAS,
            vlc_mode: VlcMode::default(),
        }
    }
}

impl QuantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: QualityMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn starting_qlevel(mut self, index: usize) -> Self {
        self.starting_qlevel = index;
        self
    }

    pub fn min_qlevel(mut self, index: usize) -> Self {
        self.min_qlevel = index;
        self
    }

    pub fn min_bias(mut self, bias: usize) -> Self {
        self.min_bias = bias;
        self
    }

    pub fn chroma_bias(mut self, bias: usize) -> Self {
        self.chroma_bias = bias;
        self
    }

    pub fn vlc_mode(mut self, mode: VlcMode) -> Self {
        self.vlc_mode = mode;
        self
    }

    /// Check that every start the search can compute lies in the qlevel table
    pub fn validate(&self) -> ConfigResult<()> {
        if self.starting_qlevel >= DV100_NUM_QLEVELS {
            return Err(ConfigError::StartingQlevelOutOfRange(self.starting_qlevel));
        }
        if self.min_qlevel >= DV100_NUM_QLEVELS {
            return Err(ConfigError::MinQlevelOutOfRange(self.min_qlevel));
        }
        if self.starting_qlevel + self.min_bias >= DV100_NUM_QLEVELS {
            return Err(ConfigError::BiasOutOfRange {
                name: "min_bias",
                value: self.min_bias,
            });
        }
        if self.starting_qlevel + self.min_bias + self.chroma_bias >= DV100_NUM_QLEVELS {
            return Err(ConfigError::BiasOutOfRange {
                name: "chroma_bias",
                value: self.chroma_bias,
            });
        }
        Ok(())
    }
}

/// Declared stream parameters used to pick an encoding profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecParameters {
    pub width: u32,
    pub height: u32,
    pub pix_fmt: PixelFormat,
    /// Frame duration; disambiguates profiles sharing a geometry
    pub time_base: Option<Rational>,
}

impl CodecParameters {
    pub fn new(width: u32, height: u32, pix_fmt: PixelFormat) -> Self {
        Self {
            width,
            height,
            pix_fmt,
            time_base: None,
        }
    }

    pub fn time_base(mut self, time_base: Rational) -> Self {
        self.time_base = Some(time_base);
        self
    }
}
