//! # DV codec core
//!
//! Parameterization and entropy-coding core for the DV family of tape video
//! formats (DV25, DV50 and DV100). This crate knows the nine DV profiles and
//! how to recognise them from a frame header, partitions a frame into
//! independent work chunks, chooses DV100 quantization levels under a bit
//! budget and produces the run-level variable-length codes and DIF block
//! identifiers of the bitstream.
//!
//! Transform kernels are supplied by the caller through
//! [`transform::BlockTransform`].

pub mod audio;
pub mod bitstream;
pub mod config;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod dif;
pub mod error;
pub mod idct_factor;
pub mod profile;
pub mod quantization;
pub mod tables;
pub mod transform;
pub mod types;
pub mod vlc;
pub mod work_chunks;

pub use config::{CodecParameters, QualityMode, QuantConfig};
pub use error::{DvError, Result};
pub use profile::{
    detect_profile, detect_profile_with_fallback, profile_from_codec_parameters, Profile,
    ProfileId, ProfileRegistry, ResolvedProfile,
};
pub use quantization::{EncBlock, QlevelChoice, QlevelSearch};
pub use types::{MbCoord, PixelFormat, Qlevel, Rational, WorkChunk};
pub use vlc::{RunLevelCoder, VlcMode, VlcPair};
pub use work_chunks::{build_work_chunks, map_chunk_macroblock, work_pool_size};
