//! DV profiles, profile detection and the per-profile table registry
//!
//! A profile captures everything that differs between the DV flavours:
//! line standard, frame geometry, DIF layout, macroblock composition and
//! audio sample distribution. Profiles are static; the work-chunk and IDCT
//! factor tables derived from them are built lazily by a `ProfileRegistry`.

use std::sync::OnceLock;

use log::{debug, warn};

use crate::config::CodecParameters;
use crate::error::{ProfileError, ProfileResult};
use crate::idct_factor::IdctFactors;
use crate::tables::{
    BLOCK_SIZES_DV100, BLOCK_SIZES_DV2550, DV_AUDIO_SHUFFLE_525, DV_AUDIO_SHUFFLE_625,
    DV_PROFILE_BYTES, DIF_BLOCK_SIZE,
};
use crate::types::{PixelFormat, Rational, WorkChunk};
use crate::work_chunks::build_work_chunks;

/// Number of known profiles
pub const NUM_PROFILES: usize = 9;

/// Identity of each known profile, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileId {
    Iec525Dv25,
    Iec625Dv25,
    Smpte625Dv25,
    Dv50_525,
    Dv50_625,
    Dv100_1080i60,
    Dv100_1080i50,
    Dv100_720p60,
    Dv100_720p50,
}

impl ProfileId {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Audio layout of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioParams {
    /// Number of entries in one shuffle row set, the per-sample stride
    pub stride: u32,
    /// Minimum samples per frame for 48kHz, 44.1kHz and 32kHz
    pub min_samples: [u32; 3],
    /// Samples per frame across a 5-frame window
    pub samples_dist: [u32; 5],
    /// PCM shuffling table, one row per (channel, DIF sequence)
    pub shuffle: &'static [[u8; 9]],
}

/// Static description of one DV flavour
#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: &'static str,
    /// Value of the DSF bit in the DIF header (0 = 525/60, 1 = 625/50)
    pub dsf: u8,
    /// Signal type of the VAUX source pack
    pub video_stype: u8,
    /// Total size of one frame in bytes
    pub frame_size: usize,
    /// DIF sequences per DIF channel
    pub difseg_size: usize,
    /// DIF channels per frame
    pub n_difchan: usize,
    /// Frame duration
    pub time_base: Rational,
    /// Frames per second as counted by the linear timecode
    pub ltc_divisor: u32,
    pub height: u32,
    pub width: u32,
    /// Sample aspect ratios for 4:3 and 16:9
    pub sar: [Rational; 2],
    pub pix_fmt: PixelFormat,
    /// Blocks per macroblock
    pub bpm: usize,
    /// AC bit budget of each block of a macroblock
    pub block_sizes: &'static [u8; 8],
    pub audio: AudioParams,
}

impl Profile {
    pub fn is_hd(&self) -> bool {
        self.video_stype & 0x10 != 0
    }

    pub fn is_1080i50(&self) -> bool {
        self.video_stype == 0x14 && self.dsf == 1
    }

    pub fn is_1080i60(&self) -> bool {
        self.video_stype == 0x14 && self.dsf == 0
    }

    pub fn is_720p50(&self) -> bool {
        self.video_stype == 0x18 && self.dsf == 1
    }

    /// Whether block `j` of a macroblock carries chroma
    pub fn is_chroma_block(&self, j: usize) -> bool {
        match self.bpm {
            4 => j >= 2,
            _ => j >= 4,
        }
    }

    /// Number of DIF blocks in one frame
    pub fn dif_blocks(&self) -> usize {
        self.frame_size / DIF_BLOCK_SIZE
    }
}

const AUDIO_525: AudioParams = AudioParams {
    stride: 90,
    min_samples: [1580, 1452, 1053],
    samples_dist: [1600, 1602, 1602, 1602, 1602],
    shuffle: &DV_AUDIO_SHUFFLE_525,
};

const AUDIO_625: AudioParams = AudioParams {
    stride: 108,
    min_samples: [1896, 1742, 1264],
    samples_dist: [1920, 1920, 1920, 1920, 1920],
    shuffle: &DV_AUDIO_SHUFFLE_625,
};

const SAR_525: [Rational; 2] = [Rational::new(8, 9), Rational::new(32, 27)];
const SAR_625: [Rational; 2] = [Rational::new(16, 15), Rational::new(64, 45)];

/// Known profiles, in detection order
pub static DV_PROFILES: [Profile; NUM_PROFILES] = [
    Profile {
        id: ProfileId::Iec525Dv25,
        name: "IEC 61834, 525/60, DV25 4:1:1",
        dsf: 0,
        video_stype: 0x0,
        frame_size: 120_000,
        difseg_size: 10,
        n_difchan: 1,
        time_base: Rational::new(1001, 30000),
        ltc_divisor: 30,
        height: 480,
        width: 720,
        sar: SAR_525,
        pix_fmt: PixelFormat::Yuv411p,
        bpm: 6,
        block_sizes: &BLOCK_SIZES_DV2550,
        audio: AUDIO_525,
    },
    Profile {
        id: ProfileId::Iec625Dv25,
        name: "IEC 61834, 625/50, DV25 4:2:0",
        dsf: 1,
        video_stype: 0x0,
        frame_size: 144_000,
        difseg_size: 12,
        n_difchan: 1,
        time_base: Rational::new(1, 25),
        ltc_divisor: 25,
        height: 576,
        width: 720,
        sar: SAR_625,
        pix_fmt: PixelFormat::Yuv420p,
        bpm: 6,
        block_sizes: &BLOCK_SIZES_DV2550,
        audio: AUDIO_625,
    },
    Profile {
        id: ProfileId::Smpte625Dv25,
        name: "SMPTE 314M, 625/50, DV25 4:1:1",
        dsf: 1,
        video_stype: 0x0,
        frame_size: 144_000,
        difseg_size: 12,
        n_difchan: 1,
        time_base: Rational::new(1, 25),
        ltc_divisor: 25,
        height: 576,
        width: 720,
        sar: SAR_625,
        pix_fmt: PixelFormat::Yuv411p,
        bpm: 6,
        block_sizes: &BLOCK_SIZES_DV2550,
        audio: AUDIO_625,
    },
    Profile {
        id: ProfileId::Dv50_525,
        name: "SMPTE 314M, 525/60, DV50 4:2:2",
        dsf: 0,
        video_stype: 0x4,
        frame_size: 240_000,
        difseg_size: 10,
        n_difchan: 2,
        time_base: Rational::new(1001, 30000),
        ltc_divisor: 30,
        height: 480,
        width: 720,
        sar: SAR_525,
        pix_fmt: PixelFormat::Yuv422p,
        bpm: 4,
        block_sizes: &BLOCK_SIZES_DV2550,
        audio: AUDIO_525,
    },
    Profile {
        id: ProfileId::Dv50_625,
        name: "SMPTE 314M, 625/50, DV50 4:2:2",
        dsf: 1,
        video_stype: 0x4,
        frame_size: 288_000,
        difseg_size: 12,
        n_difchan: 2,
        time_base: Rational::new(1, 25),
        ltc_divisor: 25,
        height: 576,
        width: 720,
        sar: SAR_625,
        pix_fmt: PixelFormat::Yuv422p,
        bpm: 4,
        block_sizes: &BLOCK_SIZES_DV2550,
        audio: AUDIO_625,
    },
    Profile {
        id: ProfileId::Dv100_1080i60,
        name: "SMPTE 370M, 1080i60, DV100 4:2:2",
        dsf: 0,
        video_stype: 0x14,
        frame_size: 480_000,
        difseg_size: 10,
        n_difchan: 4,
        time_base: Rational::new(1001, 30000),
        ltc_divisor: 30,
        height: 1080,
        width: 1280,
        sar: [Rational::new(1, 1), Rational::new(3, 2)],
        pix_fmt: PixelFormat::Yuv422p,
        bpm: 8,
        block_sizes: &BLOCK_SIZES_DV100,
        audio: AUDIO_525,
    },
    Profile {
        id: ProfileId::Dv100_1080i50,
        name: "SMPTE 370M, 1080i50, DV100 4:2:2",
        dsf: 1,
        video_stype: 0x14,
        frame_size: 576_000,
        difseg_size: 12,
        n_difchan: 4,
        time_base: Rational::new(1, 25),
        ltc_divisor: 25,
        height: 1080,
        width: 1440,
        sar: [Rational::new(1, 1), Rational::new(4, 3)],
        pix_fmt: PixelFormat::Yuv422p,
        bpm: 8,
        block_sizes: &BLOCK_SIZES_DV100,
        audio: AUDIO_625,
    },
    Profile {
        id: ProfileId::Dv100_720p60,
        name: "SMPTE 370M, 720p60, DV100 4:2:2",
        dsf: 0,
        video_stype: 0x18,
        frame_size: 240_000,
        difseg_size: 10,
        n_difchan: 2,
        time_base: Rational::new(1001, 60000),
        ltc_divisor: 60,
        height: 720,
        width: 960,
        sar: [Rational::new(1, 1), Rational::new(4, 3)],
        pix_fmt: PixelFormat::Yuv422p,
        bpm: 8,
        block_sizes: &BLOCK_SIZES_DV100,
        audio: AudioParams {
            stride: 90,
            min_samples: [790, 726, 526],
            samples_dist: [800, 801, 801, 801, 801],
            shuffle: &DV_AUDIO_SHUFFLE_525,
        },
    },
    Profile {
        id: ProfileId::Dv100_720p50,
        name: "SMPTE 370M, 720p50, DV100 4:2:2",
        dsf: 1,
        video_stype: 0x18,
        frame_size: 288_000,
        difseg_size: 12,
        n_difchan: 2,
        time_base: Rational::new(1, 50),
        ltc_divisor: 50,
        height: 720,
        width: 960,
        sar: [Rational::new(1, 1), Rational::new(4, 3)],
        pix_fmt: PixelFormat::Yuv422p,
        bpm: 8,
        block_sizes: &BLOCK_SIZES_DV100,
        audio: AudioParams {
            stride: 90,
            min_samples: [960, 882, 640],
            samples_dist: [960, 960, 960, 960, 960],
            shuffle: &DV_AUDIO_SHUFFLE_525,
        },
    },
];

/// Look up a profile by identity
pub fn profile(id: ProfileId) -> &'static Profile {
    &DV_PROFILES[id.index()]
}

/// Identify the profile of a raw DV frame from its header bytes
pub fn detect_profile(frame: &[u8]) -> ProfileResult<&'static Profile> {
    detect_profile_with_fallback(frame, None)
}

/// Like `detect_profile`, but a frame whose header matches nothing while
/// its length equals `previous.frame_size` is taken to be a corrupted frame
/// of the previous profile.
pub fn detect_profile_with_fallback(
    frame: &[u8],
    previous: Option<&'static Profile>,
) -> ProfileResult<&'static Profile> {
    if frame.len() < DV_PROFILE_BYTES {
        return Err(ProfileError::UnrecognizedFormat {
            reason: format!(
                "need {} bytes to identify a frame, got {}",
                DV_PROFILE_BYTES,
                frame.len()
            ),
        });
    }

    let dsf = frame[3] >> 7;
    // VAUX source pack of the 6th DIF block
    let stype = frame[80 * 5 + 48 + 3] & 0x1f;

    // 576i50 25Mbps 4:1:1 is flagged through the APT field
    if dsf == 1 && stype == 0 && frame[4] & 0x07 != 0 {
        return Ok(profile(ProfileId::Smpte625Dv25));
    }

    if let Some(p) = DV_PROFILES
        .iter()
        .find(|p| p.dsf == dsf && p.video_stype == stype)
    {
        return Ok(p);
    }

    if let Some(prev) = previous {
        if frame.len() == prev.frame_size {
            debug!(
                "No profile for dsf={} stype={:#x}, keeping {}",
                dsf, stype, prev.name
            );
            return Ok(prev);
        }
    }

    if DV_PROFILES.iter().any(|p| p.frame_size == frame.len()) {
        warn!(
            "Frame of {} bytes matches no profile (dsf={}, stype={:#x})",
            frame.len(),
            dsf,
            stype
        );
    }

    Err(ProfileError::UnrecognizedFormat {
        reason: format!("no profile with dsf={} and stype={:#x}", dsf, stype),
    })
}

/// Select the encoding profile for the declared stream parameters
///
/// Width, height and pixel format must match. When several profiles share
/// the geometry, the one whose time base equals the declared one wins,
/// otherwise the first match in profile order.
pub fn profile_from_codec_parameters(params: &CodecParameters) -> ProfileResult<&'static Profile> {
    let mut matches = DV_PROFILES.iter().filter(|p| {
        p.width == params.width && p.height == params.height && p.pix_fmt == params.pix_fmt
    });

    let first = matches.next().ok_or_else(|| ProfileError::UnsupportedParameters {
        width: params.width,
        height: params.height,
        pix_fmt: params.pix_fmt.to_string(),
    })?;

    if let Some(time_base) = params.time_base {
        if first.time_base != time_base {
            if let Some(p) = matches.find(|p| p.time_base == time_base) {
                return Ok(p);
            }
        }
    }
    Ok(first)
}

/// Tables derived from a profile, built once per registry
#[derive(Debug)]
pub struct ProfileTables {
    pub work_chunks: Vec<WorkChunk>,
    pub idct_factors: IdctFactors,
}

impl ProfileTables {
    pub fn build(profile: &Profile) -> Self {
        let work_chunks = build_work_chunks(profile);
        let idct_factors = IdctFactors::build(profile);
        debug!(
            "Built tables for {}: {} work chunks, {} IDCT factors",
            profile.name,
            work_chunks.len(),
            idct_factors.len()
        );
        Self {
            work_chunks,
            idct_factors,
        }
    }
}

/// A profile together with its derived tables
#[derive(Debug, Clone, Copy)]
pub struct ResolvedProfile<'r> {
    pub profile: &'static Profile,
    pub tables: &'r ProfileTables,
}

impl<'r> ResolvedProfile<'r> {
    pub fn work_chunks(&self) -> &'r [WorkChunk] {
        &self.tables.work_chunks
    }

    pub fn idct_factors(&self) -> &'r IdctFactors {
        &self.tables.idct_factors
    }
}

/// Owner of the lazily built per-profile tables
///
/// Shareable across threads; the first resolution of a profile builds its
/// tables and concurrent resolvers wait for that single build.
#[derive(Debug)]
pub struct ProfileRegistry {
    tables: [OnceLock<ProfileTables>; NUM_PROFILES],
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self {
            tables: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// Tables of `profile`, building them on first use
    pub fn tables(&self, profile: &'static Profile) -> ResolvedProfile<'_> {
        let tables = self.tables[profile.id.index()].get_or_init(|| ProfileTables::build(profile));
        ResolvedProfile { profile, tables }
    }

    /// Whether the tables of `profile` have been built
    pub fn is_built(&self, profile: &Profile) -> bool {
        self.tables[profile.id.index()].get().is_some()
    }

    pub fn resolve_frame(&self, frame: &[u8]) -> ProfileResult<ResolvedProfile<'_>> {
        Ok(self.tables(detect_profile(frame)?))
    }

    pub fn resolve_frame_with_fallback(
        &self,
        frame: &[u8],
        previous: Option<&'static Profile>,
    ) -> ProfileResult<ResolvedProfile<'_>> {
        Ok(self.tables(detect_profile_with_fallback(frame, previous)?))
    }

    pub fn resolve_codec(&self, params: &CodecParameters) -> ProfileResult<ResolvedProfile<'_>> {
        Ok(self.tables(profile_from_codec_parameters(params)?))
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(dsf: u8, stype: u8, apt: u8, len: usize) -> Vec<u8> {
        let mut frame = vec![0u8; len];
        frame[3] = dsf << 7;
        frame[4] = apt;
        frame[80 * 5 + 48 + 3] = stype;
        frame
    }

    #[test]
    fn test_profile_order_matches_ids() {
        for (i, p) in DV_PROFILES.iter().enumerate() {
            assert_eq!(p.id.index(), i);
        }
    }

    #[test]
    fn test_predicates() {
        assert!(profile(ProfileId::Dv100_1080i50).is_1080i50());
        assert!(profile(ProfileId::Dv100_1080i60).is_1080i60());
        assert!(profile(ProfileId::Dv100_720p50).is_720p50());
        assert!(profile(ProfileId::Dv100_720p60).is_hd());
        assert!(!profile(ProfileId::Dv50_625).is_hd());
    }

    #[test]
    fn test_detect_dv25_525() {
        let frame = header(0, 0, 0, 120_000);
        assert_eq!(detect_profile(&frame).unwrap().id, ProfileId::Iec525Dv25);
    }

    #[test]
    fn test_detect_apt_special_case() {
        let frame = header(1, 0, 0x01, 144_000);
        assert_eq!(detect_profile(&frame).unwrap().id, ProfileId::Smpte625Dv25);
        let frame = header(1, 0, 0x00, 144_000);
        assert_eq!(detect_profile(&frame).unwrap().id, ProfileId::Iec625Dv25);
    }

    #[test]
    fn test_detect_short_buffer() {
        let frame = vec![0u8; DV_PROFILE_BYTES - 1];
        assert!(matches!(
            detect_profile(&frame),
            Err(ProfileError::UnrecognizedFormat { .. })
        ));
    }

    #[test]
    fn test_detect_fallback_needs_matching_length() {
        let prev = profile(ProfileId::Dv50_525);
        let frame = header(0, 0x1f, 0, prev.frame_size);
        assert_eq!(
            detect_profile_with_fallback(&frame, Some(prev)).unwrap().id,
            ProfileId::Dv50_525
        );
        let frame = header(0, 0x1f, 0, prev.frame_size + 80);
        assert!(detect_profile_with_fallback(&frame, Some(prev)).is_err());
    }

    #[test]
    fn test_codec_parameters_time_base_preference() {
        let params = CodecParameters::new(960, 720, PixelFormat::Yuv422p);
        assert_eq!(
            profile_from_codec_parameters(&params).unwrap().id,
            ProfileId::Dv100_720p60
        );
        let params = params.time_base(Rational::new(1, 50));
        assert_eq!(
            profile_from_codec_parameters(&params).unwrap().id,
            ProfileId::Dv100_720p50
        );
    }

    #[test]
    fn test_codec_parameters_unsupported() {
        let params = CodecParameters::new(640, 480, PixelFormat::Yuv420p);
        assert_eq!(
            profile_from_codec_parameters(&params),
            Err(ProfileError::UnsupportedParameters {
                width: 640,
                height: 480,
                pix_fmt: "yuv420p".to_string(),
            })
        );
    }

    #[test]
    fn test_registry_builds_on_first_use() {
        let registry = ProfileRegistry::new();
        let p = profile(ProfileId::Iec625Dv25);
        assert!(!registry.is_built(p));
        let a = registry.tables(p);
        assert!(registry.is_built(p));
        let b = registry.tables(p);
        assert!(std::ptr::eq(a.tables, b.tables));
        assert_eq!(a.work_chunks().len(), 324);
    }
}
