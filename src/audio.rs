//! Audio sample distribution
//!
//! DV frames carry a varying number of audio samples so that locked audio
//! averages out over a five-frame window, and PCM samples are shuffled
//! across the audio DIF blocks of a frame.

use crate::profile::Profile;
use crate::tables::DV_AUDIO_FREQUENCY;

/// Samples carried by frame `frame_index` of a locked-audio stream
pub fn samples_in_frame(profile: &Profile, frame_index: u64) -> u32 {
    profile.audio.samples_dist[(frame_index % 5) as usize]
}

/// Minimum samples per frame at `sample_rate`; `None` for rates DV cannot carry
pub fn min_samples(profile: &Profile, sample_rate: u32) -> Option<u32> {
    DV_AUDIO_FREQUENCY
        .iter()
        .position(|&f| f == sample_rate)
        .map(|i| profile.audio.min_samples[i])
}

/// Byte-pair slot of `sample` within the audio payload of DIF sequence
/// `seq`, audio block `dif_block`; `None` outside the shuffle table
pub fn shuffle_offset(profile: &Profile, seq: usize, dif_block: usize, sample: usize) -> Option<usize> {
    let row = profile.audio.shuffle.get(seq)?;
    let base = *row.get(dif_block)? as usize;
    Some(base + sample * profile.audio.stride as usize)
}
