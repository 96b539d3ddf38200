//! Integration tests for the run-level entropy coder

use proptest::prelude::*;

use dv_rs::bitstream::{BitReader, BitWriter};
use dv_rs::tables::{DV_VLC_LEN, NB_DV_VLC};
use dv_rs::vlc::{decode_run_level, RunLevelSymbol, EOB_BITS, EOB_CODE};
use dv_rs::{RunLevelCoder, VlcMode, VlcPair};

#[test]
fn test_exhaustive_compact_full_agreement() {
    let compact = RunLevelCoder::new(VlcMode::Compact);
    let full = RunLevelCoder::new(VlcMode::Full);
    for run in 0..64 {
        for level in 1..256 {
            for sign in 0..2 {
                assert_eq!(
                    compact.encode(run, level, sign),
                    full.encode(run, level, sign),
                    "run {} level {} sign {}",
                    run,
                    level,
                    sign
                );
            }
        }
    }
}

#[test]
fn test_default_mode_follows_feature() {
    let coder = RunLevelCoder::default();
    if cfg!(feature = "small-tables") {
        assert_eq!(coder.mode(), VlcMode::Compact);
    } else {
        assert_eq!(coder.mode(), VlcMode::Full);
    }
}

#[test]
fn test_codes_fit_their_length() {
    let coder = RunLevelCoder::new(VlcMode::Full);
    for run in 0..64 {
        for level in 0..256 {
            let VlcPair { code, len } = coder.encode(run, level, 1);
            assert!(len >= 3 && len <= 29, "run {} level {} len {}", run, level, len);
            assert_eq!(code >> len, 0);
        }
    }
}

#[test]
fn test_base_table_longest_code() {
    let longest = DV_VLC_LEN.iter().copied().max().unwrap();
    assert_eq!(longest, 15);
    assert_eq!(DV_VLC_LEN.len(), NB_DV_VLC);
}

#[test]
fn test_sequence_of_codes_decodes_in_order() {
    let coder = RunLevelCoder::new(VlcMode::Full);
    let symbols = [(0u32, 5u32, 0u32), (3, 1, 1), (20, 40, 0), (0, 255, 1)];
    let mut buf = [0u8; 32];
    {
        let mut w = BitWriter::new(&mut buf);
        for &(run, level, sign) in &symbols {
            let pair = coder.encode(run, level, sign);
            w.put_bits(pair.code, pair.len).unwrap();
        }
        w.put_bits(EOB_CODE, EOB_BITS).unwrap();
        w.flush();
    }

    let mut r = BitReader::new(&buf);
    let mut decoded = Vec::new();
    let mut zeros = 0u32;
    loop {
        match decode_run_level(&mut r).unwrap() {
            RunLevelSymbol::EndOfBlock => break,
            RunLevelSymbol::Zeros(n) => zeros += n as u32,
            RunLevelSymbol::Coefficient {
                run,
                level,
                negative,
            } => {
                decoded.push((zeros + run as u32, level as u32, negative as u32));
                zeros = 0;
            }
        }
    }
    assert_eq!(decoded, symbols.to_vec());
}

proptest! {
    #[test]
    fn test_size_matches_encode(run in 0u32..64, level in 0u32..256, mode in prop::sample::select(vec![VlcMode::Compact, VlcMode::Full])) {
        let coder = RunLevelCoder::new(mode);
        prop_assert_eq!(coder.size(run, level), coder.encode(run, level, 0).len);
    }

    #[test]
    fn test_escape_path_beyond_full_map(run in 0u32..63, level in 256u32..512) {
        // levels past the map use the 16-bit escape
        let coder = RunLevelCoder::new(VlcMode::Full);
        let pair = coder.encode(0, level, 1);
        prop_assert_eq!(pair.len, 16);
        prop_assert_eq!(pair.code & 1, 1);
        prop_assert!(coder.size(run, level) >= 16);
    }
}
