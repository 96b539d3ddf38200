//! Emit and parse whole blocks through a caller-supplied transform

use dv_rs::bitstream::{BitReader, BitWriter};
use dv_rs::dif::{pack_section_id, unpack_section_id};
use dv_rs::profile::profile;
use dv_rs::quantization::{quantize_hd, read_block, write_hd_block};
use dv_rs::transform::{weights_for, BlockTransform, TransformShape};
use dv_rs::types::SectionType;
use dv_rs::{EncBlock, ProfileId, QlevelSearch, QuantConfig, RunLevelCoder, VlcMode};

/// Stand-in kernel: keeps the DC average and a few gradient terms
struct GradientTransform;

impl BlockTransform for GradientTransform {
    fn forward(&self, block: &mut [i32; 64], _shape: TransformShape) {
        let sum: i32 = block.iter().sum();
        let left: i32 = (0..8).map(|r| block[r * 8]).sum();
        let right: i32 = (0..8).map(|r| block[r * 8 + 7]).sum();
        let top: i32 = block[..8].iter().sum();
        let bottom: i32 = block[56..].iter().sum();
        *block = [0; 64];
        block[0] = sum / 8;
        block[1] = left - right;
        block[8] = top - bottom;
        block[9] = (left - right) / 2;
    }

    fn inverse(&self, block: &mut [i32; 64], _shape: TransformShape) {
        let dc = block[0] / 8;
        *block = [dc; 64];
    }
}

#[test]
fn test_searched_block_survives_emission() {
    let p = profile(ProfileId::Dv100_1080i60);
    let weights = weights_for(p, TransformShape::Full8x8, false);
    let mut pixels = [0i32; 64];
    for (i, px) in pixels.iter_mut().enumerate() {
        *px = ((i % 8) * 24 + (i / 8) * 5) as i32 - 100;
    }

    let block = EncBlock::from_pixels(&GradientTransform, &pixels, &weights, false);
    let coder = RunLevelCoder::new(VlcMode::Full);
    let search = QlevelSearch::new(QuantConfig::new().vlc_mode(VlcMode::Full));
    let budget = p.block_sizes[0] as u32;
    let choice = search.search(&block, budget);
    assert!(choice.bits <= budget);

    let mut buf = [0u8; 80];
    buf[..3].copy_from_slice(&pack_section_id(SectionType::Video, 0, 0, 1));
    let written = {
        let mut w = BitWriter::new(&mut buf[3..]);
        let n = write_hd_block(&block, choice.index, &coder, &mut w).unwrap();
        w.flush();
        n
    };
    assert_eq!(written, 12 + choice.bits);

    let id = unpack_section_id([buf[0], buf[1], buf[2]]).unwrap();
    assert_eq!(id.section, SectionType::Video);
    assert_eq!(id.dif_num, 1);

    let mut r = BitReader::new(&buf[3..]);
    let parsed = read_block(&mut r).unwrap();
    let expected = quantize_hd(&block, choice.index);
    assert_eq!(parsed.dc, expected.dc);
    assert_eq!(parsed.class, choice.qlevel.cno());
    assert_eq!(parsed.levels, expected.levels);
}

#[test]
fn test_overflowing_block_reports_error() {
    let mut weighted = [0i32; 64];
    for (i, w) in weighted.iter_mut().enumerate().skip(1) {
        *w = if i % 2 == 0 { 250 } else { -250 };
    }
    let block = EncBlock::from_weighted(0, &weighted, false);
    let coder = RunLevelCoder::new(VlcMode::Compact);
    let mut buf = [0u8; 10];
    let mut w = BitWriter::new(&mut buf);
    assert!(write_hd_block(&block, 0, &coder, &mut w).is_err());
}
