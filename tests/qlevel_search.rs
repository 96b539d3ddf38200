//! Integration tests for the DV100 qlevel search

use proptest::prelude::*;

use dv_rs::quantization::hd_block_bits;
use dv_rs::tables::{DV100_NUM_QLEVELS, DV100_QLEVELS};
use dv_rs::{EncBlock, QualityMode, QlevelSearch, QuantConfig, RunLevelCoder, VlcMode};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn block_strategy() -> impl Strategy<Value = EncBlock> {
    (
        prop::collection::vec(prop_oneof![Just(0i32), -4000i32..4000], 63),
        any::<bool>(),
    )
        .prop_map(|(ac, chroma)| {
            let mut weighted = [0i32; 64];
            weighted[1..].copy_from_slice(&ac);
            EncBlock::from_weighted(0, &weighted, chroma)
        })
}

fn searcher(mode: QualityMode) -> QlevelSearch {
    QlevelSearch::new(QuantConfig::new().mode(mode).vlc_mode(VlcMode::Full))
}

#[test]
fn test_empty_block_costs_only_end_of_block() {
    init_logger();
    let block = EncBlock::from_weighted(0, &[0; 64], false);
    let choice = searcher(QualityMode::Speed).search(&block, 100);
    assert_eq!(choice.index, 1);
    assert_eq!(choice.bits, 4);

    // nothing fits a zero budget; the search ends on the coarsest level
    let choice = searcher(QualityMode::Speed).search(&block, 0);
    assert_eq!(choice.index, DV100_NUM_QLEVELS - 1);
    assert_eq!(choice.bits, 4);
}

#[test]
fn test_macroblock_search_shares_one_level() {
    init_logger();
    let mut weighted = [0i32; 64];
    for (i, w) in weighted.iter_mut().enumerate().skip(1).take(20) {
        *w = 300 / i as i32;
    }
    let blocks = vec![EncBlock::from_weighted(0, &weighted, false); 8];
    let s = searcher(QualityMode::Quality);
    let coder = RunLevelCoder::new(VlcMode::Full);

    let budget = 8 * 80;
    let choice = s.search_macroblock(&blocks, budget);
    let total: u32 = blocks.iter().map(|b| hd_block_bits(b, choice.index, &coder)).sum();
    assert_eq!(choice.bits, total);
    assert!(choice.bits <= budget);
    let single = s.search(&blocks[0], 80);
    assert_eq!(choice.index, single.index);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_choice_is_in_table_and_measured(block in block_strategy(), budget in 0u32..1500) {
        let coder = RunLevelCoder::new(VlcMode::Full);
        for mode in [QualityMode::Speed, QualityMode::Quality] {
            let choice = searcher(mode).search(&block, budget);
            prop_assert!(choice.index < DV100_NUM_QLEVELS);
            prop_assert!(choice.index >= block.min_qlevel);
            prop_assert_eq!(choice.qlevel.raw(), DV100_QLEVELS[choice.index]);
            prop_assert_eq!(choice.bits, hd_block_bits(&block, choice.index, &coder));
            if choice.bits > budget {
                prop_assert_eq!(choice.index, DV100_NUM_QLEVELS - 1);
            }
        }
    }

    #[test]
    fn test_more_budget_never_coarser(block in block_strategy(), a in 0u32..1500, b in 0u32..1500) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        for mode in [QualityMode::Speed, QualityMode::Quality] {
            let s = searcher(mode);
            prop_assert!(s.search(&block, high).index <= s.search(&block, low).index);
        }
    }

    #[test]
    fn test_search_is_deterministic(block in block_strategy(), budget in 0u32..1500) {
        let compact = QlevelSearch::new(QuantConfig::new().vlc_mode(VlcMode::Compact));
        let full = QlevelSearch::new(QuantConfig::new().vlc_mode(VlcMode::Full));
        prop_assert_eq!(compact.search(&block, budget), full.search(&block, budget));
        prop_assert_eq!(full.search(&block, budget), full.search(&block, budget));
    }
}
