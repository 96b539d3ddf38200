//! Benchmarks for the codec core
//!
//! These benchmarks measure run-level code sizing, the DV100 qlevel search
//! and construction of the per-profile tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dv_rs::bitstream::BitWriter;
use dv_rs::idct_factor::IdctFactors;
use dv_rs::profile::profile;
use dv_rs::quantization::write_hd_block;
use dv_rs::{
    build_work_chunks, detect_profile, EncBlock, ProfileId, QlevelSearch, QuantConfig,
    RunLevelCoder, VlcMode,
};

fn test_block() -> EncBlock {
    let mut weighted = [0i32; 64];
    for (i, w) in weighted.iter_mut().enumerate().skip(1) {
        let v = 400 / i as i32;
        *w = if i % 3 == 0 { -v } else { v };
    }
    EncBlock::from_weighted(120, &weighted, false)
}

fn benchmark_vlc_size(c: &mut Criterion) {
    for mode in [VlcMode::Compact, VlcMode::Full] {
        let coder = RunLevelCoder::new(mode);
        c.bench_function(&format!("vlc_size_{:?}", mode), |b| {
            b.iter(|| {
                let mut total = 0u32;
                for run in 0..64 {
                    for level in 1..64 {
                        total += coder.size(black_box(run), black_box(level));
                    }
                }
                black_box(total)
            })
        });
    }
}

fn benchmark_qlevel_search(c: &mut Criterion) {
    let block = test_block();
    let search = QlevelSearch::new(QuantConfig::new().vlc_mode(VlcMode::Full));

    c.bench_function("qlevel_search", |b| {
        b.iter(|| black_box(search.search(black_box(&block), 80)))
    });

    let blocks = vec![test_block(); 8];
    c.bench_function("qlevel_search_macroblock", |b| {
        b.iter(|| black_box(search.search_macroblock(black_box(&blocks), 640)))
    });
}

fn benchmark_block_emit(c: &mut Criterion) {
    let block = test_block();
    let coder = RunLevelCoder::new(VlcMode::Full);

    c.bench_function("block_emit", |b| {
        b.iter(|| {
            let mut buf = [0u8; 160];
            let mut writer = BitWriter::new(&mut buf);
            let bits = write_hd_block(black_box(&block), 10, &coder, &mut writer).unwrap();
            black_box(bits)
        })
    });
}

fn benchmark_table_build(c: &mut Criterion) {
    let p = profile(ProfileId::Dv100_1080i50);

    c.bench_function("work_chunks_1080i50", |b| {
        b.iter(|| black_box(build_work_chunks(black_box(p))))
    });
    c.bench_function("idct_factors_1080i50", |b| {
        b.iter(|| black_box(IdctFactors::build(black_box(p))))
    });
}

fn benchmark_detection(c: &mut Criterion) {
    let mut frame = vec![0u8; 80 * 6];
    frame[3] = 0x80;
    frame[80 * 5 + 48 + 3] = 0x14;

    c.bench_function("detect_profile", |b| {
        b.iter(|| black_box(detect_profile(black_box(&frame))))
    });
}

criterion_group!(
    benches,
    benchmark_vlc_size,
    benchmark_qlevel_search,
    benchmark_block_emit,
    benchmark_table_build,
    benchmark_detection
);
criterion_main!(benches);
