//! 多线程重建测试
//!
//! 块之间没有共享状态, 对不相交的目标区域并发重建应与串行结果逐位一致.

use std::cell::Cell;

use rayon::prelude::*;

use hevc_recon::core::BitDepth;
use hevc_recon::itx::{InverseTransformer, TransformMode, TransformSize};

const PLANE_W: usize = 64;
const PLANE_H: usize = 64;
const BLOCK: TransformSize = TransformSize::Tx16x16;

fn lcg_next(state: &Cell<u32>) -> u32 {
    let next = state
        .get()
        .wrapping_mul(1_664_525)
        .wrapping_add(1_013_904_223);
    state.set(next);
    next
}

/// 每个块的系数: 低频区域随机, 高频为 0, 模式轮换
fn make_blocks(seed: u32) -> Vec<(Vec<i16>, TransformMode)> {
    let state = Cell::new(seed);
    let n = BLOCK.size();
    let blocks_per_plane = (PLANE_W / n) * (PLANE_H / n);
    (0..blocks_per_plane)
        .map(|i| {
            let mut coeffs = vec![0i16; BLOCK.area()];
            for r in 0..n / 2 {
                for c in 0..n / 2 {
                    if lcg_next(&state) % 3 == 0 {
                        coeffs[r * n + c] = ((lcg_next(&state) % 801) as i16) - 400;
                    }
                }
            }
            let mode = match i % 4 {
                0 | 1 => TransformMode::Dct,
                2 => TransformMode::Skip,
                _ => TransformMode::Bypass,
            };
            (coeffs, mode)
        })
        .collect()
}

fn make_plane() -> Vec<u16> {
    (0..PLANE_W * PLANE_H)
        .map(|i| (200 + (i * 7) % 600) as u16)
        .collect()
}

/// 重建一条块行 (高度为块边长的样本带)
fn reconstruct_band(
    itx: &InverseTransformer,
    band: &mut [u16],
    blocks: &[(Vec<i16>, TransformMode)],
) {
    let n = BLOCK.size();
    for (bx, (coeffs, mode)) in blocks.iter().enumerate() {
        itx.reconstruct(&mut band[bx * n..], PLANE_W, coeffs, BLOCK, *mode);
    }
}

#[test]
fn test_parallel_matches_serial() {
    let itx = InverseTransformer::new(BitDepth::TEN);
    let blocks = make_blocks(0x5eed);
    let n = BLOCK.size();
    let blocks_per_row = PLANE_W / n;

    let mut serial = make_plane();
    for (band, row_blocks) in serial
        .chunks_mut(PLANE_W * n)
        .zip(blocks.chunks(blocks_per_row))
    {
        reconstruct_band(&itx, band, row_blocks);
    }

    let mut parallel = make_plane();
    parallel
        .par_chunks_mut(PLANE_W * n)
        .zip(blocks.par_chunks(blocks_per_row))
        .for_each(|(band, row_blocks)| reconstruct_band(&itx, band, row_blocks));

    assert_eq!(serial, parallel);
    assert_ne!(serial, make_plane(), "重建后平面应发生变化");
}

#[test]
fn test_transformer_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InverseTransformer>();
    assert_send_sync::<TransformSize>();
    assert_send_sync::<TransformMode>();
}
