//! transform_skip 与 transquant_bypass 重建路径.
//!
//! 两条路径都不做频域变换, 也不对最终结果做位深裁剪:
//! 和为 `pred + residual` 后直接按样本存储宽度写回 (与参考解码器的 `dst[x] +=` 一致).

use hevc_recon_core::{BitDepth, Pixel};

use crate::recon::{assert_block_geometry, assert_sample_depth};
use crate::types::TransformSize;

/// transform_skip 的统一移位量 `15 - bitDepth - log2(size)`
pub const fn skip_shift(size: TransformSize, bit_depth: BitDepth) -> i32 {
    15 - bit_depth.bits() as i32 - size.log2() as i32
}

/// transform_skip: 对每个系数做一次统一缩放后叠加到预测样本
///
/// 移位量为正时带舍入右移, 否则直接左移.
pub fn transform_skip<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    coeffs: &[i16],
    size: TransformSize,
    bit_depth: BitDepth,
) {
    let n = size.size();
    assert_block_geometry(dst.len(), stride, coeffs.len(), n);
    assert_sample_depth::<P>(bit_depth);

    let shift = skip_shift(size, bit_depth);

    if shift > 0 {
        let offset = 1i32 << (shift - 1);
        add_rows(dst, stride, coeffs, n, |c| (c + offset) >> shift);
    } else {
        let left = -shift;
        add_rows(dst, stride, coeffs, n, |c| c << left);
    }
}

/// transquant_bypass: 系数原样叠加到预测样本, 无缩放、无舍入、无裁剪
pub fn transquant_bypass<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    coeffs: &[i16],
    size: TransformSize,
) {
    let n = size.size();
    assert_block_geometry(dst.len(), stride, coeffs.len(), n);

    add_rows(dst, stride, coeffs, n, |c| c);
}

#[inline(always)]
fn add_rows<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    coeffs: &[i16],
    n: usize,
    residual: impl Fn(i32) -> i32,
) {
    for (row, src) in dst.chunks_mut(stride).zip(coeffs.chunks_exact(n)) {
        for (d, &c) in row[..n].iter_mut().zip(src) {
            *d = P::from_i32(d.to_i32() + residual(i32::from(c)));
        }
    }
}
