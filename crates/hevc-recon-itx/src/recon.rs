//! 两遍可分离反变换与样本重建.
//!
//! 第一遍逐列执行一维反变换, 移位 7 后饱和到 16 位, 写入栈上的中间缓冲区;
//! 第二遍逐行执行, 移位 `20 - bitDepth` 后叠加到预测样本并裁剪到位深范围.
//! 这组移位与舍入偏置是标准规定的定点缩放, 必须逐位复现.

use hevc_recon_core::clip::{clip_int16, clip_uintp2, round_shift};
use hevc_recon_core::{BitDepth, Pixel};

use crate::butterfly::{MAX_TX_LEN, partial_butterfly};
use crate::dst::inverse_dst_4;
use crate::matrix::TRANSFORM_MATRIX;
use crate::skip::{transform_skip, transquant_bypass};
use crate::types::{TransformMode, TransformSize};

/// 第一遍固定移位量, 与位深无关
pub const FIRST_PASS_SHIFT: i32 = 7;

/// 最大系数个数 (32x32)
pub const MAX_COEFFS: usize = MAX_TX_LEN * MAX_TX_LEN;

// ============================================================
// 调用约定检查
// ============================================================

/// 检查块几何: 系数个数、步长和目标缓冲区跨度
pub(crate) fn assert_block_geometry(dst_len: usize, stride: usize, coeffs_len: usize, n: usize) {
    assert_eq!(coeffs_len, n * n, "系数块长度 {coeffs_len} 与 {n}x{n} 不符");
    assert!(stride >= n, "步长 {stride} 小于块宽 {n}");
    let span = (n - 1) * stride + n;
    assert!(
        dst_len >= span,
        "目标缓冲区长度 {dst_len} 不足, {n}x{n} 块在步长 {stride} 下需要 {span}"
    );
}

/// 检查位深能否放入样本存储类型
pub(crate) fn assert_sample_depth<P: Pixel>(bit_depth: BitDepth) {
    assert!(
        bit_depth.bits() <= P::STORAGE_BITS,
        "{bit_depth} 超出 {} 位样本存储",
        P::STORAGE_BITS
    );
}

// ============================================================
// 两种输出形态
// ============================================================

/// 缩放形态 (第一遍): 舍入移位后饱和到 16 位
#[inline(always)]
fn scale(v: i32) -> i16 {
    clip_int16(round_shift(v, FIRST_PASS_SHIFT)) as i16
}

/// 累加形态 (第二遍): 舍入移位、饱和到 16 位, 叠加预测后裁剪到位深范围
#[inline(always)]
fn add_and_scale<P: Pixel>(pred: P, v: i32, shift: i32, bits: u32) -> P {
    let residual = clip_int16(round_shift(v, shift));
    P::from_i32(clip_uintp2(pred.to_i32() + residual, bits))
}

// ============================================================
// 两遍驱动
// ============================================================

/// 第一遍: 逐列反变换, 结果写入中间缓冲区 `tmp[行 * n + 列]`
fn first_pass(
    coeffs: &[i16],
    n: usize,
    kernel: impl Fn(&[i16], usize, &mut [i32]),
    tmp: &mut [i16],
) {
    let mut column = [0i32; MAX_TX_LEN];
    for col in 0..n {
        kernel(&coeffs[col..], n, &mut column[..n]);
        for (row, &v) in column[..n].iter().enumerate() {
            tmp[row * n + col] = scale(v);
        }
    }
}

/// 第二遍: 逐行反变换并叠加到目标样本
fn second_pass<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    tmp: &[i16],
    n: usize,
    bit_depth: BitDepth,
    kernel: impl Fn(&[i16], usize, &mut [i32]),
) {
    let shift = bit_depth.second_pass_shift();
    let bits = bit_depth.bits();
    let mut out = [0i32; MAX_TX_LEN];
    for (row, src) in dst.chunks_mut(stride).zip(tmp.chunks_exact(n)) {
        kernel(src, 1, &mut out[..n]);
        for (d, &v) in row[..n].iter_mut().zip(&out[..n]) {
            *d = add_and_scale(*d, v, shift, bits);
        }
    }
}

fn two_pass_add<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    coeffs: &[i16],
    n: usize,
    bit_depth: BitDepth,
    kernel: impl Fn(&[i16], usize, &mut [i32]) + Copy,
) {
    let mut tmp = [0i16; MAX_COEFFS];
    let tmp = &mut tmp[..n * n];
    first_pass(coeffs, n, kernel, tmp);
    second_pass(dst, stride, tmp, n, bit_depth, kernel);
}

// ============================================================
// 公开入口
// ============================================================

/// 反 DCT 并叠加到预测样本, 适用于 4x4 到 32x32
///
/// `dst` 从块左上角开始, `stride` 以样本为单位.
pub fn transform_add<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    coeffs: &[i16],
    size: TransformSize,
    bit_depth: BitDepth,
) {
    let n = size.size();
    assert_block_geometry(dst.len(), stride, coeffs.len(), n);
    assert_sample_depth::<P>(bit_depth);

    two_pass_add(dst, stride, coeffs, n, bit_depth, |src, step, out| {
        partial_butterfly(src, step, n, out)
    });
}

/// 4x4 帧内亮度块反 DST 并叠加到预测样本
pub fn transform_4x4_luma_add<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    coeffs: &[i16],
    bit_depth: BitDepth,
) {
    assert_block_geometry(dst.len(), stride, coeffs.len(), 4);
    assert_sample_depth::<P>(bit_depth);

    two_pass_add(dst, stride, coeffs, 4, bit_depth, inverse_dst_4);
}

/// 只有 DC 系数的反 DCT 快速路径
///
/// 其余系数全为 0 时, 两遍变换的结果是统一的残差, 这里按两遍的
/// 舍入顺序直接计算该值, 与 [`transform_add`] 逐位一致.
pub fn transform_dc_add<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    dc: i16,
    size: TransformSize,
    bit_depth: BitDepth,
) {
    let n = size.size();
    assert_block_geometry(dst.len(), stride, n * n, n);
    assert_sample_depth::<P>(bit_depth);

    let dc_basis = i32::from(TRANSFORM_MATRIX[0][0]);
    let column = i32::from(scale(dc_basis * i32::from(dc)));
    let shift = bit_depth.second_pass_shift();
    let bits = bit_depth.bits();
    for row in dst.chunks_mut(stride).take(n) {
        for d in &mut row[..n] {
            *d = add_and_scale(*d, dc_basis * column, shift, bits);
        }
    }
}

/// 按模式重建一个残差块
///
/// 模式与尺寸由调用方决定; `LumaDst4x4` 只接受 4x4.
pub fn reconstruct<P: Pixel>(
    dst: &mut [P],
    stride: usize,
    coeffs: &[i16],
    size: TransformSize,
    bit_depth: BitDepth,
    mode: TransformMode,
) {
    match mode {
        TransformMode::Dct => transform_add(dst, stride, coeffs, size, bit_depth),
        TransformMode::LumaDst4x4 => {
            assert_eq!(
                size,
                TransformSize::Tx4x4,
                "DST 只用于 4x4 亮度块, 收到 {size}"
            );
            transform_4x4_luma_add(dst, stride, coeffs, bit_depth)
        }
        TransformMode::Skip => transform_skip(dst, stride, coeffs, size, bit_depth),
        TransformMode::Bypass => transquant_bypass(dst, stride, coeffs, size),
    }
}
