//! 4x4 帧内亮度块反 DST.
//!
//! 不使用共享基矩阵, 而是独立的闭式蝶形.

/// 4 点一维反 DST, 输出未缩放的累加值
///
/// 读取 `src[j * sstep]` (j < 4), 写入 `out[0..4]`.
pub fn inverse_dst_4(src: &[i16], sstep: usize, out: &mut [i32]) {
    let x0 = i32::from(src[0]);
    let x1 = i32::from(src[sstep]);
    let x2 = i32::from(src[2 * sstep]);
    let x3 = i32::from(src[3 * sstep]);

    let c0 = x0 + x2;
    let c1 = x2 + x3;
    let c2 = x0 - x3;
    let c3 = 74 * x1;

    out[0] = 29 * c0 + 55 * c1 + c3;
    out[1] = 55 * c2 - 29 * c1 + c3;
    out[2] = 74 * (x0 - x2 + x3);
    out[3] = 55 * c0 + 29 * c2 - c3;
}
