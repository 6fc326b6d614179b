//! 定点运算的舍入与裁剪原语.
//!
//! 对标 FFmpeg libavutil 的 `av_clip_int16` / `av_clip_uintp2`.
//! 所有反变换阶段都通过这里的函数完成舍入和饱和, 保证逐位一致.

/// 将有符号整数饱和到 [-32768, 32767]
///
/// 超出范围时取最近的边界, 不发生回绕.
#[inline(always)]
pub const fn clip_int16(a: i32) -> i32 {
    if a < i16::MIN as i32 {
        i16::MIN as i32
    } else if a > i16::MAX as i32 {
        i16::MAX as i32
    } else {
        a
    }
}

/// 将有符号整数饱和到 [0, 2^bits - 1]
///
/// 负数裁剪为 0, 超出上界裁剪为 `2^bits - 1`.
#[inline(always)]
pub const fn clip_uintp2(a: i32, bits: u32) -> i32 {
    let max = (1i32 << bits) - 1;
    if a < 0 {
        0
    } else if a > max {
        max
    } else {
        a
    }
}

/// 带舍入的右移: `(x + (1 << (shift - 1))) >> shift`
///
/// `shift <= 0` 时退化为 `x << -shift`, 不加舍入项.
/// 高位深下第二遍的移位量可能变为非正数, 此时必须走左移分支.
#[inline(always)]
pub const fn round_shift(x: i32, shift: i32) -> i32 {
    if shift > 0 {
        (x + (1 << (shift - 1))) >> shift
    } else {
        x << -shift
    }
}
