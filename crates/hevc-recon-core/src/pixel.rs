//! 样本存储类型.
//!
//! 8 位内容使用 `u8`, 更高位深使用 `u16`, 与 FFmpeg 按位深实例化的 `pixel` 类型对应.

/// 可被重建写入的样本类型
pub trait Pixel: Copy + Default + Send + Sync + 'static {
    /// 存储宽度 (位)
    const STORAGE_BITS: u32;

    /// 转为 i32 参与定点运算
    fn to_i32(self) -> i32;

    /// 截断到存储宽度写回
    ///
    /// 对已裁剪的值等价于直接转换; 对未裁剪的 skip/bypass 结果按存储宽度取模.
    fn from_i32(v: i32) -> Self;
}

impl Pixel for u8 {
    const STORAGE_BITS: u32 = 8;

    #[inline(always)]
    fn to_i32(self) -> i32 {
        i32::from(self)
    }

    #[inline(always)]
    fn from_i32(v: i32) -> Self {
        v as u8
    }
}

impl Pixel for u16 {
    const STORAGE_BITS: u32 = 16;

    #[inline(always)]
    fn to_i32(self) -> i32 {
        i32::from(self)
    }

    #[inline(always)]
    fn from_i32(v: i32) -> Self {
        v as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_roundtrip() {
        assert_eq!(u8::from_i32(200).to_i32(), 200);
        assert_eq!(u16::from_i32(1023).to_i32(), 1023);
    }

    #[test]
    fn test_pixel_truncates_to_storage() {
        assert_eq!(u8::from_i32(256), 0);
        assert_eq!(u8::from_i32(-1), 255);
        assert_eq!(u16::from_i32(65536 + 7), 7);
    }
}
