//! 变换尺寸与变换模式.

use std::fmt;

use hevc_recon_core::{ReconError, ReconResult};

/// 变换块尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformSize {
    /// 4x4
    Tx4x4,
    /// 8x8
    Tx8x8,
    /// 16x16
    Tx16x16,
    /// 32x32
    Tx32x32,
}

impl TransformSize {
    /// 全部尺寸, 从小到大
    pub const ALL: [Self; 4] = [Self::Tx4x4, Self::Tx8x8, Self::Tx16x16, Self::Tx32x32];

    /// 从 log2(边长) 创建, 有效值 2..=5
    pub fn from_log2(log2_size: u8) -> ReconResult<Self> {
        match log2_size {
            2 => Ok(Self::Tx4x4),
            3 => Ok(Self::Tx8x8),
            4 => Ok(Self::Tx16x16),
            5 => Ok(Self::Tx32x32),
            _ => Err(ReconError::InvalidTransformSize(
                1u32.checked_shl(u32::from(log2_size)).unwrap_or(0),
            )),
        }
    }

    /// 从边长创建, 有效值 4/8/16/32
    pub fn from_size(size: usize) -> ReconResult<Self> {
        match size {
            4 => Ok(Self::Tx4x4),
            8 => Ok(Self::Tx8x8),
            16 => Ok(Self::Tx16x16),
            32 => Ok(Self::Tx32x32),
            _ => Err(ReconError::InvalidTransformSize(
                u32::try_from(size).unwrap_or(u32::MAX),
            )),
        }
    }

    /// log2(边长)
    pub const fn log2(self) -> u32 {
        match self {
            Self::Tx4x4 => 2,
            Self::Tx8x8 => 3,
            Self::Tx16x16 => 4,
            Self::Tx32x32 => 5,
        }
    }

    /// 边长
    pub const fn size(self) -> usize {
        1 << self.log2()
    }

    /// 系数个数 (边长的平方)
    pub const fn area(self) -> usize {
        self.size() * self.size()
    }
}

impl fmt::Display for TransformSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        write!(f, "{n}x{n}")
    }
}

/// 残差重建方式
///
/// 由调用方 (模式判决 / 语法解析) 决定, 本 crate 从不推断.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformMode {
    /// 基于共享基矩阵的反 DCT, 适用于全部尺寸
    #[default]
    Dct,
    /// 4x4 帧内亮度块的反 DST
    LumaDst4x4,
    /// transform_skip: 只做统一缩放, 不做频域变换
    Skip,
    /// cu_transquant_bypass: 系数直接叠加到预测样本
    Bypass,
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dct => "dct",
            Self::LumaDst4x4 => "luma_dst_4x4",
            Self::Skip => "skip",
            Self::Bypass => "bypass",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_size_from_log2() {
        for (log2, size) in (2u8..=5).zip(TransformSize::ALL) {
            assert_eq!(TransformSize::from_log2(log2).unwrap(), size);
            assert_eq!(size.log2(), u32::from(log2));
        }
        assert_eq!(
            TransformSize::from_log2(6),
            Err(ReconError::InvalidTransformSize(64))
        );
        assert!(TransformSize::from_log2(1).is_err());
        assert!(TransformSize::from_log2(200).is_err());
    }

    #[test]
    fn test_transform_size_from_size() {
        assert_eq!(TransformSize::from_size(16).unwrap(), TransformSize::Tx16x16);
        assert_eq!(
            TransformSize::from_size(12),
            Err(ReconError::InvalidTransformSize(12))
        );
    }

    #[test]
    fn test_transform_size_dimensions() {
        assert_eq!(TransformSize::Tx4x4.size(), 4);
        assert_eq!(TransformSize::Tx32x32.area(), 1024);
        assert_eq!(TransformSize::Tx8x8.to_string(), "8x8");
    }

    #[test]
    fn test_transform_mode_display() {
        assert_eq!(TransformMode::default(), TransformMode::Dct);
        assert_eq!(TransformMode::LumaDst4x4.to_string(), "luma_dst_4x4");
    }
}
