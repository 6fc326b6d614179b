//! 样本位深.

use std::fmt;

use crate::error::{ReconError, ReconResult};

/// 样本位深 (8..=16)
///
/// 决定最终样本裁剪范围以及第二遍反变换的移位量.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitDepth(u8);

impl BitDepth {
    /// 8 位 (Main profile)
    pub const EIGHT: Self = Self(8);
    /// 10 位 (Main 10 profile)
    pub const TEN: Self = Self(10);
    /// 12 位
    pub const TWELVE: Self = Self(12);

    /// 支持的最小位深
    pub const MIN_BITS: u8 = 8;
    /// 支持的最大位深
    pub const MAX_BITS: u8 = 16;

    /// 从原始位数创建, 超出 8..=16 返回错误
    pub fn new(bits: u8) -> ReconResult<Self> {
        if (Self::MIN_BITS..=Self::MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(ReconError::UnsupportedBitDepth(u32::from(bits)))
        }
    }

    /// 位数
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    /// 最大样本值 `2^bits - 1`
    pub const fn max_sample(self) -> i32 {
        (1i32 << self.0) - 1
    }

    /// 第二遍反变换的移位量 `20 - bits`
    pub const fn second_pass_shift(self) -> i32 {
        20 - self.0 as i32
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::EIGHT
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = ReconError;

    fn try_from(bits: u8) -> ReconResult<Self> {
        Self::new(bits)
    }
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> Self {
        depth.0
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
