//! 统一错误类型定义.
//!
//! 仅用于把外部传入的原始整数转换为类型化参数的边界处.
//! 重建路径本身不返回错误, 调用约定被破坏时直接 panic.

use thiserror::Error;

/// hevc-recon 统一错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReconError {
    /// 不支持的位深
    #[error("不支持的位深: {0} (有效范围 8..=16)")]
    UnsupportedBitDepth(u32),

    /// 无效的变换尺寸
    #[error("无效的变换尺寸: {0}")]
    InvalidTransformSize(u32),
}

/// hevc-recon 统一 Result 类型
pub type ReconResult<T> = Result<T, ReconError>;
