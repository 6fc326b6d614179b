//! # hevc-recon-core
//!
//! hevc-recon 核心库, 提供基础类型定义、错误处理和定点数工具函数.
//!
//! 本 crate 对标 FFmpeg 的 libavutil, 为反变换与重建提供底层基础设施.

pub mod bit_depth;
pub mod clip;
pub mod error;
pub mod pixel;

// 重导出常用类型
pub use bit_depth::BitDepth;
pub use error::{ReconError, ReconResult};
pub use pixel::Pixel;
