//! # hevc-recon
//!
//! 纯 Rust 实现的 HEVC 残差反变换与样本重建库.
//!
//! 输入熵解码得到的频域系数块与预测样本, 输出重建样本:
//! - **反变换**: 4x4 ~ 32x32 反 DCT, 4x4 亮度反 DST
//! - **定点缩放**: 两遍移位 (7, 20 - 位深) 与标准舍入
//! - **退化路径**: transform_skip 与 transquant_bypass
//!
//! # 快速开始
//!
//! ```rust
//! use hevc_recon::core::BitDepth;
//! use hevc_recon::itx::{InverseTransformer, TransformMode, TransformSize};
//!
//! let itx = InverseTransformer::new(BitDepth::EIGHT);
//! let coeffs = [0i16; 64];
//! let mut pred = [128u8; 64];
//! itx.reconstruct(&mut pred, 8, &coeffs, TransformSize::Tx8x8, TransformMode::Dct);
//! assert_eq!(pred, [128u8; 64]);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `hevc-recon-core` | 错误类型、位深、样本类型与裁剪原语 |
//! | `hevc-recon-itx` | 反变换内核与重建驱动 |

/// 核心类型与工具 (对标 libavutil)
pub use hevc_recon_core as core;

/// 反变换与重建 (对标 libavcodec hevcdsp)
pub use hevc_recon_itx as itx;
