//! # hevc-recon-itx
//!
//! HEVC 残差反变换与样本重建库.
//!
//! 本 crate 对标 FFmpeg libavcodec 的 hevcdsp 反变换部分:
//! 把熵解码得到的频域系数块反变换为残差, 叠加到预测样本上.
//!
//! ## 支持的重建方式
//!
//! - **反 DCT**: 4x4 / 8x8 / 16x16 / 32x32, 递归 partial butterfly
//! - **反 DST**: 4x4 帧内亮度块
//! - **transform_skip**: 统一缩放, 无频域变换
//! - **transquant_bypass**: 系数直接叠加
//!
//! ## 使用示例
//!
//! ```rust
//! use hevc_recon_itx::{ItxConfig, TransformMode, TransformSize};
//!
//! let itx = ItxConfig::default().build().unwrap();
//!
//! let mut coeffs = [0i16; 16];
//! coeffs[0] = 64;
//! let mut pred = [100u8; 16];
//! itx.reconstruct(&mut pred, 4, &coeffs, TransformSize::Tx4x4, TransformMode::Dct);
//! assert_eq!(pred, [101u8; 16]);
//! ```

pub mod butterfly;
pub mod config;
pub mod dst;
pub mod matrix;
pub mod recon;
pub mod skip;
pub mod types;

// 重导出常用类型
pub use config::{InverseTransformer, ItxConfig};
pub use recon::{reconstruct, transform_4x4_luma_add, transform_add, transform_dc_add};
pub use skip::{transform_skip, transquant_bypass};
pub use types::{TransformMode, TransformSize};
