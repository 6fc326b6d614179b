//! 反变换配置与上下文.
//!
//! `ItxConfig` 描述一条码流的重建参数, 校验后生成 [`InverseTransformer`],
//! 之后每个块都通过该上下文分发, 类似 FFmpeg 按位深初始化的 DSP 上下文.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use hevc_recon_core::{BitDepth, Pixel, ReconResult};

use crate::recon::{reconstruct, transform_dc_add};
use crate::types::{TransformMode, TransformSize};

/// 反变换配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ItxConfig {
    /// 样本位深 (8..=16)
    pub bit_depth: u8,
    /// 只有 DC 系数的 DCT 块是否走快速路径
    pub dc_shortcut: bool,
}

impl Default for ItxConfig {
    fn default() -> Self {
        Self {
            bit_depth: 8,
            dc_shortcut: true,
        }
    }
}

impl ItxConfig {
    /// 校验配置并创建反变换上下文
    pub fn build(&self) -> ReconResult<InverseTransformer> {
        let bit_depth = BitDepth::new(self.bit_depth)?;
        debug!(
            "反变换上下文已创建: {}, dc_shortcut={}",
            bit_depth, self.dc_shortcut
        );
        Ok(InverseTransformer {
            bit_depth,
            dc_shortcut: self.dc_shortcut,
        })
    }
}

/// 反变换上下文
///
/// 不持有可变状态, 可在多个线程间共享, 对不相交的目标区域并发重建.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InverseTransformer {
    bit_depth: BitDepth,
    dc_shortcut: bool,
}

impl InverseTransformer {
    /// 直接以位深创建, 默认启用 DC 快速路径
    pub fn new(bit_depth: BitDepth) -> Self {
        Self {
            bit_depth,
            dc_shortcut: true,
        }
    }

    /// 当前位深
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// 是否启用 DC 快速路径
    pub fn dc_shortcut(&self) -> bool {
        self.dc_shortcut
    }

    /// 重建一个残差块, 结果叠加到 `dst` 中的预测样本
    pub fn reconstruct<P: Pixel>(
        &self,
        dst: &mut [P],
        stride: usize,
        coeffs: &[i16],
        size: TransformSize,
        mode: TransformMode,
    ) {
        if self.dc_shortcut && mode == TransformMode::Dct && is_dc_only(coeffs) {
            assert_eq!(
                coeffs.len(),
                size.area(),
                "系数块长度 {} 与 {size} 不符",
                coeffs.len()
            );
            trace!("{size} DC 块: dc={}", coeffs[0]);
            transform_dc_add(dst, stride, coeffs[0], size, self.bit_depth);
            return;
        }

        trace!("{size} 块: mode={mode}, {}", self.bit_depth);
        reconstruct(dst, stride, coeffs, size, self.bit_depth, mode);
    }
}

/// 除 DC 外全部系数为 0
fn is_dc_only(coeffs: &[i16]) -> bool {
    coeffs
        .split_first()
        .is_some_and(|(_, ac)| ac.iter().all(|&c| c == 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hevc_recon_core::ReconError;

    #[test]
    fn test_config_default_builds() {
        let itx = ItxConfig::default().build().unwrap();
        assert_eq!(itx.bit_depth(), BitDepth::EIGHT);
        assert!(itx.dc_shortcut());
    }

    #[test]
    fn test_config_rejects_bad_bit_depth() {
        let config = ItxConfig {
            bit_depth: 20,
            ..Default::default()
        };
        assert_eq!(
            config.build().unwrap_err(),
            ReconError::UnsupportedBitDepth(20)
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: ItxConfig = serde_json::from_str(r#"{ "bit_depth": 10 }"#).unwrap();
        assert_eq!(config.bit_depth, 10);
        assert!(config.dc_shortcut);
        assert_eq!(config.build().unwrap().bit_depth(), BitDepth::TEN);

        let config: ItxConfig =
            serde_json::from_str(r#"{ "bit_depth": 12, "dc_shortcut": false }"#).unwrap();
        assert!(!config.build().unwrap().dc_shortcut());
    }

    #[test]
    fn test_is_dc_only() {
        assert!(is_dc_only(&[5, 0, 0, 0]));
        assert!(is_dc_only(&[0, 0, 0, 0]));
        assert!(!is_dc_only(&[5, 0, 1, 0]));
        assert!(!is_dc_only(&[]));
    }

    #[test]
    fn test_dc_shortcut_toggle_is_bit_exact() {
        let size = TransformSize::Tx16x16;
        let mut coeffs = vec![0i16; size.area()];
        coeffs[0] = -913;
        let fast = ItxConfig::default().build().unwrap();
        let full = ItxConfig {
            dc_shortcut: false,
            ..Default::default()
        }
        .build()
        .unwrap();

        let mut a = vec![77u8; size.area()];
        let mut b = a.clone();
        fast.reconstruct(&mut a, 16, &coeffs, size, TransformMode::Dct);
        full.reconstruct(&mut b, 16, &coeffs, size, TransformMode::Dct);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dc_shortcut_not_used_for_dst() {
        // DST 的 DC 响应并不平坦, 不能走 DCT 快速路径
        let mut coeffs = [0i16; 16];
        coeffs[0] = 64;
        let itx = InverseTransformer::new(BitDepth::EIGHT);
        let mut dst = [0u8; 16];
        itx.reconstruct(&mut dst, 4, &coeffs, TransformSize::Tx4x4, TransformMode::LumaDst4x4);
        assert_eq!(dst, [0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "系数块长度")]
    fn test_dc_shortcut_checks_coeff_length() {
        let itx = InverseTransformer::new(BitDepth::EIGHT);
        let mut dst = [0u8; 64];
        itx.reconstruct(&mut dst, 8, &[3, 0, 0, 0], TransformSize::Tx8x8, TransformMode::Dct);
    }
}
