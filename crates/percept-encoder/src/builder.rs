//! Builder 模式实现
//!
//! 提供链式构造 `StateEncoder` 实例的便捷方式。

use crate::config::EncoderConfig;
use crate::encoder::StateEncoder;
use crate::hooks::{HookManager, OverflowCallback};
use percept_protocol::HashScheme;
use std::sync::Arc;

/// StateEncoder Builder（链式构造）
///
/// # Example
///
/// ```
/// use percept_encoder::{HashScheme, StateEncoderBuilder};
///
/// // 使用默认配置
/// let encoder = StateEncoderBuilder::new().build();
/// assert_eq!(encoder.scheme(), HashScheme::Percept16);
///
/// // 自定义方案，关闭溢出日志
/// let encoder = StateEncoderBuilder::new()
///     .scheme(HashScheme::PuckMid16)
///     .warn_on_overflow(false)
///     .build();
/// assert_eq!(encoder.scheme(), HashScheme::PuckMid16);
/// ```
#[derive(Debug, Default)]
pub struct StateEncoderBuilder {
    config: EncoderConfig,
    hooks: HookManager,
}

impl StateEncoderBuilder {
    /// 创建新的 Builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置哈希方案
    #[must_use]
    pub fn scheme(mut self, scheme: HashScheme) -> Self {
        self.config.scheme = scheme;
        self
    }

    /// 设置溢出时是否输出日志
    #[must_use]
    pub fn warn_on_overflow(mut self, enabled: bool) -> Self {
        self.config.warn_on_overflow = enabled;
        self
    }

    /// 整体替换配置（已注册的钩子保留）
    #[must_use]
    pub fn config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// 注册溢出回调
    #[must_use]
    pub fn hook(mut self, callback: Arc<dyn OverflowCallback>) -> Self {
        self.hooks.add_callback(callback);
        self
    }

    /// 构建编码器
    pub fn build(self) -> StateEncoder {
        StateEncoder::from_parts(self.config, self.hooks)
    }
}
