//! 状态编码器
//!
//! 纯同步、无共享可变状态：每次调用只读取输入快照并返回新的 `RobotState`，
//! 可被任意数量的线程并发调用。

use crate::builder::StateEncoderBuilder;
use crate::config::EncoderConfig;
use crate::hooks::{HookManager, OverflowEvent, OverflowKind};
use percept_protocol::{HashScheme, RobotState, SensorSnapshot};
use tracing::{debug, trace, warn};

/// 状态编码器
///
/// # Example
///
/// ```
/// use percept_encoder::{SensorSnapshot, StateEncoder};
///
/// let encoder = StateEncoder::new();
/// let snapshot = SensorSnapshot::from_parts(1, 0, 0, 1, 1.0, 0.0, 0.0);
/// let state = encoder.encode(&snapshot);
/// assert_eq!(state.hash(), 1 + 8 + 240);
/// assert_eq!(state.index().unwrap(), 249);
/// ```
#[derive(Debug)]
pub struct StateEncoder {
    config: EncoderConfig,
    hooks: HookManager,
}

impl StateEncoder {
    /// 使用默认配置（`Percept16`，开启溢出日志，无钩子）创建编码器
    pub fn new() -> Self {
        Self::from_parts(EncoderConfig::default(), HookManager::new())
    }

    /// 创建 Builder
    pub fn builder() -> StateEncoderBuilder {
        StateEncoderBuilder::new()
    }

    pub(crate) fn from_parts(config: EncoderConfig, hooks: HookManager) -> Self {
        debug!(
            scheme = %config.scheme,
            warn_on_overflow = config.warn_on_overflow,
            hooks = hooks.len(),
            "state encoder created"
        );
        Self { config, hooks }
    }

    pub fn scheme(&self) -> HashScheme {
        self.config.scheme
    }

    pub fn warns_on_overflow(&self) -> bool {
        self.config.warn_on_overflow
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// 编码快照
    ///
    /// 永不失败。哈希超出方案上界或探针字段进位时输出诊断（日志 + 钩子），
    /// 结果不钳位、不拒绝，原样返回。
    pub fn encode(&self, snapshot: &SensorSnapshot) -> RobotState {
        let state = RobotState::with_scheme(snapshot, self.config.scheme);
        trace!(scheme = %state.scheme(), hash = state.hash(), "encoded percept");

        if let Some(event) = OverflowEvent::detect(&state) {
            self.report_overflow(&event);
        }

        state
    }

    fn report_overflow(&self, event: &OverflowEvent) {
        if self.config.warn_on_overflow {
            match event.kind {
                OverflowKind::HashBudget => warn!(
                    scheme = %event.scheme,
                    hash = event.hash,
                    max = event.max_hash_size,
                    "state hash exceeds scheme budget"
                ),
                OverflowKind::FieldCarry => warn!(
                    scheme = %event.scheme,
                    hash = event.hash,
                    "probe bucket exceeds its 4-bit field, neighbouring field corrupted"
                ),
            }
        }

        self.hooks.trigger_all(event);
    }
}

impl Default for StateEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// 使用默认编码器编码快照
pub fn encode(snapshot: &SensorSnapshot) -> RobotState {
    StateEncoder::new().encode(snapshot)
}
