//! 钩子系统（Hook System）
//!
//! 本模块提供溢出诊断回调管理功能：当编码结果超出方案上界或发生字段进位时，
//! 编码器依次触发已注册的回调，然后照常返回结果。
//!
//! # 设计原则
//!
//! - **非阻塞**: 回调运行在调用 `encode` 的线程上，禁止 I/O 与长时间持锁
//! - **构造后只读**: 回调列表在 `StateEncoderBuilder::build()` 时固定，编码期间无需同步
//! - **类型安全**: 使用 `dyn OverflowCallback` trait object，支持多种回调类型
//!
//! # 使用示例
//!
//! ```rust
//! use percept_encoder::hooks::{HookManager, OverflowCallback};
//! use percept_encoder::ChannelOverflowHook;
//! use std::sync::Arc;
//!
//! let mut hooks = HookManager::new();
//!
//! let (hook, _rx) = ChannelOverflowHook::new();
//! let callback = Arc::new(hook) as Arc<dyn OverflowCallback>;
//! hooks.add_callback(callback);
//! assert_eq!(hooks.len(), 1);
//! ```

use percept_protocol::{HashScheme, RobotState};
use std::fmt;
use std::sync::Arc;

/// 溢出类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowKind {
    /// 哈希超出方案上界（`Percept16` 即 >= 65536），无法作为表索引
    HashBudget,
    /// 哈希仍在上界内，但某个探针桶值超过 15，进位污染了相邻字段
    FieldCarry,
}

/// 溢出事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowEvent {
    /// 溢出类型
    pub kind: OverflowKind,
    /// 产生溢出的方案
    pub scheme: HashScheme,
    /// 原始哈希值
    pub hash: u64,
    /// 方案上界（不含）
    pub max_hash_size: u64,
    /// 完整的编码结果
    pub state: RobotState,
}

impl OverflowEvent {
    /// 检测编码结果是否需要诊断，正常结果返回 `None`
    ///
    /// 上界溢出优先于字段进位。
    pub fn detect(state: &RobotState) -> Option<Self> {
        let kind = if state.is_overflow() {
            OverflowKind::HashBudget
        } else if state.has_field_carry() {
            OverflowKind::FieldCarry
        } else {
            return None;
        };

        Some(Self {
            kind,
            scheme: state.scheme(),
            hash: state.hash(),
            max_hash_size: state.scheme().max_hash_size(),
            state: *state,
        })
    }
}

/// 溢出回调 Trait
///
/// # 性能要求
///
/// - **非阻塞**: 推荐使用 `crossbeam_channel::Sender::try_send` 转交后台处理
/// - **不得 panic**: 编码路径承诺不中断调用方
///
/// # 示例
///
/// ```rust
/// use percept_encoder::hooks::{OverflowCallback, OverflowEvent};
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// struct CountingCallback {
///     count: AtomicU64,
/// }
///
/// impl OverflowCallback for CountingCallback {
///     fn on_overflow(&self, _event: &OverflowEvent) {
///         self.count.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait OverflowCallback: Send + Sync {
    /// 当编码结果需要诊断时调用（见 [`OverflowKind`]）
    fn on_overflow(&self, event: &OverflowEvent);
}

/// 钩子管理器
///
/// 管理溢出回调列表。列表本身不做内部同步：
/// 编码器在构造完成后只读取它，因此可以在多线程间共享。
#[derive(Default)]
pub struct HookManager {
    /// 回调列表
    callbacks: Vec<Arc<dyn OverflowCallback>>,
}

impl HookManager {
    /// 创建新的钩子管理器
    #[must_use]
    pub const fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// 添加回调
    pub fn add_callback(&mut self, callback: Arc<dyn OverflowCallback>) {
        self.callbacks.push(callback);
    }

    /// 移除所有回调
    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    /// 触发所有回调
    pub fn trigger_all(&self, event: &OverflowEvent) {
        for callback in self.callbacks.iter() {
            callback.on_overflow(event);
        }
    }

    /// 获取回调数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// 检查是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for HookManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookManager")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
