//! 基于 Channel 的溢出钩子
//!
//! 将溢出事件通过有界通道转交给后台线程处理（汇总、落盘等）。
//!
//! - **Bounded Queue**: 防止异常输入流导致内存无限增长
//! - **非阻塞**: 使用 `try_send`，队列满时丢弃事件而非阻塞编码线程
//! - **丢弃监控**: 提供 `dropped_events` 计数器
//!
//! # 使用示例
//!
//! ```rust
//! use percept_encoder::{ChannelOverflowHook, SensorSnapshot, StateEncoder};
//! use std::sync::Arc;
//!
//! let (hook, rx) = ChannelOverflowHook::new();
//! let encoder = StateEncoder::builder().hook(Arc::new(hook)).build();
//!
//! let snapshot = SensorSnapshot::from_parts(0, 0, 0, 0, 0.0, 0.0, 2.0);
//! let state = encoder.encode(&snapshot);
//!
//! let event = rx.try_recv().unwrap();
//! assert_eq!(event.hash, state.hash());
//! ```

use crate::hooks::{OverflowCallback, OverflowEvent};
use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// 通道溢出钩子（有界队列）
pub struct ChannelOverflowHook {
    /// 发送端
    tx: Sender<OverflowEvent>,

    /// 队列满时丢弃的事件数
    dropped_events: Arc<AtomicU64>,

    /// 成功入队的事件数
    event_counter: Arc<AtomicU64>,
}

impl ChannelOverflowHook {
    /// 默认队列容量
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// 创建默认容量的钩子，返回 (钩子, 接收端)
    #[must_use]
    pub fn new() -> (Self, Receiver<OverflowEvent>) {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// 创建指定容量的钩子
    #[must_use]
    pub fn with_capacity(capacity: usize) -> (Self, Receiver<OverflowEvent>) {
        let (tx, rx) = bounded(capacity);
        let hook = Self {
            tx,
            dropped_events: Arc::new(AtomicU64::new(0)),
            event_counter: Arc::new(AtomicU64::new(0)),
        };
        (hook, rx)
    }

    /// 丢弃计数器（可在注册前 clone 出来持有）
    pub fn dropped_events(&self) -> &Arc<AtomicU64> {
        &self.dropped_events
    }

    /// 入队计数器
    pub fn event_counter(&self) -> &Arc<AtomicU64> {
        &self.event_counter
    }
}

impl OverflowCallback for ChannelOverflowHook {
    fn on_overflow(&self, event: &OverflowEvent) {
        if self.tx.try_send(*event).is_err() {
            self.dropped_events.fetch_add(1, Ordering::Relaxed);
        } else {
            self.event_counter.fetch_add(1, Ordering::Relaxed);
        }
    }
}
