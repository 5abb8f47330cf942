//! 编码器层模块
//!
//! 本模块将传感器快照编码为 `RobotState`，并负责溢出诊断，包括：
//! - `StateEncoder`：无状态、可跨线程共享的编码器
//! - Builder 模式构造（方案、日志开关、钩子）
//! - 钩子系统：溢出时触发的非阻塞回调
//! - TOML 配置加载
//!
//! # 溢出策略
//!
//! 哈希超出方案上界，或探针桶值进位污染相邻字段时，只报告、不拦截：
//! 记录 `tracing::warn!`、触发所有钩子，然后原样返回结果。
//! 编码路径永不 panic，也不返回错误。

mod builder;
pub mod channel_hook;
pub mod config;
mod encoder;
mod error;
pub mod hooks;

pub use builder::StateEncoderBuilder;
pub use channel_hook::ChannelOverflowHook;
pub use config::EncoderConfig;
pub use encoder::{StateEncoder, encode};
pub use error::EncoderError;
pub use hooks::{HookManager, OverflowCallback, OverflowEvent, OverflowKind};

pub use percept_protocol::{
    HashScheme, PresenceReading, ProbeReading, ProtocolError, RobotState, SensorSnapshot,
    StateHashBits,
};
