//! # Percept Protocol
//!
//! 机器人感知快照到 16 位状态标识的编码定义（无日志、无 I/O 依赖）
//!
//! ## 模块
//!
//! - `snapshot`: 传感器快照（外部输入）
//! - `layout`: 16 位哈希位布局、量化函数、保留常量
//! - `scheme`: 命名哈希方案注册表
//! - `state`: `RobotState` 值对象
//!
//! ## 位序
//!
//! 哈希按 LSB first 排列：低 4 位为存在标志，其后三个 4 位字段为
//! 左/右/中探针的量化值。各字段以**加法**合并，而非按位或，
//! 因此超出 1.0 的探针值会进位污染相邻字段。

pub mod layout;
pub mod scheme;
pub mod snapshot;
pub mod state;

// 重新导出常用类型
pub use layout::*;
pub use scheme::HashScheme;
pub use snapshot::{PresenceReading, ProbeReading, SensorSnapshot};
pub use state::RobotState;

use thiserror::Error;

/// 协议层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("Unknown hash scheme: {name}")]
    UnknownScheme { name: String },

    #[error("Hash {hash} does not fit the scheme budget of {max}")]
    HashOverflow { hash: u64, max: u64 },

    #[error("Value out of range for field {field}: {value}")]
    OutOfRange { field: String, value: f64 },
}
