//! # 编码器配置
//!
//! 从 TOML 文件加载：
//!
//! ```toml
//! scheme = "Percept16"
//! warn_on_overflow = true
//! ```
//!
//! 缺省字段取默认值；未知方案名在加载时报错。

use crate::error::EncoderError;
use percept_protocol::HashScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 编码器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// 哈希方案
    pub scheme: HashScheme,

    /// 溢出时是否输出 `warn!` 日志（钩子不受影响，始终触发）
    pub warn_on_overflow: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            scheme: HashScheme::Percept16,
            warn_on_overflow: true,
        }
    }
}

impl EncoderConfig {
    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self, EncoderError> {
        Ok(toml::from_str(content)?)
    }

    /// 序列化为 TOML 字符串
    pub fn to_toml_string(&self) -> Result<String, EncoderError> {
        Ok(toml::to_string(self)?)
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, EncoderError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EncoderError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
