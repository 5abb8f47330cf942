//! 配置加载
//!
//! 命令行 `--config` 优先；否则读取用户配置目录下的 `percept/encoder.toml`，
//! 文件不存在时使用默认配置。

use anyhow::{Context, Result};
use percept_encoder::EncoderConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 默认配置文件路径
fn default_config_file() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("percept");
    path.push("encoder.toml");
    Some(path)
}

/// 加载编码器配置
pub fn load_encoder_config(explicit: Option<&Path>) -> Result<EncoderConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading encoder config");
        return EncoderConfig::load_from_file(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()));
    }

    match default_config_file() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading default encoder config");
            EncoderConfig::load_from_file(&path)
                .with_context(|| format!("读取配置文件失败: {}", path.display()))
        },
        _ => Ok(EncoderConfig::default()),
    }
}
