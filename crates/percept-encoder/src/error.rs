//! 编码器层错误类型定义
//!
//! 编码本身不会失败；这些错误只来自配置加载与方案查找。

use percept_protocol::ProtocolError;
use thiserror::Error;

/// 编码器层错误类型
#[derive(Error, Debug)]
pub enum EncoderError {
    /// 协议层错误（未知方案等）
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// 配置文件读写失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置解析失败
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// 配置序列化失败
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::EncoderError;
    use percept_protocol::ProtocolError;

    #[test]
    fn test_encoder_error_display() {
        let err = EncoderError::from(ProtocolError::UnknownScheme {
            name: "Mid8".to_string(),
        });
        let msg = format!("{}", err);
        assert!(msg.contains("Protocol error"), "message: {}", msg);
        assert!(msg.contains("Mid8"), "message: {}", msg);

        let err = EncoderError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(format!("{}", err).contains("IO error"));
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse_err = toml::from_str::<toml::Table>("scheme = ").unwrap_err();
        let err = EncoderError::from(parse_err);
        assert!(matches!(err, EncoderError::Config(_)));
    }
}
