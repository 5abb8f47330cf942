//! encode 命令
//!
//! 从命令行参数构造单个快照并输出编码结果

use anyhow::Result;
use clap::Args;
use percept_encoder::{EncoderConfig, HashScheme, RobotState, SensorSnapshot, StateEncoder};
use std::fmt::Write;

/// 编码命令参数
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// 左侧红色冰球计数
    #[arg(long, default_value_t = 0)]
    pub puck_left: u32,

    /// 右侧红色冰球计数
    #[arg(long, default_value_t = 0)]
    pub puck_right: u32,

    /// 左侧障碍物计数
    #[arg(long, default_value_t = 0)]
    pub obs_left: u32,

    /// 右侧障碍物计数
    #[arg(long, default_value_t = 0)]
    pub obs_right: u32,

    /// 左探针 nestValue（0.0-1.0）
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub left: f64,

    /// 右探针 nestValue（0.0-1.0）
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub right: f64,

    /// 中探针 nestValue（0.0-1.0）
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mid: f64,

    /// 哈希方案（覆盖配置）
    #[arg(short, long)]
    pub scheme: Option<HashScheme>,
}

impl EncodeCommand {
    fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot::from_parts(
            self.puck_left,
            self.puck_right,
            self.obs_left,
            self.obs_right,
            self.left,
            self.right,
            self.mid,
        )
    }

    /// 执行编码
    pub fn execute(&self, mut config: EncoderConfig) -> Result<()> {
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }

        let encoder = StateEncoder::builder().config(config).build();
        let state = encoder.encode(&self.snapshot());

        print!("{}", render_state(&state));
        Ok(())
    }
}

/// 格式化编码结果
pub fn render_state(state: &RobotState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "scheme: {}", state.scheme());
    let _ = writeln!(out, "hash:   {}", state.hash());

    match state.index() {
        Ok(index) => {
            let _ = writeln!(out, "index:  {}", index);
        },
        Err(_) => {
            let _ = writeln!(
                out,
                "index:  none (hash {} >= {})",
                state.hash(),
                state.scheme().max_hash_size()
            );
        },
    }

    if let Some(bits) = state.decode() {
        let _ = writeln!(
            out,
            "flags:  puck_left={} puck_right={} obs_left={} obs_right={}",
            u8::from(bits.puck_left()),
            u8::from(bits.puck_right()),
            u8::from(bits.obs_left()),
            u8::from(bits.obs_right()),
        );
        let _ = writeln!(
            out,
            "fields: left={} right={} mid={}",
            bits.scalar_left().value(),
            bits.scalar_right().value(),
            bits.scalar_mid().value(),
        );
    }

    if state.has_field_carry() {
        let _ = writeln!(out, "note:   probe bucket carried into a neighbouring field");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_in_range() {
        let state = RobotState::new(&SensorSnapshot::from_parts(1, 0, 0, 1, 1.0, 0.0, 0.5));
        let text = render_state(&state);

        assert!(text.contains("scheme: Percept16"));
        assert!(text.contains("hash:   28921"));
        assert!(text.contains("index:  28921"));
        assert!(text.contains("puck_left=1 puck_right=0 obs_left=0 obs_right=1"));
        assert!(text.contains("fields: left=15 right=0 mid=7"));
        assert!(!text.contains("note:"));
    }

    #[test]
    fn test_render_overflow() {
        let state = RobotState::new(&SensorSnapshot::from_parts(0, 0, 0, 0, 0.0, 0.0, 2.0));
        let text = render_state(&state);

        assert!(text.contains("index:  none (hash 122880 >= 65536)"));
        assert!(!text.contains("fields:"));
        assert!(text.contains("note:"));
    }

    #[test]
    fn test_render_other_scheme() {
        let snapshot = SensorSnapshot::from_parts(1, 1, 0, 0, 0.0, 0.0, 1.0);
        let state = RobotState::with_scheme(&snapshot, HashScheme::PuckMid16);
        let text = render_state(&state);

        assert!(text.contains("scheme: PuckMid16"));
        assert!(text.contains("index:  63"));
        assert!(!text.contains("flags:"));
    }
}
