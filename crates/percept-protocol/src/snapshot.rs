//! 传感器快照（外部输入）
//!
//! 由传感器子系统（物理传感器、仿真环境或回放日志）产生。
//! 启用 `serde` feature 后按 camelCase 字段名（`leftRedPuck.count`、
//! `centreProbe.nestValue` 等）序列化。

use crate::ProtocolError;

/// 存在型传感器读数（只关心零/非零）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresenceReading {
    pub count: u32,
}

impl PresenceReading {
    pub const fn new(count: u32) -> Self {
        Self { count }
    }
}

/// 标量探针读数，正常范围 [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProbeReading {
    pub nest_value: f64,
}

impl ProbeReading {
    pub const fn new(nest_value: f64) -> Self {
        Self { nest_value }
    }
}

/// 一个决策时刻的完整感知快照
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SensorSnapshot {
    pub left_red_puck: PresenceReading,
    pub right_red_puck: PresenceReading,
    pub left_obstacle: PresenceReading,
    pub right_obstacle: PresenceReading,
    pub left_probe: ProbeReading,
    pub right_probe: ProbeReading,
    pub centre_probe: ProbeReading,
}

impl SensorSnapshot {
    /// 按 左/右冰球、左/右障碍物、左/右/中探针 的顺序构造快照
    pub const fn from_parts(
        puck_left: u32,
        puck_right: u32,
        obs_left: u32,
        obs_right: u32,
        scalar_left: f64,
        scalar_right: f64,
        scalar_mid: f64,
    ) -> Self {
        Self {
            left_red_puck: PresenceReading::new(puck_left),
            right_red_puck: PresenceReading::new(puck_right),
            left_obstacle: PresenceReading::new(obs_left),
            right_obstacle: PresenceReading::new(obs_right),
            left_probe: ProbeReading::new(scalar_left),
            right_probe: ProbeReading::new(scalar_right),
            centre_probe: ProbeReading::new(scalar_mid),
        }
    }

    /// 检查三个探针值是否为 [0.0, 1.0] 内的有限数
    ///
    /// 编码路径从不调用此方法：越界值照常编码并由溢出诊断报告。
    /// 仅供希望在输入端严格校验的调用方使用。
    pub fn validate(&self) -> Result<(), ProtocolError> {
        let probes = [
            ("leftProbe.nestValue", self.left_probe.nest_value),
            ("rightProbe.nestValue", self.right_probe.nest_value),
            ("centreProbe.nestValue", self.centre_probe.nest_value),
        ];

        for (field, value) in probes {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProtocolError::OutOfRange {
                    field: field.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}
