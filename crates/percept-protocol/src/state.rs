//! `RobotState` 值对象
//!
//! 构造时一次性从快照复制七个字段并计算哈希，之后不可变。

use crate::ProtocolError;
use crate::layout::{FIELD_MAX, SCALAR_LEVELS, StateHashBits, decode_index, quantize};
use crate::scheme::HashScheme;
use crate::snapshot::SensorSnapshot;

/// 编码后的机器人状态
///
/// `hash` 以 `u64` 保存：正常输入下它落在方案上界之内，
/// 越界的探针值会让它超出 16 位，此时仍保留原始数值供诊断。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RobotState {
    puck_left: u32,
    puck_right: u32,
    obs_left: u32,
    obs_right: u32,
    scalar_left: f64,
    scalar_right: f64,
    scalar_mid: f64,
    scheme: HashScheme,
    hash: u64,
}

impl RobotState {
    /// 使用默认方案（`Percept16`）编码快照
    pub fn new(snapshot: &SensorSnapshot) -> Self {
        Self::with_scheme(snapshot, HashScheme::default())
    }

    /// 使用指定方案编码快照
    pub fn with_scheme(snapshot: &SensorSnapshot, scheme: HashScheme) -> Self {
        Self {
            puck_left: snapshot.left_red_puck.count,
            puck_right: snapshot.right_red_puck.count,
            obs_left: snapshot.left_obstacle.count,
            obs_right: snapshot.right_obstacle.count,
            scalar_left: snapshot.left_probe.nest_value,
            scalar_right: snapshot.right_probe.nest_value,
            scalar_mid: snapshot.centre_probe.nest_value,
            scheme,
            hash: scheme.hash(snapshot),
        }
    }

    pub fn puck_left(&self) -> u32 {
        self.puck_left
    }

    pub fn puck_right(&self) -> u32 {
        self.puck_right
    }

    pub fn obs_left(&self) -> u32 {
        self.obs_left
    }

    pub fn obs_right(&self) -> u32 {
        self.obs_right
    }

    pub fn scalar_left(&self) -> f64 {
        self.scalar_left
    }

    pub fn scalar_right(&self) -> f64 {
        self.scalar_right
    }

    pub fn scalar_mid(&self) -> f64 {
        self.scalar_mid
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// 原始哈希值（可能超出方案上界）
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// 哈希是否超出方案上界
    pub fn is_overflow(&self) -> bool {
        self.hash >= self.scheme.max_hash_size()
    }

    /// 是否有探针桶值超出其 4 位字段（进位污染相邻字段）
    ///
    /// 只有 `Percept16` 存在进位；其它方案把桶值钳位到最高桶。
    /// 左/右探针的进位不一定让哈希超出 16 位，需要单独检测。
    pub fn has_field_carry(&self) -> bool {
        self.scheme == HashScheme::Percept16
            && [self.scalar_left, self.scalar_right, self.scalar_mid]
                .into_iter()
                .any(|v| quantize(v, SCALAR_LEVELS) > FIELD_MAX)
    }

    /// 作为表索引使用的 16 位值
    ///
    /// # 错误
    ///
    /// 哈希超出方案上界时返回 `ProtocolError::HashOverflow`。
    pub fn index(&self) -> Result<u16, ProtocolError> {
        let max = self.scheme.max_hash_size();
        if self.hash >= max {
            return Err(ProtocolError::HashOverflow {
                hash: self.hash,
                max,
            });
        }
        // 所有方案的上界都 <= 1<<16
        Ok(self.hash as u16)
    }

    /// 按 `Percept16` 布局拆解索引
    ///
    /// 其它方案的位布局不同，返回 `None`；溢出时同样返回 `None`。
    pub fn decode(&self) -> Option<StateHashBits> {
        if self.scheme != HashScheme::Percept16 {
            return None;
        }
        self.index().ok().map(decode_index)
    }
}

impl From<&SensorSnapshot> for RobotState {
    fn from(snapshot: &SensorSnapshot) -> Self {
        Self::new(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_copied_from_snapshot() {
        let snapshot = SensorSnapshot::from_parts(2, 0, 5, 1, 0.25, 0.5, 0.75);
        let state = RobotState::new(&snapshot);

        assert_eq!(state.puck_left(), 2);
        assert_eq!(state.puck_right(), 0);
        assert_eq!(state.obs_left(), 5);
        assert_eq!(state.obs_right(), 1);
        assert_eq!(state.scalar_left(), 0.25);
        assert_eq!(state.scalar_right(), 0.5);
        assert_eq!(state.scalar_mid(), 0.75);
        assert_eq!(state.scheme(), HashScheme::Percept16);
    }

    #[test]
    fn test_hash_matches_layout() {
        // 1 + 4 + 8 + (3 << 4) + (7 << 8) + (11 << 12)
        let snapshot = SensorSnapshot::from_parts(2, 0, 5, 1, 0.25, 0.5, 0.75);
        let state = RobotState::from(&snapshot);
        assert_eq!(state.hash(), 13 + (3 << 4) + (7 << 8) + (11 << 12));
        assert!(!state.is_overflow());
        assert_eq!(state.index().unwrap() as u64, state.hash());
    }

    #[test]
    fn test_decode_roundtrips_fields() {
        let snapshot = SensorSnapshot::from_parts(0, 1, 0, 1, 1.0, 0.0, 0.5);
        let bits = RobotState::new(&snapshot).decode().unwrap();
        assert!(!bits.puck_left());
        assert!(bits.puck_right());
        assert!(!bits.obs_left());
        assert!(bits.obs_right());
        assert_eq!(bits.scalar_left().value(), 15);
        assert_eq!(bits.scalar_right().value(), 0);
        assert_eq!(bits.scalar_mid().value(), 7);
    }

    #[test]
    fn test_overflow_keeps_raw_hash() {
        let snapshot = SensorSnapshot::from_parts(0, 0, 0, 0, 0.0, 0.0, 1.5);
        let state = RobotState::new(&snapshot);

        // 1.5 * 15 = 22.5 -> 22
        assert_eq!(state.hash(), 22 << 12);
        assert!(state.is_overflow());
        assert_eq!(
            state.index(),
            Err(ProtocolError::HashOverflow {
                hash: 22 << 12,
                max: 65536,
            })
        );
        assert!(state.decode().is_none());
    }

    #[test]
    fn test_field_carry_without_budget_overflow() {
        // 左探针 1.5 -> 桶 22 -> 352，仍在 16 位内
        let snapshot = SensorSnapshot::from_parts(0, 0, 0, 0, 1.5, 0.0, 0.0);
        let state = RobotState::new(&snapshot);
        assert_eq!(state.hash(), 352);
        assert!(!state.is_overflow());
        assert!(state.has_field_carry());

        // 22 = 0b1_0110：右探针字段被进位为 1
        let bits = state.decode().unwrap();
        assert_eq!(bits.scalar_left().value(), 6);
        assert_eq!(bits.scalar_right().value(), 1);
    }

    #[test]
    fn test_no_field_carry_at_full_scale() {
        let snapshot = SensorSnapshot::from_parts(0, 0, 0, 0, 1.0, 1.0, 1.0);
        assert!(!RobotState::new(&snapshot).has_field_carry());

        // 略大于 1.0 仍截断到 15
        let snapshot = SensorSnapshot::from_parts(0, 0, 0, 0, 1.05, 0.0, 0.0);
        assert!(!RobotState::new(&snapshot).has_field_carry());

        // 其它方案钳位，无进位
        let snapshot = SensorSnapshot::from_parts(0, 0, 0, 0, 0.0, 0.0, 3.0);
        assert!(!RobotState::with_scheme(&snapshot, HashScheme::PuckMid16).has_field_carry());
    }

    #[test]
    fn test_decode_only_for_percept16() {
        let snapshot = SensorSnapshot::from_parts(1, 0, 0, 0, 0.0, 0.0, 0.5);
        let state = RobotState::with_scheme(&snapshot, HashScheme::PuckMid16);
        assert!(state.index().is_ok());
        assert!(state.decode().is_none());
    }
}
