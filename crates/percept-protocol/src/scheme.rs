//! 命名哈希方案注册表
//!
//! 默认方案 `Percept16` 使用完整的 16 位布局；其余三个方案来自早期实验，
//! 只编码冰球标志与中探针（`Original` 另加左右探针与中探针的比较位），
//! 哈希空间更小。

use std::fmt;
use std::str::FromStr;

use crate::ProtocolError;
use crate::layout::{
    BIT_OBS_LEFT, BIT_OBS_RIGHT, BIT_PUCK_LEFT, BIT_PUCK_RIGHT, HASH_LIMIT, SCALAR_LEVELS,
    SHIFT_SCALAR_LEFT, SHIFT_SCALAR_MID, SHIFT_SCALAR_RIGHT, place_bucket, presence_bit, quantize,
};
use crate::snapshot::SensorSnapshot;

/// 哈希方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashScheme {
    /// 4 个存在标志 + 3 个 4 位探针字段（加法合并），上界 1<<16
    #[default]
    Percept16,
    /// 冰球标志 + 左/右与中探针比较位 + 中探针 16 级，上界 1<<8
    Original,
    /// 冰球标志 + 中探针 4 级，上界 1<<4
    PuckMid4,
    /// 冰球标志 + 中探针 16 级，上界 1<<6
    PuckMid16,
}

impl HashScheme {
    /// 全部已注册方案
    pub const ALL: [HashScheme; 4] = [
        HashScheme::Percept16,
        HashScheme::Original,
        HashScheme::PuckMid4,
        HashScheme::PuckMid16,
    ];

    /// 注册表中的名称
    pub const fn name(self) -> &'static str {
        match self {
            HashScheme::Percept16 => "Percept16",
            HashScheme::Original => "Original",
            HashScheme::PuckMid4 => "PuckMid4",
            HashScheme::PuckMid16 => "PuckMid16",
        }
    }

    /// 哈希取值上界（不含）
    pub const fn max_hash_size(self) -> u64 {
        match self {
            HashScheme::Percept16 => HASH_LIMIT,
            HashScheme::Original => 1 << 8,
            HashScheme::PuckMid4 => 1 << 4,
            HashScheme::PuckMid16 => 1 << 6,
        }
    }

    /// 计算快照的哈希值
    ///
    /// 不检查上界：结果可能 `>= max_hash_size()`，由调用方决定如何报告。
    pub fn hash(self, snapshot: &SensorSnapshot) -> u64 {
        match self {
            HashScheme::Percept16 => percept16(snapshot),
            HashScheme::Original => original(snapshot),
            HashScheme::PuckMid4 => puck_mid(snapshot, 4),
            HashScheme::PuckMid16 => puck_mid(snapshot, 16),
        }
    }
}

fn percept16(s: &SensorSnapshot) -> u64 {
    let mut sum = 0u64;

    sum += presence_bit(s.left_red_puck.count, BIT_PUCK_LEFT);
    sum += presence_bit(s.right_red_puck.count, BIT_PUCK_RIGHT);
    sum += presence_bit(s.left_obstacle.count, BIT_OBS_LEFT);
    sum += presence_bit(s.right_obstacle.count, BIT_OBS_RIGHT);

    let left = quantize(s.left_probe.nest_value, SCALAR_LEVELS);
    let right = quantize(s.right_probe.nest_value, SCALAR_LEVELS);
    let mid = quantize(s.centre_probe.nest_value, SCALAR_LEVELS);

    // 加法而非按位或：越界桶值会进位到相邻字段
    sum = sum.saturating_add(place_bucket(left, SHIFT_SCALAR_LEFT));
    sum = sum.saturating_add(place_bucket(right, SHIFT_SCALAR_RIGHT));
    sum.saturating_add(place_bucket(mid, SHIFT_SCALAR_MID))
}

fn original(s: &SensorSnapshot) -> u64 {
    let mid_nest = s.centre_probe.nest_value;
    let mut sum = 0u64;

    sum += presence_bit(s.left_red_puck.count, 0);
    sum += presence_bit(s.right_red_puck.count, 1);
    sum += if s.left_probe.nest_value < mid_nest { 0 } else { 1 << 2 };
    sum += if s.right_probe.nest_value < mid_nest { 0 } else { 1 << 3 };

    let mid = quantize(mid_nest, 16).min(15);
    sum.saturating_add(place_bucket(mid, 4))
}

fn puck_mid(s: &SensorSnapshot, levels: u32) -> u64 {
    let mut sum = 0u64;

    sum += presence_bit(s.left_red_puck.count, 0);
    sum += presence_bit(s.right_red_puck.count, 1);

    // nestValue == 1.0 归入最高桶
    let mid = quantize(s.centre_probe.nest_value, levels).min(u64::from(levels) - 1);
    sum.saturating_add(place_bucket(mid, 2))
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashScheme {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ProtocolError::UnknownScheme {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(pl: u32, pr: u32, ol: u32, or: u32, l: f64, r: f64, m: f64) -> SensorSnapshot {
        SensorSnapshot::from_parts(pl, pr, ol, or, l, r, m)
    }

    #[test]
    fn test_lookup_by_name() {
        for scheme in HashScheme::ALL {
            assert_eq!(scheme.name().parse::<HashScheme>().unwrap(), scheme);
            assert_eq!(scheme.to_string(), scheme.name());
        }

        // 名称区分大小写
        assert!(matches!(
            "original".parse::<HashScheme>(),
            Err(ProtocolError::UnknownScheme { .. })
        ));
    }

    #[test]
    fn test_default_is_percept16() {
        assert_eq!(HashScheme::default(), HashScheme::Percept16);
        assert_eq!(HashScheme::default().max_hash_size(), 65536);
    }

    #[test]
    fn test_percept16_layout() {
        let s = HashScheme::Percept16;
        assert_eq!(s.hash(&snap(0, 0, 0, 0, 0.0, 0.0, 0.0)), 0);
        assert_eq!(s.hash(&snap(1, 1, 1, 1, 0.0, 0.0, 0.0)), 0x0F);
        assert_eq!(s.hash(&snap(0, 0, 0, 0, 1.0, 0.0, 0.0)), 240);
        assert_eq!(s.hash(&snap(0, 0, 0, 0, 0.5, 0.0, 0.0)), 112);
        assert_eq!(s.hash(&snap(0, 0, 0, 0, 0.0, 1.0, 0.0)), 15 << 8);
        assert_eq!(s.hash(&snap(0, 0, 0, 0, 0.0, 0.0, 1.0)), 15 << 12);
        assert_eq!(s.hash(&snap(3, 9, 1, 5, 1.0, 1.0, 1.0)), 0xFFFF);
    }

    #[test]
    fn test_percept16_carry_into_neighbour() {
        // 左探针 1.2 -> 桶 18 = 0b1_0010，进位到右探针字段
        let hash = HashScheme::Percept16.hash(&snap(0, 0, 0, 0, 1.2, 0.0, 0.0));
        assert_eq!(hash, 18 << 4);
        assert_eq!((hash >> 8) & 0x0F, 1);
    }

    #[test]
    fn test_original_scheme() {
        let s = HashScheme::Original;
        // 左右探针都 >= 中探针（相等也计入）
        assert_eq!(s.hash(&snap(0, 0, 0, 0, 0.0, 0.0, 0.0)), 0b1100);
        // 左右都小于中探针；中 0.5 -> 桶 8
        assert_eq!(s.hash(&snap(1, 0, 0, 0, 0.1, 0.2, 0.5)), 1 + (8 << 4));
        // 中探针 1.0 钳位到 15，障碍物不参与
        assert_eq!(s.hash(&snap(0, 1, 4, 4, 0.0, 1.0, 1.0)), 2 + 8 + (15 << 4));
        assert!(s.hash(&snap(1, 1, 0, 0, 1.0, 1.0, 1.0)) < s.max_hash_size());
    }

    #[test]
    fn test_puck_mid_schemes() {
        assert_eq!(HashScheme::PuckMid4.hash(&snap(1, 1, 0, 0, 0.0, 0.0, 0.5)), 3 + (2 << 2));
        assert_eq!(HashScheme::PuckMid4.hash(&snap(0, 0, 0, 0, 0.0, 0.0, 1.0)), 3 << 2);
        assert_eq!(HashScheme::PuckMid16.hash(&snap(0, 1, 0, 0, 0.0, 0.0, 0.25)), 2 + (4 << 2));
        assert_eq!(HashScheme::PuckMid16.hash(&snap(1, 1, 0, 0, 0.0, 0.0, 1.0)), 63);
    }
}
