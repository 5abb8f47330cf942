//! 16 位状态哈希的位布局定义
//!
//! 包含位偏移常量、量化函数，以及用于解码索引的 bilge 位域结构。

use bilge::prelude::*;

// ============================================================================
// 位偏移常量
// ============================================================================

/// 左侧红色冰球存在标志（Bit 0）
pub const BIT_PUCK_LEFT: u32 = 0;
/// 右侧红色冰球存在标志（Bit 1）
pub const BIT_PUCK_RIGHT: u32 = 1;
/// 左侧障碍物存在标志（Bit 2）
pub const BIT_OBS_LEFT: u32 = 2;
/// 右侧障碍物存在标志（Bit 3）
pub const BIT_OBS_RIGHT: u32 = 3;

/// 左探针量化字段起始位（Bit 4-7）
pub const SHIFT_SCALAR_LEFT: u32 = 4;
/// 右探针量化字段起始位（Bit 8-11）
pub const SHIFT_SCALAR_RIGHT: u32 = 8;
/// 中探针量化字段起始位（Bit 12-15）
pub const SHIFT_SCALAR_MID: u32 = 12;

/// 探针量化倍数：`nestValue * 15` 截断后落入 0-15
pub const SCALAR_LEVELS: u32 = 15;

/// 单个 4 位字段可容纳的最大桶值
pub const FIELD_MAX: u64 = 0x0F;

/// 16 位哈希的取值上界（不含）
pub const HASH_LIMIT: u64 = 1 << 16;

/// 保留查找表（16 项，全零）
///
/// 哈希计算从不读写此表，仅作为扩展编码方案的占位常量。
pub const RESERVED_HASH_BITS: [u8; 16] = [0; 16];

// ============================================================================
// 量化与标志位
// ============================================================================

/// 将探针值乘以 `levels` 后向零截断
///
/// `1.0` 恰好落在最高桶 `levels`；大于 1.0 的输入产生超出 4 位字段的桶值。
///
/// 负数与 NaN 不属于定义域，转换时饱和为 0；过大的值饱和为 `u64::MAX`。
#[inline]
pub fn quantize(value: f64, levels: u32) -> u64 {
    (value * f64::from(levels)).trunc() as u64
}

/// 计数非零时返回 `1 << bit`，否则返回 0
#[inline]
pub fn presence_bit(count: u32, bit: u32) -> u64 {
    if count == 0 { 0 } else { 1 << bit }
}

/// 将桶值左移到字段位置（饱和乘法，求和永不回绕）
#[inline]
pub fn place_bucket(bucket: u64, shift: u32) -> u64 {
    bucket.saturating_mul(1 << shift)
}

// ============================================================================
// 位域结构定义（使用 bilge）
// ============================================================================

/// 16 位状态索引的位域视图
///
/// 布局（LSB first）：
/// - Bit 0: 左侧冰球
/// - Bit 1: 右侧冰球
/// - Bit 2: 左侧障碍物
/// - Bit 3: 右侧障碍物
/// - Bit 4-7: 左探针桶
/// - Bit 8-11: 右探针桶
/// - Bit 12-15: 中探针桶
///
/// 只用于解码：编码始终走加法路径，见 [`HashScheme::Percept16`](crate::HashScheme)。
#[bitsize(16)]
#[derive(FromBits, DebugBits, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateHashBits {
    pub puck_left: bool,  // Bit 0
    pub puck_right: bool, // Bit 1
    pub obs_left: bool,   // Bit 2
    pub obs_right: bool,  // Bit 3
    pub scalar_left: u4,  // Bit 4-7
    pub scalar_right: u4, // Bit 8-11
    pub scalar_mid: u4,   // Bit 12-15
}

/// 将 16 位索引拆回四个标志与三个桶值
pub fn decode_index(index: u16) -> StateHashBits {
    StateHashBits::from(index)
}
