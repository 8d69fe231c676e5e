use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 默认演示数组（有序，10 个元素）
pub const DEFAULT_VALUES: [i64; 10] = [3, 7, 12, 18, 24, 31, 45, 52, 67, 89];

/// 速度下限/上限（单位：0.1x）
pub const MIN_SPEED_TENTHS: u8 = 5;
pub const MAX_SPEED_TENTHS: u8 = 30;
const DEFAULT_SPEED_TENTHS: u8 = 10;

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    #[serde(alias = "binary_search")]
    Binary,
    #[serde(alias = "linear_search")]
    Linear,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Binary, Algorithm::Linear];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Binary => "Binary Search",
            Algorithm::Linear => "Linear Search",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Algorithm::Binary => Algorithm::Linear,
            Algorithm::Linear => Algorithm::Binary,
        }
    }

    pub fn prev(self) -> Self {
        // 只有两种算法，前后切换等价
        self.next()
    }

    /// 伪代码面板文本
    pub fn pseudocode(self) -> &'static str {
        match self {
            Algorithm::Binary => BINARY_PSEUDOCODE,
            Algorithm::Linear => LINEAR_PSEUDOCODE,
        }
    }
}

const BINARY_PSEUDOCODE: &str = "\
function binarySearch(arr, target):
    left = 0
    right = arr.length - 1

    while left <= right:
        mid = floor((left + right) / 2)

        if arr[mid] == target:
            return mid // Found!

        else if arr[mid] < target:
            left = mid + 1 // Search right

        else:
            right = mid - 1 // Search left

    return -1 // Not found";

const LINEAR_PSEUDOCODE: &str = "\
function linearSearch(arr, target):
    for i = 0 to arr.length - 1:

        if arr[i] == target:
            return i // Found!

    return -1 // Not found";

/// 柱状条的可视状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarState {
    #[default]
    Default,
    Current,
    Visited,
    Found,
}

/// 被搜索的有序数组，运行期间不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArray {
    values: Vec<i64>,
}

impl SearchArray {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for SearchArray {
    fn default() -> Self {
        Self::new(DEFAULT_VALUES.to_vec())
    }
}

/// 动画速度倍率，以 0.1x 为单位存储，范围 [0.5, 3.0]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Speed {
    tenths: u8,
}

impl Speed {
    pub fn from_tenths(tenths: u8) -> Self {
        Self {
            tenths: tenths.clamp(MIN_SPEED_TENTHS, MAX_SPEED_TENTHS),
        }
    }

    pub fn from_factor(factor: f64) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        let tenths = (factor * 10.0)
            .round()
            .clamp(f64::from(MIN_SPEED_TENTHS), f64::from(MAX_SPEED_TENTHS));
        Self::from_tenths(tenths as u8)
    }

    pub fn tenths(self) -> u8 {
        self.tenths
    }

    pub fn factor(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn faster(self) -> Self {
        Self::from_tenths(self.tenths.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Self::from_tenths(self.tenths.saturating_sub(1))
    }

    /// 按倍率缩放基准延迟：base / factor（整数纳秒运算，无浮点误差）
    pub fn scale(self, base: std::time::Duration) -> std::time::Duration {
        let nanos = base.as_nanos() * 10 / u128::from(self.tenths);
        std::time::Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self {
            tenths: DEFAULT_SPEED_TENTHS,
        }
    }
}

impl From<f64> for Speed {
    fn from(factor: f64) -> Self {
        Self::from_factor(factor)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> Self {
        speed.factor()
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x", self.factor())
    }
}

/// 主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

/// 用户偏好（不包含数组数据）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub theme: ThemeKind,
    #[serde(default)]
    pub speed: Speed,
    #[serde(default)]
    pub last_target: String,
}

/// TOML 文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub meta: SettingsMeta,
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsMeta {
    pub version: String,
    pub saved_at: DateTime<Local>,
}

impl SettingsData {
    pub fn new(settings: Settings) -> Self {
        Self {
            meta: SettingsMeta {
                version: SETTINGS_VERSION.to_string(),
                saved_at: Local::now(),
            },
            settings,
        }
    }
}

pub const SETTINGS_VERSION: &str = "1.0";

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_speed_clamps_and_rounds() {
        assert_eq!(Speed::from_factor(0.1).tenths(), MIN_SPEED_TENTHS);
        assert_eq!(Speed::from_factor(9.0).tenths(), MAX_SPEED_TENTHS);
        assert_eq!(Speed::from_factor(1.26).tenths(), 13);
        assert_eq!(Speed::from_factor(f64::NAN), Speed::default());
    }

    #[test]
    fn test_speed_steps_stop_at_bounds() {
        let mut speed = Speed::from_tenths(29);
        speed = speed.faster().faster();
        assert_eq!(speed.tenths(), MAX_SPEED_TENTHS);

        let mut speed = Speed::from_tenths(6);
        speed = speed.slower().slower().slower();
        assert_eq!(speed.tenths(), MIN_SPEED_TENTHS);
    }

    #[test]
    fn test_speed_scale_divides_delay() {
        let base = Duration::from_millis(800);
        let normal = Speed::from_factor(1.0).scale(base);
        let double = Speed::from_factor(2.0).scale(base);
        let half = Speed::from_factor(0.5).scale(base);

        assert_eq!(normal, base);
        assert_eq!(double, normal / 2);
        assert_eq!(half, base * 2);
    }

    #[test]
    fn test_speed_display() {
        assert_eq!(Speed::default().to_string(), "1.0x");
        assert_eq!(Speed::from_tenths(25).to_string(), "2.5x");
    }

    #[test]
    fn test_algorithm_cycle_and_names() {
        assert_eq!(Algorithm::Binary.next(), Algorithm::Linear);
        assert_eq!(Algorithm::Linear.next(), Algorithm::Binary);
        assert_eq!(Algorithm::Binary.name(), "Binary Search");
        assert!(Algorithm::Linear.pseudocode().starts_with("function linearSearch"));
        assert!(Algorithm::Binary.pseudocode().contains("mid = floor"));
    }

    #[test]
    fn test_default_array_is_sorted() {
        let array = SearchArray::default();
        assert_eq!(array.len(), 10);
        assert!(array.values().windows(2).all(|w| w[0] < w[1]));
    }
}
