use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::{Settings, SettingsData};

pub const APP_DIR_NAME: &str = "search-visualizer";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";
pub const LOG_FILE_NAME: &str = "search-visualizer.log";

/// 获取数据目录路径 (~/.local/share/search-visualizer/)
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(AppError::NoDataDir)?.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 从 TOML 文件加载偏好设置，文件不存在时返回默认值
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    let data: SettingsData = toml::from_str(&content)?;

    Ok(data.settings)
}

/// 加载设置；文件损坏时记录警告并回退到默认值
pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
            Settings::default()
        }
    }
}

/// 保存设置到 TOML 文件
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    let data = SettingsData::new(settings.clone());
    let content = toml::to_string_pretty(&data)?;

    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// 计算退出时需要写回的设置
///
/// `session_start` 是应用命令行参数后的设置。会话中未改动的字段保留
/// `saved` 中的值，命令行覆盖只在本次会话有效。无变化时返回 `None`。
pub fn settings_to_persist(
    saved: &Settings,
    session_start: &Settings,
    current: &Settings,
) -> Option<Settings> {
    fn pick<T: PartialEq + Clone>(saved: &T, start: &T, current: &T) -> T {
        if current == start {
            saved.clone()
        } else {
            current.clone()
        }
    }

    let merged = Settings {
        algorithm: pick(&saved.algorithm, &session_start.algorithm, &current.algorithm),
        theme: pick(&saved.theme, &session_start.theme, &current.theme),
        speed: pick(&saved.speed, &session_start.speed, &current.speed),
        last_target: current.last_target.clone(),
    };

    (merged != *saved).then_some(merged)
}
