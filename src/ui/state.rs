//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::error::InputError;
use crate::models::{Algorithm, BarState, SearchArray, Settings, Speed, ThemeKind};
use crate::search::Outcome;
use crate::search::runner::{Pacer, RunUpdate, SharedSpeed, ThreadSleep};

/// 应用状态
pub struct App {
    pub array: SearchArray,
    pub bars: Vec<BarState>,
    pub algorithm: Algorithm,
    pub theme: ThemeKind,
    pub speed: SharedSpeed,
    pub target_input: String,
    pub mode: AppMode,
    pub run_state: RunState,
    pub comparisons: usize,
    pub message: Option<String>,
    pub last_run: Option<RunSummary>,
    pub(super) active_run: Option<ActiveRun>,
    pub(super) pacer: Arc<dyn Pacer>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    EditingTarget,
    Alert(Alert),
}

/// 运行状态，Running 期间禁止再次启动
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// 弹窗级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// 阻塞式提示弹窗
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn busy() -> Self {
        Self::new(
            Severity::Info,
            "Busy",
            "Please wait until the visualization completes to change theme.",
        )
    }
}

impl From<&InputError> for Alert {
    fn from(err: &InputError) -> Self {
        let severity = match err {
            InputError::Empty => Severity::Warning,
            InputError::NotANumber(_) => Severity::Error,
        };
        Self::new(severity, err.title(), err.to_string())
    }
}

/// 一次运行结束后的摘要
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub algorithm: Algorithm,
    pub target: i64,
    pub outcome: Outcome,
    pub comparisons: usize,
    pub finished_at: DateTime<Local>,
}

impl RunSummary {
    pub fn describe(&self) -> String {
        let plural = if self.comparisons == 1 { "" } else { "s" };
        match self.outcome {
            Outcome::Found(index) => format!(
                "Found {} at index {} after {} comparison{}",
                self.target, index, self.comparisons, plural
            ),
            Outcome::NotFound => format!(
                "{} not found after {} comparison{}",
                self.target, self.comparisons, plural
            ),
        }
    }
}

/// 正在进行的运行
pub(super) struct ActiveRun {
    pub run_id: Uuid,
    pub algorithm: Algorithm,
    pub target: i64,
    pub receiver: Receiver<RunUpdate>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(settings: Settings) -> Self {
        Self::with_pacer(settings, Arc::new(ThreadSleep))
    }

    /// 使用自定义暂停策略创建（测试中使用即时暂停）
    pub fn with_pacer(settings: Settings, pacer: Arc<dyn Pacer>) -> Self {
        let array = SearchArray::default();
        Self {
            bars: vec![BarState::Default; array.len()],
            array,
            algorithm: settings.algorithm,
            theme: settings.theme,
            speed: SharedSpeed::new(settings.speed),
            target_input: settings.last_target,
            mode: AppMode::Normal,
            run_state: RunState::Idle,
            comparisons: 0,
            message: None,
            last_run: None,
            active_run: None,
            pacer,
        }
    }

    /// 当前偏好，用于退出时保存
    pub fn settings(&self) -> Settings {
        Settings {
            algorithm: self.algorithm,
            theme: self.theme,
            speed: self.speed.get(),
            last_target: self.target_input.trim().to_string(),
        }
    }

    pub fn current_speed(&self) -> Speed {
        self.speed.get()
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}
