//! 搜索步骤序列器
//!
//! 把算法的执行过程展开成一串确定的 [`Step`]：
//! - `Mark`: 将某个柱状条置为指定状态，然后暂停
//! - `Finish`: 暂停后报告结果，总是最后一步且只出现一次
//!
//! 每个 `Current` 标记计为一次比较。暂停时长是 1.0x 下的基准值，
//! 由 [`runner`] 在播放时按速度倍率缩放。

pub mod algorithms;
pub mod runner;

use std::time::Duration;

use crate::models::{Algorithm, BarState};

pub use algorithms::{binary_search, linear_search};

/// 标记为 Current 后的停顿
pub const CURRENT_PAUSE: Duration = Duration::from_millis(800);
/// 二分查找标记 Visited 后的停顿
pub const BINARY_VISITED_PAUSE: Duration = Duration::from_millis(400);
/// 线性查找标记 Visited 后的停顿
pub const LINEAR_VISITED_PAUSE: Duration = Duration::from_millis(300);
/// 未找到时结束前的停顿
pub const NOT_FOUND_PAUSE: Duration = Duration::from_millis(500);

/// 搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found(usize),
    NotFound,
}

/// 单个动画步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Mark {
        index: usize,
        state: BarState,
        pause: Duration,
    },
    Finish {
        outcome: Outcome,
        pause: Duration,
    },
}

impl Step {
    pub fn pause(&self) -> Duration {
        match self {
            Step::Mark { pause, .. } | Step::Finish { pause, .. } => *pause,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Step::Mark {
                state: BarState::Current,
                ..
            }
        )
    }
}

/// 一次运行的完整步骤序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    pub steps: Vec<Step>,
    pub comparisons: usize,
    pub outcome: Outcome,
}

impl SearchTrace {
    /// 按 1.0x 计算的总时长
    pub fn total_pause(&self) -> Duration {
        self.steps.iter().map(Step::pause).sum()
    }

    /// 依次被检查（标记为 Current）的下标
    pub fn probes(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter(|step| step.is_comparison())
            .filter_map(|step| match step {
                Step::Mark { index, .. } => Some(*index),
                Step::Finish { .. } => None,
            })
            .collect()
    }
}

/// 构建步骤序列时使用的记录器
#[derive(Debug, Default)]
pub(crate) struct TraceBuilder {
    steps: Vec<Step>,
    comparisons: usize,
}

impl TraceBuilder {
    pub(crate) fn mark(&mut self, index: usize, state: BarState, pause: Duration) {
        if state == BarState::Current {
            self.comparisons += 1;
        }
        self.steps.push(Step::Mark {
            index,
            state,
            pause,
        });
    }

    pub(crate) fn finish(mut self, outcome: Outcome) -> SearchTrace {
        let pause = match outcome {
            Outcome::Found(_) => Duration::ZERO,
            Outcome::NotFound => NOT_FOUND_PAUSE,
        };
        self.steps.push(Step::Finish { outcome, pause });
        SearchTrace {
            steps: self.steps,
            comparisons: self.comparisons,
            outcome,
        }
    }
}

/// 按算法生成步骤序列
pub fn plan(algorithm: Algorithm, values: &[i64], target: i64) -> SearchTrace {
    match algorithm {
        Algorithm::Binary => binary_search(values, target),
        Algorithm::Linear => linear_search(values, target),
    }
}
