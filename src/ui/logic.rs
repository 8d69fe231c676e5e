//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑、运行控制以及工作线程消息的处理

use std::sync::Arc;
use std::sync::mpsc::{self, TryRecvError};

use chrono::Local;
use uuid::Uuid;

use super::actions::Action;
use super::state::{ActiveRun, Alert, App, AppMode, RunState, RunSummary, Severity};
use crate::models::{Algorithm, BarState, Speed};
use crate::search::runner::{RunUpdate, spawn_run};
use crate::search::{Step, plan};
use crate::validation::parse_target;

const BUSY_MESSAGE: &str = "A search is running, wait for it to finish";

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::NextAlgorithm => self.select_algorithm(self.algorithm.next()),
            Action::PrevAlgorithm => self.select_algorithm(self.algorithm.prev()),
            Action::SpeedUp => self.set_speed(self.current_speed().faster()),
            Action::SpeedDown => self.set_speed(self.current_speed().slower()),
            Action::ToggleTheme => self.toggle_theme(),

            Action::StartRun => self.start_run(),
            Action::Reset => self.reset(),

            Action::StartEditTarget => {
                self.mode = AppMode::EditingTarget;
                self.message = None;
            }
            Action::Input(c) => {
                if self.mode == AppMode::EditingTarget {
                    self.target_input.push(c);
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::EditingTarget {
                    self.target_input.pop();
                }
            }

            Action::Submit => {
                if self.mode == AppMode::EditingTarget {
                    self.mode = AppMode::Normal;
                    self.start_run();
                }
            }
            Action::Cancel | Action::Dismiss => self.mode = AppMode::Normal,
        }
        false
    }

    // ============ 选项相关 ============

    /// 切换算法（运行中不允许）
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        if self.is_running() {
            self.message = Some(BUSY_MESSAGE.to_string());
            return;
        }
        self.algorithm = algorithm;
        self.message = None;
        tracing::debug!(algorithm = algorithm.name(), "algorithm selected");
    }

    /// 调整速度，运行中同样生效
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed.set(speed);
        tracing::trace!(%speed, "speed changed");
    }

    /// 切换主题；运行中弹出提示
    pub fn toggle_theme(&mut self) {
        if self.is_running() {
            self.mode = AppMode::Alert(Alert::busy());
            return;
        }
        self.theme = self.theme.toggled();
        tracing::debug!(theme = ?self.theme, "theme toggled");
    }

    // ============ 运行相关 ============

    /// 校验输入并启动一次运行
    pub fn start_run(&mut self) {
        if self.is_running() {
            self.message = Some(BUSY_MESSAGE.to_string());
            return;
        }

        let target = match parse_target(&self.target_input) {
            Ok(target) => target,
            Err(err) => {
                tracing::info!(input = %self.target_input, error = %err, "rejected search target");
                self.mode = AppMode::Alert(Alert::from(&err));
                return;
            }
        };

        self.clear_bars();

        let run_id = Uuid::new_v4();
        let trace = plan(self.algorithm, self.array.values(), target);
        let (sender, receiver) = mpsc::channel();

        match spawn_run(
            run_id,
            trace,
            self.speed.clone(),
            Arc::clone(&self.pacer),
            sender,
        ) {
            Ok(_) => {
                tracing::info!(
                    %run_id,
                    algorithm = self.algorithm.name(),
                    target,
                    speed = %self.current_speed(),
                    "run started"
                );
                self.active_run = Some(ActiveRun {
                    run_id,
                    algorithm: self.algorithm,
                    target,
                    receiver,
                });
                self.run_state = RunState::Running;
                self.message = Some(format!("Searching for {target}..."));
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to spawn search thread");
                self.mode = AppMode::Alert(Alert::new(
                    Severity::Error,
                    "Run Failed",
                    format!("Could not start the search: {err}"),
                ));
            }
        }
    }

    /// 重置柱状条与计数（运行中不允许）
    pub fn reset(&mut self) {
        if self.is_running() {
            self.message = Some(BUSY_MESSAGE.to_string());
            return;
        }
        self.clear_bars();
        self.message = None;
    }

    fn clear_bars(&mut self) {
        self.bars.fill(BarState::Default);
        self.comparisons = 0;
    }

    /// 取出工作线程发来的全部更新并应用，在每次绘制前调用
    pub fn poll_run(&mut self) {
        loop {
            let Some(run) = &self.active_run else {
                return;
            };
            match run.receiver.try_recv() {
                Ok(update) => self.apply_update(update),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    // 工作线程未发送 Finish 就退出
                    tracing::warn!(run_id = %run.run_id, "search thread ended without a result");
                    self.active_run = None;
                    self.run_state = RunState::Idle;
                    self.message = Some("Search stopped unexpectedly".to_string());
                    return;
                }
            }
        }
    }

    /// 应用单条更新
    pub fn apply_update(&mut self, update: RunUpdate) {
        let Some(run) = &self.active_run else {
            return;
        };
        if run.run_id != update.run_id {
            tracing::debug!(run_id = %update.run_id, "ignoring update from stale run");
            return;
        }

        match update.step {
            Step::Mark { index, state, .. } => {
                if let Some(bar) = self.bars.get_mut(index) {
                    *bar = state;
                }
                if state == BarState::Current {
                    self.comparisons += 1;
                }
                tracing::trace!(index, ?state, "bar marked");
            }
            Step::Finish { outcome, .. } => {
                let summary = RunSummary {
                    run_id: run.run_id,
                    algorithm: run.algorithm,
                    target: run.target,
                    outcome,
                    comparisons: self.comparisons,
                    finished_at: Local::now(),
                };
                tracing::info!(
                    run_id = %summary.run_id,
                    ?outcome,
                    comparisons = summary.comparisons,
                    "run completed"
                );
                self.message = Some(summary.describe());
                self.last_run = Some(summary);
                self.active_run = None;
                self.run_state = RunState::Idle;
            }
        }
    }
}
