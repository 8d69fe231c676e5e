//! 查找算法可视化
//!
//! 在终端中以动画方式演示二分查找与线性查找：
//!
//! - [`search`]: 把算法展开成带停顿的步骤序列，并在后台线程中回放
//! - [`ui`]: ratatui 界面，消费回放线程发来的更新
//! - [`storage`]: 用户偏好的 TOML 持久化
//! - [`logging`]: 写入文件的 tracing 日志

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod search;
pub mod storage;
pub mod ui;
pub mod validation;
