//! 命令行参数

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::models::{Algorithm, Settings, Speed, ThemeKind};

#[derive(Debug, Parser)]
#[command(
    name = "search-visualizer",
    version,
    about = "Interactive terminal visualizer for binary and linear search"
)]
pub struct Cli {
    /// Algorithm selected at startup.
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Color theme.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Animation speed multiplier (0.5 - 3.0).
    #[arg(long, value_name = "FACTOR")]
    pub speed: Option<f64>,

    /// Write logs to this file instead of the data directory.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Binary,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Binary => Algorithm::Binary,
            AlgorithmArg::Linear => Algorithm::Linear,
        }
    }
}

impl From<ThemeArg> for ThemeKind {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeKind::Dark,
            ThemeArg::Light => ThemeKind::Light,
        }
    }
}

impl Cli {
    /// 命令行参数覆盖已保存的设置
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(algorithm) = self.algorithm {
            settings.algorithm = algorithm.into();
        }
        if let Some(theme) = self.theme {
            settings.theme = theme.into();
        }
        if let Some(speed) = self.speed {
            settings.speed = Speed::from_factor(speed);
        }
    }
}
