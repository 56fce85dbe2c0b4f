//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `analyze`: 摄取对接结果文件/目录，排名并导出指标
//! - `collect`: 收集作业目录中的结果，合并为摘要 CSV
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analyze, collect

pub mod analyze;
pub mod collect;

use clap::{Parser, Subcommand};

/// Dockstat - 分子对接结果统一分析工具箱
#[derive(Parser)]
#[command(name = "dockstat")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A unified molecular docking result analysis toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze docking result files (.pdbqt, .pdb, Vina logs)
    Analyze(analyze::AnalyzeArgs),

    /// Collect docking job results into a single summary CSV
    Collect(collect::CollectArgs),
}
