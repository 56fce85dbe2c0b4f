//! # collect 子命令 CLI 定义
//!
//! 收集对接作业目录中的结果并合并为摘要 CSV
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use clap::Args;
use std::path::PathBuf;

/// collect 子命令参数
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Path to the root directory containing docking job folders
    pub job_dir: PathBuf,

    /// Exact result filename to look for in each job folder
    #[arg(long)]
    pub result_file: Option<String>,

    /// Filename for the merged summary CSV
    #[arg(long, default_value = "docking_summary.csv")]
    pub output: PathBuf,
}
