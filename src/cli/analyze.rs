//! # analyze 子命令 CLI 定义
//!
//! 摄取单个对接结果文件或批量目录并给出统计指标。
//! 扩展名只用于批量模式的文件筛选，摄取引擎本身不看扩展名。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze.rs`

use clap::Args;
use std::path::PathBuf;

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input: docking result file or directory containing result files
    pub input: PathBuf,

    /// Glob pattern for input files (batch mode, e.g., "*.pdbqt,*.log")
    #[arg(long, default_value = "*.pdbqt,*.pdb,*.sdf,*.out,*.txt")]
    pub pattern: String,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Number of top molecules to print from the final ranking
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Filename for the ranked CSV output (batch mode)
    #[arg(long, default_value = "docking_ranked_results.csv")]
    pub output_csv: PathBuf,

    /// Range of ranked molecules to plot (e.g., '1-10')
    #[arg(long)]
    pub plot_range: Option<String>,

    /// Filename for the score comparison plot (PNG format)
    #[arg(long, default_value = "docking_score_comparison.png")]
    pub output_plot: PathBuf,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
