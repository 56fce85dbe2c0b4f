//! # Dockstat - 分子对接结果统一分析工具箱
//!
//! 将对接结果的摄取、打分提取与化学描述符推导统一成单一可执行文件。
//! 摄取引擎对任意输入都给出确定性估计，从不报"无法解析"。
//!
//! ## 子命令
//! - `analyze` - 摄取结果文件/目录，排名并导出指标
//! - `collect` - 收集作业目录中的结果，合并为摘要 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (摄取管线)
//!   │     ├── chem/      (原子量表与描述符)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (批量并行处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod chem;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
