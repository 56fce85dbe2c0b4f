//! # collect 命令实现
//!
//! 收集对接作业目录中的结果并合并为摘要 CSV。
//!
//! ## 功能
//! - 扫描作业子目录
//! - 按固定优先级定位每个作业的结果文件
//! - 摄取并按打分排名
//! - 合并到单个 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::collect::CollectArgs;
use crate::error::{DockstatError, Result};
use crate::models::DockingResult;
use crate::parsers;
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 collect 命令
pub fn execute(args: CollectArgs) -> Result<()> {
    output::print_header("Collecting Docking Results");

    // 验证目录
    if !args.job_dir.exists() {
        return Err(DockstatError::DirectoryNotFound {
            path: args.job_dir.display().to_string(),
        });
    }

    // 扫描作业子目录
    let entries: Vec<_> = fs::read_dir(&args.job_dir)
        .map_err(|e| DockstatError::FileReadError {
            path: args.job_dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .collect();

    output::print_info(&format!("Scanning {} job directories...", entries.len()));

    let pb = progress::create_progress_bar(entries.len() as u64, "Ingesting");

    let mut results: Vec<DockingResult> = Vec::new();

    for entry in &entries {
        let job_name = entry.file_name().to_string_lossy().to_string();
        let job_dir = entry.path();

        let result_file = match find_result_file(&job_dir, &job_name, args.result_file.as_deref()) {
            Some(file) => file,
            None => {
                pb.suspend(|| {
                    output::print_skip(&format!("{}: no result file found", job_name));
                });
                pb.inc(1);
                continue;
            }
        };

        match parsers::parse_docking_file(&result_file, &job_name) {
            Ok(result) => results.push(result),
            Err(e) => {
                pb.suspend(|| {
                    output::print_warning(&format!("Failed to ingest {}: {}", job_name, e));
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if results.is_empty() {
        output::print_warning("No docking results found to collect.");
        return Ok(());
    }

    // 按打分升序（最优在前）
    results.sort_by(|a, b| {
        a.stats
            .docking_score
            .partial_cmp(&b.stats.docking_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    write_summary_csv(&results, &args.output)?;

    output::print_done(&format!(
        "Collected {} molecules into '{}'",
        results.len(),
        args.output.display()
    ));
    output::print_info("The summary can feed a dashboard or a downstream ranking step.");

    Ok(())
}

/// 在作业目录中按优先级定位结果文件
///
/// 顺序：显式指定名 → out.pdbqt → <job>_out.pdbqt → vina.log → log.txt
fn find_result_file(job_dir: &Path, job_name: &str, explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(name) = explicit {
        let candidate = job_dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        return None;
    }

    let candidates = [
        "out.pdbqt".to_string(),
        format!("{}_out.pdbqt", job_name),
        "vina.log".to_string(),
        "log.txt".to_string(),
    ];

    candidates
        .iter()
        .map(|name| job_dir.join(name))
        .find(|path| path.is_file())
}

/// 写入摘要 CSV
fn write_summary_csv(results: &[DockingResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(&[
        "molecule",
        "docking_score_kcal_mol",
        "binding_efficiency",
        "molecular_weight",
        "h_bond_donors",
        "h_bond_acceptors",
        "file_size_bytes",
        "result_file",
    ])?;

    for r in results {
        wtr.write_record(&[
            r.molecule_name.clone(),
            format!("{:.2}", r.stats.docking_score),
            format!("{:.2}", r.stats.binding_efficiency),
            format!("{:.1}", r.stats.molecular_weight),
            r.stats.h_bond_donors.to_string(),
            r.stats.h_bond_acceptors.to_string(),
            r.file_size.to_string(),
            r.source_file.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(|e| DockstatError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
