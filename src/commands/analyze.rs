//! # analyze 命令实现
//!
//! 摄取对接结果并展示/导出统计指标。
//!
//! ## 功能
//! - 单文件模式：打印指标表格
//! - 批量模式：并行摄取、按打分排名、生成终端表格和 CSV 输出
//! - 可选绘制打分比较图
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::analyze::AnalyzeArgs;
use crate::error::{DockstatError, Result};
use crate::models::{molecule_name, DockingResult};
use crate::parsers;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 排名表格行
#[derive(Debug, Clone, Tabled)]
struct RankRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Molecule")]
    molecule: String,
    #[tabled(rename = "Score (kcal/mol)")]
    score: String,
    #[tabled(rename = "MW")]
    weight: String,
    #[tabled(rename = "Efficiency")]
    efficiency: String,
    #[tabled(rename = "HBD")]
    donors: u32,
    #[tabled(rename = "HBA")]
    acceptors: u32,
}

/// 单文件指标表格行
#[derive(Debug, Clone, Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_header("Analyzing Docking Results");

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(DockstatError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single_file(args: &AnalyzeArgs) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let result = parsers::parse_docking_file(&args.input, &name_for(&args.input))?;

    output::print_info(&format!(
        "Molecule: {} ({} bytes)",
        result.molecule_name, result.file_size
    ));

    let stats = &result.stats;
    let rows = vec![
        MetricRow {
            metric: "Docking score (kcal/mol)",
            value: format!("{:.2}", stats.docking_score),
        },
        MetricRow {
            metric: "Binding efficiency",
            value: format!("{:.2}", stats.binding_efficiency),
        },
        MetricRow {
            metric: "Molecular weight",
            value: format!("{:.1}", stats.molecular_weight),
        },
        MetricRow {
            metric: "H-bond donors",
            value: stats.h_bond_donors.to_string(),
        },
        MetricRow {
            metric: "H-bond acceptors",
            value: stats.h_bond_acceptors.to_string(),
        },
    ];

    let table = Table::new(&rows);
    println!("{}", table);

    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &AnalyzeArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    // 收集文件
    let collector = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive);

    let files = collector.collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} result files", files.len()));

    // 并行摄取
    let runner = BatchRunner::new(args.jobs);
    let batch = runner.run(files, |file| {
        match parsers::parse_docking_file(file, &name_for(file)) {
            Ok(result) => ProcessResult::Success(result),
            Err(e) => ProcessResult::Failed(file.display().to_string(), e.to_string()),
        }
    });

    for (path, err) in &batch.failures {
        output::print_warning(&format!("Failed to ingest {}: {}", path, err));
    }

    let total = batch.total();
    let mut results = batch.completed;

    if results.is_empty() {
        output::print_warning("No docking results could be ingested.");
        return Ok(());
    }

    output::print_info(&format!("Ingested {}/{} files", results.len(), total));

    // 按打分升序排名（越负结合越强）
    results.sort_by(|a, b| {
        a.stats
            .docking_score
            .partial_cmp(&b.stats.docking_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // 生成表格数据
    let table_rows: Vec<RankRow> = results
        .iter()
        .take(args.top_n)
        .enumerate()
        .map(|(i, r)| RankRow {
            rank: i + 1,
            molecule: r.molecule_name.clone(),
            score: format!("{:.2}", r.stats.docking_score),
            weight: format!("{:.1}", r.stats.molecular_weight),
            efficiency: format!("{:.2}", r.stats.binding_efficiency),
            donors: r.stats.h_bond_donors,
            acceptors: r.stats.h_bond_acceptors,
        })
        .collect();

    // 显示表格
    output::print_header(&format!(
        "Top {} Molecules by Docking Score",
        args.top_n.min(results.len())
    ));

    let table = Table::new(&table_rows);
    println!("{}", table);

    // 保存完整 CSV
    save_results_csv(&results, &args.output_csv)?;
    output::print_success(&format!(
        "Full ranking saved to '{}'",
        args.output_csv.display()
    ));

    // 生成图表（如果请求）
    if !args.no_plot {
        if let Some(ref range) = args.plot_range {
            generate_plot(&results, range, &args.output_plot)?;
            output::print_success(&format!(
                "Score comparison plot saved to '{}'",
                args.output_plot.display()
            ));
        }
    }

    Ok(())
}

/// 从路径推导分子名称
fn name_for(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(molecule_name)
        .unwrap_or_else(|| "Unknown Compound".to_string())
}

/// 保存完整排名到 CSV
fn save_results_csv(results: &[DockingResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(&[
        "rank",
        "molecule",
        "docking_score_kcal_mol",
        "binding_efficiency",
        "molecular_weight",
        "h_bond_donors",
        "h_bond_acceptors",
        "source_file",
    ])?;

    for (i, r) in results.iter().enumerate() {
        wtr.write_record(&[
            (i + 1).to_string(),
            r.molecule_name.clone(),
            format!("{:.2}", r.stats.docking_score),
            format!("{:.2}", r.stats.binding_efficiency),
            format!("{:.1}", r.stats.molecular_weight),
            r.stats.h_bond_donors.to_string(),
            r.stats.h_bond_acceptors.to_string(),
            r.source_file.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(|e| DockstatError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 生成打分比较图
fn generate_plot(results: &[DockingResult], range: &str, output_path: &Path) -> Result<()> {
    use plotters::prelude::*;

    // 解析范围
    let (start, end) = parse_range(range)?;
    let start_idx = start.saturating_sub(1);
    let end_idx = end.min(results.len());

    if start_idx >= end_idx {
        return Err(DockstatError::InvalidRange(range.to_string()));
    }

    let plot_data: Vec<(usize, f64)> = results[start_idx..end_idx]
        .iter()
        .enumerate()
        .map(|(i, r)| (start + i, r.stats.docking_score))
        .collect();

    let y_min = plot_data
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::INFINITY, f64::min);
    let y_max = plot_data
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_margin = (y_max - y_min).abs() * 0.1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| DockstatError::Other(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Docking Score Comparison", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (start as f64 - 0.5)..(end as f64 + 0.5),
            (y_min - y_margin)..(y_max + y_margin),
        )
        .map_err(|e| DockstatError::Other(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Rank")
        .y_desc("Docking Score (kcal/mol)")
        .draw()
        .map_err(|e| DockstatError::Other(e.to_string()))?;

    // 绘制数据点
    chart
        .draw_series(
            plot_data
                .iter()
                .map(|(x, y)| Circle::new((*x as f64, *y), 5, RED.filled())),
        )
        .map_err(|e| DockstatError::Other(e.to_string()))?
        .label("Docking Score")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    // 连线
    chart
        .draw_series(LineSeries::new(
            plot_data.iter().map(|(x, y)| (*x as f64, *y)),
            RED.stroke_width(2),
        ))
        .map_err(|e| DockstatError::Other(e.to_string()))?;

    // 标记最优（最负）打分
    if let Some((best_x, best_y)) = plot_data
        .iter()
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
    {
        chart
            .draw_series(std::iter::once(Circle::new(
                (*best_x as f64, *best_y),
                8,
                GREEN.filled(),
            )))
            .map_err(|e| DockstatError::Other(e.to_string()))?
            .label("Best in Range")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| DockstatError::Other(e.to_string()))?;

    root.present()
        .map_err(|e| DockstatError::Other(e.to_string()))?;

    Ok(())
}

/// 解析范围字符串 (e.g., "1-10")
fn parse_range(range: &str) -> Result<(usize, usize)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(DockstatError::InvalidRange(range.to_string()));
    }

    let start: usize = parts[0]
        .parse()
        .map_err(|_| DockstatError::InvalidRange(range.to_string()))?;
    let end: usize = parts[1]
        .parse()
        .map_err(|_| DockstatError::InvalidRange(range.to_string()))?;

    if start < 1 || end < start {
        return Err(DockstatError::InvalidRange(range.to_string()));
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1-10").unwrap(), (1, 10));
        assert_eq!(parse_range("3-3").unwrap(), (3, 3));
        assert!(parse_range("5").is_err());
        assert!(parse_range("3-2").is_err());
        assert!(parse_range("0-5").is_err());
        assert!(parse_range("a-b").is_err());
    }

    #[test]
    fn test_name_for_path() {
        assert_eq!(name_for(Path::new("runs/aspirin.pdbqt")), "aspirin");
        assert_eq!(name_for(Path::new("ligand_7.out.pdbqt")), "ligand_7");
    }
}
