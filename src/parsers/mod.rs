//! # 解析器模块
//!
//! 对接结果文件的摄取管线：打分提取、原子扫描、描述符推导。
//! 管线是纯函数、单趟、无状态的；相同输入必然产生逐位相同的输出，
//! 并发调用之间没有任何共享可变状态。
//! 引擎从不失败：每个未命中的模式都有确定性回退公式。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `chem/`, `models/`
//! - 子模块: atoms, score

pub mod atoms;
pub mod score;

use crate::chem::{descriptors, weights};
use crate::error::{DockstatError, Result};
use crate::models::{DockingResult, MoleculeStats};
use std::fs;
use std::path::Path;

/// 从文本内容计算分子统计指标
///
/// `file_size` 是原始字节长度，仅参与回退公式。
/// 文件扩展名不参与任何分支：所有内容走同一套模式与启发式。
pub fn parse_docking_content(content: &str, file_size: u64) -> MoleculeStats {
    let raw_score = score::extract_docking_score(content, file_size);
    let records = atoms::scan_atom_records(content);

    let (raw_weight, acceptors, donors) = if records.is_empty() {
        // 无原子行：分子量与氢键数都按文件大小估计
        let weight = weights::fallback_weight(file_size);
        let (acceptors, donors) = descriptors::hbond_fallback(weight);
        (weight, acceptors, donors)
    } else {
        // 原子行存在但全部未解析时，分子量为 0，不触发空扫描回退
        let weight = weights::molecular_weight(&records);
        let (acceptors, donors) = descriptors::hbond_counts(&records);
        (weight, acceptors, donors)
    };

    let docking_score = round_to(raw_score, 2);
    let molecular_weight = round_to(raw_weight, 1);
    let binding_efficiency = round_to(
        descriptors::binding_efficiency(docking_score, molecular_weight),
        2,
    );

    MoleculeStats {
        docking_score,
        binding_efficiency,
        molecular_weight,
        h_bond_donors: donors,
        h_bond_acceptors: acceptors,
    }
}

/// 读取并摄取单个对接结果文件
///
/// 二进制内容按 UTF-8 宽松解码后照常走模式匹配；
/// 大小取原始字节数，与解码后的文本长度无关。
pub fn parse_docking_file(path: &Path, molecule_name: &str) -> Result<DockingResult> {
    let bytes = fs::read(path).map_err(|e| DockstatError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let file_size = bytes.len() as u64;
    let content = String::from_utf8_lossy(&bytes);
    let stats = parse_docking_content(&content, file_size);

    Ok(DockingResult::new(
        molecule_name,
        Some(path.display().to_string()),
        file_size,
        stats,
    ))
}

/// 四舍五入到指定小数位
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
