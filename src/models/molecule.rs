//! # 分子对接数据模型
//!
//! 定义对接结果统计指标与原子记录的统一表示。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `chem/`, `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 分子统计指标
///
/// 引擎对任意输入都会给出完整估计，所有字段始终填充。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleculeStats {
    /// 对接打分 (kcal/mol)，越负表示预测结合越强
    pub docking_score: f64,

    /// 归一化结合效率 (|score| / (MW/100))
    pub binding_efficiency: f64,

    /// 近似分子量
    pub molecular_weight: f64,

    /// 氢键供体数
    pub h_bond_donors: u32,

    /// 氢键受体数
    pub h_bond_acceptors: u32,
}

/// 单个对接结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockingResult {
    /// 分子名称
    pub molecule_name: String,

    /// 来源文件路径
    pub source_file: Option<String>,

    /// 原始文件大小（字节）
    pub file_size: u64,

    /// 统计指标
    pub stats: MoleculeStats,
}

impl DockingResult {
    pub fn new(
        molecule_name: impl Into<String>,
        source_file: Option<String>,
        file_size: u64,
        stats: MoleculeStats,
    ) -> Self {
        DockingResult {
            molecule_name: molecule_name.into(),
            source_file,
            file_size,
            stats,
        }
    }
}

/// ATOM/HETATM 记录
///
/// 每个原子行产生一条记录；`element` 为 None 表示两级解析均未命中，
/// 该记录不参与分子量与氢键统计。
#[derive(Debug, Clone)]
pub struct AtomRecord {
    /// 原子名字段（第三列，可能为空）
    pub atom_name: String,

    /// 解析出的元素符号（大写）
    pub element: Option<String>,
}

/// 从文件名推导分子名称（首个 '.' 之前的部分）
pub fn molecule_name(filename: &str) -> String {
    filename
        .split('.')
        .next()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown Compound".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molecule_name_strips_extensions() {
        assert_eq!(molecule_name("aspirin.pdbqt"), "aspirin");
        assert_eq!(molecule_name("ligand.out.pdbqt"), "ligand");
        assert_eq!(molecule_name("plain"), "plain");
    }

    #[test]
    fn test_molecule_name_empty_falls_back() {
        assert_eq!(molecule_name(""), "Unknown Compound");
        assert_eq!(molecule_name(".pdbqt"), "Unknown Compound");
    }
}
