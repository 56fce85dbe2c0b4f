//! # 化学描述符启发式
//!
//! 由原子记录推导氢键供体/受体数与结合效率。
//! 真正的氢键分类需要成键拓扑，轻量扫描拿不到，
//! 这里将供体近似为具备氢键能力杂原子 (N/O/F) 数的一半。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/`

use crate::models::AtomRecord;

/// 由已解析记录统计氢键数，返回 (受体数, 供体数)
///
/// N/O/F 各记一个受体；供体按每个受体累加 0.5 后向下取整。
pub fn hbond_counts(records: &[AtomRecord]) -> (u32, u32) {
    let mut acceptors = 0u32;
    let mut donor_acc = 0.0f64;

    for record in records {
        if let Some(element) = record.element.as_deref() {
            if matches!(element, "N" | "O" | "F") {
                acceptors += 1;
                donor_acc += 0.5;
            }
        }
    }

    (acceptors, donor_acc.floor() as u32)
}

/// 无原子行时的氢键回退估计，返回 (受体数, 供体数)
///
/// 与主启发式相互独立：受体由回退分子量推出，供体取受体的一半。
pub fn hbond_fallback(molecular_weight: f64) -> (u32, u32) {
    let acceptors = (molecular_weight / 50.0).floor() as u32;
    let donors = acceptors / 2;
    (acceptors, donors)
}

/// 归一化结合效率: |score| / (MW / 100)，分子量为 0 时取 0
///
/// 简化的配体效率近似，不是教科书公式。
pub fn binding_efficiency(docking_score: f64, molecular_weight: f64) -> f64 {
    if molecular_weight > 0.0 {
        docking_score.abs() / (molecular_weight / 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(element: Option<&str>) -> AtomRecord {
        AtomRecord {
            atom_name: String::new(),
            element: element.map(|e| e.to_string()),
        }
    }

    #[test]
    fn test_hbond_counts_heteroatoms_only() {
        let records = vec![
            record(Some("O")),
            record(Some("N")),
            record(Some("C")),
            record(Some("S")),
            record(None),
        ];

        let (acceptors, donors) = hbond_counts(&records);
        assert_eq!(acceptors, 2);
        assert_eq!(donors, 1);
    }

    #[test]
    fn test_hbond_donors_floor() {
        // 3 个受体 → 1.5 → 1 个供体
        let records = vec![record(Some("O")), record(Some("N")), record(Some("F"))];

        let (acceptors, donors) = hbond_counts(&records);
        assert_eq!(acceptors, 3);
        assert_eq!(donors, 1);
    }

    #[test]
    fn test_hbond_fallback() {
        let (acceptors, donors) = hbond_fallback(234.0);
        assert_eq!(acceptors, 4);
        assert_eq!(donors, 2);

        let (acceptors, donors) = hbond_fallback(250.0);
        assert_eq!(acceptors, 5);
        assert_eq!(donors, 2);
    }

    #[test]
    fn test_binding_efficiency() {
        let le = binding_efficiency(-5.5, 42.0);
        assert!((le - 13.095238095238095).abs() < 1e-9);

        // 正打分取绝对值后照常计算
        let le = binding_efficiency(3.0, 100.0);
        assert!((le - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_binding_efficiency_zero_weight() {
        assert_eq!(binding_efficiency(-9.4, 0.0), 0.0);
    }
}
