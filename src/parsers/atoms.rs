//! # 原子记录扫描器
//!
//! 按 PDB/PDBQT 约定扫描 ATOM/HETATM 行并解析元素符号。
//!
//! ## 元素解析顺序
//! 1. 末列 token 大写后若在原子量表中，即为元素（PDBQT 常把元素类型放在行尾）
//! 2. 否则取第三列原子名首字母；首两字母构成已知双字母符号时优先（CL、BR）
//! 3. 仍未命中则记录保持未解析
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `chem/weights.rs`, `models/`

use crate::chem::weights;
use crate::models::AtomRecord;

/// 扫描全文，收集所有 ATOM/HETATM 记录
///
/// 单趟扫描，文本便宜到调用方直接重扫而不是缓存。
/// 返回空列表表示全文没有原子行，下游据此走回退路径。
pub fn scan_atom_records(content: &str) -> Vec<AtomRecord> {
    content.lines().filter_map(parse_atom_line).collect()
}

/// 解析单行；首个 token 不是 ATOM/HETATM 时返回 None
fn parse_atom_line(line: &str) -> Option<AtomRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.first() {
        Some(&"ATOM") | Some(&"HETATM") => {}
        _ => return None,
    }

    let atom_name = tokens.get(2).copied().unwrap_or("").to_string();
    let element = resolve_element(&tokens, &atom_name);

    Some(AtomRecord { atom_name, element })
}

/// 两级元素解析
fn resolve_element(tokens: &[&str], atom_name: &str) -> Option<String> {
    // 第一级：末列 token
    if let Some(last) = tokens.last() {
        let symbol = last.to_uppercase();
        if weights::is_known_element(&symbol) {
            return Some(symbol);
        }
    }

    // 第二级：原子名首字母，双字母符号优先
    let mut chars = atom_name.chars();
    let first = chars.next()?;
    let one_letter: String = first.to_uppercase().collect();

    if let Some(second) = chars.next() {
        let two_letter = format!("{}{}", one_letter, second.to_uppercase());
        if weights::is_known_element(&two_letter) {
            return Some(two_letter);
        }
    }

    if weights::is_known_element(&one_letter) {
        return Some(one_letter);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_selects_atom_and_hetatm_lines() {
        let content = "\
HEADER    docking result
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  0.00           N
HETATM    2  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C
REMARK nothing here
";
        let records = scan_atom_records(content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].element.as_deref(), Some("N"));
        assert_eq!(records[1].element.as_deref(), Some("C"));
    }

    #[test]
    fn test_first_token_must_match_exactly() {
        // "ATOMIC" 开头的行不是原子记录
        let records = scan_atom_records("ATOMIC WEIGHT TABLE\nATOMS: 42");
        assert!(records.is_empty());
    }

    #[test]
    fn test_last_token_resolution_pdbqt() {
        // PDBQT 行尾带元素类型列
        let content = "HETATM    1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00     0.100 O";
        let records = scan_atom_records(content);
        assert_eq!(records[0].element.as_deref(), Some("O"));
    }

    #[test]
    fn test_atom_name_fallback_single_letter() {
        // 末列 "HD" 不在表中，回退到原子名 "N1" 的首字母
        let content = "HETATM    1  N1  LIG A   1       0.000   0.000   0.000  1.00  0.00     0.100 HD";
        let records = scan_atom_records(content);
        assert_eq!(records[0].element.as_deref(), Some("N"));
    }

    #[test]
    fn test_atom_name_two_letter_preferred() {
        let content = "HETATM    1  CL2 LIG A   1       0.000   0.000   0.000  1.00  0.00     0.100 ZZ";
        let records = scan_atom_records(content);
        assert_eq!(records[0].element.as_deref(), Some("CL"));
    }

    #[test]
    fn test_alpha_carbon_degrades_to_carbon() {
        // 表中没有钙 (CA)，α-碳原子名退化为单字母 C
        let content = "ATOM      2  CA  MET A   1      26.266  25.413   2.842  1.00  0.00          ??";
        let records = scan_atom_records(content);
        assert_eq!(records[0].element.as_deref(), Some("C"));
    }

    #[test]
    fn test_unresolvable_record_kept_as_unresolved() {
        let content = "HETATM    1  XX1 LIG A   1       0.000   0.000   0.000  1.00  0.00     0.100 ZZ";
        let records = scan_atom_records(content);
        assert_eq!(records.len(), 1);
        assert!(records[0].element.is_none());
    }

    #[test]
    fn test_empty_content_yields_no_records() {
        assert!(scan_atom_records("").is_empty());
    }
}
