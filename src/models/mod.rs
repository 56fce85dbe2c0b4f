//! # 数据模型模块
//!
//! 定义统一的对接结果与原子记录数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `chem/`, `commands/` 使用
//! - 子模块: molecule

pub mod molecule;

pub use molecule::{molecule_name, AtomRecord, DockingResult, MoleculeStats};
