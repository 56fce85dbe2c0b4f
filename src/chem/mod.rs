//! # 化学计算模块
//!
//! 原子量常数表与启发式化学描述符。
//!
//! ## 依赖关系
//! - 被 `parsers/` 使用
//! - 子模块: weights, descriptors

pub mod descriptors;
pub mod weights;
