//! # 文件收集器
//!
//! 根据输入路径和 glob 模式收集待摄取的对接结果文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 逗号分隔的多 glob 模式
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配文件名

use crate::error::{DockstatError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配所有文件
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec![Pattern::new("*").unwrap()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    ///
    /// 非法 glob 模式报 `InvalidArgument`；空输入回退到 `*`。
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let mut patterns = Vec::new();

        for part in pattern.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let compiled = Pattern::new(part).map_err(|e| {
                DockstatError::InvalidArgument(format!("Bad glob pattern '{}': {}", part, e))
            })?;
            patterns.push(compiled);
        }

        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// 检查文件名是否匹配任一模式
    fn matches(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matching() {
        let collector = FileCollector::new(PathBuf::from("."))
            .with_pattern("*.pdbqt,*.log")
            .unwrap();

        assert!(collector.matches(Path::new("ligand_out.pdbqt")));
        assert!(collector.matches(Path::new("runs/vina.log")));
        assert!(!collector.matches(Path::new("receptor.cif")));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = FileCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_pattern_falls_back_to_wildcard() {
        let collector = FileCollector::new(PathBuf::from("."))
            .with_pattern(" , ")
            .unwrap();

        assert!(collector.matches(Path::new("anything.xyz")));
    }
}
