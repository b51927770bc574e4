//! # 结构文件收集器
//!
//! 在目录中按文件名模式收集待计算 k 路径的结构文件。
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 批量模式默认匹配的文件名
pub const DEFAULT_PATTERN: &str = "*.cell,*.vasp,POSCAR*,CONTCAR*";

/// 文件收集器
pub struct FileCollector {
    input: PathBuf,
    patterns: Vec<Pattern>,
    recursive: bool,
}

impl FileCollector {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔），无法解析的模式被忽略
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| Pattern::new(s).ok())
            .collect();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件，按路径排序
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 没有设置模式时匹配一切
    fn matches(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_pattern_matching() {
        let collector = FileCollector::new(PathBuf::from(".")).with_pattern(DEFAULT_PATTERN);
        assert!(collector.matches(Path::new("Si.cell")));
        assert!(collector.matches(Path::new("GaAs.vasp")));
        assert!(collector.matches(Path::new("dir/POSCAR")));
        assert!(collector.matches(Path::new("CONTCAR_001")));
        assert!(!collector.matches(Path::new("OUTCAR")));
        assert!(!collector.matches(Path::new("Si.res")));
    }

    #[test]
    fn test_collect_directory() {
        let root = std::env::temp_dir().join(format!("kpathkit_collect_{}", std::process::id()));
        let nested = root.join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("b.cell"), "").unwrap();
        fs::write(root.join("POSCAR"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(nested.join("a.cell"), "").unwrap();

        let flat = FileCollector::new(root.clone())
            .with_pattern(DEFAULT_PATTERN)
            .collect();
        let deep = FileCollector::new(root.clone())
            .with_pattern(DEFAULT_PATTERN)
            .recursive(true)
            .collect();
        fs::remove_dir_all(&root).ok();

        assert_eq!(flat.len(), 2);
        assert_eq!(deep.len(), 3);
        assert!(flat.windows(2).all(|w| w[0] <= w[1]));
    }
}
