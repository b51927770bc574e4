//! # 结构解析器模块
//!
//! 读取 k 路径计算的输入结构。
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: cell, poscar

pub mod cell;
pub mod poscar;

use crate::error::{KpathError, Result};
use crate::models::Crystal;
use std::path::Path;

/// 支持的输入文件扩展名（无扩展名的 POSCAR/CONTCAR 另行识别）
pub const SUPPORTED_EXTENSIONS: &[&str] = &["cell", "vasp", "poscar"];

/// 判断文件名是否为可识别的结构文件
pub fn is_structure_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    SUPPORTED_EXTENSIONS.contains(&ext.as_str()) || is_poscar_name(path)
}

fn is_poscar_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.starts_with("POSCAR") || name.starts_with("CONTCAR"))
        .unwrap_or(false)
}

/// 从文件路径推断格式并解析
pub fn parse_structure_file(path: &Path) -> Result<Crystal> {
    if !path.exists() {
        return Err(KpathError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "cell" => cell::parse_cell_file(path),
        "vasp" | "poscar" => poscar::parse_poscar_file(path),
        _ if is_poscar_name(path) => poscar::parse_poscar_file(path),
        _ => Err(KpathError::UnsupportedFormat(format!(
            "Cannot determine format for: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_structure_file_detection() {
        assert!(is_structure_file(&PathBuf::from("Si.cell")));
        assert!(is_structure_file(&PathBuf::from("run/POSCAR")));
        assert!(is_structure_file(&PathBuf::from("CONTCAR_relaxed")));
        assert!(is_structure_file(&PathBuf::from("GaAs.vasp")));
        assert!(!is_structure_file(&PathBuf::from("OUTCAR")));
        assert!(!is_structure_file(&PathBuf::from("Si.res")));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_structure_file(Path::new("/nonexistent/POSCAR")).unwrap_err();
        assert!(matches!(err, KpathError::FileNotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join(format!("kpathkit_{}.xyz", std::process::id()));
        std::fs::write(&path, "1\n\nH 0 0 0\n").unwrap();
        let err = parse_structure_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, KpathError::UnsupportedFormat(_)));
    }
}
