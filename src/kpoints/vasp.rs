//! # VASP KPOINTS 输出
//!
//! ## Line-mode 格式
//! ```text
//! Line-mode KPOINTS: \Gamma -> X -> M
//! 20                  # 每段点数
//! Line-mode
//! Reciprocal
//! 0.0 0.0 0.0 ! \Gamma
//! 0.0 0.5 0.0 ! X
//!
//! 0.0 0.5 0.0 ! X
//! 0.5 0.5 0.0 ! M
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 调用
//! - 使用 `symmetry/kpath.rs` 的 `Kpath`、`BandKpoints`

use crate::error::Result;
use crate::symmetry::{BandKpoints, Kpath};

/// 生成 line-mode KPOINTS 文件内容
pub fn to_line_mode_string<K: Kpath>(kpath: &K, points_per_segment: usize) -> Result<String> {
    let mut result = String::new();
    result.push_str(&format!("Line-mode KPOINTS: {}\n", kpath.path_string()));
    result.push_str(&format!("{}\n", points_per_segment.max(2)));
    result.push_str("Line-mode\n");
    result.push_str("Reciprocal\n");

    let mut first = true;
    for subpath in kpath.path() {
        for segment in subpath.windows(2) {
            if !first {
                result.push('\n');
            }
            first = false;

            for label in segment {
                let k = kpath.kpoint(label)?;
                result.push_str(&format!(
                    "  {:12.8}  {:12.8}  {:12.8} ! {}\n",
                    k[0], k[1], k[2], label
                ));
            }
        }
    }

    Ok(result)
}

/// 生成显式 k 点列表（Reciprocal，权重均为 1）
pub fn to_explicit_string(band: &BandKpoints, comment: &str) -> String {
    let mut result = String::new();
    result.push_str(&format!("{}\n", comment));
    result.push_str(&format!("{}\n", band.len()));
    result.push_str("Reciprocal\n");

    for (k, label) in band.kpoints.iter().zip(band.labels.iter()) {
        result.push_str(&format!("  {:12.8}  {:12.8}  {:12.8}  1", k[0], k[1], k[2]));
        if !label.is_empty() {
            result.push_str(&format!(" ! {}", label));
        }
        result.push('\n');
    }

    result
}
