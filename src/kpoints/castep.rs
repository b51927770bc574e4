//! # CASTEP 能带路径块
//!
//! 生成 .cell 文件中的 `SPECTRAL_KPOINT_PATH` 块，子路径之间以 `BREAK` 分隔。
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 调用
//! - 使用 `symmetry/kpath.rs` 的 `Kpath`

use crate::error::Result;
use crate::symmetry::Kpath;

/// 生成 `%BLOCK SPECTRAL_KPOINT_PATH`，可选附带路径采样间距 (Å⁻¹)
pub fn to_spectral_kpoint_path<K: Kpath>(kpath: &K, spacing: Option<f64>) -> Result<String> {
    let mut result = String::new();

    result.push_str("%BLOCK SPECTRAL_KPOINT_PATH\n");
    for (i, subpath) in kpath.path().iter().enumerate() {
        if i > 0 {
            result.push_str("BREAK\n");
        }
        for label in subpath {
            let k = kpath.kpoint(label)?;
            result.push_str(&format!(
                "  {:12.8}  {:12.8}  {:12.8}    ! {}\n",
                k[0], k[1], k[2], label
            ));
        }
    }
    result.push_str("%ENDBLOCK SPECTRAL_KPOINT_PATH\n");

    if let Some(spacing) = spacing {
        result.push_str(&format!("\nSPECTRAL_KPOINT_PATH_SPACING : {:.6}\n", spacing));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Crystal, Lattice};
    use crate::kpoints::vasp::tests::MissingLabel;
    use crate::symmetry::SetyawanCurtaroloKpath;

    fn polonium_kpath() -> SetyawanCurtaroloKpath {
        let crystal = Crystal::new(
            "Po",
            Lattice::from_parameters(3.35, 3.35, 3.35, 90.0, 90.0, 90.0),
            vec![Atom::new("Po", [0.0, 0.0, 0.0])],
        );
        SetyawanCurtaroloKpath::new(&crystal, 1e-3).unwrap()
    }

    #[test]
    fn test_block_with_break() {
        let kpath = polonium_kpath();
        let block = to_spectral_kpoint_path(&kpath, Some(0.025)).unwrap();

        assert!(block.starts_with("%BLOCK SPECTRAL_KPOINT_PATH\n"));
        assert_eq!(block.matches("BREAK\n").count(), 1);
        // 6 + 2 个标签行
        assert_eq!(block.lines().filter(|l| l.contains('!')).count(), 8);
        assert!(block.contains("SPECTRAL_KPOINT_PATH_SPACING : 0.025000"));
    }

    #[test]
    fn test_block_rejects_missing_label() {
        let kpath = MissingLabel::new(polonium_kpath(), "R");
        assert!(to_spectral_kpoint_path(&kpath, None).is_err());
    }
}
