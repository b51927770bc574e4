//! # Setyawan–Curtarolo 高对称 k 点路径
//!
//! 将 `HighSymmKpath` 的计算结果映射到 `Kpath` 接口。路径基于：
//! Setyawan, W., & Curtarolo, S. (2010) High-throughput electronic band
//! structure calculations: Challenges and tools. Computational Materials
//! Science, 49(2), 299-312. doi:10.1016/j.commatsci.2010.05.010
//!
//! 这些路径需配合符合论文定义的原胞使用。该原胞通过 `prim()` 获取，
//! 可用 `correct_structure()` 检查输入结构是否与之一致。
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 使用
//! - 使用 `symmetry/kpath.rs`（接口）、`symmetry/bandstructure.rs`（计算器）

use crate::error::Result;
use crate::models::Crystal;
use crate::symmetry::bandstructure::HighSymmKpath;
use crate::symmetry::kpath::{Kpath, KpathBase, DEFAULT_SYMPREC};
use crate::symmetry::paths::KpathData;
use crate::utils::linalg::Vec3;

use std::collections::BTreeMap;

/// Setyawan–Curtarolo 约定的 k 点路径
#[derive(Debug, Clone)]
pub struct SetyawanCurtaroloKpath {
    base: KpathBase,
    kpath: KpathData,
    prim: Crystal,
    conv: Crystal,
}

impl SetyawanCurtaroloKpath {
    /// `symprec`: 对称性判定容差
    pub fn new(structure: &Crystal, symprec: f64) -> Result<Self> {
        let base = KpathBase::new(structure, symprec)?;
        let (kpath, prim, conv) = HighSymmKpath::new(structure, symprec)?.into_parts();

        Ok(SetyawanCurtaroloKpath {
            base,
            kpath,
            prim,
            conv,
        })
    }

    pub fn with_default_symprec(structure: &Crystal) -> Result<Self> {
        Self::new(structure, DEFAULT_SYMPREC)
    }

    pub fn kpath(&self) -> &KpathData {
        &self.kpath
    }
}

impl Kpath for SetyawanCurtaroloKpath {
    fn base(&self) -> &KpathBase {
        &self.base
    }

    fn kpoints(&self) -> &BTreeMap<String, Vec3> {
        &self.kpath.kpoints
    }

    fn path(&self) -> &[Vec<String>] {
        &self.kpath.path
    }

    fn prim(&self) -> &Crystal {
        &self.prim
    }

    fn conv(&self) -> &Crystal {
        &self.conv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KpathError;
    use crate::models::{Atom, Lattice};
    use crate::symmetry::kpath::DEFAULT_ATOL;
    use crate::symmetry::spacegroup::LatticeType;

    fn polonium() -> Crystal {
        Crystal::new(
            "Po",
            Lattice::from_parameters(3.35, 3.35, 3.35, 90.0, 90.0, 90.0),
            vec![Atom::new("Po", [0.0, 0.0, 0.0])],
        )
    }

    fn zincblende() -> Crystal {
        let a = 5.65;
        let mut atoms = Vec::new();
        for p in [[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]] {
            atoms.push(Atom::new("Ga", p));
            atoms.push(Atom::new("As", [p[0] + 0.25, p[1] + 0.25, p[2] + 0.25]));
        }
        Crystal::new(
            "GaAs",
            Lattice::from_parameters(a, a, a, 90.0, 90.0, 90.0),
            atoms,
        )
    }

    #[test]
    fn test_matches_calculator_output() {
        let structure = polonium();
        let kpath = SetyawanCurtaroloKpath::new(&structure, 1e-3).unwrap();
        let calculator = HighSymmKpath::new(&structure, 1e-3).unwrap();

        assert_eq!(kpath.kpoints(), &calculator.kpath().kpoints);
        assert_eq!(kpath.path(), calculator.kpath().path.as_slice());
        assert_eq!(kpath.prim(), calculator.prim());
        assert_eq!(kpath.conv(), calculator.conventional());
    }

    #[test]
    fn test_simple_cubic_path() {
        let kpath = SetyawanCurtaroloKpath::with_default_symprec(&polonium()).unwrap();

        assert_eq!(kpath.lattice_type(), LatticeType::Cubic);
        assert_eq!(kpath.spg_symbol(), "Pm-3m");
        assert_eq!(kpath.spg_number(), 221);
        assert_eq!(
            kpath.path_string(),
            "\\Gamma -> X -> M -> \\Gamma -> R -> X | M -> R"
        );
        assert_eq!(kpath.kpoints()["R"], [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_deterministic() {
        let first = SetyawanCurtaroloKpath::new(&zincblende(), 1e-3).unwrap();
        let second = SetyawanCurtaroloKpath::new(&zincblende(), 1e-3).unwrap();

        assert_eq!(first.kpoints(), second.kpoints());
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn test_standard_cells_keep_composition() {
        let structure = zincblende();
        let kpath = SetyawanCurtaroloKpath::new(&structure, 1e-3).unwrap();

        let input = structure.reduced_composition();
        assert_eq!(kpath.prim().reduced_composition(), input);
        assert_eq!(kpath.conv().reduced_composition(), input);
        assert_eq!(kpath.prim().atoms.len(), 2);
    }

    #[test]
    fn test_symprec_range_gives_same_path() {
        let structure = zincblende();
        let reference = SetyawanCurtaroloKpath::new(&structure, 1e-5).unwrap();

        for symprec in [1e-4, 1e-3, 1e-2] {
            let kpath = SetyawanCurtaroloKpath::new(&structure, symprec).unwrap();
            assert_eq!(kpath.spg_number(), reference.spg_number());
            assert_eq!(kpath.path(), reference.path());
            assert_eq!(kpath.kpoints(), reference.kpoints());
        }
    }

    #[test]
    fn test_failure_propagates_unchanged() {
        let flat = Crystal::new(
            "flat",
            Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [4.0, 4.0, 0.0]]),
            vec![Atom::new("C", [0.0, 0.0, 0.0])],
        );

        let adapter_err = SetyawanCurtaroloKpath::new(&flat, 1e-3).unwrap_err();
        let calculator_err = HighSymmKpath::new(&flat, 1e-3).unwrap_err();

        assert!(matches!(adapter_err, KpathError::DegenerateLattice { .. }));
        assert_eq!(adapter_err.to_string(), calculator_err.to_string());
    }

    #[test]
    fn test_correct_structure() {
        let kpath = SetyawanCurtaroloKpath::new(&polonium(), 1e-3).unwrap();
        assert!(kpath.correct_structure(DEFAULT_ATOL));

        let conventional = SetyawanCurtaroloKpath::new(&zincblende(), 1e-3).unwrap();
        assert!(!conventional.correct_structure(DEFAULT_ATOL));

        let prim = conventional.prim().clone();
        let from_prim = SetyawanCurtaroloKpath::new(&prim, 1e-3).unwrap();
        assert!(from_prim.correct_structure(1e-4));
    }

    #[test]
    fn test_get_kpoints_labels_segment_ends() {
        let kpath = SetyawanCurtaroloKpath::new(&polonium(), 1e-3).unwrap();
        let band = kpath.get_kpoints(20.0, false).unwrap();

        assert_eq!(band.labels.first().map(String::as_str), Some("\\Gamma"));
        assert_eq!(band.labels.last().map(String::as_str), Some("R"));
        assert_eq!(band.kpoints.len(), band.distances.len());
        assert_eq!(band.kpoints.len(), band.labels.len());

        // 每个路径标签都出现在采样结果中
        for label in kpath.path().iter().flatten() {
            assert!(band.labels.iter().any(|l| l == label));
        }

        // 累计距离单调不减
        assert!(band.distances.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_get_kpoints_segment_count() {
        let kpath = SetyawanCurtaroloKpath::new(&polonium(), 1e-3).unwrap();
        let band = kpath.get_kpoints(1e-6, true).unwrap();

        // 每段最少一个间隔：两个子路径共 5 + 1 段，端点 6 + 2 个
        assert_eq!(band.len(), 8);
    }

    #[test]
    fn test_get_kpoints_rejects_bad_density() {
        let kpath = SetyawanCurtaroloKpath::new(&polonium(), 1e-3).unwrap();
        assert!(kpath.get_kpoints(0.0, false).is_err());
    }
}
