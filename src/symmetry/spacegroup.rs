//! # 空间群识别
//!
//! 对称性搜索入口：调用 moyo 返回空间群号、国际符号、布拉维晶格类型
//! 以及 ITA 标准惯用胞（单斜唯一轴 b，菱方取六方轴，第二原点）。
//!
//! ## 依赖关系
//! - 被 `symmetry/kpath.rs`（公共初始化）和 `symmetry/bandstructure.rs` 使用
//! - 使用 `moyo`（对称性搜索）、`nalgebra`（moyo 的晶胞类型）

use crate::error::{KpathError, Result};
use crate::models::{Atom, Crystal, Lattice};

use moyo::base::{AngleTolerance, Cell, Lattice as MoyoLattice};
use moyo::data::Setting;
use moyo::MoyoDataset;
use nalgebra::Vector3;
use serde::Serialize;
use std::fmt;

/// 体积小于该值（Å³）视为退化晶胞
const MIN_CELL_VOLUME: f64 = 1e-8;

/// 布拉维晶格类型（三方晶系区分菱方与六方）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LatticeType {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Rhombohedral,
    Hexagonal,
    Cubic,
}

impl LatticeType {
    /// 由空间群号确定晶格类型
    pub fn from_spacegroup(number: u32) -> Self {
        match number {
            1..=2 => LatticeType::Triclinic,
            3..=15 => LatticeType::Monoclinic,
            16..=74 => LatticeType::Orthorhombic,
            75..=142 => LatticeType::Tetragonal,
            146 | 148 | 155 | 160 | 161 | 166 | 167 => LatticeType::Rhombohedral,
            143..=194 => LatticeType::Hexagonal,
            _ => LatticeType::Cubic,
        }
    }
}

impl fmt::Display for LatticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LatticeType::Triclinic => "triclinic",
            LatticeType::Monoclinic => "monoclinic",
            LatticeType::Orthorhombic => "orthorhombic",
            LatticeType::Tetragonal => "tetragonal",
            LatticeType::Rhombohedral => "rhombohedral",
            LatticeType::Hexagonal => "hexagonal",
            LatticeType::Cubic => "cubic",
        };
        write!(f, "{}", name)
    }
}

/// 空间群信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpacegroupData {
    /// 国际空间群号 (1-230)
    pub number: u32,
    /// 国际符号（简写 Hermann–Mauguin）
    pub symbol: String,
    /// 布拉维晶格类型
    pub lattice_type: LatticeType,
}

impl SpacegroupData {
    pub fn from_number(number: u32) -> Self {
        SpacegroupData {
            number,
            symbol: international_symbol(number).to_string(),
            lattice_type: LatticeType::from_spacegroup(number),
        }
    }

    /// 格子心化类型（P, A, C, F, I, R）
    pub fn centering(&self) -> char {
        self.symbol.chars().next().unwrap_or('P')
    }
}

/// 对称性分析结果
#[derive(Debug, Clone)]
pub struct SymmetryDataset {
    pub spacegroup: SpacegroupData,
    /// ITA 标准设置下的惯用胞
    pub std_cell: Crystal,
}

/// 对结构进行对称性搜索
pub fn analyze(crystal: &Crystal, symprec: f64) -> Result<SymmetryDataset> {
    if crystal.atoms.is_empty() {
        return Err(KpathError::EmptyStructure {
            name: crystal.name.clone(),
        });
    }

    let volume = crystal.lattice.volume();
    if volume.abs() < MIN_CELL_VOLUME {
        return Err(KpathError::DegenerateLattice { volume });
    }

    // 元素 -> 原子种类编号
    let mut species: Vec<String> = Vec::new();
    let numbers: Vec<i32> = crystal
        .atoms
        .iter()
        .map(|atom| {
            let idx = match species.iter().position(|s| *s == atom.element) {
                Some(idx) => idx,
                None => {
                    species.push(atom.element.clone());
                    species.len() - 1
                }
            };
            idx as i32 + 1
        })
        .collect();
    let positions = crystal
        .atoms
        .iter()
        .map(|a| Vector3::from(a.position))
        .collect();
    let cell = Cell::new(
        MoyoLattice::from_basis(crystal.lattice.matrix),
        positions,
        numbers,
    );

    let dataset = MoyoDataset::new(
        &cell,
        symprec,
        AngleTolerance::Default,
        Setting::Standard,
        true,
    )
    .map_err(|err| KpathError::SymmetrySearch {
        symprec,
        reason: err.to_string(),
    })?;

    let number = u32::try_from(dataset.number).map_err(|_| KpathError::SymmetrySearch {
        symprec,
        reason: format!("invalid space group number {}", dataset.number),
    })?;

    Ok(SymmetryDataset {
        spacegroup: SpacegroupData::from_number(number),
        std_cell: to_crystal(&dataset.std_cell, &species, &crystal.name),
    })
}

/// moyo 晶胞 -> Crystal，种类编号从 1 开始
fn to_crystal(cell: &Cell, species: &[String], name: &str) -> Crystal {
    let atoms = cell
        .positions_as_arrays()
        .into_iter()
        .zip(cell.numbers.iter())
        .map(|(p, &number)| {
            let element = usize::try_from(number - 1)
                .ok()
                .and_then(|idx| species.get(idx))
                .cloned()
                .unwrap_or_else(|| format!("X{}", number));
            Atom::new(element, p)
        })
        .collect();

    Crystal::new(name, Lattice::from_vectors(cell.lattice.basis_as_array()), atoms)
}

/// 国际空间群简写符号（ITA 标准设置）
pub fn international_symbol(number: u32) -> &'static str {
    const SYMBOLS: [&str; 230] = [
        "P1", "P-1", "P2", "P2_1", "C2", "Pm", "Pc", "Cm", "Cc", "P2/m",
        "P2_1/m", "C2/m", "P2/c", "P2_1/c", "C2/c", "P222", "P222_1", "P2_12_12", "P2_12_12_1", "C222_1",
        "C222", "F222", "I222", "I2_12_12_1", "Pmm2", "Pmc2_1", "Pcc2", "Pma2", "Pca2_1", "Pnc2",
        "Pmn2_1", "Pba2", "Pna2_1", "Pnn2", "Cmm2", "Cmc2_1", "Ccc2", "Amm2", "Aem2", "Ama2",
        "Aea2", "Fmm2", "Fdd2", "Imm2", "Iba2", "Ima2", "Pmmm", "Pnnn", "Pccm", "Pban",
        "Pmma", "Pnna", "Pmna", "Pcca", "Pbam", "Pccn", "Pbcm", "Pnnm", "Pmmn", "Pbcn",
        "Pbca", "Pnma", "Cmcm", "Cmce", "Cmmm", "Cccm", "Cmme", "Ccce", "Fmmm", "Fddd",
        "Immm", "Ibam", "Ibca", "Imma", "P4", "P4_1", "P4_2", "P4_3", "I4", "I4_1",
        "P-4", "I-4", "P4/m", "P4_2/m", "P4/n", "P4_2/n", "I4/m", "I4_1/a", "P422", "P42_12",
        "P4_122", "P4_12_12", "P4_222", "P4_22_12", "P4_322", "P4_32_12", "I422", "I4_122", "P4mm", "P4bm",
        "P4_2cm", "P4_2nm", "P4cc", "P4nc", "P4_2mc", "P4_2bc", "I4mm", "I4cm", "I4_1md", "I4_1cd",
        "P-42m", "P-42c", "P-42_1m", "P-42_1c", "P-4m2", "P-4c2", "P-4b2", "P-4n2", "I-4m2", "I-4c2",
        "I-42m", "I-42d", "P4/mmm", "P4/mcc", "P4/nbm", "P4/nnc", "P4/mbm", "P4/mnc", "P4/nmm", "P4/ncc",
        "P4_2/mmc", "P4_2/mcm", "P4_2/nbc", "P4_2/nnm", "P4_2/mbc", "P4_2/mnm", "P4_2/nmc", "P4_2/ncm", "I4/mmm", "I4/mcm",
        "I4_1/amd", "I4_1/acd", "P3", "P3_1", "P3_2", "R3", "P-3", "R-3", "P312", "P321",
        "P3_112", "P3_121", "P3_212", "P3_221", "R32", "P3m1", "P31m", "P3c1", "P31c", "R3m",
        "R3c", "P-31m", "P-31c", "P-3m1", "P-3c1", "R-3m", "R-3c", "P6", "P6_1", "P6_5",
        "P6_2", "P6_4", "P6_3", "P-6", "P6/m", "P6_3/m", "P622", "P6_122", "P6_522", "P6_222",
        "P6_422", "P6_322", "P6mm", "P6cc", "P6_3cm", "P6_3mc", "P-6m2", "P-6c2", "P-62m", "P-62c",
        "P6/mmm", "P6/mcc", "P6_3/mcm", "P6_3/mmc", "P23", "F23", "I23", "P2_13", "I2_13", "Pm-3",
        "Pn-3", "Fm-3", "Fd-3", "Im-3", "Pa-3", "Ia-3", "P432", "P4_232", "F432", "F4_132",
        "I432", "P4_332", "P4_132", "I4_132", "P-43m", "F-43m", "I-43m", "P-43n", "F-43c", "I-43d",
        "Pm-3m", "Pn-3n", "Pm-3n", "Pn-3m", "Fm-3m", "Fm-3c", "Fd-3m", "Fd-3c", "Im-3m", "Ia-3d",
    ];

    match number {
        1..=230 => SYMBOLS[(number - 1) as usize],
        _ => "P1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rocksalt() -> Crystal {
        let lattice = Lattice::from_parameters(5.64, 5.64, 5.64, 90.0, 90.0, 90.0);
        let atoms = vec![
            Atom::new("Na", [0.0, 0.0, 0.0]),
            Atom::new("Na", [0.5, 0.5, 0.0]),
            Atom::new("Na", [0.5, 0.0, 0.5]),
            Atom::new("Na", [0.0, 0.5, 0.5]),
            Atom::new("Cl", [0.5, 0.0, 0.0]),
            Atom::new("Cl", [0.0, 0.5, 0.0]),
            Atom::new("Cl", [0.0, 0.0, 0.5]),
            Atom::new("Cl", [0.5, 0.5, 0.5]),
        ];
        Crystal::new("NaCl", lattice, atoms)
    }

    fn cubic(name: &str, a: f64, sites: &[(&str, [f64; 3])]) -> Crystal {
        let lattice = Lattice::from_parameters(a, a, a, 90.0, 90.0, 90.0);
        let atoms = sites.iter().map(|(el, p)| Atom::new(*el, *p)).collect();
        Crystal::new(name, lattice, atoms)
    }

    fn fcc_sites<'a>(element: &'a str, offset: f64) -> Vec<(&'a str, [f64; 3])> {
        [[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]]
            .iter()
            .map(|p| (element, p.map(|x| (x + offset) % 1.0)))
            .collect()
    }

    fn number_of(crystal: &Crystal) -> u32 {
        analyze(crystal, 1e-3).unwrap().spacegroup.number
    }

    #[test]
    fn test_symbol_table_landmarks() {
        assert_eq!(international_symbol(1), "P1");
        assert_eq!(international_symbol(62), "Pnma");
        assert_eq!(international_symbol(136), "P4_2/mnm");
        assert_eq!(international_symbol(166), "R-3m");
        assert_eq!(international_symbol(194), "P6_3/mmc");
        assert_eq!(international_symbol(225), "Fm-3m");
        assert_eq!(international_symbol(230), "Ia-3d");
    }

    #[test]
    fn test_lattice_type_from_number() {
        assert_eq!(LatticeType::from_spacegroup(2), LatticeType::Triclinic);
        assert_eq!(LatticeType::from_spacegroup(14), LatticeType::Monoclinic);
        assert_eq!(LatticeType::from_spacegroup(62), LatticeType::Orthorhombic);
        assert_eq!(LatticeType::from_spacegroup(139), LatticeType::Tetragonal);
        assert_eq!(LatticeType::from_spacegroup(164), LatticeType::Hexagonal);
        assert_eq!(LatticeType::from_spacegroup(166), LatticeType::Rhombohedral);
        assert_eq!(LatticeType::from_spacegroup(194), LatticeType::Hexagonal);
        assert_eq!(LatticeType::from_spacegroup(225), LatticeType::Cubic);
    }

    #[test]
    fn test_analyze_rocksalt() {
        let data = analyze(&rocksalt(), 1e-3).unwrap();
        assert_eq!(data.spacegroup.number, 225);
        assert_eq!(data.spacegroup.symbol, "Fm-3m");
        assert_eq!(data.spacegroup.centering(), 'F');
        assert_eq!(data.std_cell.atoms.len(), 8);
    }

    #[test]
    fn test_analyze_rejects_flat_cell() {
        let lattice = Lattice::from_vectors([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [3.0, 3.0, 0.0]]);
        let crystal = Crystal::new("flat", lattice, vec![Atom::new("C", [0.0, 0.0, 0.0])]);

        let err = analyze(&crystal, 1e-3).unwrap_err();
        assert!(matches!(err, KpathError::DegenerateLattice { .. }));
    }

    #[test]
    fn test_analyze_rejects_empty_structure() {
        let lattice = Lattice::from_parameters(3.0, 3.0, 3.0, 90.0, 90.0, 90.0);
        let crystal = Crystal::new("empty", lattice, vec![]);

        let err = analyze(&crystal, 1e-3).unwrap_err();
        assert!(matches!(err, KpathError::EmptyStructure { .. }));
    }

    #[test]
    fn test_cubic_elements() {
        assert_eq!(number_of(&cubic("Po", 3.35, &[("Po", [0.0; 3])])), 221);
        let iron = cubic("Fe", 2.87, &[("Fe", [0.0; 3]), ("Fe", [0.5, 0.5, 0.5])]);
        assert_eq!(number_of(&iron), 229);
        assert_eq!(number_of(&cubic("Cu", 3.61, &fcc_sites("Cu", 0.0))), 225);
    }

    #[test]
    fn test_diamond_and_zincblende() {
        let mut si = fcc_sites("Si", 0.0);
        si.extend(fcc_sites("Si", 0.25));
        let data = analyze(&cubic("Si", 5.43, &si), 1e-3).unwrap();
        assert_eq!(data.spacegroup.number, 227);
        assert_eq!(data.std_cell.atoms.len(), 8);

        let mut gaas = fcc_sites("Ga", 0.0);
        gaas.extend(fcc_sites("As", 0.25));
        let data = analyze(&cubic("GaAs", 5.65, &gaas), 1e-3).unwrap();
        assert_eq!(data.spacegroup.number, 216);
        let formula: Vec<&str> = data.std_cell.atoms.iter().map(|a| a.element.as_str()).collect();
        assert_eq!(formula.iter().filter(|&&e| e == "Ga").count(), 4);
        assert_eq!(formula.iter().filter(|&&e| e == "As").count(), 4);
    }

    #[test]
    fn test_hexagonal_and_rhombohedral() {
        let mg = Crystal::new(
            "Mg",
            Lattice::from_parameters(3.21, 3.21, 5.21, 90.0, 90.0, 120.0),
            vec![
                Atom::new("Mg", [1.0 / 3.0, 2.0 / 3.0, 0.25]),
                Atom::new("Mg", [2.0 / 3.0, 1.0 / 3.0, 0.75]),
            ],
        );
        assert_eq!(number_of(&mg), 194);

        let u = 0.227;
        let bi = Crystal::new(
            "Bi",
            Lattice::from_parameters(4.75, 4.75, 4.75, 57.2, 57.2, 57.2),
            vec![Atom::new("Bi", [u, u, u]), Atom::new("Bi", [1.0 - u, 1.0 - u, 1.0 - u])],
        );
        let data = analyze(&bi, 1e-3).unwrap();
        assert_eq!(data.spacegroup.number, 166);
        assert_eq!(data.spacegroup.lattice_type, LatticeType::Rhombohedral);
        // 六方轴惯用胞含三倍原子
        assert_eq!(data.std_cell.atoms.len(), 6);
        let (a, b, _, _, _, gamma) = data.std_cell.lattice.parameters();
        assert!((a - b).abs() < 1e-6);
        assert!((gamma - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_rutile_and_base_centered_monoclinic() {
        let u = 0.305;
        let rutile = Crystal::new(
            "TiO2",
            Lattice::from_parameters(4.59, 4.59, 2.96, 90.0, 90.0, 90.0),
            vec![
                Atom::new("Ti", [0.0, 0.0, 0.0]),
                Atom::new("Ti", [0.5, 0.5, 0.5]),
                Atom::new("O", [u, u, 0.0]),
                Atom::new("O", [1.0 - u, 1.0 - u, 0.0]),
                Atom::new("O", [0.5 + u, 0.5 - u, 0.5]),
                Atom::new("O", [0.5 - u, 0.5 + u, 0.5]),
            ],
        );
        assert_eq!(number_of(&rutile), 136);

        let c2m = Crystal::new(
            "C2/m",
            Lattice::from_parameters(5.0, 3.5, 4.0, 90.0, 105.0, 90.0),
            vec![Atom::new("Au", [0.0; 3]), Atom::new("Au", [0.5, 0.5, 0.0])],
        );
        let data = analyze(&c2m, 1e-3).unwrap();
        assert_eq!(data.spacegroup.number, 12);
        assert_eq!(data.spacegroup.centering(), 'C');
        assert_eq!(data.std_cell.atoms.len(), 2);
    }

    #[test]
    fn test_low_symmetry_lattices() {
        let single = |params: (f64, f64, f64, f64, f64, f64)| {
            let (a, b, c, alpha, beta, gamma) = params;
            Crystal::new(
                "X",
                Lattice::from_parameters(a, b, c, alpha, beta, gamma),
                vec![Atom::new("Ar", [0.0; 3])],
            )
        };
        assert_eq!(number_of(&single((3.0, 4.0, 5.0, 90.0, 90.0, 90.0))), 47);
        assert_eq!(number_of(&single((3.0, 4.0, 5.0, 90.0, 100.0, 90.0))), 10);
        assert_eq!(number_of(&single((3.0, 4.0, 5.0, 75.0, 82.0, 97.0))), 2);
    }

    #[test]
    fn test_strongly_sheared_cubic_basis() {
        // 同一简单立方格子的高度倾斜基
        let bases = [
            [[3.0, 0.0, 0.0], [300.0, 3.0, 0.0], [300.0, 300.0, 3.0]],
            [[3.0, 0.0, 0.0], [3000.0, 3.0, 0.0], [0.0, 0.0, 3.0]],
        ];
        for basis in bases {
            let crystal = Crystal::new(
                "sheared",
                Lattice::from_vectors(basis),
                vec![Atom::new("Po", [0.0; 3])],
            );
            let data = analyze(&crystal, 1e-3).unwrap();
            assert_eq!(data.spacegroup.number, 221);
            let [a, b, c] = data.std_cell.lattice.lengths();
            assert!((a - 3.0).abs() < 1e-6 && (b - 3.0).abs() < 1e-6 && (c - 3.0).abs() < 1e-6);
        }
    }
}
