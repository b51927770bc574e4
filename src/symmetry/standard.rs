//! # Setyawan–Curtarolo 标准晶胞
//!
//! 将 ITA 标准惯用胞转换为 Setyawan–Curtarolo (2010) 约定的
//! 惯用胞与原胞。k 点表中的分数坐标均以该约定下原胞的倒格子为基。
//!
//! ## 约定
//! - 正交：P/F/I 格子 a < b < c；底心格子心化面移到 ab 面且 a < b
//! - 单斜：唯一轴为 a，α < 90°；P 格子 b ≤ c
//! - 三斜：倒格子角全部 ≥ 90° 或全部 ≤ 90°
//! - 晶格按晶格参数重建（a 沿 x 轴，b 在 xy 平面内）
//!
//! ## 依赖关系
//! - 被 `symmetry/bandstructure.rs` 调用
//! - 使用 `symmetry/spacegroup.rs` 的对称性结果

use crate::error::{KpathError, Result};
use crate::models::{Atom, Crystal, Lattice};
use crate::symmetry::spacegroup::{LatticeType, SymmetryDataset};
use crate::utils::linalg::{self, Mat3, Vec3};

const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// 标准化后的晶胞
#[derive(Debug, Clone)]
pub struct StandardCells {
    pub conventional: Crystal,
    pub primitive: Crystal,
    /// 转换后惯用胞的心化类型
    pub centering: char,
}

/// 由对称性分析结果生成标准惯用胞与原胞
pub fn standardize(dataset: &SymmetryDataset, symprec: f64) -> Result<StandardCells> {
    let std_cell = &dataset.std_cell;
    let lattice_type = dataset.spacegroup.lattice_type;
    let centering = dataset.spacegroup.centering();

    let (axes, centering) = match lattice_type {
        LatticeType::Orthorhombic => orthorhombic_axes(&std_cell.lattice, centering),
        LatticeType::Monoclinic => (monoclinic_axes(&std_cell.lattice, centering), centering),
        LatticeType::Triclinic => (triclinic_axes(&std_cell.lattice), centering),
        _ => (IDENTITY, centering),
    };

    let conventional = transform_cell(std_cell, &axes, symprec)?;
    let to_primitive = primitive_transform(lattice_type, centering)?;
    let primitive = transform_cell(&conventional, &to_primitive, symprec)?;

    Ok(StandardCells {
        conventional,
        primitive,
        centering,
    })
}

/// 惯用胞 -> SC 原胞的变换矩阵（行向量以惯用胞基表示）
fn primitive_transform(lattice_type: LatticeType, centering: char) -> Result<Mat3> {
    let transform = match (centering, lattice_type) {
        ('P', _) => IDENTITY,
        ('F', _) => [[0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]],
        ('I', _) => [[-0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, -0.5]],
        ('C', LatticeType::Orthorhombic) => [[0.5, -0.5, 0.0], [0.5, 0.5, 0.0], [0.0, 0.0, 1.0]],
        ('C', LatticeType::Monoclinic) => [[0.5, 0.5, 0.0], [-0.5, 0.5, 0.0], [0.0, 0.0, 1.0]],
        ('R', _) => [
            [2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
            [-1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
            [-1.0 / 3.0, -2.0 / 3.0, 1.0 / 3.0],
        ],
        (centering, lattice_type) => {
            return Err(KpathError::UnsupportedCentering {
                centering,
                lattice_type: lattice_type.to_string(),
            })
        }
    };
    Ok(transform)
}

/// 正交晶系轴序，返回变换矩阵与转换后的心化类型
fn orthorhombic_axes(lattice: &Lattice, centering: char) -> (Mat3, char) {
    let lengths = lattice.lengths();
    let rows = |order: [usize; 3]| -> Mat3 {
        let mut m = [[0.0; 3]; 3];
        for (row, &axis) in m.iter_mut().zip(order.iter()) {
            row[axis] = 1.0;
        }
        m
    };

    let (order, centering) = match centering {
        // 心化面轮换到 ab 面
        'A' => ([1, 2, 0], 'C'),
        'B' => ([2, 0, 1], 'C'),
        'C' => ([0, 1, 2], 'C'),
        _ => {
            let mut order = [0, 1, 2];
            order.sort_by(|&i, &j| lengths[i].total_cmp(&lengths[j]));
            (order, centering)
        }
    };

    let mut order = order;
    if centering == 'C' && lengths[order[0]] > lengths[order[1]] {
        order.swap(0, 1);
    }

    (proper(rows(order)), centering)
}

/// 单斜晶系：ITA 唯一轴 b -> SC 唯一轴 a
fn monoclinic_axes(lattice: &Lattice, centering: char) -> Mat3 {
    let [a, _, c] = lattice.matrix;
    let c_sign = if linalg::dot(&a, &c) < 0.0 { -1.0 } else { 1.0 };

    let mut m = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, c_sign]];

    let lengths = lattice.lengths();
    if centering == 'P' && lengths[0] > lengths[2] {
        m.swap(1, 2);
    }

    proper(m)
}

/// 三斜晶系：翻转两根轴使倒格子角同为钝角或同为锐角
fn triclinic_axes(lattice: &Lattice) -> Mat3 {
    const TOL: f64 = 1e-8;

    let recip = match lattice.reciprocal_lattice() {
        Some(r) => r,
        None => return IDENTITY,
    };
    let [b1, b2, b3] = recip.matrix;
    // (kα, kβ, kγ) 对应的余弦
    let cosines = [
        linalg::dot(&b2, &b3),
        linalg::dot(&b1, &b3),
        linalg::dot(&b1, &b2),
    ];

    let flips: [[f64; 3]; 4] = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];

    for signs in flips {
        let flipped = [
            cosines[0] * signs[1] * signs[2],
            cosines[1] * signs[0] * signs[2],
            cosines[2] * signs[0] * signs[1],
        ];
        let all_obtuse = flipped.iter().all(|&c| c <= TOL);
        let all_acute = flipped.iter().all(|&c| c >= -TOL);
        if all_obtuse || all_acute {
            return [
                [signs[0], 0.0, 0.0],
                [0.0, signs[1], 0.0],
                [0.0, 0.0, signs[2]],
            ];
        }
    }

    IDENTITY
}

/// 行列式为负时翻转第一根轴，保持手性
fn proper(mut m: Mat3) -> Mat3 {
    if linalg::det(&m) < 0.0 {
        for value in m[0].iter_mut() {
            *value = -*value;
        }
    }
    m
}

/// 应用基变换：新晶格 = P · L，新分数坐标 = f · P⁻¹
///
/// 原子坐标折回 [0, 1)，重复位点（笛卡尔距离 < symprec）只保留一个。
/// 晶格随后按晶格参数重建，仅相当于一次刚体转动。
fn transform_cell(crystal: &Crystal, p: &Mat3, symprec: f64) -> Result<Crystal> {
    let inv = linalg::inverse(p).ok_or_else(|| {
        KpathError::Other("Singular cell transformation matrix".to_string())
    })?;

    let transformed = Lattice::from_vectors(linalg::mat_mul(p, &crystal.lattice.matrix));
    let (a, b, c, alpha, beta, gamma) = transformed.parameters();
    let lattice = Lattice::from_parameters(a, b, c, alpha, beta, gamma);

    let mut atoms: Vec<Atom> = Vec::new();
    for atom in &crystal.atoms {
        let frac = wrap_vec(&linalg::vec_mat(&atom.position, &inv));

        let duplicate = atoms.iter().any(|existing| {
            existing.element == atom.element
                && periodic_norm(&lattice.matrix, &linalg::sub(&existing.position, &frac)) < symprec
        });
        if !duplicate {
            atoms.push(Atom::new(atom.element.clone(), frac));
        }
    }

    Ok(Crystal::new(crystal.name.clone(), lattice, atoms))
}

/// 分数坐标折回 [0, 1)
fn wrap_vec(v: &Vec3) -> Vec3 {
    v.map(|x| {
        let w = x - x.floor();
        if w >= 1.0 - 1e-10 {
            0.0
        } else {
            w
        }
    })
}

/// 分数坐标差 `d` 的最近周期像的笛卡尔长度
fn periodic_norm(matrix: &Mat3, d: &Vec3) -> f64 {
    let base = d.map(|x| x - x.round());
    let mut best = f64::MAX;
    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                let v = [base[0] + i as f64, base[1] + j as f64, base[2] + k as f64];
                best = best.min(linalg::norm(&linalg::vec_mat(&v, matrix)));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::spacegroup::SpacegroupData;

    fn dataset(number: u32, lattice: Lattice, atoms: Vec<Atom>) -> SymmetryDataset {
        SymmetryDataset {
            spacegroup: SpacegroupData::from_number(number),
            std_cell: Crystal::new("test", lattice, atoms),
        }
    }

    fn fcc_copper() -> SymmetryDataset {
        dataset(
            225,
            Lattice::from_parameters(3.61, 3.61, 3.61, 90.0, 90.0, 90.0),
            vec![
                Atom::new("Cu", [0.0, 0.0, 0.0]),
                Atom::new("Cu", [0.5, 0.5, 0.0]),
                Atom::new("Cu", [0.5, 0.0, 0.5]),
                Atom::new("Cu", [0.0, 0.5, 0.5]),
            ],
        )
    }

    #[test]
    fn test_fcc_primitive_has_one_atom() {
        let cells = standardize(&fcc_copper(), 1e-3).unwrap();
        assert_eq!(cells.conventional.atoms.len(), 4);
        assert_eq!(cells.primitive.atoms.len(), 1);

        let (a, _, _, alpha, beta, gamma) = cells.primitive.lattice.parameters();
        assert!((a - 3.61 / 2f64.sqrt()).abs() < 1e-6);
        assert!((alpha - 60.0).abs() < 1e-6);
        assert!((beta - 60.0).abs() < 1e-6);
        assert!((gamma - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_primitive_volume_ratio() {
        let cells = standardize(&fcc_copper(), 1e-3).unwrap();
        let ratio = cells.conventional.lattice.volume() / cells.primitive.lattice.volume();
        assert!((ratio - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_orthorhombic_axes_sorted() {
        let data = dataset(
            47,
            Lattice::from_parameters(5.0, 3.0, 4.0, 90.0, 90.0, 90.0),
            vec![Atom::new("P", [0.0, 0.0, 0.0]), Atom::new("P", [0.5, 0.0, 0.0])],
        );
        let cells = standardize(&data, 1e-3).unwrap();

        let [a, b, c] = cells.conventional.lattice.lengths();
        assert!((a - 3.0).abs() < 1e-9);
        assert!((b - 4.0).abs() < 1e-9);
        assert!((c - 5.0).abs() < 1e-9);

        // 原 a 轴上的原子对现在沿 c 轴分布
        let shifted = &cells.conventional.atoms[1].position;
        assert!((shifted[2] - 0.5).abs() < 1e-9);
        assert!(cells.conventional.lattice.volume() > 0.0);
    }

    #[test]
    fn test_a_centered_becomes_c_centered() {
        let data = dataset(
            38,
            Lattice::from_parameters(3.0, 5.0, 6.0, 90.0, 90.0, 90.0),
            vec![Atom::new("Si", [0.0, 0.0, 0.0]), Atom::new("Si", [0.0, 0.5, 0.5])],
        );
        let cells = standardize(&data, 1e-3).unwrap();

        assert_eq!(cells.centering, 'C');
        assert_eq!(cells.primitive.atoms.len(), 1);
        let [a, b, _] = cells.conventional.lattice.lengths();
        assert!(a < b);
    }

    #[test]
    fn test_monoclinic_unique_axis_moved_to_a() {
        let data = dataset(
            10,
            Lattice::from_parameters(4.0, 6.0, 5.0, 90.0, 110.0, 90.0),
            vec![Atom::new("Se", [0.0, 0.0, 0.0])],
        );
        let cells = standardize(&data, 1e-3).unwrap();

        let (a, b, c, alpha, beta, gamma) = cells.conventional.lattice.parameters();
        assert!((a - 6.0).abs() < 1e-9);
        assert!((b - 4.0).abs() < 1e-9);
        assert!((c - 5.0).abs() < 1e-9);
        assert!((alpha - 70.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_triclinic_reciprocal_angles_uniform() {
        let data = dataset(
            1,
            Lattice::from_parameters(4.0, 5.0, 6.0, 80.0, 100.0, 95.0),
            vec![Atom::new("H", [0.1, 0.2, 0.3])],
        );
        let cells = standardize(&data, 1e-3).unwrap();
        let recip = cells.primitive.lattice.reciprocal_lattice().unwrap();
        let angles = recip.angles();

        let all_obtuse = angles.iter().all(|&x| x >= 90.0 - 1e-6);
        let all_acute = angles.iter().all(|&x| x <= 90.0 + 1e-6);
        assert!(all_obtuse || all_acute);
    }

    #[test]
    fn test_unsupported_centering() {
        let err = primitive_transform(LatticeType::Cubic, 'C').unwrap_err();
        assert!(matches!(err, KpathError::UnsupportedCentering { .. }));
    }
}
