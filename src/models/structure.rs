//! # 晶体结构数据模型
//!
//! 定义统一的晶体结构表示，作为 k 点路径计算的输入，
//! 以及标准化原胞/惯用胞的输出。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`symmetry/` 和 `kpoints/` 使用
//! - 使用 `utils/linalg.rs`

use crate::utils::linalg::{self, Mat3, Vec3};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// 晶格参数表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: Mat3,
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度。a 沿 x 轴，b 位于 xy 平面内。
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let cos_alpha = alpha.to_radians().cos();
        let cos_beta = beta.to_radians().cos();
        let (sin_gamma, cos_gamma) = gamma.to_radians().sin_cos();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).max(0.0).sqrt();

        Lattice {
            matrix: [a_vec, b_vec, [c1, c2, c3]],
        }
    }

    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: Mat3) -> Self {
        Lattice { matrix }
    }

    /// 晶格常数 (a, b, c)
    pub fn lengths(&self) -> [f64; 3] {
        [
            linalg::norm(&self.matrix[0]),
            linalg::norm(&self.matrix[1]),
            linalg::norm(&self.matrix[2]),
        ]
    }

    /// 晶格角 (alpha, beta, gamma)，单位：度
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = self.matrix;
        [angle_between(&b, &c), angle_between(&a, &c), angle_between(&a, &b)]
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a, b, c] = self.lengths();
        let [alpha, beta, gamma] = self.angles();
        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积（带符号，左手系为负）
    pub fn volume(&self) -> f64 {
        linalg::det(&self.matrix)
    }

    /// 倒格子（含 2π 因子），行向量为 b1, b2, b3
    ///
    /// 退化晶格返回 None。
    pub fn reciprocal_lattice(&self) -> Option<Lattice> {
        let inv = linalg::inverse(&self.matrix)?;
        let mut matrix = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                matrix[i][j] = 2.0 * PI * inv[j][i];
            }
        }
        Some(Lattice { matrix })
    }

    /// 分数坐标转笛卡尔坐标
    pub fn frac_to_cart(&self, frac: &Vec3) -> Vec3 {
        linalg::vec_mat(frac, &self.matrix)
    }

    /// 笛卡尔坐标转分数坐标，退化晶格返回 None
    pub fn cart_to_frac(&self, cart: &Vec3) -> Option<Vec3> {
        let inv = linalg::inverse(&self.matrix)?;
        Some(linalg::vec_mat(cart, &inv))
    }

    /// 逐元素比较两个晶格矩阵
    pub fn approx_eq(&self, other: &Lattice, atol: f64) -> bool {
        self.matrix
            .iter()
            .flatten()
            .zip(other.matrix.iter().flatten())
            .all(|(x, y)| (x - y).abs() <= atol)
    }
}

/// 两向量夹角（度）
fn angle_between(u: &Vec3, v: &Vec3) -> f64 {
    let cos = linalg::dot(u, v) / (linalg::norm(u) * linalg::norm(v));
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// 原子信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 分数坐标 [x, y, z]
    pub position: Vec3,
}

impl Atom {
    pub fn new(element: impl Into<String>, position: Vec3) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crystal {
    /// 结构名称
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 原子列表
    pub atoms: Vec<Atom>,

    /// 来源文件格式
    pub source_format: Option<String>,
}

impl Crystal {
    pub fn new(name: impl Into<String>, lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Crystal {
            name: name.into(),
            lattice,
            atoms,
            source_format: None,
        }
    }

    /// 每种元素的原子数
    pub fn composition(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// 约化组成（除以各元素原子数的最大公约数）
    pub fn reduced_composition(&self) -> BTreeMap<String, usize> {
        let counts = self.composition();
        let divisor = counts.values().copied().fold(0, gcd).max(1);
        counts
            .into_iter()
            .map(|(el, n)| (el, n / divisor))
            .collect()
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        self.composition()
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
