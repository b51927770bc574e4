//! # k 点路径公共接口
//!
//! `Kpath` 是各种路径生成策略共享的接口。`KpathBase` 完成与具体路径无关的
//! 初始化（空间群识别、晶格分类），实现者只需提供 k 点表和标准化晶胞。
//!
//! ## 依赖关系
//! - 被 `symmetry/setyawan_curtarolo.rs` 实现
//! - 被 `commands/kpath.rs` 和 `kpoints/` 使用

use crate::error::{KpathError, Result};
use crate::models::Crystal;
use crate::symmetry::spacegroup::{self, LatticeType, SpacegroupData};
use crate::utils::linalg::{self, Vec3};

use std::collections::BTreeMap;

/// 默认对称性容差 (Å)
pub const DEFAULT_SYMPREC: f64 = 1e-3;

/// `correct_structure` 默认的晶格矩阵比较容差
pub const DEFAULT_ATOL: f64 = 1e-5;

/// 默认线密度（每 Å⁻¹ 的 k 点数）
pub const DEFAULT_LINE_DENSITY: f64 = 60.0;

/// 与具体路径无关的公共数据
#[derive(Debug, Clone)]
pub struct KpathBase {
    structure: Crystal,
    symprec: f64,
    spacegroup: SpacegroupData,
}

impl KpathBase {
    pub fn new(structure: &Crystal, symprec: f64) -> Result<Self> {
        let dataset = spacegroup::analyze(structure, symprec)?;
        Ok(KpathBase {
            structure: structure.clone(),
            symprec,
            spacegroup: dataset.spacegroup,
        })
    }

    pub fn structure(&self) -> &Crystal {
        &self.structure
    }

    pub fn symprec(&self) -> f64 {
        self.symprec
    }

    pub fn spacegroup(&self) -> &SpacegroupData {
        &self.spacegroup
    }
}

/// 沿路径采样的 k 点
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandKpoints {
    /// k 点坐标（分数或笛卡尔）
    pub kpoints: Vec<Vec3>,
    /// 沿路径的累计距离 (Å⁻¹)，子路径断开处距离不增加
    pub distances: Vec<f64>,
    /// 每个 k 点的标签，非高对称点为空字符串
    pub labels: Vec<String>,
}

impl BandKpoints {
    pub fn len(&self) -> usize {
        self.kpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kpoints.is_empty()
    }
}

/// 高对称 k 点路径接口
pub trait Kpath {
    /// 公共初始化数据
    fn base(&self) -> &KpathBase;

    /// 高对称点标签 -> 原胞倒格子分数坐标
    fn kpoints(&self) -> &BTreeMap<String, Vec3>;

    /// 子路径列表，例如 [["A", "B"], ["C", "D"]]
    fn path(&self) -> &[Vec<String>];

    /// 获得正确能带所需的标准化原胞
    fn prim(&self) -> &Crystal;

    /// 标准化惯用胞
    fn conv(&self) -> &Crystal;

    fn structure(&self) -> &Crystal {
        self.base().structure()
    }

    /// 布拉维晶格类型，六方晶格区分菱方与六方
    fn lattice_type(&self) -> LatticeType {
        self.base().spacegroup().lattice_type
    }

    /// 国际空间群符号
    fn spg_symbol(&self) -> &str {
        &self.base().spacegroup().symbol
    }

    /// 国际空间群号
    fn spg_number(&self) -> u32 {
        self.base().spacegroup().number
    }

    /// 路径字符串，例如 "X -> \Gamma | Y -> Z"
    fn path_string(&self) -> String {
        self.path()
            .iter()
            .map(|subpath| subpath.join(" -> "))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// 输入结构的晶格是否与标准原胞一致
    fn correct_structure(&self, atol: f64) -> bool {
        self.structure().lattice.approx_eq(&self.prim().lattice, atol)
    }

    /// 查找标签对应的坐标，标签不在 k 点表中时报错
    fn kpoint(&self, label: &str) -> Result<Vec3> {
        self.kpoints().get(label).copied().ok_or_else(|| {
            KpathError::Other(format!("k-point '{}' is missing from the k-point table", label))
        })
    }

    /// 按线密度沿路径采样 k 点
    ///
    /// 每段的点数为 `max(round(|Δk| * line_density), 1)`，两端都包含；
    /// 相邻段共享的端点只出现一次。
    fn get_kpoints(&self, line_density: f64, cart_coords: bool) -> Result<BandKpoints> {
        if line_density <= 0.0 {
            return Err(KpathError::InvalidArgument(format!(
                "line density must be positive, got {}",
                line_density
            )));
        }

        let recip = self
            .prim()
            .lattice
            .reciprocal_lattice()
            .ok_or(KpathError::DegenerateLattice {
                volume: self.prim().lattice.volume(),
            })?;

        let mut band = BandKpoints::default();
        let mut distance = 0.0;

        for subpath in self.path() {
            for (i, segment) in subpath.windows(2).enumerate() {
                let start = self.kpoint(&segment[0])?;
                let end = self.kpoint(&segment[1])?;
                let delta = linalg::sub(&end, &start);
                let length = linalg::norm(&recip.frac_to_cart(&delta));
                let n = ((length * line_density).round() as usize).max(1);

                for j in 0..=n {
                    if i > 0 && j == 0 {
                        continue;
                    }
                    let t = j as f64 / n as f64;
                    let frac = [
                        start[0] + t * delta[0],
                        start[1] + t * delta[1],
                        start[2] + t * delta[2],
                    ];

                    if j > 0 {
                        distance += length / n as f64;
                    }

                    let label = if j == 0 {
                        segment[0].clone()
                    } else if j == n {
                        segment[1].clone()
                    } else {
                        String::new()
                    };

                    let point = if cart_coords {
                        recip.frac_to_cart(&frac)
                    } else {
                        frac
                    };

                    band.kpoints.push(point);
                    band.distances.push(distance);
                    band.labels.push(label);
                }
            }
        }

        Ok(band)
    }
}
