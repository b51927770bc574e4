//! # 高对称 k 点路径计算器
//!
//! 对给定结构与对称性容差：
//! 1. 识别空间群
//! 2. 生成 SC 标准惯用胞与原胞
//! 3. 根据晶格参数选择 SC 晶格变体并生成 k 点表
//!
//! ## 依赖关系
//! - 被 `symmetry/setyawan_curtarolo.rs` 调用
//! - 使用 `symmetry/spacegroup.rs`、`symmetry/standard.rs`、`symmetry/paths.rs`

use crate::error::{KpathError, Result};
use crate::models::Crystal;
use crate::symmetry::paths::{self, KpathData, LatticeVariant};
use crate::symmetry::spacegroup::{self, LatticeType, SpacegroupData};
use crate::symmetry::standard;

/// 判断晶格参数"相等"时使用的相对容差
const EQ_TOL: f64 = 1e-6;

/// 高对称 k 点路径计算结果
#[derive(Debug, Clone)]
pub struct HighSymmKpath {
    spacegroup: SpacegroupData,
    variant: LatticeVariant,
    kpath: KpathData,
    prim: Crystal,
    conventional: Crystal,
}

impl HighSymmKpath {
    pub fn new(structure: &Crystal, symprec: f64) -> Result<Self> {
        let dataset = spacegroup::analyze(structure, symprec)?;
        let cells = standard::standardize(&dataset, symprec)?;

        let variant = select_variant(
            dataset.spacegroup.lattice_type,
            cells.centering,
            &cells.conventional,
            &cells.primitive,
        )?;
        let kpath = build_kpath(variant, &cells.conventional);

        Ok(HighSymmKpath {
            spacegroup: dataset.spacegroup,
            variant,
            kpath,
            prim: cells.primitive,
            conventional: cells.conventional,
        })
    }

    /// 高对称点与路径
    pub fn kpath(&self) -> &KpathData {
        &self.kpath
    }

    /// SC 标准原胞
    pub fn prim(&self) -> &Crystal {
        &self.prim
    }

    /// SC 标准惯用胞
    pub fn conventional(&self) -> &Crystal {
        &self.conventional
    }

    pub fn variant(&self) -> LatticeVariant {
        self.variant
    }

    pub fn spacegroup(&self) -> &SpacegroupData {
        &self.spacegroup
    }

    /// 拆分为 (k 点表, 原胞, 惯用胞)
    pub fn into_parts(self) -> (KpathData, Crystal, Crystal) {
        (self.kpath, self.prim, self.conventional)
    }
}

fn approx_eq(x: f64, y: f64) -> bool {
    (x - y).abs() <= EQ_TOL * x.abs().max(y.abs()).max(1.0)
}

/// 选择 SC 晶格变体
fn select_variant(
    lattice_type: LatticeType,
    centering: char,
    conv: &Crystal,
    prim: &Crystal,
) -> Result<LatticeVariant> {
    let [a, b, c] = conv.lattice.lengths();
    let unsupported = || KpathError::UnsupportedCentering {
        centering,
        lattice_type: lattice_type.to_string(),
    };

    let variant = match lattice_type {
        LatticeType::Cubic => match centering {
            'P' => LatticeVariant::Cub,
            'F' => LatticeVariant::Fcc,
            'I' => LatticeVariant::Bcc,
            _ => return Err(unsupported()),
        },
        LatticeType::Tetragonal => match centering {
            'P' => LatticeVariant::Tet,
            'I' if c < a => LatticeVariant::Bct1,
            'I' => LatticeVariant::Bct2,
            _ => return Err(unsupported()),
        },
        LatticeType::Orthorhombic => match centering {
            'P' => LatticeVariant::Orc,
            'F' => {
                let lhs = 1.0 / (a * a);
                let rhs = 1.0 / (b * b) + 1.0 / (c * c);
                if approx_eq(lhs, rhs) {
                    LatticeVariant::Orcf3
                } else if lhs > rhs {
                    LatticeVariant::Orcf1
                } else {
                    LatticeVariant::Orcf2
                }
            }
            'I' => LatticeVariant::Orci,
            'C' => LatticeVariant::Orcc,
            _ => return Err(unsupported()),
        },
        LatticeType::Hexagonal => LatticeVariant::Hex,
        LatticeType::Rhombohedral => {
            let alpha = prim.lattice.angles()[0];
            if alpha < 90.0 {
                LatticeVariant::Rhl1
            } else {
                LatticeVariant::Rhl2
            }
        }
        LatticeType::Monoclinic => match centering {
            'P' => LatticeVariant::Mcl,
            'C' => {
                let kgamma = reciprocal_angles(prim)?[2];
                if approx_eq(kgamma, 90.0) {
                    LatticeVariant::Mclc2
                } else if kgamma > 90.0 {
                    LatticeVariant::Mclc1
                } else {
                    let alpha = conv.lattice.angles()[0].to_radians();
                    let test = b * alpha.cos() / c + (b * alpha.sin() / a).powi(2);
                    if approx_eq(test, 1.0) {
                        LatticeVariant::Mclc4
                    } else if test < 1.0 {
                        LatticeVariant::Mclc3
                    } else {
                        LatticeVariant::Mclc5
                    }
                }
            }
            _ => return Err(unsupported()),
        },
        LatticeType::Triclinic => {
            let [ka, kb, kg] = reciprocal_angles(prim)?;
            let obtuse = ka > 90.0 && kb > 90.0;
            match (obtuse, approx_eq(kg, 90.0)) {
                (true, true) => LatticeVariant::Tri2a,
                (true, false) => LatticeVariant::Tri1a,
                (false, true) => LatticeVariant::Tri2b,
                (false, false) => LatticeVariant::Tri1b,
            }
        }
    };

    Ok(variant)
}

/// 原胞倒格子角 (kα, kβ, kγ)
fn reciprocal_angles(prim: &Crystal) -> Result<[f64; 3]> {
    let recip = prim
        .lattice
        .reciprocal_lattice()
        .ok_or(KpathError::DegenerateLattice {
            volume: prim.lattice.volume(),
        })?;
    Ok(recip.angles())
}

/// 生成 k 点表
fn build_kpath(variant: LatticeVariant, conv: &Crystal) -> KpathData {
    let [a, b, c] = conv.lattice.lengths();
    let alpha = conv.lattice.angles()[0].to_radians();

    match variant {
        LatticeVariant::Cub => paths::cub(),
        LatticeVariant::Fcc => paths::fcc(),
        LatticeVariant::Bcc => paths::bcc(),
        LatticeVariant::Tet => paths::tet(),
        LatticeVariant::Bct1 => paths::bct1(c, a),
        LatticeVariant::Bct2 => paths::bct2(c, a),
        LatticeVariant::Orc => paths::orc(),
        LatticeVariant::Orcf1 => paths::orcf1(a, b, c),
        LatticeVariant::Orcf2 => paths::orcf2(a, b, c),
        LatticeVariant::Orcf3 => paths::orcf3(a, b, c),
        LatticeVariant::Orci => paths::orci(a, b, c),
        LatticeVariant::Orcc => paths::orcc(a, b),
        LatticeVariant::Hex => paths::hex(),
        LatticeVariant::Rhl1 | LatticeVariant::Rhl2 => {
            // 菱方角取原胞的 α
            let prim_alpha = rhombohedral_alpha(a, c);
            if variant == LatticeVariant::Rhl1 {
                paths::rhl1(prim_alpha)
            } else {
                paths::rhl2(prim_alpha)
            }
        }
        LatticeVariant::Mcl => paths::mcl(b, c, alpha),
        LatticeVariant::Mclc1 => paths::mclc1(a, b, c, alpha),
        LatticeVariant::Mclc2 => paths::mclc2(a, b, c, alpha),
        LatticeVariant::Mclc3 => paths::mclc3(a, b, c, alpha),
        LatticeVariant::Mclc4 => paths::mclc4(a, b, c, alpha),
        LatticeVariant::Mclc5 => paths::mclc5(a, b, c, alpha),
        LatticeVariant::Tri1a | LatticeVariant::Tri2a => paths::tria(),
        LatticeVariant::Tri1b | LatticeVariant::Tri2b => paths::trib(),
    }
}

/// 六方轴 (a, c) 对应菱方原胞的 α（弧度）
fn rhombohedral_alpha(a: f64, c: f64) -> f64 {
    // |a_R|² = a²/3 + c²/9,  a_R·a_R' = -a²/6 + c²/9
    let length_sq = a * a / 3.0 + c * c / 9.0;
    let overlap = -a * a / 6.0 + c * c / 9.0;
    (overlap / length_sq).clamp(-1.0, 1.0).acos()
}
