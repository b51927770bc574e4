//! # 对称性与高对称 k 点路径模块
//!
//! ## 子模块
//! - `spacegroup`: 空间群识别入口（moyo）
//! - `standard`: Setyawan–Curtarolo 标准惯用胞/原胞
//! - `paths`: SC 高对称点表
//! - `bandstructure`: 高对称路径计算器
//! - `kpath`: 路径公共接口 `Kpath`
//! - `setyawan_curtarolo`: SC 路径适配器
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 和 `kpoints/` 使用
//! - 使用 `models/structure.rs`

pub mod bandstructure;
pub mod kpath;
pub mod paths;
pub mod setyawan_curtarolo;
pub mod spacegroup;
pub mod standard;

pub use kpath::{BandKpoints, Kpath, DEFAULT_ATOL, DEFAULT_LINE_DENSITY, DEFAULT_SYMPREC};
pub use setyawan_curtarolo::SetyawanCurtaroloKpath;
pub use spacegroup::LatticeType;
