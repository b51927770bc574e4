//! # k 点输出模块
//!
//! 将高对称路径写成各 DFT 代码的输入格式。
//!
//! ## 子模块
//! - `vasp`: line-mode / 显式 KPOINTS
//! - `castep`: SPECTRAL_KPOINT_PATH 块
//! - `export`: JSON 摘要与 CSV 采样点
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 使用
//! - 使用 `symmetry/` 的 `Kpath` 接口

pub mod castep;
pub mod export;
pub mod vasp;
