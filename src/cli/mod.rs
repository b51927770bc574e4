//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `kpath`: 计算高对称 k 点路径并写出 DFT 输入
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: kpath

pub mod kpath;

use clap::{Parser, Subcommand};

/// kpathkit - 能带结构高对称 k 点路径工具
#[derive(Parser)]
#[command(name = "kpathkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "High-symmetry k-point paths for band structure calculations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Setyawan-Curtarolo k-point path for a structure (.cell, POSCAR)
    Kpath(kpath::KpathArgs),
}
