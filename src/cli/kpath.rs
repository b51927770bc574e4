//! # kpath 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/kpath.rs`

use crate::batch::DEFAULT_PATTERN;
use crate::symmetry::{DEFAULT_ATOL, DEFAULT_LINE_DENSITY, DEFAULT_SYMPREC};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// k 路径输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum KpathFormat {
    /// VASP line-mode KPOINTS
    Vasp,
    /// CASTEP .cell with SPECTRAL_KPOINT_PATH block (primitive cell)
    Castep,
    /// JSON summary (spacegroup, k-points, path)
    Json,
    /// CSV of k-points sampled along the path
    Csv,
}

impl KpathFormat {
    /// 批量模式下输出文件的后缀
    pub fn file_suffix(&self) -> &'static str {
        match self {
            KpathFormat::Vasp => "KPOINTS",
            KpathFormat::Castep => "band.cell",
            KpathFormat::Json => "kpath.json",
            KpathFormat::Csv => "kpath.csv",
        }
    }
}

impl std::fmt::Display for KpathFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpathFormat::Vasp => write!(f, "vasp"),
            KpathFormat::Castep => write!(f, "castep"),
            KpathFormat::Json => write!(f, "json"),
            KpathFormat::Csv => write!(f, "csv"),
        }
    }
}

/// kpath 子命令参数
#[derive(Args, Debug)]
pub struct KpathArgs {
    /// Input: structure file (.cell, POSCAR, *.vasp) or directory of structures
    pub input: PathBuf,

    /// Output: file path (single mode) or directory (batch mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = KpathFormat::Vasp)]
    pub format: KpathFormat,

    /// Symmetry tolerance for space group detection (Å)
    #[arg(short, long, default_value_t = DEFAULT_SYMPREC)]
    pub symprec: f64,

    /// Tolerance when comparing the input lattice with the standard primitive cell
    #[arg(long, default_value_t = DEFAULT_ATOL)]
    pub atol: f64,

    /// Number of k-points per Å⁻¹ along the path (csv output, CASTEP spacing)
    #[arg(short, long, default_value_t = DEFAULT_LINE_DENSITY)]
    pub density: f64,

    /// Points per segment written to a line-mode KPOINTS file
    #[arg(long, default_value_t = 40)]
    pub segment_points: usize,

    /// Sample k-points in Cartesian coordinates (csv output)
    #[arg(long, default_value_t = false)]
    pub cartesian: bool,

    /// Write an explicit k-point list sampled at --density instead of line mode (vasp output)
    #[arg(long, default_value_t = false)]
    pub explicit: bool,

    /// Also write POSCAR_prim / POSCAR_conv with the standardized cells
    #[arg(long, default_value_t = false)]
    pub write_structures: bool,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob patterns for input files (batch mode, comma separated)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
