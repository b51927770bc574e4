//! # kpath 子命令实现
//!
//! 从结构文件识别空间群，生成 Setyawan–Curtarolo 高对称路径并写出 DFT 输入。
//!
//! ## 功能
//! - 单文件模式：打印空间群、路径和高对称点表格，写出输出文件
//! - 目录模式：rayon 并行批量处理，汇总失败文件
//! - 输出 VASP KPOINTS / CASTEP .cell / JSON / CSV
//! - 可选写出标准化原胞与惯用胞 (POSCAR)
//!
//! ## 依赖关系
//! - 使用 `cli/kpath.rs` 定义的 KpathArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `symmetry/` 计算路径，`kpoints/` 写出格式
//! - 使用 `parsers/` 读取结构

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::kpath::{KpathArgs, KpathFormat};
use crate::error::{KpathError, Result};
use crate::kpoints::{castep, export, vasp};
use crate::parsers::{self, cell, poscar};
use crate::symmetry::{Kpath, SetyawanCurtaroloKpath};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 批量模式默认输出目录
const DEFAULT_BATCH_DIR: &str = "kpath_output";

/// 执行 kpath 子命令
pub fn execute(args: KpathArgs) -> Result<()> {
    output::print_header("High-Symmetry K-Point Path");

    if args.symprec <= 0.0 {
        return Err(KpathError::InvalidArgument(format!(
            "--symprec must be positive, got {}",
            args.symprec
        )));
    }
    if args.density <= 0.0 {
        return Err(KpathError::InvalidArgument(format!(
            "--density must be positive, got {}",
            args.density
        )));
    }

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(KpathError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单个结构处理所需的设置
#[derive(Debug, Clone)]
struct KpathConfig {
    format: KpathFormat,
    symprec: f64,
    atol: f64,
    density: f64,
    segment_points: usize,
    cartesian: bool,
    explicit: bool,
    write_structures: bool,
    overwrite: bool,
}

impl From<&KpathArgs> for KpathConfig {
    fn from(args: &KpathArgs) -> Self {
        KpathConfig {
            format: args.format,
            symprec: args.symprec,
            atol: args.atol,
            density: args.density,
            segment_points: args.segment_points,
            cartesian: args.cartesian,
            explicit: args.explicit,
            write_structures: args.write_structures,
            overwrite: args.overwrite,
        }
    }
}

/// 单文件模式
fn execute_single_file(args: &KpathArgs) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let config = KpathConfig::from(args);
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_output_name(&args.input, config.format)));

    if output_path.exists() && !config.overwrite {
        output::print_skip(&format!(
            "Output exists, use --overwrite to replace: {}",
            output_path.display()
        ));
        return Ok(());
    }

    let crystal = parsers::parse_structure_file(&args.input)?;
    output::print_success(&format!(
        "Loaded structure: {} ({}, {} atoms)",
        crystal.name,
        crystal.formula(),
        crystal.atoms.len()
    ));

    let kpath = SetyawanCurtaroloKpath::new(&crystal, config.symprec)?;

    output::print_info(&format!(
        "Space group: {} (#{}), {} lattice",
        kpath.spg_symbol(),
        kpath.spg_number(),
        kpath.lattice_type()
    ));
    output::print_info(&format!("Path: {}", kpath.path_string()));
    print_kpoint_table(&kpath);

    if !kpath.correct_structure(config.atol) {
        output::print_warning(
            "Input cell differs from the standard primitive cell; \
             run the band calculation on the standardized cell (--write-structures)",
        );
    }

    let written = write_outputs(&kpath, &output_path, "", &config)?;
    for path in written {
        output::print_written(&args.input.display().to_string(), &path.display().to_string());
    }

    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &KpathArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files: Vec<PathBuf> = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()
        .into_iter()
        .filter(|f| parsers::is_structure_file(f))
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} structure files", files.len()));

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BATCH_DIR));
    fs::create_dir_all(&output_dir).map_err(|e| KpathError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let config = KpathConfig::from(args);
    output::print_info(&format!(
        "Output format: {}, symprec = {}",
        config.format, config.symprec
    ));

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| process_batch_file(file, &output_dir, &config));

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个文件
fn process_batch_file(input: &Path, output_dir: &Path, config: &KpathConfig) -> ProcessResult {
    let prefix = format!("{}_", batch_stem(input));
    let output_file = output_dir.join(format!("{}{}", prefix, config.format.file_suffix()));

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    let outcome = parsers::parse_structure_file(input)
        .and_then(|crystal| SetyawanCurtaroloKpath::new(&crystal, config.symprec))
        .and_then(|kpath| write_outputs(&kpath, &output_file, &prefix, config).map(|_| kpath));

    match outcome {
        Ok(kpath) => ProcessResult::Success(format!(
            "{} [{}] -> {}",
            input.display(),
            kpath.spg_symbol(),
            output_file.display()
        )),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 按格式写出主输出文件，并按需写出标准化晶胞，返回写出的文件列表
///
/// 未指定 `--overwrite` 时已存在的晶胞文件保持不变，也不计入返回列表。
fn write_outputs<K: Kpath>(
    kpath: &K,
    output_path: &Path,
    structure_prefix: &str,
    config: &KpathConfig,
) -> Result<Vec<PathBuf>> {
    match config.format {
        KpathFormat::Vasp if config.explicit => {
            let band = kpath.get_kpoints(config.density, false)?;
            let comment = format!("Explicit k-points: {}", kpath.path_string());
            write_text(output_path, &vasp::to_explicit_string(&band, &comment))?;
        }
        KpathFormat::Vasp => {
            write_text(
                output_path,
                &vasp::to_line_mode_string(kpath, config.segment_points)?,
            )?;
        }
        KpathFormat::Castep => {
            let block = castep::to_spectral_kpoint_path(kpath, Some(1.0 / config.density))?;
            write_text(output_path, &cell::to_cell_string(kpath.prim(), Some(&block)))?;
        }
        KpathFormat::Json => {
            write_text(output_path, &export::to_json_string(kpath, config.atol)?)?;
        }
        KpathFormat::Csv => {
            let band = kpath.get_kpoints(config.density, config.cartesian)?;
            export::band_to_csv(&band, output_path)?;
        }
    }

    let mut written = vec![output_path.to_path_buf()];

    if config.write_structures {
        let dir = output_path.parent().unwrap_or_else(|| Path::new(""));
        for (tag, crystal) in [("prim", kpath.prim()), ("conv", kpath.conv())] {
            let path = dir.join(format!("{}POSCAR_{}", structure_prefix, tag));
            if path.exists() && !config.overwrite {
                continue;
            }
            write_text(&path, &poscar::to_poscar_string(crystal))?;
            written.push(path);
        }
    }

    Ok(written)
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| KpathError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 单文件模式的默认输出文件名
fn default_output_name(input: &Path, format: KpathFormat) -> String {
    match format {
        KpathFormat::Vasp => "KPOINTS".to_string(),
        _ => format!("{}_{}", batch_stem(input), format.file_suffix()),
    }
}

/// POSCAR/CONTCAR 没有有意义的文件名，用所在目录名区分
fn batch_stem(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("structure");

    let generic = stem.starts_with("POSCAR") || stem.starts_with("CONTCAR");
    match input
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
    {
        Some(dir) if generic => format!("{}_{}", dir, stem),
        _ => stem.to_string(),
    }
}

/// 打印高对称点表格
fn print_kpoint_table<K: Kpath>(kpath: &K) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct KpointRow {
        #[tabled(rename = "Label")]
        label: String,
        #[tabled(rename = "k1")]
        k1: String,
        #[tabled(rename = "k2")]
        k2: String,
        #[tabled(rename = "k3")]
        k3: String,
    }

    let rows: Vec<KpointRow> = kpath
        .kpoints()
        .iter()
        .map(|(label, k)| KpointRow {
            label: label.clone(),
            k1: format!("{:.6}", k[0]),
            k2: format!("{:.6}", k[1]),
            k3: format!("{:.6}", k[2]),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("{} High-Symmetry Points", rows.len()));
        println!("{}", Table::new(&rows));
    }
}
