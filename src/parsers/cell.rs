//! # CASTEP .cell 格式读写
//!
//! ## .cell 格式说明
//! ```text
//! %BLOCK LATTICE_CART      (或 LATTICE_ABC)
//! ang                      # 可选单位行: ang / bohr / nm
//! a1 a2 a3
//! b1 b2 b3
//! c1 c2 c3
//! %ENDBLOCK LATTICE_CART
//!
//! %BLOCK POSITIONS_FRAC    (或 POSITIONS_ABS)
//! Element x y z
//! %ENDBLOCK POSITIONS_FRAC
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/kpath.rs` 使用
//! - 使用 `models/structure.rs`，块提取使用 `regex`

use crate::error::{KpathError, Result};
use crate::models::{Atom, Crystal, Lattice};
use regex::Regex;
use std::fs;
use std::path::Path;

const BOHR_TO_ANGSTROM: f64 = 0.529_177_210_903;

/// 解析 .cell 文件
pub fn parse_cell_file(path: &Path) -> Result<Crystal> {
    let content = fs::read_to_string(path).map_err(|e| KpathError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_cell_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    )
}

/// 从字符串内容解析 .cell 格式
pub fn parse_cell_content(content: &str, name: &str) -> Result<Crystal> {
    let parse_error = |reason: &str| KpathError::ParseError {
        format: "cell".to_string(),
        path: name.to_string(),
        reason: reason.to_string(),
    };

    let lattice = if let Some(block) = read_block(content, "LATTICE_CART") {
        let (scale, rows) = split_unit(&block);
        let values = numbers(&rows);
        if values.len() < 9 {
            return Err(parse_error("Incomplete LATTICE_CART block"));
        }
        let mut matrix = [[0.0; 3]; 3];
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = values[3 * i + j] * scale;
            }
        }
        Lattice::from_vectors(matrix)
    } else if let Some(block) = read_block(content, "LATTICE_ABC") {
        let (scale, rows) = split_unit(&block);
        let p = numbers(&rows);
        if p.len() < 6 {
            return Err(parse_error(
                "Incomplete LATTICE_ABC block (need a b c alpha beta gamma)",
            ));
        }
        Lattice::from_parameters(p[0] * scale, p[1] * scale, p[2] * scale, p[3], p[4], p[5])
    } else {
        return Err(parse_error("Missing LATTICE_CART or LATTICE_ABC block"));
    };

    let atoms = if let Some(block) = read_block(content, "POSITIONS_FRAC") {
        parse_positions(&block)
    } else if let Some(block) = read_block(content, "POSITIONS_ABS") {
        let (scale, rows) = split_unit(&block);
        let mut atoms = Vec::new();
        for atom in parse_positions(&rows) {
            let cart = atom.position.map(|x| x * scale);
            let frac = lattice
                .cart_to_frac(&cart)
                .ok_or_else(|| parse_error("Singular lattice, cannot convert POSITIONS_ABS"))?;
            atoms.push(Atom::new(atom.element, frac));
        }
        atoms
    } else {
        return Err(parse_error("Missing POSITIONS_FRAC or POSITIONS_ABS block"));
    };

    let mut crystal = Crystal::new(name, lattice, atoms);
    crystal.source_format = Some("cell".to_string());

    Ok(crystal)
}

/// 取出 %BLOCK NAME ... %ENDBLOCK NAME 之间的非注释行（大小写不敏感）
fn read_block(content: &str, block_name: &str) -> Option<Vec<String>> {
    let name = regex::escape(block_name);
    let pattern = format!(r"(?is)%BLOCK\s+{name}\b[^\n]*\n(.*?)%ENDBLOCK\s+{name}\b");
    let re = Regex::new(&pattern).ok()?;
    let body = re.captures(content)?.get(1)?.as_str();

    Some(
        body.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with('!'))
            .map(String::from)
            .collect(),
    )
}

/// 拆出可选的单位行，返回到 Å 的换算因子
fn split_unit(block: &[String]) -> (f64, Vec<String>) {
    match block.first().map(|l| l.to_lowercase()) {
        Some(unit) if unit == "ang" => (1.0, block[1..].to_vec()),
        Some(unit) if unit == "bohr" => (BOHR_TO_ANGSTROM, block[1..].to_vec()),
        Some(unit) if unit == "nm" => (10.0, block[1..].to_vec()),
        _ => (1.0, block.to_vec()),
    }
}

fn numbers(rows: &[String]) -> Vec<f64> {
    rows.iter()
        .flat_map(|l| l.split_whitespace())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// 解析原子位置行 "Element x y z"
fn parse_positions(rows: &[String]) -> Vec<Atom> {
    rows.iter()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return None;
            }
            // 元素后可能带 ":label"
            let element = parts[0].split(':').next().unwrap_or(parts[0]);
            match (parts[1].parse(), parts[2].parse(), parts[3].parse()) {
                (Ok(x), Ok(y), Ok(z)) => Some(Atom::new(element, [x, y, z])),
                _ => None,
            }
        })
        .collect()
}

/// 将 Crystal 转换为 .cell 格式字符串，可附加额外的块（如能带路径）
pub fn to_cell_string(crystal: &Crystal, extra_blocks: Option<&str>) -> String {
    let mut result = String::new();

    result.push_str("%BLOCK LATTICE_CART\nang\n");
    for row in &crystal.lattice.matrix {
        result.push_str(&format!(
            "{:16.10} {:16.10} {:16.10}\n",
            row[0], row[1], row[2]
        ));
    }
    result.push_str("%ENDBLOCK LATTICE_CART\n\n");

    result.push_str("%BLOCK POSITIONS_FRAC\n");
    for atom in &crystal.atoms {
        result.push_str(&format!(
            "{:4} {:16.10} {:16.10} {:16.10}\n",
            atom.element, atom.position[0], atom.position[1], atom.position[2]
        ));
    }
    result.push_str("%ENDBLOCK POSITIONS_FRAC\n");

    if let Some(extra) = extra_blocks {
        result.push('\n');
        result.push_str(extra);
    }

    result
}
