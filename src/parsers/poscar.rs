//! # VASP POSCAR 格式读写
//!
//! 读取 POSCAR/CONTCAR 作为 k 路径的输入结构，并把标准化后的原胞、惯用胞写回 POSCAR。
//!
//! ## POSCAR 格式说明
//! ```text
//! Comment line (structure name)
//! 1.0                    # 缩放因子；负值表示目标体积
//! a1 a2 a3
//! b1 b2 b3
//! c1 c2 c3
//! Element1 Element2 ...  # VASP 5+ 才有
//! n1 n2 ...
//! Selective dynamics     # 可选
//! Direct/Cartesian
//! x1 y1 z1
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/kpath.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{KpathError, Result};
use crate::models::{Atom, Crystal, Lattice};
use std::fs;
use std::path::Path;

/// 解析 POSCAR/CONTCAR 文件
pub fn parse_poscar_file(path: &Path) -> Result<Crystal> {
    let content = fs::read_to_string(path).map_err(|e| KpathError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_poscar_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    )
}

/// 从字符串内容解析 POSCAR 格式
pub fn parse_poscar_content(content: &str, default_name: &str) -> Result<Crystal> {
    let lines: Vec<&str> = content
        .lines()
        .skip_while(|l| l.trim().is_empty())
        .collect();

    let parse_error = |reason: String| KpathError::ParseError {
        format: "poscar".to_string(),
        path: default_name.to_string(),
        reason,
    };

    if lines.len() < 7 {
        return Err(parse_error("File too short".to_string()));
    }

    let name = match lines[0].trim() {
        "" => default_name.to_string(),
        comment => comment.to_string(),
    };

    let scale: f64 = lines[1]
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error(format!("Invalid scaling factor '{}'", lines[1].trim())))?;

    let mut matrix = [[0.0; 3]; 3];
    for (i, row) in matrix.iter_mut().enumerate() {
        let parts: Vec<f64> = lines[2 + i]
            .split_whitespace()
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect();
        if parts.len() < 3 {
            return Err(parse_error(format!(
                "Invalid lattice vector at line {}",
                3 + i
            )));
        }
        row.copy_from_slice(&parts);
    }

    // 负缩放因子给出的是目标体积
    let factor = if scale < 0.0 {
        let raw = Lattice::from_vectors(matrix).volume().abs();
        if raw < 1e-12 {
            return Err(KpathError::DegenerateLattice { volume: raw });
        }
        (-scale / raw).cbrt()
    } else {
        scale
    };
    for row in matrix.iter_mut() {
        for v in row.iter_mut() {
            *v *= factor;
        }
    }
    let lattice = Lattice::from_vectors(matrix);

    // 第 6 行是元素符号 (VASP 5+) 或直接是原子数 (VASP 4)
    let line5: Vec<&str> = lines[5].split_whitespace().collect();
    let is_vasp4 = line5
        .first()
        .map(|s| s.parse::<usize>().is_ok())
        .unwrap_or(false);

    let (elements, counts, next_line) = if is_vasp4 {
        let counts: Vec<usize> = line5.iter().filter_map(|s| s.parse().ok()).collect();
        // VASP 4 没有元素行，尝试从注释行取元素名
        let from_comment: Vec<String> = name
            .split_whitespace()
            .take(counts.len())
            .map(|s| s.to_string())
            .collect();
        let elements = if from_comment.len() == counts.len()
            && from_comment
                .iter()
                .all(|s| s.chars().all(|c| c.is_ascii_alphabetic()))
        {
            from_comment
        } else {
            (0..counts.len()).map(|i| format!("X{}", i + 1)).collect()
        };
        (elements, counts, 6)
    } else {
        let elements: Vec<String> = line5
            .iter()
            .map(|s| s.split('/').next().unwrap_or(*s).to_string())
            .collect();
        let counts: Vec<usize> = lines[6]
            .split_whitespace()
            .filter_map(|s| s.parse().ok())
            .collect();
        (elements, counts, 7)
    };

    if elements.len() != counts.len() {
        return Err(parse_error(format!(
            "{} element symbols but {} atom counts",
            elements.len(),
            counts.len()
        )));
    }

    let mut coord_line = next_line;
    if lines
        .get(coord_line)
        .map(|l| l.trim().to_lowercase().starts_with('s'))
        .unwrap_or(false)
    {
        coord_line += 1;
    }

    let coord_type = lines
        .get(coord_line)
        .map(|l| l.trim().to_lowercase())
        .ok_or_else(|| parse_error("Missing coordinate type line".to_string()))?;
    let is_cartesian = coord_type.starts_with('c') || coord_type.starts_with('k');

    let total: usize = counts.iter().sum();
    let species = elements
        .iter()
        .zip(counts.iter())
        .flat_map(|(elem, &n)| std::iter::repeat(elem).take(n));

    let mut atoms = Vec::with_capacity(total);
    for (i, elem) in species.enumerate() {
        let line = lines
            .get(coord_line + 1 + i)
            .ok_or_else(|| parse_error(format!("Expected {} atoms, found {}", total, i)))?;
        let parts: Vec<f64> = line
            .split_whitespace()
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect();
        if parts.len() < 3 {
            return Err(parse_error(format!("Invalid position for atom {}", i + 1)));
        }

        let raw = [parts[0], parts[1], parts[2]];
        let position = if is_cartesian {
            let cart = raw.map(|x| x * factor);
            lattice
                .cart_to_frac(&cart)
                .ok_or(KpathError::DegenerateLattice {
                    volume: lattice.volume(),
                })?
        } else {
            raw
        };
        atoms.push(Atom::new(elem.clone(), position));
    }

    let mut crystal = Crystal::new(name, lattice, atoms);
    crystal.source_format = Some("poscar".to_string());

    Ok(crystal)
}

/// 将 Crystal 转换为 POSCAR 格式字符串（VASP 5，Direct 坐标）
pub fn to_poscar_string(crystal: &Crystal) -> String {
    // 元素按首次出现的顺序分组
    let mut groups: Vec<(&str, Vec<[f64; 3]>)> = Vec::new();
    for atom in &crystal.atoms {
        match groups.iter_mut().find(|(e, _)| *e == atom.element) {
            Some((_, positions)) => positions.push(atom.position),
            None => groups.push((atom.element.as_str(), vec![atom.position])),
        }
    }

    let mut result = String::new();
    result.push_str(&format!("{}\n", crystal.name));
    result.push_str("1.0\n");

    for row in &crystal.lattice.matrix {
        result.push_str(&format!(
            "  {:16.10}  {:16.10}  {:16.10}\n",
            row[0], row[1], row[2]
        ));
    }

    let symbols: Vec<&str> = groups.iter().map(|(e, _)| *e).collect();
    let counts: Vec<String> = groups.iter().map(|(_, p)| p.len().to_string()).collect();
    result.push_str(&format!("   {}\n", symbols.join("   ")));
    result.push_str(&format!("   {}\n", counts.join("   ")));
    result.push_str("Direct\n");

    for (_, positions) in &groups {
        for pos in positions {
            result.push_str(&format!(
                "  {:16.10}  {:16.10}  {:16.10}\n",
                pos[0], pos[1], pos[2]
            ));
        }
    }

    result
}
