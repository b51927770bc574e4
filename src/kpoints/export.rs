//! # k 点路径数据导出
//!
//! ## 支持格式
//! - JSON: 空间群、晶格类型、高对称点、路径的完整摘要
//! - CSV: 沿路径采样的 k 点（序号、累计距离、坐标、标签）
//!
//! ## 依赖关系
//! - 被 `commands/kpath.rs` 调用
//! - 使用 `serde_json` 和 `csv` 库

use crate::error::{KpathError, Result};
use crate::symmetry::{BandKpoints, Kpath, LatticeType};
use crate::utils::linalg::Vec3;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// JSON 输出摘要
#[derive(Debug, Serialize)]
pub struct KpathSummary<'a> {
    pub structure: &'a str,
    pub spg_number: u32,
    pub spg_symbol: &'a str,
    pub lattice_type: LatticeType,
    pub kpoints: &'a BTreeMap<String, Vec3>,
    pub path: &'a [Vec<String>],
    pub path_string: String,
    /// 输入结构是否已是标准原胞
    pub correct_structure: bool,
}

impl<'a> KpathSummary<'a> {
    pub fn new<K: Kpath>(kpath: &'a K, atol: f64) -> Self {
        KpathSummary {
            structure: &kpath.structure().name,
            spg_number: kpath.spg_number(),
            spg_symbol: kpath.spg_symbol(),
            lattice_type: kpath.lattice_type(),
            kpoints: kpath.kpoints(),
            path: kpath.path(),
            path_string: kpath.path_string(),
            correct_structure: kpath.correct_structure(atol),
        }
    }
}

/// 生成 JSON 摘要字符串
pub fn to_json_string<K: Kpath>(kpath: &K, atol: f64) -> Result<String> {
    let summary = KpathSummary::new(kpath, atol);
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// 导出采样 k 点为 CSV
pub fn band_to_csv(band: &BandKpoints, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["index", "distance", "kx", "ky", "kz", "label"])?;

    for (i, ((k, d), label)) in band
        .kpoints
        .iter()
        .zip(band.distances.iter())
        .zip(band.labels.iter())
        .enumerate()
    {
        wtr.write_record(&[
            i.to_string(),
            format!("{:.6}", d),
            format!("{:.8}", k[0]),
            format!("{:.8}", k[1]),
            format!("{:.8}", k[2]),
            label.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| KpathError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Crystal, Lattice};
    use crate::symmetry::SetyawanCurtaroloKpath;

    fn iron_kpath() -> SetyawanCurtaroloKpath {
        let crystal = Crystal::new(
            "Fe",
            Lattice::from_parameters(2.87, 2.87, 2.87, 90.0, 90.0, 90.0),
            vec![Atom::new("Fe", [0.0, 0.0, 0.0]), Atom::new("Fe", [0.5, 0.5, 0.5])],
        );
        SetyawanCurtaroloKpath::new(&crystal, 1e-3).unwrap()
    }

    #[test]
    fn test_json_summary() {
        let json = to_json_string(&iron_kpath(), 1e-5).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["spg_number"], 229);
        assert_eq!(value["spg_symbol"], "Im-3m");
        assert_eq!(value["lattice_type"], "cubic");
        assert_eq!(value["correct_structure"], false);
        assert_eq!(value["path"][1][0], "P");
        assert!(value["kpoints"]["H"].is_array());
    }

    #[test]
    fn test_band_csv() {
        let band = iron_kpath().get_kpoints(5.0, false).unwrap();
        let path = std::env::temp_dir().join(format!("kpathkit_band_{}.csv", std::process::id()));

        band_to_csv(&band, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "index,distance,kx,ky,kz,label");
        assert_eq!(lines.len(), band.len() + 1);
        assert!(lines[1].ends_with("\\Gamma"));
    }
}
