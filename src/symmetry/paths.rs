//! # Setyawan–Curtarolo 高对称 k 点表
//!
//! 25 种晶格变体的高对称点与路径。坐标为 SC 标准原胞倒格子基下的分数坐标。
//!
//! ## 参考
//! - Setyawan, W., & Curtarolo, S. (2010). High-throughput electronic band
//!   structure calculations: Challenges and tools.
//!   Comput. Mater. Sci. 49(2), 299-312. doi:10.1016/j.commatsci.2010.05.010
//!
//! ## 依赖关系
//! - 被 `symmetry/bandstructure.rs` 调用
//! - 无外部模块依赖

use crate::utils::linalg::Vec3;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const GAMMA: &str = "\\Gamma";

/// 高对称点与路径
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpathData {
    /// 标签 -> 分数坐标
    pub kpoints: BTreeMap<String, Vec3>,
    /// 子路径列表，每个子路径为相连的标签序列
    pub path: Vec<Vec<String>>,
}

impl KpathData {
    fn new(points: &[(&str, Vec3)], path: &[&[&str]]) -> Self {
        let mut kpoints: BTreeMap<String, Vec3> = points
            .iter()
            .map(|(label, coords)| (label.to_string(), *coords))
            .collect();
        kpoints.insert(GAMMA.to_string(), [0.0, 0.0, 0.0]);

        KpathData {
            kpoints,
            path: path
                .iter()
                .map(|sub| sub.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}

/// SC 晶格变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LatticeVariant {
    Cub,
    Fcc,
    Bcc,
    Tet,
    Bct1,
    Bct2,
    Orc,
    Orcf1,
    Orcf2,
    Orcf3,
    Orci,
    Orcc,
    Hex,
    Rhl1,
    Rhl2,
    Mcl,
    Mclc1,
    Mclc2,
    Mclc3,
    Mclc4,
    Mclc5,
    Tri1a,
    Tri1b,
    Tri2a,
    Tri2b,
}

impl fmt::Display for LatticeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LatticeVariant::Cub => "CUB",
            LatticeVariant::Fcc => "FCC",
            LatticeVariant::Bcc => "BCC",
            LatticeVariant::Tet => "TET",
            LatticeVariant::Bct1 => "BCT1",
            LatticeVariant::Bct2 => "BCT2",
            LatticeVariant::Orc => "ORC",
            LatticeVariant::Orcf1 => "ORCF1",
            LatticeVariant::Orcf2 => "ORCF2",
            LatticeVariant::Orcf3 => "ORCF3",
            LatticeVariant::Orci => "ORCI",
            LatticeVariant::Orcc => "ORCC",
            LatticeVariant::Hex => "HEX",
            LatticeVariant::Rhl1 => "RHL1",
            LatticeVariant::Rhl2 => "RHL2",
            LatticeVariant::Mcl => "MCL",
            LatticeVariant::Mclc1 => "MCLC1",
            LatticeVariant::Mclc2 => "MCLC2",
            LatticeVariant::Mclc3 => "MCLC3",
            LatticeVariant::Mclc4 => "MCLC4",
            LatticeVariant::Mclc5 => "MCLC5",
            LatticeVariant::Tri1a => "TRI1a",
            LatticeVariant::Tri1b => "TRI1b",
            LatticeVariant::Tri2a => "TRI2a",
            LatticeVariant::Tri2b => "TRI2b",
        };
        write!(f, "{}", name)
    }
}

// ─────────────────────────────────────────────────────────────
// 立方
// ─────────────────────────────────────────────────────────────

pub fn cub() -> KpathData {
    KpathData::new(
        &[
            ("X", [0.0, 0.5, 0.0]),
            ("R", [0.5, 0.5, 0.5]),
            ("M", [0.5, 0.5, 0.0]),
        ],
        &[&[GAMMA, "X", "M", GAMMA, "R", "X"], &["M", "R"]],
    )
}

pub fn fcc() -> KpathData {
    KpathData::new(
        &[
            ("K", [3.0 / 8.0, 3.0 / 8.0, 3.0 / 4.0]),
            ("L", [0.5, 0.5, 0.5]),
            ("U", [5.0 / 8.0, 1.0 / 4.0, 5.0 / 8.0]),
            ("W", [0.5, 1.0 / 4.0, 3.0 / 4.0]),
            ("X", [0.5, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "X", "W", "K", GAMMA, "L", "U", "W", "L", "K"],
            &["U", "X"],
        ],
    )
}

pub fn bcc() -> KpathData {
    KpathData::new(
        &[
            ("H", [0.5, -0.5, 0.5]),
            ("P", [0.25, 0.25, 0.25]),
            ("N", [0.0, 0.0, 0.5]),
        ],
        &[&[GAMMA, "H", "N", GAMMA, "P", "H"], &["P", "N"]],
    )
}

// ─────────────────────────────────────────────────────────────
// 四方
// ─────────────────────────────────────────────────────────────

pub fn tet() -> KpathData {
    KpathData::new(
        &[
            ("A", [0.5, 0.5, 0.5]),
            ("M", [0.5, 0.5, 0.0]),
            ("R", [0.0, 0.5, 0.5]),
            ("X", [0.0, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "X", "M", GAMMA, "Z", "R", "A", "Z"],
            &["X", "R"],
            &["M", "A"],
        ],
    )
}

/// c < a
pub fn bct1(c: f64, a: f64) -> KpathData {
    let eta = (1.0 + c * c / (a * a)) / 4.0;
    KpathData::new(
        &[
            ("M", [-0.5, 0.5, 0.5]),
            ("N", [0.0, 0.5, 0.0]),
            ("P", [0.25, 0.25, 0.25]),
            ("X", [0.0, 0.0, 0.5]),
            ("Z", [eta, eta, -eta]),
            ("Z_1", [-eta, 1.0 - eta, eta]),
        ],
        &[&[GAMMA, "X", "M", GAMMA, "Z", "P", "N", "Z_1", "M"], &["X", "P"]],
    )
}

/// c > a
pub fn bct2(c: f64, a: f64) -> KpathData {
    let eta = (1.0 + a * a / (c * c)) / 4.0;
    let zeta = a * a / (2.0 * c * c);
    KpathData::new(
        &[
            ("N", [0.0, 0.5, 0.0]),
            ("P", [0.25, 0.25, 0.25]),
            ("\\Sigma", [-eta, eta, eta]),
            ("\\Sigma_1", [eta, 1.0 - eta, -eta]),
            ("X", [0.0, 0.0, 0.5]),
            ("Y", [-zeta, zeta, 0.5]),
            ("Y_1", [0.5, 0.5, -zeta]),
            ("Z", [0.5, 0.5, -0.5]),
        ],
        &[
            &[
                GAMMA, "X", "Y", "\\Sigma", GAMMA, "Z", "\\Sigma_1", "N", "P", "Y_1", "Z",
            ],
            &["X", "P"],
        ],
    )
}

// ─────────────────────────────────────────────────────────────
// 正交
// ─────────────────────────────────────────────────────────────

pub fn orc() -> KpathData {
    KpathData::new(
        &[
            ("R", [0.5, 0.5, 0.5]),
            ("S", [0.5, 0.5, 0.0]),
            ("T", [0.0, 0.5, 0.5]),
            ("U", [0.5, 0.0, 0.5]),
            ("X", [0.5, 0.0, 0.0]),
            ("Y", [0.0, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "X", "S", "Y", GAMMA, "Z", "U", "R", "T", "Z"],
            &["Y", "T"],
            &["U", "X"],
            &["S", "R"],
        ],
    )
}

fn orcf_a_points(a: f64, b: f64, c: f64) -> Vec<(&'static str, Vec3)> {
    let zeta = (1.0 + a * a / (b * b) - a * a / (c * c)) / 4.0;
    let eta = (1.0 + a * a / (b * b) + a * a / (c * c)) / 4.0;
    vec![
        ("A", [0.5, 0.5 + zeta, zeta]),
        ("A_1", [0.5, 0.5 - zeta, 1.0 - zeta]),
        ("L", [0.5, 0.5, 0.5]),
        ("T", [1.0, 0.5, 0.5]),
        ("X", [0.0, eta, eta]),
        ("X_1", [1.0, 1.0 - eta, 1.0 - eta]),
        ("Y", [0.5, 0.0, 0.5]),
        ("Z", [0.5, 0.5, 0.0]),
    ]
}

/// 1/a² > 1/b² + 1/c²
pub fn orcf1(a: f64, b: f64, c: f64) -> KpathData {
    KpathData::new(
        &orcf_a_points(a, b, c),
        &[
            &[GAMMA, "Y", "T", "Z", GAMMA, "X", "A_1", "Y"],
            &["T", "X_1"],
            &["X", "A", "Z"],
            &["L", GAMMA],
        ],
    )
}

/// 1/a² < 1/b² + 1/c²
pub fn orcf2(a: f64, b: f64, c: f64) -> KpathData {
    let phi = (1.0 + c * c / (b * b) - c * c / (a * a)) / 4.0;
    let eta = (1.0 + a * a / (b * b) - a * a / (c * c)) / 4.0;
    let delta = (1.0 + b * b / (a * a) - b * b / (c * c)) / 4.0;
    KpathData::new(
        &[
            ("C", [0.5, 0.5 - eta, 1.0 - eta]),
            ("C_1", [0.5, 0.5 + eta, eta]),
            ("D", [0.5 - delta, 0.5, 1.0 - delta]),
            ("D_1", [0.5 + delta, 0.5, delta]),
            ("L", [0.5, 0.5, 0.5]),
            ("H", [1.0 - phi, 0.5 - phi, 0.5]),
            ("H_1", [phi, 0.5 + phi, 0.5]),
            ("X", [0.0, 0.5, 0.5]),
            ("Y", [0.5, 0.0, 0.5]),
            ("Z", [0.5, 0.5, 0.0]),
        ],
        &[
            &[GAMMA, "Y", "C", "D", "X", GAMMA, "Z", "D_1", "H", "C"],
            &["C_1", "Z"],
            &["X", "H_1"],
            &["H", "Y"],
            &["L", GAMMA],
        ],
    )
}

/// 1/a² = 1/b² + 1/c²
pub fn orcf3(a: f64, b: f64, c: f64) -> KpathData {
    KpathData::new(
        &orcf_a_points(a, b, c),
        &[
            &[GAMMA, "Y", "T", "Z", GAMMA, "X", "A_1", "Y"],
            &["X", "A", "Z"],
            &["L", GAMMA],
        ],
    )
}

pub fn orci(a: f64, b: f64, c: f64) -> KpathData {
    let zeta = (1.0 + a * a / (c * c)) / 4.0;
    let eta = (1.0 + b * b / (c * c)) / 4.0;
    let delta = (b * b - a * a) / (4.0 * c * c);
    let mu = (a * a + b * b) / (4.0 * c * c);
    KpathData::new(
        &[
            ("L", [-mu, mu, 0.5 - delta]),
            ("L_1", [mu, -mu, 0.5 + delta]),
            ("L_2", [0.5 - delta, 0.5 + delta, -mu]),
            ("R", [0.0, 0.5, 0.0]),
            ("S", [0.5, 0.0, 0.0]),
            ("T", [0.0, 0.0, 0.5]),
            ("W", [0.25, 0.25, 0.25]),
            ("X", [-zeta, zeta, zeta]),
            ("X_1", [zeta, 1.0 - zeta, -zeta]),
            ("Y", [eta, -eta, eta]),
            ("Y_1", [1.0 - eta, eta, -eta]),
            ("Z", [0.5, 0.5, -0.5]),
        ],
        &[
            &[
                GAMMA, "X", "L", "T", "W", "R", "X_1", "Z", GAMMA, "Y", "S", "W",
            ],
            &["L_1", "Y"],
            &["Y_1", "Z"],
        ],
    )
}

pub fn orcc(a: f64, b: f64) -> KpathData {
    let zeta = (1.0 + a * a / (b * b)) / 4.0;
    KpathData::new(
        &[
            ("A", [zeta, zeta, 0.5]),
            ("A_1", [-zeta, 1.0 - zeta, 0.5]),
            ("R", [0.0, 0.5, 0.5]),
            ("S", [0.0, 0.5, 0.0]),
            ("T", [-0.5, 0.5, 0.5]),
            ("X", [zeta, zeta, 0.0]),
            ("X_1", [-zeta, 1.0 - zeta, 0.0]),
            ("Y", [-0.5, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[
                GAMMA, "X", "S", "R", "A", "Z", GAMMA, "Y", "X_1", "A_1", "T", "Y",
            ],
            &["Z", "T"],
        ],
    )
}

// ─────────────────────────────────────────────────────────────
// 六方与菱方
// ─────────────────────────────────────────────────────────────

pub fn hex() -> KpathData {
    KpathData::new(
        &[
            ("A", [0.0, 0.0, 0.5]),
            ("H", [1.0 / 3.0, 1.0 / 3.0, 0.5]),
            ("K", [1.0 / 3.0, 1.0 / 3.0, 0.0]),
            ("L", [0.5, 0.0, 0.5]),
            ("M", [0.5, 0.0, 0.0]),
        ],
        &[
            &[GAMMA, "M", "K", GAMMA, "A", "L", "H", "A"],
            &["L", "M"],
            &["K", "H"],
        ],
    )
}

/// α < 90°（弧度）
pub fn rhl1(alpha: f64) -> KpathData {
    let eta = (1.0 + 4.0 * alpha.cos()) / (2.0 + 4.0 * alpha.cos());
    let nu = 3.0 / 4.0 - eta / 2.0;
    KpathData::new(
        &[
            ("B", [eta, 0.5, 1.0 - eta]),
            ("B_1", [0.5, 1.0 - eta, eta - 1.0]),
            ("F", [0.5, 0.5, 0.0]),
            ("L", [0.5, 0.0, 0.0]),
            ("L_1", [0.0, 0.0, -0.5]),
            ("P", [eta, nu, nu]),
            ("P_1", [1.0 - nu, 1.0 - nu, 1.0 - eta]),
            ("P_2", [nu, nu, eta - 1.0]),
            ("Q", [1.0 - nu, nu, 0.0]),
            ("X", [nu, 0.0, -nu]),
            ("Z", [0.5, 0.5, 0.5]),
        ],
        &[
            &[GAMMA, "L", "B_1"],
            &["B", "Z", GAMMA, "X"],
            &["Q", "F", "P_1", "Z"],
            &["L", "P"],
        ],
    )
}

/// α > 90°（弧度）
pub fn rhl2(alpha: f64) -> KpathData {
    let eta = 1.0 / (2.0 * (alpha / 2.0).tan().powi(2));
    let nu = 3.0 / 4.0 - eta / 2.0;
    KpathData::new(
        &[
            ("F", [0.5, -0.5, 0.0]),
            ("L", [0.5, 0.0, 0.0]),
            ("P", [1.0 - nu, -nu, 1.0 - nu]),
            ("P_1", [nu, nu - 1.0, nu - 1.0]),
            ("Q", [eta, eta, eta]),
            ("Q_1", [1.0 - eta, -eta, -eta]),
            ("Z", [0.5, -0.5, 0.5]),
        ],
        &[&[
            GAMMA, "P", "Z", "Q", GAMMA, "F", "P_1", "Q_1", "L", "Z",
        ]],
    )
}

// ─────────────────────────────────────────────────────────────
// 单斜
// ─────────────────────────────────────────────────────────────

/// alpha 为弧度
pub fn mcl(b: f64, c: f64, alpha: f64) -> KpathData {
    let eta = (1.0 - b * alpha.cos() / c) / (2.0 * alpha.sin().powi(2));
    let nu = 0.5 - eta * c * alpha.cos() / b;
    KpathData::new(
        &[
            ("A", [0.5, 0.5, 0.0]),
            ("C", [0.0, 0.5, 0.5]),
            ("D", [0.5, 0.0, 0.5]),
            ("D_1", [0.5, 0.0, -0.5]),
            ("E", [0.5, 0.5, 0.5]),
            ("H", [0.0, eta, 1.0 - nu]),
            ("H_1", [0.0, 1.0 - eta, nu]),
            ("H_2", [0.0, eta, -nu]),
            ("M", [0.5, eta, 1.0 - nu]),
            ("M_1", [0.5, 1.0 - eta, nu]),
            ("M_2", [0.5, eta, -nu]),
            ("X", [0.0, 0.5, 0.0]),
            ("Y", [0.0, 0.0, 0.5]),
            ("Y_1", [0.0, 0.0, -0.5]),
            ("Z", [0.5, 0.0, 0.0]),
        ],
        &[
            &[GAMMA, "Y", "H", "C", "E", "M_1", "A", "X", "H_1"],
            &["M", "D", "Z"],
            &["Y", "D"],
        ],
    )
}

fn mclc12_points(a: f64, b: f64, c: f64, alpha: f64) -> Vec<(&'static str, Vec3)> {
    let (sin, cos) = alpha.sin_cos();
    let zeta = (2.0 - b * cos / c) / (4.0 * sin * sin);
    let eta = 0.5 + 2.0 * zeta * c * cos / b;
    let psi = 0.75 - a * a / (4.0 * b * b * sin * sin);
    let phi = psi + (0.75 - psi) * b * cos / c;
    vec![
        ("N", [0.5, 0.0, 0.0]),
        ("N_1", [0.0, -0.5, 0.0]),
        ("F", [1.0 - zeta, 1.0 - zeta, 1.0 - eta]),
        ("F_1", [zeta, zeta, eta]),
        ("F_2", [-zeta, -zeta, 1.0 - eta]),
        ("I", [phi, 1.0 - phi, 0.5]),
        ("I_1", [1.0 - phi, phi - 1.0, 0.5]),
        ("L", [0.5, 0.5, 0.5]),
        ("M", [0.5, 0.0, 0.5]),
        ("X", [1.0 - psi, psi - 1.0, 0.0]),
        ("X_1", [psi, 1.0 - psi, 0.0]),
        ("X_2", [psi - 1.0, -psi, 0.0]),
        ("Y", [0.5, 0.5, 0.0]),
        ("Y_1", [-0.5, -0.5, 0.0]),
        ("Z", [0.0, 0.0, 0.5]),
    ]
}

/// kγ > 90°
pub fn mclc1(a: f64, b: f64, c: f64, alpha: f64) -> KpathData {
    KpathData::new(
        &mclc12_points(a, b, c, alpha),
        &[
            &[GAMMA, "Y", "F", "L", "I"],
            &["I_1", "Z", "F_1"],
            &["Y", "X_1"],
            &["X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

/// kγ = 90°
pub fn mclc2(a: f64, b: f64, c: f64, alpha: f64) -> KpathData {
    KpathData::new(
        &mclc12_points(a, b, c, alpha),
        &[
            &[GAMMA, "Y", "F", "L", "I"],
            &["I_1", "Z", "F_1"],
            &["N", GAMMA, "M"],
        ],
    )
}

fn mclc34_points(a: f64, b: f64, c: f64, alpha: f64) -> Vec<(&'static str, Vec3)> {
    let (sin, cos) = alpha.sin_cos();
    let mu = (1.0 + b * b / (a * a)) / 4.0;
    let delta = b * c * cos / (2.0 * a * a);
    let zeta = mu - 0.25 + (1.0 - b * cos / c) / (4.0 * sin * sin);
    let eta = 0.5 + 2.0 * zeta * c * cos / b;
    let phi = 1.0 + zeta - 2.0 * mu;
    let psi = eta - 2.0 * delta;
    vec![
        ("F", [1.0 - phi, 1.0 - phi, 1.0 - psi]),
        ("F_1", [phi, phi - 1.0, psi]),
        ("F_2", [1.0 - phi, -phi, 1.0 - psi]),
        ("H", [zeta, zeta, eta]),
        ("H_1", [1.0 - zeta, -zeta, 1.0 - eta]),
        ("H_2", [-zeta, -zeta, 1.0 - eta]),
        ("I", [0.5, -0.5, 0.5]),
        ("M", [0.5, 0.0, 0.5]),
        ("N", [0.5, 0.0, 0.0]),
        ("N_1", [0.0, -0.5, 0.0]),
        ("X", [0.5, -0.5, 0.0]),
        ("Y", [mu, mu, delta]),
        ("Y_1", [1.0 - mu, -mu, -delta]),
        ("Y_2", [-mu, -mu, -delta]),
        ("Y_3", [mu, mu - 1.0, delta]),
        ("Z", [0.0, 0.0, 0.5]),
    ]
}

/// kγ < 90°, b·cosα/c + b²·sin²α/a² < 1
pub fn mclc3(a: f64, b: f64, c: f64, alpha: f64) -> KpathData {
    KpathData::new(
        &mclc34_points(a, b, c, alpha),
        &[
            &[GAMMA, "Y", "F", "H", "Z", "I", "F_1"],
            &["H_1", "Y_1", "X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

/// kγ < 90°, b·cosα/c + b²·sin²α/a² = 1
pub fn mclc4(a: f64, b: f64, c: f64, alpha: f64) -> KpathData {
    KpathData::new(
        &mclc34_points(a, b, c, alpha),
        &[
            &[GAMMA, "Y", "F", "H", "Z", "I"],
            &["H_1", "Y_1", "X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

/// kγ < 90°, b·cosα/c + b²·sin²α/a² > 1
pub fn mclc5(a: f64, b: f64, c: f64, alpha: f64) -> KpathData {
    let (sin, cos) = alpha.sin_cos();
    let zeta = (b * b / (a * a) + (1.0 - b * cos / c) / (sin * sin)) / 4.0;
    let eta = 0.5 + 2.0 * zeta * c * cos / b;
    let mu = eta / 2.0 + b * b / (4.0 * a * a) - b * c * cos / (2.0 * a * a);
    let nu = 2.0 * mu - zeta;
    let rho = 1.0 - zeta * a * a / (b * b);
    let omega = (4.0 * nu - 1.0 - b * b * sin * sin / (a * a)) * c / (2.0 * b * cos);
    let delta = zeta * c * cos / b + omega / 2.0 - 0.25;
    KpathData::new(
        &[
            ("F", [nu, nu, omega]),
            ("F_1", [1.0 - nu, 1.0 - nu, 1.0 - omega]),
            ("F_2", [nu, nu - 1.0, omega]),
            ("H", [zeta, zeta, eta]),
            ("H_1", [1.0 - zeta, -zeta, 1.0 - eta]),
            ("H_2", [-zeta, -zeta, 1.0 - eta]),
            ("I", [rho, 1.0 - rho, 0.5]),
            ("I_1", [1.0 - rho, rho - 1.0, 0.5]),
            ("L", [0.5, 0.5, 0.5]),
            ("M", [0.5, 0.0, 0.5]),
            ("N", [0.5, 0.0, 0.0]),
            ("N_1", [0.0, -0.5, 0.0]),
            ("X", [0.5, -0.5, 0.0]),
            ("Y", [mu, mu, delta]),
            ("Y_1", [1.0 - mu, -mu, -delta]),
            ("Y_2", [-mu, -mu, -delta]),
            ("Y_3", [mu, mu - 1.0, delta]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        &[
            &[GAMMA, "Y", "F", "L", "I"],
            &["I_1", "Z", "H", "F_1"],
            &["H_1", "Y_1", "X", GAMMA, "N"],
            &["M", GAMMA],
        ],
    )
}

// ─────────────────────────────────────────────────────────────
// 三斜
// ─────────────────────────────────────────────────────────────

const TRI_PATH: &[&[&str]] = &[
    &["X", GAMMA, "Y"],
    &["L", GAMMA, "Z"],
    &["N", GAMMA, "M"],
    &["R", GAMMA],
];

/// 倒格子角全部 ≥ 90°（TRI1a / TRI2a）
pub fn tria() -> KpathData {
    KpathData::new(
        &[
            ("L", [0.5, 0.5, 0.0]),
            ("M", [0.0, 0.5, 0.5]),
            ("N", [0.5, 0.0, 0.5]),
            ("R", [0.5, 0.5, 0.5]),
            ("X", [0.5, 0.0, 0.0]),
            ("Y", [0.0, 0.5, 0.0]),
            ("Z", [0.0, 0.0, 0.5]),
        ],
        TRI_PATH,
    )
}

/// 倒格子角全部 ≤ 90°（TRI1b / TRI2b）
pub fn trib() -> KpathData {
    KpathData::new(
        &[
            ("L", [0.5, -0.5, 0.0]),
            ("M", [0.0, 0.0, 0.5]),
            ("N", [-0.5, -0.5, 0.5]),
            ("R", [0.0, -0.5, 0.5]),
            ("X", [0.0, -0.5, 0.0]),
            ("Y", [0.5, 0.0, 0.0]),
            ("Z", [-0.5, 0.0, 0.5]),
        ],
        TRI_PATH,
    )
}
