//! # 统一错误处理模块
//!
//! 定义 kpathkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用

use thiserror::Error;

/// kpathkit 统一错误类型
#[derive(Error, Debug)]
pub enum KpathError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 对称性分析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Degenerate lattice: cell volume {volume:.3e} Å³ is too small")]
    DegenerateLattice { volume: f64 },

    #[error("Structure '{name}' contains no atoms")]
    EmptyStructure { name: String },

    #[error("Symmetry search failed (symprec = {symprec}): {reason}")]
    SymmetrySearch { symprec: f64, reason: String },

    #[error("Unsupported lattice centering '{centering}' for {lattice_type} lattice")]
    UnsupportedCentering {
        centering: char,
        lattice_type: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, KpathError>;
