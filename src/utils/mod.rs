//! # 工具函数模块
//!
//! 提供 3x3 线性代数、美化输出和进度条。
//!
//! ## 依赖关系
//! - 被 `models/`、`symmetry/`、`batch/` 和 `commands/` 使用
//! - 子模块: linalg, output, progress

pub mod linalg;
pub mod output;
pub mod progress;
