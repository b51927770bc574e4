//! # kpathkit - 能带结构高对称 k 点路径工具
//!
//! 识别晶体结构的空间群，按 Setyawan–Curtarolo 约定标准化晶胞，
//! 生成能带计算所需的高对称 k 点路径。
//!
//! ## 子命令
//! - `kpath` - 计算 k 点路径并写出 VASP / CASTEP / JSON / CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (结构读写)
//!   │     ├── symmetry/  (空间群、标准晶胞、k 路径)
//!   │     ├── kpoints/   (输出格式)
//!   │     └── batch/     (批量并行)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod kpoints;
mod models;
mod parsers;
mod symmetry;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
