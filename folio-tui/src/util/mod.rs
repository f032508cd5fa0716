//! 工具模块
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
