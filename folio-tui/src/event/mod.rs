//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//! 职责单一：把 crossterm 的原始事件翻译成 Message，
//! 不直接修改任何状态。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
