//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod components;     // 导航栏、状态栏、弹窗
//!         mod layout;             // 主布局
//!         pub mod pages;          // 各页面内容
//!         pub mod theme;          // 主题和样式
//!
//! 每帧整面重画：View 层只读 Model，把当前状态完整渲染出来，
//! 不保留任何跨帧的增量状态。

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
