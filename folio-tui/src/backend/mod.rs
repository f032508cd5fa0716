//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写
//!         mod core_service;       // folio-core 服务封装 + 指令分发
//!
//! Update 层返回的 Command 在这里变成真正的网络请求：
//! `CoreService::dispatch` 为每条指令 spawn 一个 tokio 任务，
//! 完成后把结果作为 `AppMessage::Backend(...)` 发回主循环。

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
