//! Folio TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Folio TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load config             // 读取本地配置（站点地址、查询参数、主题）
//!     CoreService::new()      // 建 HTTP 后端和消息通道
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例（深链接决定起始页面）
//!     dispatch(LoadSession)   // 启动即拉会话
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     save config             // 把查询参数写回配置
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;
use url::Url;

use backend::{ConfigService, CoreService, LocalConfigService};
use message::Command;
use model::Page;
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config_service = LocalConfigService;
    let mut config = config_service.load()?;
    view::theme::set_theme_index(config.theme_index);

    // 2. 深链接：站点 URL 的 fragment 决定起始页面
    let start_page = Page::from_fragment(
        Url::parse(&config.site_url)
            .ok()
            .as_ref()
            .and_then(Url::fragment),
    );

    // 3. 创建后台服务和消息通道
    let (tx, mut rx) = mpsc::unbounded_channel();
    let core = CoreService::new(&config.site_url, tx)?;

    // 4. 创建应用实例，启动即拉会话
    let mut app = model::App::new(start_page, config.comments.clamped());
    core.dispatch(Command::LoadSession);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &core, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 把会话中调整过的查询参数写回配置
    config.comments = app.comments.query;
    if let Err(e) = config_service.save(&config) {
        log::warn!("保存配置失败: {e}");
    }

    // 8. 返回结果
    result
}
