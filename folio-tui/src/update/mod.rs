//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 与经典 TEA 的一点扩展：`update` 返回 `Option<Command>`。
//! 需要网络副作用的消息不在这里直接执行，而是返回一条指令，
//! 由主循环交给 Backend 层异步跑，结果再以
//! `AppMessage::Backend(...)` 回到这里。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台结果消息处理

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::{AppMessage, Command};
use crate::model::{App, Page};

/// 处理应用消息，更新状态，必要时返回副作用指令
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            }
            None
        }

        AppMessage::Refresh => refresh_current(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Tick => {
            app.home.tick();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 切换到指定页面，首次进入时按需触发加载
pub(crate) fn enter_page(app: &mut App, page: Page) -> Option<Command> {
    app.select_page(page);
    app.clear_status();

    match app.current_page {
        Page::Comments
            if app.session.logged_in() && !app.comments.loaded_once && !app.comments.loading =>
        {
            Some(refresh_comments(app))
        }
        Page::Map if app.map.style.is_none() && !app.map.loading => {
            app.map.loading = true;
            Some(Command::LoadMapStyle)
        }
        _ => None,
    }
}

/// 发起一次评论列表刷新
pub(crate) fn refresh_comments(app: &mut App) -> Command {
    let token = app.comments.begin_refresh();
    Command::LoadComments {
        token,
        query: app.comments.query,
    }
}

/// 刷新当前页面（Alt+r）
fn refresh_current(app: &mut App) -> Option<Command> {
    match app.current_page {
        Page::Comments => {
            if app.session.logged_in() {
                app.set_status("Refreshing comments...");
                Some(refresh_comments(app))
            } else {
                app.set_status("Sign in to view comments");
                None
            }
        }
        _ => None,
    }
}
