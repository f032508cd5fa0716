//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息

use crate::message::{Command, ContentMessage};
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
            None
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
            None
        }
        ContentMessage::SelectFirst => {
            handle_select_first(app);
            None
        }
        ContentMessage::SelectLast => {
            handle_select_last(app);
            None
        }
        ContentMessage::Confirm => {
            handle_confirm(app);
            None
        }

        // ========== 评论操作 ==========
        ContentMessage::Add => {
            handle_add(app);
            None
        }
        ContentMessage::Delete => {
            handle_delete(app);
            None
        }
        ContentMessage::DeleteAll => {
            handle_delete_all(app);
            None
        }

        // ========== 评论查询参数 ==========
        ContentMessage::ToggleSort => handle_query_change(app, |app| {
            app.comments.query.sort = app.comments.query.sort.next();
        }),
        ContentMessage::CycleLanguage => handle_query_change(app, |app| {
            app.comments.query.lang = app.comments.query.lang.next();
        }),
        ContentMessage::MoreComments => handle_query_change(app, |app| {
            app.comments.query = app.comments.query.more();
        }),
        ContentMessage::FewerComments => handle_query_change(app, |app| {
            app.comments.query = app.comments.query.fewer();
        }),

        // ========== 首页专用 ==========
        ContentMessage::NextFact => {
            if app.current_page == Page::Home {
                app.home.next_fact();
            }
            None
        }
    }
}

// ========== 列表导航处理 ==========

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::Projects => app.projects.select_previous(),
        Page::Map => app.map.select_previous(),
        Page::Comments => app.comments.select_previous(),
        Page::Home => {}
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page {
        Page::Projects => app.projects.select_next(),
        Page::Map => app.map.select_next(),
        Page::Comments => app.comments.select_next(),
        Page::Home => {}
    }
}

fn handle_select_first(app: &mut App) {
    if app.current_page == Page::Comments {
        app.comments.select_first();
    }
}

fn handle_select_last(app: &mut App) {
    if app.current_page == Page::Comments {
        app.comments.select_last();
    }
}

fn handle_confirm(app: &mut App) {
    match app.current_page {
        Page::Projects => {
            if let Some(project) = app.projects.selected_project() {
                let name = project.name;
                app.set_status(format!("Project: {name}"));
            }
        }
        Page::Map => {
            if let Some(marker) = app.map.selected_marker() {
                let title = marker.title.clone();
                app.set_status(format!("Marker: {title}"));
            }
        }
        Page::Comments => {
            if !app.session.logged_in() {
                show_login_hint(app);
            }
        }
        Page::Home => {}
    }
}

// ========== 评论操作处理 ==========

fn handle_add(app: &mut App) {
    if app.current_page != Page::Comments {
        return;
    }
    if !app.session.logged_in() {
        show_login_hint(app);
        return;
    }
    if !app.session.can_comment() {
        // 没有昵称先补昵称
        app.modal.show_nickname();
        return;
    }
    let nickname = app.session.nickname().to_string();
    app.modal.show_add_comment(&nickname);
}

fn handle_delete(app: &mut App) {
    if app.current_page != Page::Comments || !app.session.logged_in() {
        return;
    }
    if let Some(comment) = app.comments.selected_comment() {
        let id = comment.id;
        let author = comment.name.clone();
        app.modal.show_confirm_delete(id, &author);
    }
}

fn handle_delete_all(app: &mut App) {
    if app.current_page != Page::Comments || !app.session.logged_in() {
        return;
    }
    if !app.comments.comments.is_empty() {
        app.modal.show_confirm_delete_all();
    }
}

// ========== 查询参数处理 ==========

/// 修改查询参数并立即刷新列表
fn handle_query_change(app: &mut App, change: impl FnOnce(&mut App)) -> Option<Command> {
    if app.current_page != Page::Comments || !app.session.logged_in() {
        return None;
    }
    change(app);
    Some(super::refresh_comments(app))
}

fn show_login_hint(app: &mut App) {
    let login_url = app.session.login_url();
    let message = if login_url.is_empty() {
        "Sign in on the site to view and post comments.".to_string()
    } else {
        format!("Sign in on the site to view and post comments:\n{login_url}")
    };
    app.modal.show_error("Sign in required", &message);
}
