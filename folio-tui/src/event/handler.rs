//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 强制退出在任何状态下都生效，包括弹窗打开时
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // Alt+q: 退出
    if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_DELETE_ALL.matches(&key) {
        return AppMessage::Content(ContentMessage::DeleteAll);
    }

    // 根据当前页面处理特定按键
    match app.current_page {
        Page::Home => handle_home_keys(key),
        Page::Comments => handle_comments_keys(key),
        _ => handle_list_keys(key),
    }
}

/// 处理首页的按键
fn handle_home_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // f: 轮换趣闻
        KeyCode::Char('f') => AppMessage::Content(ContentMessage::NextFact),
        _ => AppMessage::Noop,
    }
}

/// 处理评论页面的按键
fn handle_comments_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // s: 切换排序
        KeyCode::Char('s') => AppMessage::Content(ContentMessage::ToggleSort),
        // l: 轮换语言过滤
        KeyCode::Char('l') => AppMessage::Content(ContentMessage::CycleLanguage),
        // + / =: 多拉几条
        KeyCode::Char('+') | KeyCode::Char('=') => {
            AppMessage::Content(ContentMessage::MoreComments)
        }
        // -: 少拉几条
        KeyCode::Char('-') => AppMessage::Content(ContentMessage::FewerComments),
        _ => handle_list_keys(key),
    }
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    // Esc 始终可以关闭弹窗
    if key.modifiers.is_empty() && key.code == KeyCode::Esc {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match key.code {
        KeyCode::Tab => AppMessage::Modal(ModalMessage::NextField),
        // 确认弹窗里左右键也切换按钮
        KeyCode::Left | KeyCode::Right => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c) => AppMessage::Modal(ModalMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::CommentQuery;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    #[test]
    fn comments_page_has_query_shortcuts() {
        let mut app = App::new(Page::Comments, CommentQuery::default());
        app.focus = crate::model::FocusPanel::Content;

        assert!(matches!(
            handle_key_event(press(KeyCode::Char('s')), &app),
            AppMessage::Content(ContentMessage::ToggleSort)
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('+')), &app),
            AppMessage::Content(ContentMessage::MoreComments)
        ));
        assert!(matches!(
            handle_key_event(alt('x'), &app),
            AppMessage::Content(ContentMessage::DeleteAll)
        ));
    }

    #[test]
    fn modal_input_wins_over_global_shortcuts() {
        let mut app = App::new(Page::Comments, CommentQuery::default());
        app.modal.show_nickname();

        // 弹窗打开时字符进输入框，而不是触发页面快捷键
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('s')), &app),
            AppMessage::Modal(ModalMessage::Input('s'))
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn force_quit_works_even_with_a_modal_open() {
        let mut app = App::new(Page::Comments, CommentQuery::default());
        app.modal.show_nickname();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_key_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn navigation_focus_moves_the_nav_list() {
        let app = App::new(Page::Home, CommentQuery::default());
        assert!(matches!(
            handle_key_event(press(KeyCode::Down), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
    }
}
