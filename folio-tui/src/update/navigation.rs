//! 导航更新逻辑

use crate::message::{Command, NavigationMessage};
use crate::model::{App, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
            None
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
            None
        }

        NavigationMessage::Confirm => {
            let id = app.navigation.current_id()?;
            super::enter_page(app, page_from_nav_id(id))
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
            None
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
            None
        }
    }
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Projects => Page::Projects,
        NavItemId::Map => Page::Map,
        NavItemId::Comments => Page::Comments,
    }
}
