//! 应用主状态结构

use folio_core::types::CommentQuery;

use super::{
    CommentsState, FocusPanel, HomeState, MapState, ModalState, NavItemId, NavigationState, Page,
    ProjectsState, SessionState,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 首页状态
    pub home: HomeState,
    /// 项目页面状态
    pub projects: ProjectsState,
    /// 地图页面状态
    pub map: MapState,
    /// 评论页面状态
    pub comments: CommentsState,

    /// 会话状态
    pub session: SessionState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(start_page: Page, query: CommentQuery) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            home: HomeState::new(),
            projects: ProjectsState::new(),
            map: MapState::new(),
            comments: CommentsState::new(query),
            session: SessionState::new(),
            modal: ModalState::new(),
        };
        app.select_page(start_page);
        app
    }

    /// 切换到指定页面，同时同步导航栏选中项
    pub fn select_page(&mut self, page: Page) {
        let nav_id = match page {
            Page::Home => NavItemId::Home,
            Page::Projects => NavItemId::Projects,
            Page::Map => NavItemId::Map,
            Page::Comments => NavItemId::Comments,
        };
        if let Some(index) = self.navigation.index_of(nav_id) {
            self.navigation.selected = index;
        }
        self.current_page = page;
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_link_start_page_selects_matching_nav_item() {
        let app = App::new(Page::Comments, CommentQuery::default());
        assert_eq!(app.current_page, Page::Comments);
        assert_eq!(app.navigation.current_id(), Some(NavItemId::Comments));
    }

    #[test]
    fn select_page_keeps_nav_and_page_in_sync() {
        let mut app = App::new(Page::Home, CommentQuery::default());
        app.select_page(Page::Map);
        assert_eq!(app.current_page, Page::Map);
        assert_eq!(app.navigation.current_id(), Some(NavItemId::Map));
    }
}
