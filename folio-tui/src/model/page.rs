//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 项目展示
    Projects,
    /// 地图
    Map,
    /// 评论区
    Comments,
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Map => "Map",
            Page::Comments => "Comments",
        }
    }

    /// 根据站点 URL 的 fragment 决定启动页面
    ///
    /// 只认 `#Comments` 深链接，其余一律回到首页。
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        match fragment {
            Some("Comments") => Page::Comments,
            _ => Page::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_fragment_opens_comments_page() {
        assert_eq!(Page::from_fragment(Some("Comments")), Page::Comments);
    }

    #[test]
    fn other_fragments_fall_back_to_home() {
        assert_eq!(Page::from_fragment(None), Page::Home);
        assert_eq!(Page::from_fragment(Some("")), Page::Home);
        assert_eq!(Page::from_fragment(Some("comments")), Page::Home);
        assert_eq!(Page::from_fragment(Some("About")), Page::Home);
    }
}
