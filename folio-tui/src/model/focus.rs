//! 焦点状态
//!
//! 界面只有两个可聚焦区域：左侧菜单和右侧页面内容。
//! Tab 在两者之间往返，弹窗打开期间焦点不动。

/// 当前持有焦点的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧菜单
    #[default]
    Navigation,
    /// 右侧页面内容
    Content,
}

impl FocusPanel {
    /// 往返切换焦点
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    /// 焦点是否在菜单上
    pub fn is_navigation(&self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    /// 焦点是否在页面内容上
    pub fn is_content(&self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
