//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、评论增删等

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择
    Confirm,

    // ========== 评论操作 ==========
    /// 发表评论
    Add,
    /// 删除当前选中的评论
    Delete,
    /// 清空评论区
    DeleteAll,

    // ========== 评论查询参数 ==========
    /// 切换排序方向
    ToggleSort,
    /// 轮换语言过滤
    CycleLanguage,
    /// 增加拉取条数
    MoreComments,
    /// 减少拉取条数
    FewerComments,

    // ========== 首页专用 ==========
    /// 轮换趣闻
    NextFact,
}
