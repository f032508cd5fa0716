//! 副作用指令
//!
//! Update 层是纯同步的，网络请求不在这里发生：
//! 需要副作用时 Update 返回一条 Command，由主循环交给
//! Backend 层的 `CoreService::dispatch` 异步执行。

use folio_core::types::CommentQuery;

/// 副作用指令
#[derive(Debug, Clone)]
pub enum Command {
    /// 拉取会话状态
    LoadSession,

    /// 保存昵称
    SaveNickname(String),

    /// 按查询参数拉取评论列表
    LoadComments { token: u64, query: CommentQuery },

    /// 发表评论
    AddComment { name: String, body: String },

    /// 删除单条评论
    DeleteComment(i64),

    /// 清空评论区
    DeleteAllComments,

    /// 拉取地图样式
    LoadMapStyle,
}
