//! 后台任务结果消息

use folio_core::types::{Comment, MapStyle, Session};
use folio_core::CoreResult;

/// 后台任务结果
///
/// 每个变体对应一条 [`super::Command`] 的完成回执。
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 启动时的会话拉取完成
    SessionLoaded(CoreResult<Session>),

    /// 昵称保存完成，携带刷新后的会话
    NicknameSaved(CoreResult<Session>),

    /// 评论列表拉取完成，令牌用于丢弃过期响应
    CommentsLoaded {
        token: u64,
        result: CoreResult<Vec<Comment>>,
    },

    /// 评论发表完成
    CommentAdded(CoreResult<()>),

    /// 评论删除完成（单条或整表）
    CommentDeleted(CoreResult<()>),

    /// 地图样式拉取完成
    MapStyleLoaded(CoreResult<MapStyle>),
}
