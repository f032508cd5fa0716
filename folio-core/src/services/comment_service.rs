//! 评论管理服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Comment, CommentQuery, ALL_COMMENTS};

/// 评论管理服务
pub struct CommentService {
    ctx: Arc<ServiceContext>,
}

impl CommentService {
    /// 创建评论服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 按查询参数列出评论
    pub async fn list(&self, query: &CommentQuery) -> CoreResult<Vec<Comment>> {
        let query = query.clamped();
        self.ctx.backend.list_comments(&query).await
    }

    /// 发表评论
    ///
    /// 正文不能为空；署名为空时由后端按会话昵称补全。
    pub async fn add(&self, name: &str, body: &str) -> CoreResult<()> {
        let body = body.trim();
        if body.is_empty() {
            return Err(CoreError::ValidationError(
                "Comment cannot be empty".to_string(),
            ));
        }
        self.ctx.backend.add_comment(name.trim(), body).await
    }

    /// 删除单条评论
    ///
    /// 拒绝哨兵 id，整表删除必须走 [`Self::delete_all`]。
    pub async fn delete_one(&self, id: i64) -> CoreResult<()> {
        if id == ALL_COMMENTS {
            return Err(CoreError::ValidationError(format!(
                "{ALL_COMMENTS} is reserved for bulk deletion"
            )));
        }
        self.ctx.backend.delete_comment(id).await
    }

    /// 删除所有评论
    pub async fn delete_all(&self) -> CoreResult<()> {
        self.ctx.backend.delete_comment(ALL_COMMENTS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_comment_service, test_comment};
    use crate::types::{LanguageFilter, SortOrder, MAX_COUNT};

    #[tokio::test]
    async fn list_clamps_count_before_the_request() {
        let (service, mock) = create_test_comment_service();
        mock.push_comment(test_comment(1, "ana")).await;

        let query = CommentQuery {
            count: 500,
            sort: SortOrder::Oldest,
            lang: LanguageFilter::En,
        };
        service.list(&query).await.unwrap();

        let seen = mock.last_query().await.unwrap();
        assert_eq!(seen.count, MAX_COUNT);
        assert_eq!(seen.sort, SortOrder::Oldest);
        assert_eq!(seen.lang, LanguageFilter::En);
    }

    #[tokio::test]
    async fn add_rejects_blank_body() {
        let (service, mock) = create_test_comment_service();

        let err = service.add("ana", "   ").await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert_eq!(mock.comment_count().await, 0);
    }

    #[tokio::test]
    async fn delete_one_refuses_the_bulk_sentinel() {
        let (service, mock) = create_test_comment_service();
        mock.push_comment(test_comment(1, "ana")).await;
        mock.push_comment(test_comment(2, "bob")).await;

        let err = service.delete_one(ALL_COMMENTS).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert_eq!(mock.comment_count().await, 2);
    }

    #[tokio::test]
    async fn delete_one_removes_only_that_row() {
        let (service, mock) = create_test_comment_service();
        mock.push_comment(test_comment(1, "ana")).await;
        mock.push_comment(test_comment(2, "bob")).await;

        service.delete_one(1).await.unwrap();
        let remaining = service.list(&CommentQuery::default()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[tokio::test]
    async fn delete_all_clears_the_table() {
        let (service, mock) = create_test_comment_service();
        mock.push_comment(test_comment(1, "ana")).await;
        mock.push_comment(test_comment(2, "bob")).await;

        service.delete_all().await.unwrap();
        assert_eq!(mock.comment_count().await, 0);
    }

    #[tokio::test]
    async fn backend_failure_leaves_data_untouched() {
        let (service, mock) = create_test_comment_service();
        mock.push_comment(test_comment(1, "ana")).await;
        mock.fail_with_status(500).await;

        let err = service.delete_one(1).await.unwrap_err();
        assert!(matches!(err, CoreError::HttpStatus { status: 500 }));

        mock.clear_failure().await;
        assert_eq!(mock.comment_count().await, 1);
    }
}
