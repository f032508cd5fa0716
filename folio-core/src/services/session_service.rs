//! 会话管理服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::Session;

/// 会话管理服务
pub struct SessionService {
    ctx: Arc<ServiceContext>,
}

impl SessionService {
    /// 创建会话服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取当前会话状态
    pub async fn current(&self) -> CoreResult<Session> {
        self.ctx.backend.fetch_session().await
    }

    /// 保存昵称并返回刷新后的会话
    ///
    /// 昵称两端空白会被去除，空昵称被拒绝。
    pub async fn set_nickname(&self, nickname: &str) -> CoreResult<Session> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(CoreError::ValidationError(
                "Nickname cannot be empty".to_string(),
            ));
        }

        self.ctx.backend.save_nickname(nickname).await?;
        self.ctx.backend.fetch_session().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, logged_in_session};

    #[tokio::test]
    async fn current_reports_backend_state() {
        let (ctx, mock) = create_test_context();
        mock.set_session(logged_in_session("esap")).await;

        let service = SessionService::new(ctx);
        let session = service.current().await.unwrap();
        assert!(session.logged_in);
        assert_eq!(session.nickname, "esap");
    }

    #[tokio::test]
    async fn set_nickname_trims_and_refetches() {
        let (ctx, mock) = create_test_context();
        mock.set_session(logged_in_session("")).await;

        let service = SessionService::new(ctx);
        let session = service.set_nickname("  esap  ").await.unwrap();
        assert_eq!(session.nickname, "esap");
        assert!(!session.needs_nickname());
    }

    #[tokio::test]
    async fn blank_nickname_is_rejected_before_any_request() {
        let (ctx, mock) = create_test_context();
        mock.set_session(logged_in_session("")).await;

        let service = SessionService::new(ctx);
        let err = service.set_nickname("   ").await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(err.is_expected());
        assert_eq!(mock.nickname_saves(), 0);
    }

    #[tokio::test]
    async fn backend_failure_propagates() {
        let (ctx, mock) = create_test_context();
        mock.fail_with_status(503).await;

        let service = SessionService::new(ctx);
        let err = service.current().await.unwrap_err();
        assert!(matches!(err, CoreError::HttpStatus { status: 503 }));
        assert!(!err.is_expected());
    }
}
