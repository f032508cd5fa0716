//! 测试工具 - Mock 实现和测试辅助函数

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{CommentService, ServiceContext};
use crate::traits::PortfolioBackend;
use crate::types::{Comment, CommentQuery, MapStyle, MapStyleRule, Session, ALL_COMMENTS};

// ========== Mock 后端 ==========

/// 内存版站点后端
#[derive(Default)]
pub struct MockBackend {
    session: RwLock<Session>,
    comments: RwLock<Vec<Comment>>,
    fail_status: RwLock<Option<u16>>,
    last_query: RwLock<Option<CommentQuery>>,
    style_fetches: AtomicUsize,
    nickname_saves: AtomicUsize,
}

impl MockBackend {
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = session;
    }

    pub async fn push_comment(&self, comment: Comment) {
        self.comments.write().await.push(comment);
    }

    pub async fn comment_count(&self) -> usize {
        self.comments.read().await.len()
    }

    /// 让后续所有请求都返回该 HTTP 状态
    pub async fn fail_with_status(&self, status: u16) {
        *self.fail_status.write().await = Some(status);
    }

    pub async fn clear_failure(&self) {
        *self.fail_status.write().await = None;
    }

    /// 最近一次列表请求携带的查询参数
    pub async fn last_query(&self) -> Option<CommentQuery> {
        *self.last_query.read().await
    }

    /// 地图样式拉取次数（含失败的请求）
    pub fn style_fetches(&self) -> usize {
        self.style_fetches.load(Ordering::SeqCst)
    }

    /// 昵称保存次数
    pub fn nickname_saves(&self) -> usize {
        self.nickname_saves.load(Ordering::SeqCst)
    }

    async fn check_failure(&self) -> CoreResult<()> {
        if let Some(status) = *self.fail_status.read().await {
            return Err(CoreError::HttpStatus { status });
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioBackend for MockBackend {
    async fn fetch_session(&self) -> CoreResult<Session> {
        self.check_failure().await?;
        Ok(self.session.read().await.clone())
    }

    async fn save_nickname(&self, nickname: &str) -> CoreResult<()> {
        self.check_failure().await?;
        self.nickname_saves.fetch_add(1, Ordering::SeqCst);
        self.session.write().await.nickname = nickname.to_string();
        Ok(())
    }

    async fn list_comments(&self, query: &CommentQuery) -> CoreResult<Vec<Comment>> {
        self.check_failure().await?;
        *self.last_query.write().await = Some(*query);
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .take(query.count as usize)
            .cloned()
            .collect())
    }

    async fn add_comment(&self, name: &str, body: &str) -> CoreResult<()> {
        self.check_failure().await?;
        let mut comments = self.comments.write().await;
        let id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        comments.push(Comment {
            id,
            name: name.to_string(),
            comment: body.to_string(),
            timestamp: 0,
        });
        Ok(())
    }

    async fn delete_comment(&self, id: i64) -> CoreResult<()> {
        self.check_failure().await?;
        let mut comments = self.comments.write().await;
        if id == ALL_COMMENTS {
            comments.clear();
        } else {
            comments.retain(|c| c.id != id);
        }
        Ok(())
    }

    async fn fetch_map_style(&self) -> CoreResult<MapStyle> {
        self.style_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(MapStyle {
            rules: vec![MapStyleRule {
                feature_type: Some("water".to_string()),
                element_type: None,
                stylers: vec![serde_json::json!({"color": "#19a0d8"})],
            }],
        })
    }
}

// ========== 工厂函数 ==========

/// 创建测试用服务上下文，同时返回 Mock 后端引用
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockBackend>) {
    let mock = Arc::new(MockBackend::default());
    let ctx = Arc::new(ServiceContext::new(mock.clone()));
    (ctx, mock)
}

/// 创建测试用评论服务
pub fn create_test_comment_service() -> (CommentService, Arc<MockBackend>) {
    let (ctx, mock) = create_test_context();
    (CommentService::new(ctx), mock)
}

/// 创建已登录的会话
pub fn logged_in_session(nickname: &str) -> Session {
    Session {
        logged_in: true,
        nickname: nickname.to_string(),
        email: "visitor@example.com".to_string(),
        logout_url: "/logout".to_string(),
        ..Session::default()
    }
}

/// 创建测试用评论
pub fn test_comment(id: i64, name: &str) -> Comment {
    Comment {
        id,
        name: name.to_string(),
        comment: format!("comment {id}"),
        timestamp: 1_700_000_000_000 + id,
    }
}
