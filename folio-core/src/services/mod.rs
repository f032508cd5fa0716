//! 业务逻辑服务层

mod comment_service;
mod map_service;
mod session_service;

pub use comment_service::CommentService;
pub use map_service::MapService;
pub use session_service::SessionService;

use std::sync::Arc;

use crate::traits::PortfolioBackend;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的后端实现。
pub struct ServiceContext {
    /// 站点后端
    pub backend: Arc<dyn PortfolioBackend>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(backend: Arc<dyn PortfolioBackend>) -> Self {
        Self { backend }
    }

    /// 获取后端实例
    #[must_use]
    pub fn backend(&self) -> Arc<dyn PortfolioBackend> {
        self.backend.clone()
    }
}
