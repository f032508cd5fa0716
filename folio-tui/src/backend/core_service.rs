//! 核心服务
//!
//! 封装 folio-core 的各种服务，
//! 把 Update 层的指令转成异步任务执行

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use folio_core::services::{CommentService, MapService, ServiceContext, SessionService};
use folio_core::{CoreResult, HttpBackend};

use crate::message::{AppMessage, BackendMessage, Command};

/// TUI 核心服务
///
/// 持有服务上下文和发往主循环的消息通道
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
    /// 地图服务（带样式缓存，需要常驻）
    map_service: Arc<MapService>,
    /// 发往主循环的消息通道
    tx: UnboundedSender<AppMessage>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(site_url: &str, tx: UnboundedSender<AppMessage>) -> CoreResult<Self> {
        let backend = Arc::new(HttpBackend::new(site_url)?);
        let ctx = Arc::new(ServiceContext::new(backend));
        let map_service = Arc::new(MapService::new(ctx.clone()));

        Ok(Self {
            ctx,
            map_service,
            tx,
        })
    }

    /// 异步执行一条指令，完成后把结果发回主循环
    pub fn dispatch(&self, cmd: Command) {
        let ctx = self.ctx.clone();
        let map_service = self.map_service.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let msg = match cmd {
                Command::LoadSession => {
                    BackendMessage::SessionLoaded(SessionService::new(ctx).current().await)
                }

                Command::SaveNickname(nickname) => BackendMessage::NicknameSaved(
                    SessionService::new(ctx).set_nickname(&nickname).await,
                ),

                Command::LoadComments { token, query } => BackendMessage::CommentsLoaded {
                    token,
                    result: CommentService::new(ctx).list(&query).await,
                },

                Command::AddComment { name, body } => {
                    BackendMessage::CommentAdded(CommentService::new(ctx).add(&name, &body).await)
                }

                Command::DeleteComment(id) => {
                    BackendMessage::CommentDeleted(CommentService::new(ctx).delete_one(id).await)
                }

                Command::DeleteAllComments => {
                    BackendMessage::CommentDeleted(CommentService::new(ctx).delete_all().await)
                }

                Command::LoadMapStyle => BackendMessage::MapStyleLoaded(
                    map_service.style().await.map(Clone::clone),
                ),
            };

            if tx.send(AppMessage::Backend(msg)).is_err() {
                // 主循环已退出
                log::debug!("UI 通道已关闭，丢弃后台消息");
            }
        });
    }
}
