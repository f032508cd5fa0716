//! 地图资源服务

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{MapMarker, MapStyle};

/// 地图资源服务
///
/// 样式文档只在首次访问时拉取，之后从缓存返回。拉取失败不会写入缓存，
/// 下次访问会重试。
pub struct MapService {
    ctx: Arc<ServiceContext>,
    style: OnceCell<MapStyle>,
}

impl MapService {
    /// 创建地图服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            style: OnceCell::new(),
        }
    }

    /// 获取地图样式，带进程内缓存
    pub async fn style(&self) -> CoreResult<&MapStyle> {
        self.style
            .get_or_try_init(|| self.ctx.backend.fetch_map_style())
            .await
    }

    /// 内置地标列表
    #[must_use]
    pub fn markers() -> Vec<MapMarker> {
        vec![
            MapMarker {
                title: "Googleplex".to_string(),
                lat: 37.422,
                lng: -122.084,
                description: "Google headquarters in Mountain View".to_string(),
            },
            MapMarker {
                title: "Golden Gate Bridge".to_string(),
                lat: 37.8199,
                lng: -122.4786,
                description: "Iconic suspension bridge over the bay".to_string(),
            },
            MapMarker {
                title: "UT Austin".to_string(),
                lat: 30.2849,
                lng: -97.7341,
                description: "The University of Texas at Austin".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::create_test_context;

    #[tokio::test]
    async fn style_is_fetched_once_and_cached() {
        let (ctx, mock) = create_test_context();
        let service = MapService::new(ctx);

        let first = service.style().await.unwrap().clone();
        let second = service.style().await.unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(mock.style_fetches(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let (ctx, mock) = create_test_context();
        let service = MapService::new(ctx);

        mock.fail_with_status(502).await;
        let err = service.style().await.unwrap_err();
        assert!(matches!(err, CoreError::HttpStatus { status: 502 }));

        mock.clear_failure().await;
        service.style().await.unwrap();
        assert_eq!(mock.style_fetches(), 2);
    }

    #[test]
    fn markers_are_available_without_a_backend() {
        let markers = MapService::markers();
        assert!(!markers.is_empty());
        assert!(markers.iter().all(|m| !m.title.is_empty()));
    }
}
