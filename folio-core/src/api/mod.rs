//! 站点后端 HTTP 实现

mod backend;
mod http;

use url::Url;

use crate::error::{CoreError, CoreResult};

/// `auth` 端点路径
pub(crate) const AUTH_PATH: &str = "auth";
/// `data` 端点路径 (评论列表)
pub(crate) const DATA_PATH: &str = "data";
/// `delete-comment` 端点路径
pub(crate) const DELETE_PATH: &str = "delete-comment";
/// 地图样式文档路径
pub(crate) const MAP_STYLE_PATH: &str = "map-style.json";

/// 基于 reqwest 的站点后端
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// 从站点 URL 创建后端，丢弃 query 和 fragment
    pub fn new(site_url: &str) -> CoreResult<Self> {
        let mut base_url =
            Url::parse(site_url).map_err(|e| CoreError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidUrl(format!(
                "不支持的站点 URL: {site_url}"
            )));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        // 确保以 / 结尾，否则 join 会吃掉最后一段路径
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// 拼接端点完整 URL
    pub(crate) fn endpoint(&self, path: &str) -> CoreResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CoreError::InvalidUrl(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_preserves_base_path() {
        let backend = HttpBackend::new("https://example.com/portfolio").unwrap();
        let url = backend.endpoint(DATA_PATH).unwrap();
        assert_eq!(url.as_str(), "https://example.com/portfolio/data");
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        let backend = HttpBackend::new("https://example.com/?utm=x#Comments").unwrap();
        let url = backend.endpoint(AUTH_PATH).unwrap();
        assert_eq!(url.as_str(), "https://example.com/auth");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(matches!(
            HttpBackend::new("mailto:someone@example.com"),
            Err(CoreError::InvalidUrl(_))
        ));
    }
}
