//! [`PortfolioBackend`] 的 HTTP 实现

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::PortfolioBackend;
use crate::types::{Comment, CommentQuery, MapStyle, Session};

use super::{HttpBackend, AUTH_PATH, DATA_PATH, DELETE_PATH, MAP_STYLE_PATH};

#[async_trait]
impl PortfolioBackend for HttpBackend {
    async fn fetch_session(&self) -> CoreResult<Session> {
        let url = self.endpoint(AUTH_PATH)?;
        self.get_json(url).await
    }

    async fn save_nickname(&self, nickname: &str) -> CoreResult<()> {
        let url = self.endpoint(AUTH_PATH)?;
        self.post_form(url, &[("nickname", nickname.to_string())])
            .await
    }

    async fn list_comments(&self, query: &CommentQuery) -> CoreResult<Vec<Comment>> {
        let mut url = self.endpoint(DATA_PATH)?;
        for (key, value) in query.to_query_pairs() {
            url.query_pairs_mut().append_pair(key, &value);
        }
        self.get_json(url).await
    }

    async fn add_comment(&self, name: &str, body: &str) -> CoreResult<()> {
        let url = self.endpoint(DATA_PATH)?;
        self.post_form(
            url,
            &[
                ("comment_name", name.to_string()),
                ("comment_content", body.to_string()),
            ],
        )
        .await
    }

    async fn delete_comment(&self, id: i64) -> CoreResult<()> {
        let url = self.endpoint(DELETE_PATH)?;
        self.post_form(url, &[("id", id.to_string())]).await
    }

    async fn fetch_map_style(&self) -> CoreResult<MapStyle> {
        let url = self.endpoint(MAP_STYLE_PATH)?;
        self.get_json(url).await
    }
}
