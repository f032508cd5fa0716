//! Portfolio backend trait definition

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Comment, CommentQuery, MapStyle, Session};

/// Transport abstraction over the portfolio site backend.
///
/// The HTTP implementation lives in [`crate::api::HttpBackend`]; tests
/// substitute an in-memory mock.
#[async_trait]
pub trait PortfolioBackend: Send + Sync {
    /// Fetch the current authentication state.
    async fn fetch_session(&self) -> CoreResult<Session>;

    /// Store the visitor's nickname on the server.
    async fn save_nickname(&self, nickname: &str) -> CoreResult<()>;

    /// Fetch comments matching the query.
    async fn list_comments(&self, query: &CommentQuery) -> CoreResult<Vec<Comment>>;

    /// Post a new comment.
    async fn add_comment(&self, name: &str, body: &str) -> CoreResult<()>;

    /// Delete one comment by id, or every comment when given
    /// [`crate::types::ALL_COMMENTS`].
    async fn delete_comment(&self, id: i64) -> CoreResult<()>;

    /// Fetch the map style document.
    async fn fetch_map_style(&self) -> CoreResult<MapStyle>;
}
