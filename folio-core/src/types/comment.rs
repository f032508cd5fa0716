//! Comment types and query parameters

use serde::{Deserialize, Serialize};

/// Sentinel id understood by the delete endpoint as "delete every comment".
pub const ALL_COMMENTS: i64 = -1;

/// Smallest page size the query will accept
pub const MIN_COUNT: u32 = 1;
/// Largest page size the query will accept
pub const MAX_COUNT: u32 = 50;
/// Page size used when none is configured
pub const DEFAULT_COUNT: u32 = 10;

/// A single visitor comment as returned by the `data` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub comment: String,
    /// Epoch milliseconds, zero for rows written before timestamps existed
    #[serde(default)]
    pub timestamp: i64,
}

/// Display order requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Query token understood by the `data` endpoint
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Cycle to the other order
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
        }
    }
}

/// Server-side language filter for the comment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFilter {
    #[default]
    All,
    En,
    Es,
}

impl LanguageFilter {
    /// Query token understood by the `data` endpoint
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Cycle through the available filters
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::En,
            Self::En => Self::Es,
            Self::Es => Self::All,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All languages",
            Self::En => "English",
            Self::Es => "Spanish",
        }
    }
}

/// Parameters for a comment list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentQuery {
    pub count: u32,
    pub sort: SortOrder,
    pub lang: LanguageFilter,
}

impl Default for CommentQuery {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            sort: SortOrder::default(),
            lang: LanguageFilter::default(),
        }
    }
}

impl CommentQuery {
    /// Pairs for the `data` endpoint query string
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("count", self.count.to_string()),
            ("sort", self.sort.token().to_string()),
            ("lang", self.lang.token().to_string()),
        ]
    }

    /// Raise the page size, clamped to [`MAX_COUNT`]
    #[must_use]
    pub fn more(mut self) -> Self {
        self.count = (self.count + 1).min(MAX_COUNT);
        self
    }

    /// Lower the page size, clamped to [`MIN_COUNT`]
    #[must_use]
    pub fn fewer(mut self) -> Self {
        self.count = self.count.saturating_sub(1).max(MIN_COUNT);
        self
    }

    /// Bring an externally sourced count back into range
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.count = self.count.clamp(MIN_COUNT, MAX_COUNT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_defaults_to_zero() {
        let json = r#"{"id": 3, "name": "ana", "comment": "hola"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.timestamp, 0);
    }

    #[test]
    fn query_pairs_cover_all_parameters() {
        let query = CommentQuery {
            count: 25,
            sort: SortOrder::Oldest,
            lang: LanguageFilter::Es,
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("count", "25".to_string()),
                ("sort", "oldest".to_string()),
                ("lang", "es".to_string()),
            ]
        );
    }

    #[test]
    fn count_is_clamped_at_both_ends() {
        let mut query = CommentQuery {
            count: MAX_COUNT,
            ..CommentQuery::default()
        };
        query = query.more();
        assert_eq!(query.count, MAX_COUNT);

        query.count = MIN_COUNT;
        query = query.fewer();
        assert_eq!(query.count, MIN_COUNT);

        query.count = 0;
        assert_eq!(query.clamped().count, MIN_COUNT);
        query.count = 999;
        assert_eq!(query.clamped().count, MAX_COUNT);
    }

    #[test]
    fn filters_cycle_back_to_start() {
        assert_eq!(SortOrder::Newest.next().next(), SortOrder::Newest);
        assert_eq!(
            LanguageFilter::All.next().next().next(),
            LanguageFilter::All
        );
    }
}
