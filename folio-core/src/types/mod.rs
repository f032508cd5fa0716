//! Shared data types

mod comment;
mod map;
mod session;

pub use comment::{
    Comment, CommentQuery, LanguageFilter, SortOrder, ALL_COMMENTS, DEFAULT_COUNT, MAX_COUNT,
    MIN_COUNT,
};
pub use map::{MapMarker, MapStyle, MapStyleRule};
pub use session::Session;
