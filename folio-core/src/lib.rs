//! Folio Core Library
//!
//! Provides the client-side logic for the folio portfolio site, including:
//! - Session gate (Session Service)
//! - Comment list operations (Comment Service)
//! - Map style resource (Map Service)
//!
//! This library is designed to be platform-independent, abstracting the HTTP
//! transport through a trait, so terminal and desktop front ends (and tests)
//! can substitute their own backend.

pub mod api;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use api::HttpBackend;
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::PortfolioBackend;
