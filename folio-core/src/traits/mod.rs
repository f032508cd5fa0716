//! Trait abstractions

mod backend;

pub use backend::PortfolioBackend;
