//! Podcast search and lookup through the iTunes directory.
//!
//! See <https://developer.apple.com/library/archive/documentation/AudioVideo/Conceptual/iTuneSearchAPI/index.html>
//! for the remote API.
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod model;
pub mod search;
pub mod util;

pub use client::{Client, Transport};
pub use config::Config;
pub use entity::Podcast;
pub use error::{Error, Result};
pub use search::{Searcher, DEFAULT_LIMIT};

// default impl of searcher, configured from the environment
pub fn get_searcher() -> Searcher<Client> {
    Searcher::default()
}

/// Search podcasts by `query` in every store, returning at most `DEFAULT_LIMIT` results.
pub fn search(query: &str) -> Result<Vec<Podcast>> {
    get_searcher().search(query, None, DEFAULT_LIMIT)
}

pub fn search_in(query: &str, country: &str, limit: u32) -> Result<Vec<Podcast>> {
    get_searcher().search(query, Some(country), limit)
}

pub fn lookup(id: u64) -> Result<Option<Podcast>> {
    get_searcher().lookup(id)
}
