//! Comic Server - concurrent xkcd fetcher
//!
//! Fetches comic metadata from an xkcd-style origin, memoizes it in memory
//! and renders each comic as an HTML fragment. Batches of ids are fetched
//! in parallel and returned in the order they were requested.

pub mod aggregator;
pub mod cache;
pub mod client;
pub mod comic;
pub mod error;
pub mod web;

pub use aggregator::{fetch_all, fetch_batch, parse_ids};
pub use cache::ComicCache;
pub use client::{ClientConfig, XkcdClient};
pub use comic::{Comic, DOCTYPE};
pub use error::{ComicError, Result};
