//! TVmaze Show Browser Core Library
//!
//! This crate provides the core functionality for browsing the TVmaze
//! catalog (https://api.tvmaze.com).
//!
//! # Features
//! - Search for TV shows by title
//! - Get episode lists for a show
//! - Render shows and episodes into page regions, with sanitized summaries
//! - Event controller that discards stale responses

pub mod browser;
pub mod catalog;
pub mod client;
pub mod error;
pub mod parser;
pub mod render;
pub mod sanitize;
pub mod sequence;
pub mod types;

// Re-export main types for convenience
pub use browser::{Outcome, ShowBrowser};
pub use catalog::{TvMazeCatalog, DEFAULT_IMAGE};
pub use client::{ClientConfig, TvMazeClient};
pub use error::{Result, TvMazeError};
pub use render::{DisplayRegion, Region};
pub use sequence::{RequestSequencer, RequestToken};
pub use types::{EpisodeRecord, ShowRecord};
