//! JSON parsers for TVmaze catalog responses
//!
//! This module contains parsers for turning catalog JSON into view models:
//! - `search`: Parse show search results
//! - `episodes`: Parse a show's episode list

pub mod episodes;
pub mod search;

// Re-export main parsing functions
pub use episodes::parse_episodes;
pub use search::{choose_image, parse_search_results};
