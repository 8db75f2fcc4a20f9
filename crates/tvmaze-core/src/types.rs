//! Data types for the TVmaze Show Browser
//!
//! These are the normalized view models handed to the renderer.
//! All types implement Serialize and Deserialize for JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

/// A show matching a search, reduced to what the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Unique TVmaze identifier
    pub id: u32,
    /// Display name of the show
    pub name: String,
    /// Summary as an HTML fragment (empty when the catalog has none)
    pub summary: String,
    /// Poster image URL, or the placeholder when the catalog has none
    pub image: String,
}

/// An episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Unique TVmaze identifier for this episode
    pub id: u32,
    /// Episode title
    pub name: String,
    /// Season number (0 is used by the catalog for specials)
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
