//! Main TVmaze catalog API
//!
//! This module provides the high-level API for the TVmaze catalog.
//! It combines the HTTP client with parsers to provide a simple interface
//! for searching shows and fetching episode lists.

use tracing::debug;

use crate::client::{ClientConfig, TvMazeClient};
use crate::error::{Result, TvMazeError};
use crate::parser::{parse_episodes, parse_search_results};
use crate::types::{EpisodeRecord, ShowRecord};

/// Placeholder image for shows the catalog has no poster for
pub const DEFAULT_IMAGE: &str = "https://tinyurl.com/tv-missing";

/// Main API for the TVmaze catalog
///
/// Provides methods for searching shows and fetching episode lists.
/// All operations are asynchronous.
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvMazeCatalog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = TvMazeCatalog::new()?;
///
///     let shows = catalog.search_shows("girls").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvMazeCatalog {
    client: TvMazeClient,
    default_image: String,
}

impl TvMazeCatalog {
    /// Create a new catalog with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new catalog with a custom client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(TvMazeClient::with_config(config)?))
    }

    /// Create a new catalog with a custom client.
    pub fn with_client(client: TvMazeClient) -> Self {
        Self {
            client,
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }

    /// Replace the placeholder image used for shows without a poster.
    pub fn with_default_image(mut self, url: impl Into<String>) -> Self {
        self.default_image = url.into();
        self
    }

    /// Placeholder image used for shows without a poster.
    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// Search for shows by title.
    ///
    /// The term is sent as-is (URL-encoded), including when it is empty.
    ///
    /// # Arguments
    /// * `term` - Free-text query
    ///
    /// # Returns
    /// * `Ok(Vec<ShowRecord>)` in catalog order
    /// * `Err(TvMazeError)` on transport, status, or parse failure
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeCatalog;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let catalog = TvMazeCatalog::new()?;
    /// for show in catalog.search_shows("batman").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<ShowRecord>> {
        let path = format!("/search/shows?q={}", urlencoding::encode(term));
        let body = self.client.fetch(&path).await?;

        let shows = parse_search_results(&body, &self.default_image)?;
        debug!(term, count = shows.len(), "search results parsed");
        Ok(shows)
    }

    /// Get all episodes of a show.
    ///
    /// # Arguments
    /// * `show_id` - Show id as read from the page (e.g. `"139"`)
    ///
    /// # Returns
    /// * `Ok(Vec<EpisodeRecord>)` in catalog order
    /// * `Err(TvMazeError::InvalidId)` if `show_id` is not a positive integer
    /// * `Err(TvMazeError::NotFound)` if the show doesn't exist
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeCatalog;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let catalog = TvMazeCatalog::new()?;
    /// for ep in catalog.get_episodes("139").await? {
    ///     println!("S{:02}E{:02} {}", ep.season, ep.number, ep.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_episodes(&self, show_id: &str) -> Result<Vec<EpisodeRecord>> {
        let id = parse_show_id(show_id)?;

        let path = format!("/shows/{}/episodes", id);
        let body = self.client.fetch(&path).await?;

        let episodes = parse_episodes(&body)?;
        debug!(show_id = id, count = episodes.len(), "episodes parsed");
        Ok(episodes)
    }
}

/// Validate a show id read from the page before it is embedded in a path.
pub(crate) fn parse_show_id(show_id: &str) -> Result<u32> {
    match show_id.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TvMazeError::InvalidId(show_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = TvMazeCatalog::new();
        assert!(catalog.is_ok());
        assert_eq!(catalog.unwrap().default_image(), DEFAULT_IMAGE);
    }

    #[test]
    fn test_custom_default_image() {
        let catalog = TvMazeCatalog::new()
            .unwrap()
            .with_default_image("https://example.com/none.png");
        assert_eq!(catalog.default_image(), "https://example.com/none.png");
    }

    #[test]
    fn test_parse_show_id() {
        assert_eq!(parse_show_id("139").unwrap(), 139);
        assert_eq!(parse_show_id(" 82 ").unwrap(), 82);
    }

    #[test]
    fn test_parse_show_id_rejects_invalid() {
        for bad in ["", "0", "-1", "abc", "1/../2", "139?x=1"] {
            match parse_show_id(bad) {
                Err(TvMazeError::InvalidId(id)) => assert_eq!(id, bad),
                other => panic!("Expected InvalidId for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[tokio::test]
    async fn test_get_episodes_invalid_id_makes_no_request() {
        // Unroutable base URL: reaching the network would yield HttpError instead.
        let catalog = TvMazeCatalog::with_config(ClientConfig::with_base_url("http://127.0.0.1:9"))
            .unwrap();
        let result = catalog.get_episodes("not-a-number").await;
        assert!(matches!(result, Err(TvMazeError::InvalidId(_))));
    }
}
