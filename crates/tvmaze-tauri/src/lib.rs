//! TVmaze Show Browser Tauri Integration
//!
//! This crate provides Tauri commands for hosting the show browser in a
//! Tauri 2.0 webview. The webview forwards the search form submission and
//! the "Episodes" clicks to Rust and applies the returned page state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tvmaze_tauri::BrowserState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(BrowserState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             tvmaze_tauri::commands::search_shows,
//!             tvmaze_tauri::commands::get_episodes,
//!             tvmaze_tauri::commands::submit_search,
//!             tvmaze_tauri::commands::show_episodes,
//!             tvmaze_tauri::commands::click_episodes_control,
//!             tvmaze_tauri::commands::page_shell,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `search_shows` - Search for shows by title
//! - `get_episodes` - Get a show's episode list
//! - `submit_search` - Handle the search form and return the page state
//! - `show_episodes` - Handle an "Episodes" click and return the page state
//! - `click_episodes_control` - Same, resolving the show from the n-th rendered control
//! - `page_shell` - Host page markup with the expected containers

pub mod commands;

use std::sync::Arc;

use serde::Serialize;
use tvmaze_core::{DisplayRegion, Outcome, ShowBrowser, TvMazeCatalog};

/// Shared page controller.
///
/// This state is managed by Tauri. Commands share one controller so that
/// overlapping requests are sequenced against each other.
///
/// # Example
/// ```rust,ignore
/// use tvmaze_tauri::BrowserState;
/// use tauri::Manager;
///
/// tauri::Builder::default()
///     .setup(|app| {
///         app.manage(BrowserState::new()?);
///         Ok(())
///     })
/// ```
pub struct BrowserState {
    browser: Arc<ShowBrowser>,
}

impl BrowserState {
    /// Create a new BrowserState with default configuration.
    ///
    /// # Errors
    /// Returns an error string if the catalog cannot be created.
    pub fn new() -> Result<Self, String> {
        let catalog = TvMazeCatalog::new().map_err(|e| e.to_string())?;
        Ok(Self::with_catalog(catalog))
    }

    /// Create a new BrowserState around an existing catalog.
    pub fn with_catalog(catalog: TvMazeCatalog) -> Self {
        let browser = ShowBrowser::new(
            catalog,
            DisplayRegion::shows_list(),
            DisplayRegion::episodes_area(),
        );
        Self {
            browser: Arc::new(browser),
        }
    }

    /// Get a reference to the inner controller.
    pub fn browser(&self) -> &Arc<ShowBrowser> {
        &self.browser
    }

    /// Current content and visibility of both regions.
    pub async fn snapshot(&self, outcome: Outcome) -> PageUpdate {
        self.browser
            .with_regions(|shows, episodes| PageUpdate {
                outcome,
                shows: shows.clone(),
                episodes: episodes.clone(),
            })
            .await
    }
}

/// Page state returned to the webview after an event.
#[derive(Debug, Clone, Serialize)]
pub struct PageUpdate {
    /// What the handler did
    pub outcome: Outcome,
    /// Shows region (`#showsList`)
    pub shows: DisplayRegion,
    /// Episodes region (`#episodesArea`)
    pub episodes: DisplayRegion,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvmaze_core::Region;

    #[test]
    fn test_state_creation() {
        assert!(BrowserState::new().is_ok());
    }

    #[tokio::test]
    async fn test_initial_snapshot() {
        let state = BrowserState::new().unwrap();
        let update = state.snapshot(Outcome::Skipped).await;

        assert_eq!(update.shows.id, "showsList");
        assert!(update.shows.is_visible());
        assert_eq!(update.episodes.id, "episodesArea");
        assert!(!update.episodes.is_visible());
    }

    #[tokio::test]
    async fn test_page_update_serialization() {
        let state = BrowserState::new().unwrap();
        let update = state.snapshot(Outcome::Applied { count: 0 }).await;

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["outcome"]["outcome"], "applied");
        assert_eq!(json["shows"]["id"], "showsList");
        assert_eq!(json["episodes"]["visible"], false);
    }
}
