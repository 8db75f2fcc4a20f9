//! Page controller for the show browser
//!
//! `ShowBrowser` owns the two display regions and reacts to the page's two
//! events: a search form submission and a click on a show's "Episodes"
//! control. Responses are sequenced so that a slow, superseded request can
//! never overwrite newer results.

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::catalog::{parse_show_id, TvMazeCatalog};
use crate::error::Result;
use crate::render::{render_episodes, render_shows, show_id_for_control, DisplayRegion, Region};
use crate::sequence::RequestSequencer;

/// What a handler did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Results were rendered
    Applied { count: usize },
    /// A newer request was issued meanwhile; results were discarded
    Stale,
    /// Nothing to request (no search term, or no show behind the control)
    Skipped,
}

struct Regions<S, E> {
    shows: S,
    episodes: E,
}

/// Event handlers bound to a catalog and a page's display regions.
///
/// # Example
/// ```no_run
/// use tvmaze_core::{DisplayRegion, Region, ShowBrowser, TvMazeCatalog};
///
/// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
/// let browser = ShowBrowser::new(
///     TvMazeCatalog::new()?,
///     DisplayRegion::shows_list(),
///     DisplayRegion::episodes_area(),
/// );
///
/// browser.submit_search(Some("batman")).await?;
/// browser.click_episodes_control(0).await?;
///
/// let visible = browser.with_regions(|_, episodes| episodes.is_visible()).await;
/// # Ok(())
/// # }
/// ```
pub struct ShowBrowser<S = DisplayRegion, E = DisplayRegion> {
    catalog: TvMazeCatalog,
    regions: Mutex<Regions<S, E>>,
    searches: RequestSequencer,
    episode_lists: RequestSequencer,
}

impl<S: Region, E: Region> ShowBrowser<S, E> {
    /// Bind handlers to a catalog and the page's shows and episodes regions.
    pub fn new(catalog: TvMazeCatalog, shows_region: S, episodes_region: E) -> Self {
        Self {
            catalog,
            regions: Mutex::new(Regions {
                shows: shows_region,
                episodes: episodes_region,
            }),
            searches: RequestSequencer::new(),
            episode_lists: RequestSequencer::new(),
        }
    }

    /// The catalog the handlers query.
    pub fn catalog(&self) -> &TvMazeCatalog {
        &self.catalog
    }

    /// Read both regions under the render lock.
    pub async fn with_regions<T>(&self, f: impl FnOnce(&S, &E) -> T) -> T {
        let regions = self.regions.lock().await;
        f(&regions.shows, &regions.episodes)
    }

    /// Handle a search form submission.
    ///
    /// `term` is the current value of the search input, or `None` if it could
    /// not be read. Without a term no request is made and only the episodes
    /// region is hidden. A failed request leaves both regions untouched.
    pub async fn submit_search(&self, term: Option<&str>) -> Result<Outcome> {
        let token = self.searches.issue();
        // Episode lists requested before this search must not reappear.
        self.episode_lists.issue();

        let Some(term) = term else {
            self.regions.lock().await.episodes.hide();
            debug!("search submitted without a term");
            return Ok(Outcome::Skipped);
        };

        let shows = match self.catalog.search_shows(term).await {
            Ok(shows) => shows,
            Err(e) => {
                error!(term, error = %e, "show search failed");
                return Err(e);
            }
        };

        let mut guard = self.regions.lock().await;
        if !self.searches.is_current(token) {
            warn!(term, token = token.value(), "discarding superseded search results");
            return Ok(Outcome::Stale);
        }

        let regions = &mut *guard;
        render_shows(&mut regions.shows, &mut regions.episodes, &shows);
        info!(term, count = shows.len(), "rendered shows");

        Ok(Outcome::Applied { count: shows.len() })
    }

    /// Handle a click on the "Episodes" control of the show with `show_id`.
    ///
    /// An invalid id is rejected before a request token is issued, so it
    /// never supersedes an episode list that is still loading.
    pub async fn click_episodes(&self, show_id: &str) -> Result<Outcome> {
        if let Err(e) = parse_show_id(show_id) {
            error!(show_id, error = %e, "episode lookup rejected");
            return Err(e);
        }

        let token = self.episode_lists.issue();

        let episodes = match self.catalog.get_episodes(show_id).await {
            Ok(episodes) => episodes,
            Err(e) => {
                error!(show_id, error = %e, "episode lookup failed");
                return Err(e);
            }
        };

        let mut regions = self.regions.lock().await;
        if !self.episode_lists.is_current(token) {
            warn!(show_id, token = token.value(), "discarding superseded episode list");
            return Ok(Outcome::Stale);
        }

        render_episodes(&mut regions.episodes, &episodes);
        info!(show_id, count = episodes.len(), "rendered episodes");

        Ok(Outcome::Applied {
            count: episodes.len(),
        })
    }

    /// Handle a click on the n-th "Episodes" control currently rendered.
    ///
    /// The show id is read back from the enclosing show block.
    pub async fn click_episodes_control(&self, control_index: usize) -> Result<Outcome> {
        let show_id = {
            let regions = self.regions.lock().await;
            show_id_for_control(regions.shows.markup(), control_index)
        };

        match show_id {
            Some(show_id) => self.click_episodes(&show_id).await,
            None => {
                debug!(control_index, "no show block behind episodes control");
                Ok(Outcome::Skipped)
            }
        }
    }
}
