//! Tauri commands for the TVmaze Show Browser
//!
//! This module contains all Tauri commands that can be invoked from the frontend.

use tauri::State;
use tracing::debug;

use crate::{BrowserState, PageUpdate};
use tvmaze_core::{render, EpisodeRecord, ShowRecord};

/// Page title used when the frontend doesn't supply one
const DEFAULT_TITLE: &str = "TV Show Search";

/// Search for shows by title.
///
/// # Arguments
/// * `query` - Search query string
///
/// # Returns
/// * `Ok(Vec<ShowRecord>)` with matching shows
/// * `Err(String)` with error message if search fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, BrowserState>,
    query: String,
) -> Result<Vec<ShowRecord>, String> {
    state
        .browser()
        .catalog()
        .search_shows(&query)
        .await
        .map_err(|e| e.to_string())
}

/// Get all episodes of a show.
///
/// # Arguments
/// * `show_id` - TVmaze ID of the show
///
/// # Returns
/// * `Ok(Vec<EpisodeRecord>)` with all episodes
/// * `Err(String)` with error message if retrieval fails
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, BrowserState>,
    show_id: String,
) -> Result<Vec<EpisodeRecord>, String> {
    state
        .browser()
        .catalog()
        .get_episodes(&show_id)
        .await
        .map_err(|e| e.to_string())
}

/// Handle the search form submission.
///
/// # Arguments
/// * `term` - Value of the search input, `None` if it could not be read
///
/// # Returns
/// * `Ok(PageUpdate)` with both regions after the search
/// * `Err(String)` with error message if the search fails
#[tauri::command]
pub async fn submit_search(
    state: State<'_, BrowserState>,
    term: Option<String>,
) -> Result<PageUpdate, String> {
    debug!(?term, "search form submitted");
    let outcome = state
        .browser()
        .submit_search(term.as_deref())
        .await
        .map_err(|e| e.to_string())?;
    Ok(state.snapshot(outcome).await)
}

/// Handle a click on a show's "Episodes" control.
///
/// # Arguments
/// * `show_id` - Value of the show block's `data-show-id` attribute
///
/// # Returns
/// * `Ok(PageUpdate)` with both regions after the lookup
/// * `Err(String)` with error message if the lookup fails
#[tauri::command]
pub async fn show_episodes(
    state: State<'_, BrowserState>,
    show_id: String,
) -> Result<PageUpdate, String> {
    debug!(%show_id, "episodes requested");
    let outcome = state
        .browser()
        .click_episodes(&show_id)
        .await
        .map_err(|e| e.to_string())?;
    Ok(state.snapshot(outcome).await)
}

/// Handle a click on the n-th rendered "Episodes" control.
///
/// # Arguments
/// * `control_index` - Position of the control among the rendered shows
///
/// # Returns
/// * `Ok(PageUpdate)` with both regions after the lookup
/// * `Err(String)` with error message if the lookup fails
#[tauri::command]
pub async fn click_episodes_control(
    state: State<'_, BrowserState>,
    control_index: usize,
) -> Result<PageUpdate, String> {
    let outcome = state
        .browser()
        .click_episodes_control(control_index)
        .await
        .map_err(|e| e.to_string())?;
    Ok(state.snapshot(outcome).await)
}

/// Host page markup with the search form and both display regions.
///
/// # Arguments
/// * `title` - Page title (default: "TV Show Search")
#[tauri::command]
pub fn page_shell(title: Option<String>) -> String {
    render::page_shell(title.as_deref().unwrap_or(DEFAULT_TITLE))
}
