//! Search results parser for the TVmaze catalog
//!
//! Parses the JSON array returned by `/search/shows` into show records.

use serde::Deserialize;

use crate::error::Result;
use crate::types::ShowRecord;

/// One entry of the search response. The relevance `score` is not used.
#[derive(Debug, Deserialize)]
struct SearchEntry {
    show: CatalogShow,
}

#[derive(Debug, Deserialize)]
struct CatalogShow {
    id: u32,
    name: String,
    summary: Option<String>,
    image: Option<CatalogImage>,
}

#[derive(Debug, Deserialize)]
struct CatalogImage {
    medium: Option<String>,
    original: Option<String>,
}

/// Pick the poster URL for a show.
///
/// Prefers the original resolution, then medium. Missing or blank URLs fall
/// through, ending at `default_image`.
///
/// # Examples
/// ```
/// use tvmaze_core::parser::choose_image;
///
/// assert_eq!(choose_image(Some("o.jpg"), Some("m.jpg"), "d.jpg"), "o.jpg");
/// assert_eq!(choose_image(None, Some("m.jpg"), "d.jpg"), "m.jpg");
/// assert_eq!(choose_image(Some(""), None, "d.jpg"), "d.jpg");
/// ```
pub fn choose_image(original: Option<&str>, medium: Option<&str>, default_image: &str) -> String {
    [original, medium]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(default_image)
        .to_string()
}

/// Parse show search results from a `/search/shows` response body.
///
/// Order follows the catalog response; nothing is sorted or filtered.
///
/// # Arguments
/// * `json` - Raw response body
/// * `default_image` - Placeholder URL used when a show has no image
///
/// # Returns
/// * `Ok(Vec<ShowRecord>)` with one record per entry
/// * `Err(TvMazeError::ParseError)` if the body is not a valid search response
pub fn parse_search_results(json: &str, default_image: &str) -> Result<Vec<ShowRecord>> {
    let entries: Vec<SearchEntry> = serde_json::from_str(json)?;

    Ok(entries
        .into_iter()
        .map(|entry| to_show_record(entry.show, default_image))
        .collect())
}

fn to_show_record(show: CatalogShow, default_image: &str) -> ShowRecord {
    let image = match &show.image {
        Some(img) => choose_image(img.original.as_deref(), img.medium.as_deref(), default_image),
        None => default_image.to_string(),
    };

    ShowRecord {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    }
}
