//! Markup rendering for shows and episodes
//!
//! The renderer writes into display regions: page areas whose content is
//! replaced wholesale on each render. Regions are passed in explicitly, so
//! any host (a webview, a test, a server-side page) can provide them.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::sanitize::{escape_html, sanitize_summary};
use crate::types::{EpisodeRecord, ShowRecord};

/// Id of the search form
pub const SEARCH_FORM_ID: &str = "searchForm";
/// Id of the search text input inside the form
pub const SEARCH_TERM_ID: &str = "searchForm-term";
/// Id of the shows display region
pub const SHOWS_LIST_ID: &str = "showsList";
/// Id of the episodes display region (hidden until episodes are requested)
pub const EPISODES_AREA_ID: &str = "episodesArea";
/// Id of the episode list rendered inside the episodes region
pub const EPISODES_LIST_ID: &str = "episodesList";
/// Class of each rendered show block
pub const SHOW_CLASS: &str = "Show";
/// Class of the "Episodes" control inside a show block
pub const EPISODES_CONTROL_CLASS: &str = "Show-getEpisodes";
/// Attribute carrying the show id on a show block
pub const SHOW_ID_ATTR: &str = "data-show-id";

/// A page area the renderer can fill and toggle.
pub trait Region: Send {
    /// Replace the region's content
    fn replace(&mut self, markup: String);
    /// Make the region visible
    fn show(&mut self);
    /// Hide the region without clearing it
    fn hide(&mut self);
    /// Current content
    fn markup(&self) -> &str;
    /// Whether the region is currently visible
    fn is_visible(&self) -> bool;
}

/// In-memory display region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRegion {
    /// Element id the region corresponds to on the page
    pub id: String,
    markup: String,
    visible: bool,
}

impl DisplayRegion {
    /// Create an empty region
    pub fn new(id: impl Into<String>, visible: bool) -> Self {
        Self {
            id: id.into(),
            markup: String::new(),
            visible,
        }
    }

    /// The shows region as found on a freshly loaded page
    pub fn shows_list() -> Self {
        Self::new(SHOWS_LIST_ID, true)
    }

    /// The episodes region as found on a freshly loaded page
    pub fn episodes_area() -> Self {
        Self::new(EPISODES_AREA_ID, false)
    }
}

impl Region for DisplayRegion {
    fn replace(&mut self, markup: String) {
        self.markup = markup;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn markup(&self) -> &str {
        &self.markup
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Markup for a single show block.
pub fn show_markup(show: &ShowRecord) -> String {
    let name = escape_html(&show.name);
    format!(
        r#"<div {attr}="{id}" class="{show_class} col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{image}" alt="{name}" class="w-25 me-3">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>{summary}</small></div>
      <button class="btn btn-outline-light btn-sm {control_class}">Episodes</button>
    </div>
  </div>
</div>
"#,
        attr = SHOW_ID_ATTR,
        id = show.id,
        show_class = SHOW_CLASS,
        image = escape_html(&show.image),
        name = name,
        summary = sanitize_summary(&show.summary),
        control_class = EPISODES_CONTROL_CLASS,
    )
}

/// Markup for a single episode list item.
pub fn episode_markup(episode: &EpisodeRecord) -> String {
    format!(
        "<li>{} (season {}, number {})</li>\n",
        escape_html(&episode.name),
        episode.season,
        episode.number
    )
}

/// Replace the shows region with one block per show and hide the episodes region.
pub fn render_shows<S, E>(shows_region: &mut S, episodes_region: &mut E, shows: &[ShowRecord])
where
    S: Region + ?Sized,
    E: Region + ?Sized,
{
    let markup: String = shows.iter().map(show_markup).collect();
    shows_region.replace(markup);
    episodes_region.hide();
}

/// Replace the episodes region with its heading and the episode list, then reveal it.
pub fn render_episodes<E>(episodes_region: &mut E, episodes: &[EpisodeRecord])
where
    E: Region + ?Sized,
{
    let items: String = episodes.iter().map(episode_markup).collect();
    episodes_region.replace(format!(
        "<h2>Episodes</h2>\n<ul id=\"{}\">\n{}</ul>\n",
        EPISODES_LIST_ID, items
    ));
    episodes_region.show();
}

/// Resolve a click on the n-th "Episodes" control to its show id.
///
/// Walks from the control to the nearest ancestor carrying the show id
/// attribute and returns the attribute value verbatim.
///
/// # Returns
/// * `Some(id)` if the control exists inside a show block
/// * `None` if there is no such control or it has no show ancestor
pub fn show_id_for_control(shows_markup: &str, control_index: usize) -> Option<String> {
    let fragment = Html::parse_fragment(shows_markup);
    let selector = Selector::parse(&format!(".{}", EPISODES_CONTROL_CLASS)).ok()?;
    let control = fragment.select(&selector).nth(control_index)?;

    control
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find_map(|el| el.value().attr(SHOW_ID_ATTR))
        .map(str::to_string)
}

/// Host page containing the containers and form the renderer expects.
pub fn page_shell(title: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <main class="container">
    <h1>{title}</h1>
    <form id="{form}" class="form-inline">
      <input id="{term}" class="form-control" placeholder="Show title" type="text">
      <button class="btn btn-primary" type="submit">Go!</button>
    </form>
    <section id="{shows}" class="row mt-3"></section>
    <section id="{episodes}" style="display: none"></section>
  </main>
</body>
</html>
"#,
        title = title,
        form = SEARCH_FORM_ID,
        term = SEARCH_TERM_ID,
        shows = SHOWS_LIST_ID,
        episodes = EPISODES_AREA_ID,
    )
}
