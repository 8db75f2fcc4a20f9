//! Episodes parser for the TVmaze catalog
//!
//! Parses the JSON array returned by `/shows/{id}/episodes`.

use serde::Deserialize;

use crate::error::Result;
use crate::types::EpisodeRecord;

/// The projected subset of a catalog episode. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct CatalogEpisode {
    id: u32,
    name: String,
    season: u32,
    number: u32,
}

impl From<CatalogEpisode> for EpisodeRecord {
    fn from(ep: CatalogEpisode) -> Self {
        EpisodeRecord {
            id: ep.id,
            name: ep.name,
            season: ep.season,
            number: ep.number,
        }
    }
}

/// Parse an episode list response body.
///
/// # Arguments
/// * `json` - Raw response body
///
/// # Returns
/// * `Ok(Vec<EpisodeRecord>)` in catalog order
/// * `Err(TvMazeError::ParseError)` if the body is malformed or an episode
///   lacks one of the projected fields
pub fn parse_episodes(json: &str) -> Result<Vec<EpisodeRecord>> {
    let episodes: Vec<CatalogEpisode> = serde_json::from_str(json)?;
    Ok(episodes.into_iter().map(EpisodeRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TvMazeError;
    use serde_json::json;

    fn full_episode(id: u32, name: &str, season: u32, number: u32) -> serde_json::Value {
        json!({
            "id": id,
            "url": format!("https://www.tvmaze.com/episodes/{}", id),
            "name": name,
            "season": season,
            "number": number,
            "type": "regular",
            "airdate": "2012-04-15",
            "airtime": "22:00",
            "airstamp": "2012-04-16T02:00:00+00:00",
            "runtime": 30,
            "rating": { "average": 6.9 },
            "image": { "medium": "m.jpg", "original": "o.jpg" },
            "summary": "<p>Hannah's parents cut her off.</p>",
            "_links": { "self": { "href": "https://api.tvmaze.com/episodes/1" } }
        })
    }

    #[test]
    fn test_parse_episodes_projects_four_fields() {
        let body = json!([full_episode(10385, "Pilot", 1, 1)]).to_string();

        let episodes = parse_episodes(&body).unwrap();
        assert_eq!(
            episodes,
            vec![EpisodeRecord {
                id: 10385,
                name: "Pilot".to_string(),
                season: 1,
                number: 1,
            }]
        );

        let value = serde_json::to_value(&episodes[0]).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_parse_episodes_keeps_catalog_order() {
        let body = json!([
            full_episode(1, "Pilot", 1, 1),
            full_episode(2, "Vagina Panic", 1, 2),
            full_episode(3, "It's About Time", 2, 1),
        ])
        .to_string();

        let ids: Vec<u32> = parse_episodes(&body).unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_parse_episodes_empty() {
        assert!(parse_episodes("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_episodes_null_number_is_error() {
        let body = json!([{ "id": 5, "name": "Special", "season": 0, "number": null }]).to_string();
        assert!(matches!(parse_episodes(&body), Err(TvMazeError::ParseError(_))));
    }

    #[test]
    fn test_parse_episodes_object_instead_of_array() {
        let body = json!({ "name": "Not Found", "status": 404 }).to_string();
        assert!(matches!(parse_episodes(&body), Err(TvMazeError::ParseError(_))));
    }
}
