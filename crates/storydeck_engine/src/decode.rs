use serde::Deserialize;
use thiserror::Error;

use crate::{SearchHit, SearchResults};

#[derive(Debug, Error)]
#[error("malformed search response: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

#[derive(Debug, Deserialize)]
struct WireResponse {
    hits: Vec<WireHit>,
    page: u32,
}

// Comment hits in real responses carry null titles and urls; those fields
// default instead of failing the whole page. Only `objectID` is required.
#[derive(Debug, Deserialize)]
struct WireHit {
    #[serde(rename = "objectID")]
    object_id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    num_comments: Option<u32>,
    #[serde(default)]
    points: Option<u32>,
}

/// Decodes a search response body into [`SearchResults`].
pub fn decode_results(body: &[u8]) -> Result<SearchResults, DecodeError> {
    let wire: WireResponse = serde_json::from_slice(body)?;
    let hits = wire
        .hits
        .into_iter()
        .map(|hit| SearchHit {
            id: hit.object_id,
            url: hit.url.unwrap_or_default(),
            title: hit.title.unwrap_or_default(),
            author: hit.author.unwrap_or_default(),
            num_comments: hit.num_comments.unwrap_or_default(),
            points: hit.points.unwrap_or_default(),
        })
        .collect();

    Ok(SearchResults {
        hits,
        page: wire.page,
    })
}
