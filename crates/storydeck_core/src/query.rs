use url::form_urlencoded;
use url::Url;

/// Base endpoint of the article-search API.
pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

const PARAM_SEARCH: &str = "query";
const PARAM_PAGE: &str = "page";

/// Builds the request URL for a search term and page number.
///
/// The term is percent-encoded, so any term recovered by
/// [`extract_search_term`] round-trips exactly.
pub fn search_url(term: &str, page: u32) -> String {
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair(PARAM_SEARCH, term)
        .append_pair(PARAM_PAGE, &page.to_string())
        .finish();
    format!("{API_ENDPOINT}?{params}")
}

/// Recovers the search term from a URL produced by [`search_url`].
pub fn extract_search_term(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == PARAM_SEARCH)
        .map(|(_, value)| value.into_owned())
}
