use crate::query::extract_search_term;

/// Trailing window of distinct terms considered before the active one is
/// dropped, leaving at most five shortcuts.
const HISTORY_WINDOW: usize = 6;

/// Derives the recent-search shortcuts from the request URL log.
///
/// Each URL is decoded back to its term (undecodable entries are skipped),
/// consecutive duplicates collapse to one, only the trailing
/// [`HISTORY_WINDOW`] distinct terms are kept, and the most recent term is
/// dropped since it is the active search already shown in the input box.
/// The result is oldest-first.
pub fn recent_searches(urls: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for url in urls {
        let Some(term) = extract_search_term(url) else {
            continue;
        };
        if terms.last() != Some(&term) {
            terms.push(term);
        }
    }

    let start = terms.len().saturating_sub(HISTORY_WINDOW);
    let mut window = terms.split_off(start);
    window.pop();
    window
}
