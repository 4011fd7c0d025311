use crate::sort::SortState;
use crate::story::Story;

/// Snapshot of everything the UI renders, produced by
/// [`AppState::view`](crate::AppState::view).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    /// Oldest-first recent-search shortcuts, at most five.
    pub recent_searches: Vec<String>,
    pub is_loading: bool,
    pub is_error: bool,
    /// Sorted projection of the current result list.
    pub stories: Vec<Story>,
    pub page: u32,
    pub sort: SortState,
    pub dirty: bool,
}
