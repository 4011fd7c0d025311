use crate::history;
use crate::sort::{sorted_view, SortState};
use crate::story::StoriesPage;
use crate::view_model::AppViewModel;

/// Fetch lifecycle plus the current result page. `data` survives errors so
/// the last good page stays on screen under the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub data: StoriesPage,
    pub is_loading: bool,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Live contents of the search input box.
    pub(crate) input: String,
    /// Append-only log of every request URL issued; recent searches are
    /// derived from it at read time.
    pub(crate) url_log: Vec<String>,
    pub(crate) stories: StoriesState,
    pub(crate) sort: SortState,
    /// Request generation stamped onto fetch effects. Completions carrying
    /// a stale generation are discarded.
    pub(crate) generation: u64,
    pub(crate) dirty: bool,
}

impl AppState {
    pub fn new(initial_term: &str) -> Self {
        Self {
            input: initial_term.to_string(),
            url_log: Vec::new(),
            stories: StoriesState::default(),
            sort: SortState::default(),
            generation: 0,
            dirty: true,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            recent_searches: history::recent_searches(&self.url_log),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            stories: sorted_view(&self.stories.data.list, self.sort),
            page: self.stories.data.page,
            sort: self.sort,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
