use crate::sort::SortKey;
use crate::story::{StoriesPage, StoryId};

/// Fetch result as the core sees it: every failure cause (network, status,
/// decode) collapses to one failure state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(StoriesPage),
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Issue the initial fetch for the term restored at startup.
    Started,
    /// User edited the search input box.
    InputChanged(String),
    /// User submitted the current search input.
    SearchSubmitted,
    /// User picked a recent-search shortcut.
    RecentSearchPicked(String),
    /// User asked for the next result page of the active search.
    MoreRequested,
    /// User activated a sortable column header.
    SortToggled(SortKey),
    /// User dismissed a story row.
    StoryDismissed(StoryId),
    /// Engine resolved the fetch issued for `generation`.
    FetchCompleted {
        generation: u64,
        outcome: FetchOutcome,
    },
}
