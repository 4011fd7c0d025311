use crate::state::StoriesState;
use crate::story::{StoriesPage, StoryId};

/// Transitions of the fetch lifecycle and the visible story list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A fetch was issued.
    FetchInit,
    /// A fetch resolved; the payload fully replaces the current page.
    FetchSuccess(StoriesPage),
    /// A fetch failed for any reason.
    FetchFailure,
    /// The user dismissed a story; absent ids are a no-op.
    RemoveStory(StoryId),
}

/// Reducer over the story state. Total: every action is accepted in every
/// state.
pub fn stories_reducer(mut state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => {
            state.is_loading = true;
            state.is_error = false;
        }
        StoriesAction::FetchSuccess(page) => {
            state.is_loading = false;
            state.is_error = false;
            state.data = page;
        }
        StoriesAction::FetchFailure => {
            state.is_loading = false;
            state.is_error = true;
        }
        StoriesAction::RemoveStory(id) => {
            state.data.list.retain(|story| story.id != id);
        }
    }
    state
}
