//! Storydeck core: pure state machine and view-model helpers.
mod effect;
mod history;
mod msg;
mod query;
mod sort;
mod state;
mod stories;
mod story;
mod update;
mod view_model;

pub use effect::Effect;
pub use history::recent_searches;
pub use msg::{FetchOutcome, Msg};
pub use query::{extract_search_term, search_url, API_ENDPOINT};
pub use sort::{sorted_view, SortKey, SortState};
pub use state::{AppState, StoriesState};
pub use stories::{stories_reducer, StoriesAction};
pub use story::{StoriesPage, Story, StoryId};
pub use update::update;
pub use view_model::AppViewModel;
