use crate::query;
use crate::stories::{stories_reducer, StoriesAction};
use crate::{AppState, Effect, FetchOutcome, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let term = state.input.clone();
            start_fetch(&mut state, &term, 0)
        }
        Msg::InputChanged(text) => {
            state.input = text.clone();
            state.dirty = true;
            vec![Effect::PersistSearchTerm(text)]
        }
        Msg::SearchSubmitted => {
            let term = state.input.trim().to_string();
            if term.is_empty() {
                return (state, Vec::new());
            }
            start_fetch(&mut state, &term, 0)
        }
        Msg::RecentSearchPicked(term) => {
            state.input = term.clone();
            let mut effects = vec![Effect::PersistSearchTerm(term.clone())];
            effects.extend(start_fetch(&mut state, &term, 0));
            effects
        }
        Msg::MoreRequested => {
            // Paginate the active search, not whatever is in the input box.
            let term = state
                .url_log
                .last()
                .and_then(|url| query::extract_search_term(url))
                .unwrap_or_else(|| state.input.clone());
            let page = state.stories.data.page + 1;
            start_fetch(&mut state, &term, page)
        }
        Msg::SortToggled(key) => {
            state.sort.toggle(key);
            state.dirty = true;
            Vec::new()
        }
        Msg::StoryDismissed(id) => {
            apply(&mut state, StoriesAction::RemoveStory(id));
            Vec::new()
        }
        Msg::FetchCompleted {
            generation,
            outcome,
        } => {
            if generation != state.generation {
                // A newer request superseded this one; drop the stale result.
                return (state, Vec::new());
            }
            let action = match outcome {
                FetchOutcome::Success(page) => StoriesAction::FetchSuccess(page),
                FetchOutcome::Failure => StoriesAction::FetchFailure,
            };
            apply(&mut state, action);
            Vec::new()
        }
    };

    (state, effects)
}

/// Appends a freshly built URL to the log, bumps the request generation and
/// moves the story state into loading.
fn start_fetch(state: &mut AppState, term: &str, page: u32) -> Vec<Effect> {
    let url = query::search_url(term, page);
    state.url_log.push(url.clone());
    state.generation += 1;
    apply(state, StoriesAction::FetchInit);
    vec![Effect::FetchStories {
        generation: state.generation,
        url,
    }]
}

fn apply(state: &mut AppState, action: StoriesAction) {
    state.stories = stories_reducer(std::mem::take(&mut state.stories), action);
    state.dirty = true;
}
