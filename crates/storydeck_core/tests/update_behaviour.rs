use std::sync::Once;

use storydeck_core::{
    search_url, update, AppState, Effect, FetchOutcome, Msg, SortKey, StoriesPage, Story,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(deck_logging::initialize_for_tests);
}

fn story(id: &str, points: u32) -> Story {
    Story {
        id: id.to_string(),
        url: format!("https://example.com/{id}"),
        title: format!("story {id}"),
        author: "alice".to_string(),
        num_comments: 0,
        points,
    }
}

fn succeed(state: AppState, generation: u64, list: Vec<Story>, page: u32) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FetchCompleted {
            generation,
            outcome: FetchOutcome::Success(StoriesPage { list, page }),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn started_issues_exactly_one_fetch_for_restored_term() {
    init_logging();
    let state = AppState::new("Rust");

    let (state, effects) = update(state, Msg::Started);

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            generation: 1,
            url: search_url("Rust", 0),
        }]
    );
    let view = state.view();
    assert!(view.is_loading);
    assert!(!view.is_error);
    assert!(view.dirty);
}

#[test]
fn submit_builds_page_zero_url_for_current_input() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let (state, effects) = update(state, Msg::InputChanged("tokio".to_string()));
    assert_eq!(effects, vec![Effect::PersistSearchTerm("tokio".to_string())]);

    let (state, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            generation: 2,
            url: search_url("tokio", 0),
        }]
    );
    assert!(state.view().is_loading);
}

#[test]
fn blank_submit_is_a_noop() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::InputChanged("   ".to_string()));

    let (state, effects) = update(state, Msg::SearchSubmitted);

    assert!(effects.is_empty());
    assert!(!state.view().is_loading);
}

#[test]
fn success_fully_replaces_the_result_page() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let state = succeed(state, 1, vec![story("a", 1), story("b", 2)], 0);
    assert_eq!(state.view().stories.len(), 2);

    let (state, _) = update(state, Msg::SearchSubmitted);
    let state = succeed(state, 2, vec![story("c", 3)], 0);

    let view = state.view();
    assert!(!view.is_loading);
    assert!(!view.is_error);
    assert_eq!(view.stories, vec![story("c", 3)]);
}

#[test]
fn failure_keeps_stale_data_and_raises_error() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let state = succeed(state, 1, vec![story("a", 1)], 0);

    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation: 2,
            outcome: FetchOutcome::Failure,
        },
    );

    let view = state.view();
    assert!(view.is_error);
    assert!(!view.is_loading);
    assert_eq!(view.stories, vec![story("a", 1)]);
}

#[test]
fn stale_generation_is_discarded() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    // A second submit supersedes the first fetch before it resolves.
    let (state, _) = update(state, Msg::InputChanged("serde".to_string()));
    let (state, _) = update(state, Msg::SearchSubmitted);

    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            outcome: FetchOutcome::Success(StoriesPage {
                list: vec![story("stale", 0)],
                page: 0,
            }),
        },
    );

    let view = state.view();
    assert!(view.is_loading);
    assert!(view.stories.is_empty());

    let state = succeed(state, 2, vec![story("fresh", 9)], 0);
    assert_eq!(state.view().stories, vec![story("fresh", 9)]);
}

#[test]
fn more_requests_the_page_after_the_server_page() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let state = succeed(state, 1, vec![story("a", 1)], 3);

    let (_state, effects) = update(state, Msg::MoreRequested);

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            generation: 2,
            url: search_url("Rust", 4),
        }]
    );
}

#[test]
fn more_paginates_the_active_search_not_the_input_box() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let state = succeed(state, 1, vec![story("a", 1)], 0);
    // The user typed a new term but never submitted it.
    let (state, _) = update(state, Msg::InputChanged("zig".to_string()));

    let (_state, effects) = update(state, Msg::MoreRequested);

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            generation: 2,
            url: search_url("Rust", 1),
        }]
    );
}

#[test]
fn recent_search_pick_persists_and_resubmits() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(state, Msg::InputChanged("serde".to_string()));
    let (state, _) = update(state, Msg::SearchSubmitted);

    let (state, effects) = update(state, Msg::RecentSearchPicked("Rust".to_string()));

    assert_eq!(
        effects,
        vec![
            Effect::PersistSearchTerm("Rust".to_string()),
            Effect::FetchStories {
                generation: 3,
                url: search_url("Rust", 0),
            },
        ]
    );
    assert_eq!(state.view().input, "Rust");
}

#[test]
fn dismissing_a_story_removes_only_that_row() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let state = succeed(state, 1, vec![story("a", 1), story("b", 2)], 0);

    let (state, effects) = update(state, Msg::StoryDismissed("a".to_string()));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.stories, vec![story("b", 2)]);
    assert_eq!(view.page, 0);
}

#[test]
fn sort_toggle_orders_the_view_without_touching_the_page() {
    init_logging();
    let state = AppState::new("Rust");
    let (state, _) = update(state, Msg::Started);
    let state = succeed(state, 1, vec![story("a", 3), story("b", 10), story("c", 1)], 0);

    let (state, effects) = update(state, Msg::SortToggled(SortKey::Points));

    assert!(effects.is_empty());
    let points: Vec<u32> = state.view().stories.iter().map(|s| s.points).collect();
    assert_eq!(points, vec![10, 3, 1]);

    let (state, _) = update(state, Msg::SortToggled(SortKey::Points));
    let points: Vec<u32> = state.view().stories.iter().map(|s| s.points).collect();
    assert_eq!(points, vec![1, 3, 10]);
}
