use storydeck_core::{sorted_view, SortKey, SortState, Story};

fn story(id: &str, title: &str, author: &str, comments: u32, points: u32) -> Story {
    Story {
        id: id.to_string(),
        url: format!("https://example.com/{id}"),
        title: title.to_string(),
        author: author.to_string(),
        num_comments: comments,
        points,
    }
}

fn sample() -> Vec<Story> {
    vec![
        story("1", "beta", "carol", 5, 3),
        story("2", "alpha", "alice", 12, 10),
        story("3", "gamma", "bob", 5, 1),
    ]
}

fn keyed(key: SortKey, reversed: bool) -> SortState {
    SortState { key, reversed }
}

#[test]
fn none_preserves_original_order() {
    let list = sample();
    assert_eq!(sorted_view(&list, SortState::default()), list);
}

#[test]
fn points_sorts_descending_and_reversed_flips_it() {
    let list = sample();

    let points: Vec<u32> = sorted_view(&list, keyed(SortKey::Points, false))
        .iter()
        .map(|s| s.points)
        .collect();
    assert_eq!(points, vec![10, 3, 1]);

    let points: Vec<u32> = sorted_view(&list, keyed(SortKey::Points, true))
        .iter()
        .map(|s| s.points)
        .collect();
    assert_eq!(points, vec![1, 3, 10]);
}

#[test]
fn title_and_author_sort_ascending() {
    let list = sample();

    let titles: Vec<String> = sorted_view(&list, keyed(SortKey::Title, false))
        .iter()
        .map(|s| s.title.clone())
        .collect();
    assert_eq!(titles, vec!["alpha", "beta", "gamma"]);

    let authors: Vec<String> = sorted_view(&list, keyed(SortKey::Author, false))
        .iter()
        .map(|s| s.author.clone())
        .collect();
    assert_eq!(authors, vec!["alice", "bob", "carol"]);
}

#[test]
fn equal_keys_keep_their_original_relative_order() {
    let list = sample();

    // Stories 1 and 3 tie on comment count; 1 came first and must stay first.
    let ids: Vec<String> = sorted_view(&list, keyed(SortKey::Comments, false))
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(ids, vec!["2", "1", "3"]);
}

#[test]
fn sorting_an_already_sorted_list_is_identity() {
    let sorted = sorted_view(&sample(), keyed(SortKey::Comments, false));
    assert_eq!(sorted_view(&sorted, keyed(SortKey::Comments, false)), sorted);
}

#[test]
fn double_toggle_restores_pre_reversal_order() {
    let mut sort = SortState::default();
    sort.toggle(SortKey::Points);
    let first = sorted_view(&sample(), sort);

    sort.toggle(SortKey::Points);
    sort.toggle(SortKey::Points);

    assert_eq!(sorted_view(&sample(), sort), first);
}

#[test]
fn picking_a_new_key_resets_the_direction() {
    let mut sort = SortState::default();
    sort.toggle(SortKey::Points);
    sort.toggle(SortKey::Points);
    assert!(sort.reversed);

    sort.toggle(SortKey::Title);

    assert_eq!(sort.key, SortKey::Title);
    assert!(!sort.reversed);
}

#[test]
fn projection_leaves_the_input_untouched() {
    let list = sample();
    let before = list.clone();
    let _ = sorted_view(&list, keyed(SortKey::Title, true));
    assert_eq!(list, before);
}
