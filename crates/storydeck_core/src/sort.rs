use crate::story::Story;

/// Column the result list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Original server order.
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub reversed: bool,
}

impl SortState {
    /// Toggling the active key flips the direction; picking a different key
    /// starts it in its natural direction.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.reversed = !self.reversed;
        } else {
            self.key = key;
            self.reversed = false;
        }
    }
}

/// Pure sorted projection of the story list; the input is never mutated.
///
/// Title and Author order ascending, Comments and Points descending. The
/// sort is stable: equal keys keep their original relative order, and the
/// `reversed` flag reverses the keyed output afterwards.
pub fn sorted_view(list: &[Story], sort: SortState) -> Vec<Story> {
    let mut view = list.to_vec();
    match sort.key {
        SortKey::None => {}
        SortKey::Title => view.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => view.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comments => view.sort_by(|a, b| b.num_comments.cmp(&a.num_comments)),
        SortKey::Points => view.sort_by(|a, b| b.points.cmp(&a.points)),
    }
    if sort.reversed {
        view.reverse();
    }
    view
}
