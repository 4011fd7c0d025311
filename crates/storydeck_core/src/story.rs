/// Identifier assigned by the search API (`objectID`).
pub type StoryId = String;

/// One search-result item. Immutable once fetched; dismissal removes the
/// whole row from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: StoryId,
    pub url: String,
    pub title: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
}

/// One page of search results. `page` comes from the server response and is
/// never incremented locally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesPage {
    pub list: Vec<Story>,
    pub page: u32,
}
