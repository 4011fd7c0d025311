/// Side effects requested by the pure update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch stories from `url`. The completion must echo `generation` back
    /// so superseded responses can be discarded.
    FetchStories { generation: u64, url: String },
    /// Remember the last-used search term in the preference store.
    PersistSearchTerm(String),
}
