pub mod constants;
pub mod layout;
pub mod render;

/// Platform-local UI state the core does not own: whether the search box is
/// being edited and which row is selected.
#[derive(Debug, Default)]
pub struct UiState {
    pub editing: bool,
    pub selected: usize,
}

impl UiState {
    /// Keeps the selection inside the visible list after rows change.
    pub fn clamp_selection(&mut self, rows: usize) {
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}
