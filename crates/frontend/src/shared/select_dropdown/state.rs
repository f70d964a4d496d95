use std::collections::HashSet;

use super::traits::SelectableItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    Single,
    #[default]
    Multi,
}

/// State of a select dropdown.
///
/// `selected` and `candidates` never share an id. `selected` only changes
/// through [`select_item`](Self::select_item) and
/// [`remove_item`](Self::remove_item); filtering never touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<T> {
    mode: SelectionMode,
    all_items: Vec<T>,
    candidates: Vec<T>,
    selected: Vec<T>,
    query: String,
    open: bool,
}

impl<T: SelectableItem + Clone> SelectionState<T> {
    pub fn new(all_items: Vec<T>, mode: SelectionMode) -> Self {
        let mut state = Self {
            mode,
            all_items,
            candidates: Vec::new(),
            selected: Vec::new(),
            query: String::new(),
            open: false,
        };
        state.refilter();
        state
    }

    /// Starts with `selected` already chosen. Duplicate ids are collapsed; in
    /// single mode only the first entry is kept.
    pub fn with_selected(mut self, selected: Vec<T>) -> Self {
        for item in selected {
            if self.mode == SelectionMode::Single && !self.selected.is_empty() {
                break;
            }
            if !self.contains(&item.id()) {
                self.selected.push(item);
            }
        }
        self.refilter();
        self
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s.id() == id)
    }

    fn selected_ids(&self) -> HashSet<String> {
        self.selected.iter().map(SelectableItem::id).collect()
    }

    /// Candidates = all items minus selected, filtered by the current query
    /// (case-insensitive substring of the display name).
    fn refilter(&mut self) {
        let excluded = self.selected_ids();
        let needle = self.query.to_lowercase();
        self.candidates = self
            .all_items
            .iter()
            .filter(|item| !excluded.contains(&item.id()))
            .filter(|item| needle.is_empty() || item.display_name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }

    /// Replaces the backing items (they often arrive after mount). Selected
    /// entries stay selected.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.all_items = items;
        self.refilter();
    }

    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.open = true;
        self.refilter();
    }

    /// Single mode replaces the selection, multi mode appends unless the id is
    /// already selected. Always clears the input and closes the dropdown.
    pub fn select_item(&mut self, item: T) {
        match self.mode {
            SelectionMode::Single => self.selected = vec![item],
            SelectionMode::Multi => {
                if !self.contains(&item.id()) {
                    self.selected.push(item);
                }
            }
        }
        self.query.clear();
        self.open = false;
        self.refilter();
    }

    /// No-op when `id` is not selected.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.selected.len();
        self.selected.retain(|s| s.id() != id);
        if self.selected.len() != before {
            self.refilter();
        }
    }

    pub fn on_focus(&mut self) {
        self.open = true;
        self.query.clear();
        self.refilter();
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    impl SelectableItem for Item {
        fn id(&self) -> String {
            self.id.to_string()
        }

        fn display_name(&self) -> String {
            self.name.to_string()
        }
    }

    fn alpha() -> Item {
        Item { id: 1, name: "Alpha" }
    }

    fn beta() -> Item {
        Item { id: 2, name: "Beta" }
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_filter_select_focus_scenario() {
        let mut s = SelectionState::new(vec![alpha(), beta()], SelectionMode::Multi);

        s.on_input_change("al");
        assert_eq!(ids(s.candidates()), vec![1]);
        assert!(s.is_open());

        s.select_item(alpha());
        assert_eq!(ids(s.selected()), vec![1]);
        assert_eq!(s.query(), "");
        assert!(!s.is_open());

        s.on_focus();
        assert!(s.is_open());
        assert_eq!(ids(s.candidates()), vec![2]);
    }

    #[test]
    fn test_select_then_remove_restores_candidate() {
        let mut s = SelectionState::new(vec![alpha(), beta()], SelectionMode::Multi);
        s.select_item(beta());
        assert_eq!(ids(s.candidates()), vec![1]);

        s.remove_item("2");
        assert!(s.selected().is_empty());
        assert_eq!(ids(s.candidates()), vec![1, 2]);
    }

    #[test]
    fn test_multi_select_is_idempotent_by_id() {
        let mut s = SelectionState::new(vec![alpha(), beta()], SelectionMode::Multi);
        s.on_input_change("a");
        s.select_item(alpha());
        s.on_input_change("x");
        // A different value with the same id still counts as selected.
        s.select_item(Item { id: 1, name: "Alpha (copy)" });

        assert_eq!(s.selected().len(), 1);
        assert_eq!(s.selected()[0].name, "Alpha");
        assert_eq!(s.query(), "");
        assert!(!s.is_open());
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut s = SelectionState::new(vec![alpha(), beta()], SelectionMode::Single);
        s.select_item(alpha());
        s.select_item(beta());

        assert_eq!(ids(s.selected()), vec![2]);
        assert_eq!(ids(s.candidates()), vec![1]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_excludes_selected() {
        let mut s = SelectionState::new(
            vec![alpha(), beta(), Item { id: 3, name: "ALPINE" }],
            SelectionMode::Multi,
        );
        s.select_item(alpha());
        s.on_input_change("ALP");
        assert_eq!(ids(s.candidates()), vec![3]);

        s.on_input_change("");
        assert_eq!(ids(s.candidates()), vec![2, 3]);
    }

    #[test]
    fn test_filter_keeps_surrounding_whitespace() {
        let mut s = SelectionState::new(
            vec![alpha(), beta(), Item { id: 4, name: "Big Alpha" }],
            SelectionMode::Multi,
        );

        s.on_input_change(" al");
        assert_eq!(ids(s.candidates()), vec![4]);

        s.on_input_change("al");
        assert_eq!(ids(s.candidates()), vec![1, 4]);

        s.on_input_change(" ");
        assert_eq!(ids(s.candidates()), vec![4]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut s = SelectionState::new(vec![alpha()], SelectionMode::Multi);
        s.select_item(alpha());
        let before = s.clone();
        s.remove_item("42");
        assert_eq!(s, before);
    }

    #[test]
    fn test_set_items_keeps_selection() {
        let mut s = SelectionState::new(vec![], SelectionMode::Multi).with_selected(vec![beta(), beta()]);
        assert_eq!(ids(s.selected()), vec![2]);

        s.set_items(vec![alpha(), beta()]);
        assert_eq!(ids(s.candidates()), vec![1]);
        assert_eq!(ids(s.selected()), vec![2]);
    }
}
