//! Multi-selection list state

use std::collections::BTreeSet;
use std::ops::Range;

use crate::prompt::keys::ListAction;

/// Result of feeding one action to a [`MultiSelect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading keys
    Pending,
    /// Confirmation accepted; selected indices in ascending order
    Confirmed(Vec<usize>),
    Cancelled,
}

/// Cursor and selection of a paged multi-select list.
///
/// Confirmation is only accepted while the selection count lies within
/// `[min, max]`; otherwise it is ignored and the state stays as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelect {
    choices: Vec<String>,
    cursor: usize,
    selected: BTreeSet<usize>,
    min: Option<usize>,
    max: Option<usize>,
    per_page: usize,
}

impl MultiSelect {
    pub fn new(choices: Vec<String>) -> Self {
        let per_page = choices.len().max(1);
        Self {
            choices,
            cursor: 0,
            selected: BTreeSet::new(),
            min: None,
            max: None,
            per_page,
        }
    }

    pub fn with_min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn min(&self) -> Option<usize> {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Indices of the page holding the cursor
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.cursor / self.per_page) * self.per_page;
        start..(start + self.per_page).min(self.choices.len())
    }

    /// Whether confirming now would be accepted
    pub fn can_confirm(&self) -> bool {
        let count = self.selected.len();
        self.min.is_none_or(|min| min <= count) && self.max.is_none_or(|max| count <= max)
    }

    pub fn handle(&mut self, action: ListAction) -> Step {
        match action {
            ListAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            ListAction::Down => {
                if self.cursor + 1 < self.choices.len() {
                    self.cursor += 1;
                }
            }
            ListAction::Toggle => {
                if !self.choices.is_empty() && !self.selected.remove(&self.cursor) {
                    self.selected.insert(self.cursor);
                }
            }
            ListAction::Confirm => {
                if self.can_confirm() {
                    return Step::Confirmed(self.selected.iter().copied().collect());
                }
            }
            ListAction::Cancel => return Step::Cancelled,
        }
        Step::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions() -> MultiSelect {
        MultiSelect::new(vec![
            "2.0.0".to_string(),
            "1.5.0".to_string(),
            "1.0.0".to_string(),
        ])
        .with_min(2)
        .with_max(2)
    }

    #[test]
    fn confirm_with_two_selections_returns_indices_in_order() {
        let mut list = versions();

        list.handle(ListAction::Down);
        list.handle(ListAction::Down);
        list.handle(ListAction::Toggle);
        list.handle(ListAction::Up);
        list.handle(ListAction::Up);
        list.handle(ListAction::Toggle);

        assert_eq!(list.handle(ListAction::Confirm), Step::Confirmed(vec![0, 2]));
    }

    #[test]
    fn confirm_with_one_selection_is_ignored() {
        let mut list = versions();
        list.handle(ListAction::Toggle);
        let before = list.clone();

        assert_eq!(list.handle(ListAction::Confirm), Step::Pending);
        assert_eq!(list, before);
    }

    #[test]
    fn confirm_with_three_selections_is_ignored() {
        let mut list = versions();
        for _ in 0..3 {
            list.handle(ListAction::Toggle);
            list.handle(ListAction::Down);
        }
        let before = list.clone();

        assert_eq!(list.selected_count(), 3);
        assert_eq!(list.handle(ListAction::Confirm), Step::Pending);
        assert_eq!(list, before);
    }

    #[test]
    fn toggle_twice_deselects() {
        let mut list = versions();

        list.handle(ListAction::Toggle);
        list.handle(ListAction::Toggle);

        assert!(!list.is_selected(0));
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let mut list = versions();

        list.handle(ListAction::Up);
        assert_eq!(list.cursor(), 0);

        for _ in 0..10 {
            list.handle(ListAction::Down);
        }
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn cancel_ends_the_prompt() {
        let mut list = versions();

        assert_eq!(list.handle(ListAction::Cancel), Step::Cancelled);
    }

    #[test]
    fn visible_range_follows_cursor_page() {
        let choices = (0..20).map(|i| format!("1.0.{i}")).collect();
        let mut list = MultiSelect::new(choices).with_per_page(15);

        assert_eq!(list.visible_range(), 0..15);

        for _ in 0..16 {
            list.handle(ListAction::Down);
        }
        assert_eq!(list.visible_range(), 15..20);
    }

    #[test]
    fn unbounded_list_accepts_any_count() {
        let mut list = MultiSelect::new(vec!["a".to_string()]);

        assert_eq!(list.handle(ListAction::Confirm), Step::Confirmed(vec![]));
    }
}
