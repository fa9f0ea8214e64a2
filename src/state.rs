//! Visibility and hover state of a dropdown.
//!
//! A dropdown is either [`Closed`](Visibility::Closed) or
//! [`Open`](Visibility::Open). While open, it keeps one hover flag per row.
//! The flags are created fresh on every opening, so a hover never survives a
//! close.

/// Whether the menu of a dropdown is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Only the toggle is shown.
    #[default]
    Closed,
    /// The menu is shown over the toggle.
    Open,
}

/// The widget state of a dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    visibility: Visibility,
    hovered: Vec<bool>,
}

impl State {
    /// Creates a closed [`State`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current [`Visibility`].
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns whether the menu is shown.
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Opens the menu with `rows` unhovered rows.
    ///
    /// Returns `false` if it was already open.
    pub fn open(&mut self, rows: usize) -> bool {
        if self.is_open() {
            return false;
        }

        self.visibility = Visibility::Open;
        self.hovered = vec![false; rows];

        true
    }

    /// Closes the menu without a selection.
    ///
    /// Returns `false` if it was already closed.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        self.visibility = Visibility::Closed;
        self.hovered.clear();

        true
    }

    /// Closes the menu with the row at `index` selected.
    ///
    /// Returns the selected index, or `None` if the menu was closed or has no
    /// such row.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if !self.is_open() || index >= self.hovered.len() {
            return None;
        }

        let _ = self.dismiss();

        Some(index)
    }

    /// Adjusts the open menu to a new number of rows.
    pub fn resize(&mut self, rows: usize) {
        if self.is_open() {
            self.hovered.resize(rows, false);
        }
    }

    /// Marks the row at `index` as hovered.
    ///
    /// Returns whether its flag changed.
    pub fn pointer_entered(&mut self, index: usize) -> bool {
        self.set_hovered(index, true)
    }

    /// Marks the row at `index` as not hovered.
    ///
    /// Returns whether its flag changed.
    pub fn pointer_exited(&mut self, index: usize) -> bool {
        self.set_hovered(index, false)
    }

    /// Moves the pointer over `row`, or off every row.
    ///
    /// Returns whether any flag changed.
    pub fn hover(&mut self, row: Option<usize>) -> bool {
        let mut changed = false;

        for index in 0..self.hovered.len() {
            if Some(index) != row {
                changed |= self.pointer_exited(index);
            }
        }

        if let Some(row) = row {
            changed |= self.pointer_entered(row);
        }

        changed
    }

    /// Returns whether the row at `index` is hovered.
    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered.get(index).copied().unwrap_or(false)
    }

    /// Returns the first hovered row.
    pub fn hovered_row(&self) -> Option<usize> {
        self.hovered.iter().position(|&hovered| hovered)
    }

    fn set_hovered(&mut self, index: usize, value: bool) -> bool {
        match self.hovered.get_mut(index) {
            Some(flag) if *flag != value => {
                *flag = value;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(rows: usize) -> State {
        let mut state = State::new();
        assert!(state.open(rows));
        state
    }

    #[test]
    fn starts_closed() {
        let state = State::new();

        assert_eq!(state.visibility(), Visibility::Closed);
        assert!(!state.is_open());
        assert_eq!(state.hovered_row(), None);
    }

    #[test]
    fn opens_and_dismisses_once() {
        let mut state = opened(3);

        assert!(state.is_open());
        assert!(!state.open(3));
        assert!(state.dismiss());
        assert!(!state.dismiss());
        assert!(!state.is_open());
    }

    #[test]
    fn hovering_sets_only_one_row() {
        let mut state = opened(4);

        assert!(state.hover(Some(2)));

        let hovered: Vec<bool> = (0..4).map(|index| state.is_hovered(index)).collect();
        assert_eq!(hovered, [false, false, true, false]);

        assert!(!state.hover(Some(2)));
        assert!(state.hover(Some(0)));
        assert!(!state.is_hovered(2));
        assert_eq!(state.hovered_row(), Some(0));

        assert!(state.hover(None));
        assert_eq!(state.hovered_row(), None);
    }

    #[test]
    fn enter_and_exit_report_changes() {
        let mut state = opened(2);

        assert!(state.pointer_entered(1));
        assert!(!state.pointer_entered(1));
        assert!(state.pointer_exited(1));
        assert!(!state.pointer_exited(1));
        assert!(!state.pointer_entered(7));
    }

    #[test]
    fn reopening_resets_hover() {
        let mut state = opened(3);
        assert!(state.hover(Some(1)));

        assert!(state.dismiss());
        assert!(!state.is_hovered(1));

        assert!(state.open(3));
        assert_eq!(state.hovered_row(), None);
    }

    #[test]
    fn closed_menus_ignore_the_pointer() {
        let mut state = State::new();

        assert!(!state.hover(Some(0)));
        assert!(!state.is_hovered(0));
    }

    #[test]
    fn selecting_closes_and_yields_the_index_once() {
        let mut state = opened(3);
        assert!(state.hover(Some(2)));

        assert_eq!(state.select(2), Some(2));
        assert!(!state.is_open());
        assert_eq!(state.select(2), None);
    }

    #[test]
    fn selecting_a_missing_row_keeps_the_menu_open() {
        let mut state = opened(3);

        assert_eq!(state.select(3), None);
        assert!(state.is_open());
    }

    #[test]
    fn resizing_keeps_existing_flags() {
        let mut state = opened(2);
        assert!(state.hover(Some(1)));

        state.resize(4);
        assert!(state.is_hovered(1));
        assert!(state.pointer_entered(3));

        state.resize(1);
        assert_eq!(state.hovered_row(), None);

        let mut closed = State::new();
        closed.resize(3);
        assert_eq!(closed, State::new());
    }
}
