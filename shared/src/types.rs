use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Accordion Selection Model
// ============================================================================

/// Tracks which entry of an accordion is currently expanded.
///
/// At most one entry is expanded at a time. The expanded flag of an entry is
/// derived from the selected index rather than stored per entry, so zero- and
/// multi-expansion states cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionState {
    entry_count: usize,
    selected: Option<usize>,
}

impl AccordionState {
    /// Creates a state with `entry_count` entries and nothing expanded.
    pub fn new(entry_count: usize) -> Self {
        Self {
            entry_count,
            selected: None,
        }
    }

    /// Creates a state with the entry at `index` expanded.
    pub fn with_selected(entry_count: usize, index: usize) -> Result<Self, AccordionError> {
        if index >= entry_count {
            return Err(AccordionError::IndexOutOfRange { index, entry_count });
        }
        Ok(Self {
            entry_count,
            selected: Some(index),
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Handles a click on the header of the entry at `index`.
    ///
    /// Returns `true` if the selection changed. Clicking the entry that is
    /// already expanded does nothing; so does an index outside the accordion.
    pub fn click(&mut self, index: usize) -> bool {
        if index >= self.entry_count || self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccordionError {
    #[error("entry index {index} out of range for accordion with {entry_count} entries")]
    IndexOutOfRange { index: usize, entry_count: usize },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_selection() {
        let state = AccordionState::new(3);
        assert_eq!(state.entry_count(), 3);
        assert_eq!(state.selected(), None);
        assert!(!state.is_expanded(0));
        assert!(!state.is_expanded(1));
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn test_with_selected() {
        let state = AccordionState::with_selected(3, 1).unwrap();
        assert_eq!(state.selected(), Some(1));
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(1));
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn test_with_selected_rejects_out_of_range() {
        assert_eq!(
            AccordionState::with_selected(3, 3),
            Err(AccordionError::IndexOutOfRange {
                index: 3,
                entry_count: 3
            })
        );
    }

    #[test]
    fn test_click_moves_selection() {
        let mut state = AccordionState::with_selected(3, 1).unwrap();
        assert!(state.click(0));
        assert_eq!(state.selected(), Some(0));
        assert!(state.click(2));
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_click_current_is_noop() {
        let mut state = AccordionState::with_selected(3, 1).unwrap();
        assert!(!state.click(1));
        assert_eq!(state.selected(), Some(1));
        // Repeating the click changes nothing either
        assert!(!state.click(1));
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_click_out_of_range_is_noop() {
        let mut state = AccordionState::with_selected(3, 1).unwrap();
        assert!(!state.click(3));
        assert!(!state.click(usize::MAX));
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_exactly_one_entry_expanded_after_any_click_sequence() {
        let mut state = AccordionState::with_selected(3, 1).unwrap();
        for &index in &[2, 2, 0, 1, 1, 2, 0] {
            state.click(index);
            let expanded: Vec<usize> = (0..state.entry_count())
                .filter(|&i| state.is_expanded(i))
                .collect();
            assert_eq!(expanded, vec![state.selected().unwrap()]);
        }
    }

    #[test]
    fn test_state_serializes_to_json() {
        let state = AccordionState::with_selected(3, 1).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"entry_count":3,"selected":1}"#);
    }
}
